//! Filename transliteration and sanitising.
//!
//! Cyrillic letters (Russian and Ukrainian) become Latin letters or digraphs,
//! then every character that is not an ASCII letter, digit, or underscore
//! becomes `_`. Only the part before the first dot is touched; the extension
//! chain after it is kept verbatim, so `звіт.tar.gz` keeps `.tar.gz`.

/// Archive suffix tokens stripped from the end of an archive name, in the
/// order they are tried. `.tar.gz` needs two passes: `.gz`, then `.tar`.
pub const ARCHIVE_SUFFIXES: [&str; 3] = [".zip", ".tar", ".gz"];

/// Folder name used when an archive name is nothing but suffixes.
const EMPTY_ARCHIVE_NAME: &str = "archive";

/// Latin rendering of a lowercase Cyrillic letter.
///
/// Soft and hard signs map to the empty string.
fn latin_for(lower: char) -> Option<&'static str> {
    let latin = match lower {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "j",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        'є' => "je",
        'і' => "i",
        'ї' => "ji",
        'ґ' => "g",
        _ => return None,
    };
    Some(latin)
}

/// Append the transliteration of `ch` to `out`, if it is a Cyrillic letter.
///
/// Uppercase letters produce an uppercase initial: `Щ` → `Sch`.
fn push_transliterated(ch: char, out: &mut String) -> bool {
    if let Some(latin) = latin_for(ch) {
        out.push_str(latin);
        return true;
    }
    let mut lower = ch.to_lowercase();
    let (Some(l), None) = (lower.next(), lower.next()) else {
        return false;
    };
    if l == ch {
        return false;
    }
    let Some(latin) = latin_for(l) else {
        return false;
    };
    let mut chars = latin.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
    true
}

/// Transliterate and sanitise a base name (no extension).
pub fn sanitize_stem(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    for ch in stem.chars() {
        if push_transliterated(ch, &mut out) {
            continue;
        }
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
        } else {
            out.push('_');
        }
    }
    out
}

/// Transliterate a filename, keeping its extension chain.
///
/// The base name is everything before the first dot. A name with no dot
/// comes back without a trailing dot: `README` → `README`.
pub fn translate(file_name: &str) -> String {
    match file_name.split_once('.') {
        Some((stem, extension)) => format!("{}.{extension}", sanitize_stem(stem)),
        None => sanitize_stem(file_name),
    }
}

/// Strip trailing archive suffixes, case-insensitively, until none match.
///
/// `backup.tar.gz` → `backup`, `photos.ZIP` → `photos`.
pub fn strip_archive_suffixes(file_name: &str) -> &str {
    let mut name = file_name;
    'outer: loop {
        for suffix in ARCHIVE_SUFFIXES {
            let Some(split) = name.len().checked_sub(suffix.len()) else {
                continue;
            };
            if !name.is_char_boundary(split) {
                continue;
            }
            if name[split..].eq_ignore_ascii_case(suffix) {
                name = &name[..split];
                continue 'outer;
            }
        }
        return name;
    }
}

/// Folder name an archive is unpacked into under `Archives`.
pub fn archive_folder_name(file_name: &str) -> String {
    let stripped = strip_archive_suffixes(file_name);
    if stripped.is_empty() {
        return EMPTY_ARCHIVE_NAME.to_string();
    }
    translate(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sanitized(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    // ── translate ────────────────────────────────────────────────────────

    #[test]
    fn translate_ukrainian_name_keeps_extension() {
        assert_eq!(translate("Привіт.txt"), "Privit.txt");
    }

    #[test]
    fn translate_covers_the_whole_alphabet() {
        assert_eq!(
            translate("абвгдеёжзийклмнопрстуфхцчшщъыьэюяєіїґ"),
            "abvgdeejzijklmnoprstufhtschshschyeyuyajeijig"
        );
    }

    /// Uppercase Cyrillic maps to an uppercase initial, not an all-caps digraph.
    #[test]
    fn translate_uppercase_digraphs() {
        assert_eq!(translate("Щука.jpg"), "Schuka.jpg");
        assert_eq!(translate("ЮЯ"), "YuYa");
        assert_eq!(translate("ЦЧШ"), "TsChSh");
    }

    #[test]
    fn translate_drops_soft_and_hard_signs() {
        assert_eq!(translate("сіль"), "sil");
        assert_eq!(translate("ОБЪЁМ"), "OBEM");
    }

    #[test]
    fn translate_replaces_non_word_characters() {
        assert_eq!(translate("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(translate("a-b+c.pdf"), "a_b_c.pdf");
        assert_eq!(translate("café.doc"), "caf_.doc");
    }

    #[test]
    fn translate_keeps_multi_part_extension_verbatim() {
        assert_eq!(translate("звіт.tar.gz"), "zvit.tar.gz");
        assert_eq!(translate("a b.Tar.GZ"), "a_b.Tar.GZ");
    }

    /// A name without a dot must not grow a trailing dot.
    #[test]
    fn translate_without_extension_has_no_trailing_dot() {
        assert_eq!(translate("README"), "README");
        assert_eq!(translate("Файл"), "Fajl");
    }

    #[test]
    fn translate_keeps_explicit_empty_extension() {
        assert_eq!(translate("note."), "note.");
    }

    #[test]
    fn translate_is_idempotent_on_its_own_output() {
        for name in ["Привіт.txt", "my photo (1).png", "ЖЖЖ", "звіт.tar.gz", "a.b.c"] {
            let once = translate(name);
            assert_eq!(translate(&once), once, "not idempotent for {name}");
        }
    }

    #[test]
    fn translate_output_charset_for_cyrillic_and_digits() {
        let name = "Їжак2024ґанок_ЄЮ.mp3";
        let out = translate(name);
        let (stem, ext) = out.split_once('.').unwrap();
        assert!(is_sanitized(stem), "{out}");
        assert_eq!(ext, "mp3");
    }

    // ── archive naming ───────────────────────────────────────────────────

    #[test]
    fn strip_archive_suffixes_repeats_until_clean() {
        assert_eq!(strip_archive_suffixes("backup.tar.gz"), "backup");
        assert_eq!(strip_archive_suffixes("photos.ZIP"), "photos");
        assert_eq!(strip_archive_suffixes("x.gz.zip"), "x");
        assert_eq!(strip_archive_suffixes("plain.txt"), "plain.txt");
    }

    /// Only trailing tokens are stripped, not occurrences in the middle.
    #[test]
    fn strip_archive_suffixes_ignores_inner_tokens() {
        assert_eq!(strip_archive_suffixes("my.zip.files.tar"), "my.zip.files");
        assert_eq!(strip_archive_suffixes("gzip"), "gzip");
    }

    #[test]
    fn strip_archive_suffixes_handles_multibyte_names() {
        assert_eq!(strip_archive_suffixes("ґ"), "ґ");
        assert_eq!(strip_archive_suffixes("архів.zip"), "архів");
    }

    #[test]
    fn archive_folder_name_translates_stripped_name() {
        assert_eq!(archive_folder_name("Архів.zip"), "Arhiv");
        assert_eq!(archive_folder_name("old stuff.tar.gz"), "old_stuff");
        assert_eq!(archive_folder_name(".zip"), "archive");
    }
}
