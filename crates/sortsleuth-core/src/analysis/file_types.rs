/// File type classification based on the fixed extension table.
///
/// Maps a filename's final extension to one of the six categories and
/// reports whether the extension was recognised, unrecognised, or absent.
use crate::model::Category;
use compact_str::CompactString;

/// Longest extension in the table ("DOCX", "JPEG", "PPTX", "XLSX").
const MAX_KNOWN_EXTENSION_LEN: usize = 4;

/// Outcome of classifying one filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Extension found in the table. `extension` is uppercase, no dot.
    Known {
        category: Category,
        extension: CompactString,
    },
    /// Non-empty extension missing from the table. Goes to `Unknown`.
    Unrecognised { extension: CompactString },
    /// No extension at all. Goes to `Unknown` but is not an
    /// unrecognised extension.
    NoExtension,
}

impl Classification {
    /// Bucket this file belongs in.
    pub fn category(&self) -> Category {
        match self {
            Self::Known { category, .. } => *category,
            Self::Unrecognised { .. } | Self::NoExtension => Category::Unknown,
        }
    }
}

/// Look up an extension (no dot, any case) in the extension table.
///
/// Zero-heap-allocation: extensions are uppercased into a fixed-size stack
/// buffer. Anything longer than the longest table entry misses.
pub fn category_for_extension(ext: &str) -> Option<Category> {
    let bytes = ext.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_KNOWN_EXTENSION_LEN {
        return None;
    }

    let mut upper = [0u8; MAX_KNOWN_EXTENSION_LEN];
    for (dest, &src) in upper.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_uppercase();
    }

    match &upper[..bytes.len()] {
        b"JPEG" | b"PNG" | b"JPG" | b"SVG" => Some(Category::Image),
        b"TXT" | b"DOCX" | b"DOC" | b"PDF" | b"XLSX" | b"PPTX" => Some(Category::Document),
        b"AVI" | b"MP4" | b"MOV" | b"MKV" => Some(Category::Video),
        b"MP3" | b"OGG" | b"WAV" | b"AMR" => Some(Category::Audio),
        b"GZ" | b"TAR" | b"ZIP" => Some(Category::Archive),
        _ => None,
    }
}

/// The final extension of `file_name`, without the dot.
///
/// Returns `None` for names with no dot, names ending in a dot, and
/// dot-files such as `.bashrc` whose only dot is the leading one.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let stem_end = file_name.rfind('.')?;
    if stem_end == 0 {
        return None;
    }
    let ext = &file_name[stem_end + 1..];
    (!ext.is_empty()).then_some(ext)
}

/// Classify a filename by its final extension, case-insensitively.
///
/// `archive.tar.gz` matches on `GZ`.
pub fn classify(file_name: &str) -> Classification {
    let Some(ext) = extension_of(file_name) else {
        return Classification::NoExtension;
    };
    let extension = CompactString::new(ext.to_uppercase());
    match category_for_extension(ext) {
        Some(category) => Classification::Known {
            category,
            extension,
        },
        None => Classification::Unrecognised { extension },
    }
}
