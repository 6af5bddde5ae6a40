/// Human-readable scan summary — bucket listings and extension sets.
///
/// Reporting only. Nothing downstream parses this text.
use crate::model::{Category, ScanResult};
use std::fmt;
use std::path::Path;

/// Display adapter that prints a [`ScanResult`] with paths relative to `root`.
pub struct ScanSummary<'a> {
    pub result: &'a ScanResult,
    pub root: &'a Path,
}

impl<'a> ScanSummary<'a> {
    pub fn new(result: &'a ScanResult, root: &'a Path) -> Self {
        Self { result, root }
    }
}

fn write_list<I, T>(f: &mut fmt::Formatter<'_>, label: &str, items: I) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    write!(f, "{label}: [")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    writeln!(f, "]")
}

impl fmt::Display for ScanSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cat in Category::ALL {
            let paths = self.result.bucket(cat).iter().map(|p| {
                p.strip_prefix(self.root)
                    .unwrap_or(p.as_path())
                    .display()
                    .to_string()
            });
            write_list(f, cat.label(), paths)?;
        }
        write_list(f, "All extensions", &self.result.known_extensions)?;
        write_list(f, "Unknown extensions", &self.result.unknown_extensions)?;
        if !self.result.special.is_empty() {
            writeln!(f, "Left in place (not regular files): {}", self.result.special.len())?;
        }
        if !self.result.issues.is_empty() {
            writeln!(f, "Unreadable entries: {}", self.result.issues.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classify;
    use std::path::PathBuf;

    #[test]
    fn summary_lists_every_bucket_and_extension_set() {
        let root = PathBuf::from("/data");
        let mut result = ScanResult::new();
        for name in ["a.jpg", "b.xyz", "c"] {
            result.add_file(root.join("sub").join(name), classify(name));
        }

        let text = ScanSummary::new(&result, &root).to_string();
        let sub_a = Path::new("sub").join("a.jpg");
        assert!(text.contains(&format!("Images: [{}]", sub_a.display())), "{text}");
        assert!(text.contains("Documents: []"), "{text}");
        assert!(text.contains("All extensions: [JPG]"), "{text}");
        assert!(text.contains("Unknown extensions: [XYZ]"), "{text}");
        assert!(!text.contains("Unreadable"), "{text}");
    }

    #[test]
    fn summary_counts_entries_left_in_place() {
        let root = PathBuf::from("/data");
        let mut result = ScanResult::new();
        result.add_special(root.join("link"));

        let text = ScanSummary::new(&result, &root).to_string();
        assert!(text.contains("Left in place (not regular files): 1"), "{text}");
    }
}
