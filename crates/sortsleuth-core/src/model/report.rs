/// Outcome of a full sort run.
use crate::error::FileFailure;
use crate::model::{Category, ScanResult};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// A file moved into its category folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moved {
    pub from: PathBuf,
    pub to: PathBuf,
    pub category: Category,
}

/// An archive unpacked into its own folder under `Archives`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub archive: PathBuf,
    pub destination: PathBuf,
    /// Number of regular files written.
    pub files: usize,
}

/// A directory the pruner tried and failed to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneSkip {
    pub path: PathBuf,
    pub kind: io::ErrorKind,
}

/// Result of the empty-folder pass.
#[derive(Debug, Default, Clone)]
pub struct PruneReport {
    /// Directories removed, children before parents.
    pub removed: Vec<PathBuf>,
    /// Directories left in place, usually because they are not empty.
    pub skipped: Vec<PruneSkip>,
}

/// Everything a run did.
#[derive(Debug, Default)]
pub struct SortReport {
    pub scan: ScanResult,
    pub moved: Vec<Moved>,
    pub extracted: Vec<Extracted>,
    pub failures: Vec<FileFailure>,
    pub prune: PruneReport,
    pub duration: Duration,
}

impl SortReport {
    /// Number of files moved into `category`.
    pub fn moved_into(&self, category: Category) -> usize {
        self.moved.iter().filter(|m| m.category == category).count()
    }
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Moved {} file(s), extracted {} archive(s), skipped {}, pruned {} folder(s) in {:.2?}",
            self.moved.len(),
            self.extracted.len(),
            self.failures.len(),
            self.prune.removed.len(),
            self.duration,
        )?;
        for cat in Category::MOVABLE {
            let n = self.moved_into(cat);
            if n > 0 {
                writeln!(f, "  {:<10} {n}", cat.label())?;
            }
        }
        for failure in &self.failures {
            writeln!(f, "  skipped {failure}")?;
        }
        Ok(())
    }
}
