/// The scan accumulator — one value threaded through the whole walk.
///
/// Every discovered file lands in exactly one bucket. Extension statistics
/// keep "unrecognised extension" apart from "no extension at all".
use crate::analysis::Classification;
use crate::model::Category;
use compact_str::CompactString;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A directory entry the scanner could not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIssue {
    pub path: PathBuf,
    pub message: String,
}

/// Categorised inventory of a directory tree.
#[derive(Debug, Default, Clone)]
pub struct ScanResult {
    buckets: [Vec<PathBuf>; 6],
    /// Non-reserved folders visited, in walk order.
    pub folders: Vec<PathBuf>,
    /// Uppercase extensions that matched the extension table.
    pub known_extensions: BTreeSet<CompactString>,
    /// Uppercase extensions that did not match the extension table.
    pub unknown_extensions: BTreeSet<CompactString>,
    /// Entries that could not be read during the walk.
    pub issues: Vec<ScanIssue>,
    /// Symlinks and other non-regular entries, never classified or moved.
    pub special: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified file.
    pub fn add_file(&mut self, path: PathBuf, classification: Classification) {
        match &classification {
            Classification::Known { extension, .. } => {
                if !self.known_extensions.contains(extension) {
                    self.known_extensions.insert(extension.clone());
                }
            }
            Classification::Unrecognised { extension } => {
                if !self.unknown_extensions.contains(extension) {
                    self.unknown_extensions.insert(extension.clone());
                }
            }
            Classification::NoExtension => {}
        }
        self.buckets[classification.category().index()].push(path);
    }

    pub fn add_folder(&mut self, path: PathBuf) {
        self.folders.push(path);
    }

    pub fn add_special(&mut self, path: PathBuf) {
        self.special.push(path);
    }

    pub fn add_issue(&mut self, path: PathBuf, message: String) {
        self.issues.push(ScanIssue { path, message });
    }

    /// Files classified into `category`, in walk order.
    pub fn bucket(&self, category: Category) -> &[PathBuf] {
        &self.buckets[category.index()]
    }

    /// Total number of files across all buckets.
    pub fn total_files(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_files() == 0
    }

    /// Which bucket holds `path`, if any.
    pub fn category_of(&self, path: &Path) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| self.bucket(*c).iter().any(|p| p == path))
    }
}
