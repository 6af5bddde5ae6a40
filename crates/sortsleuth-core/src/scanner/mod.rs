/// Scanner module — builds the categorised inventory of a directory tree.
///
/// Uses `jwalk`'s rayon-backed parallel traversal. Reserved destination
/// folders are removed from each directory's child list inside
/// `process_read_dir`, before jwalk schedules them, so their contents are
/// never read, let alone classified.
///
/// The walk is fully collected into one [`ScanResult`] before the function
/// returns. Callers may then mutate the tree freely.
pub mod summary;

use crate::analysis::classify;
use crate::model::{is_reserved_folder, ScanResult};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub use summary::ScanSummary;

/// Decides which directories the scanner must not descend into.
pub trait SkipRule: Send + Sync {
    /// `true` if a directory called `dir_name` is skipped entirely.
    fn should_skip(&self, dir_name: &str) -> bool;
}

impl<F> SkipRule for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn should_skip(&self, dir_name: &str) -> bool {
        self(dir_name)
    }
}

/// Skips the six category destination folders (`Images`, `Archives`, ...)
/// at any depth.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReservedFolders;

impl SkipRule for ReservedFolders {
    fn should_skip(&self, dir_name: &str) -> bool {
        is_reserved_folder(dir_name)
    }
}

/// Scan `root` skipping reserved folders, using one thread per CPU.
pub fn scan(root: &Path) -> ScanResult {
    scan_with(root, Arc::new(ReservedFolders), num_cpus::get())
}

/// Scan `root` with an explicit skip rule and walker pool size.
///
/// Unreadable entries are recorded as issues; they never stop the walk.
pub fn scan_with(root: &Path, skip: Arc<dyn SkipRule>, threads: usize) -> ScanResult {
    let start = Instant::now();
    let mut result = ScanResult::new();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::RayonNewPool(threads.max(1)))
        .process_read_dir(move |_depth, _path, _state, children| {
            children.retain(|child| match child {
                Ok(entry) => {
                    !(entry.file_type().is_dir()
                        && skip.should_skip(&entry.file_name().to_string_lossy()))
                }
                Err(_) => true,
            });
        });

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                warn!("Cannot read {}: {err}", path.display());
                result.add_issue(path, err.to_string());
                continue;
            }
        };

        // The root itself is yielded first at depth 0.
        if entry.depth == 0 {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_dir() {
            result.add_folder(path);
            continue;
        }
        // Symlinks, FIFOs, sockets and devices stay where they are.
        if !entry.file_type().is_file() {
            debug!("Leaving non-regular entry {}", path.display());
            result.add_special(path);
            continue;
        }

        let classification = classify(&entry.file_name().to_string_lossy());
        debug!("{} -> {:?}", path.display(), classification.category());
        result.add_file(path, classification);
    }

    info!(
        "Scan of {} complete: {} files, {} folders in {:?}",
        root.display(),
        result.total_files(),
        result.folders.len(),
        start.elapsed()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_folders_rule() {
        let rule = ReservedFolders;
        assert!(rule.should_skip("Images"));
        assert!(rule.should_skip("Unknown"));
        assert!(!rule.should_skip("holiday"));
    }

    #[test]
    fn closures_are_skip_rules() {
        let rule = |name: &str| name.starts_with('.');
        assert!(rule.should_skip(".git"));
        assert!(!rule.should_skip("src"));
    }
}
