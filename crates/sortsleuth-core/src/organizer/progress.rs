/// Sort progress reporting — lightweight messages sent from the organizer
/// thread to the caller via a crossbeam channel.
use crate::error::FileFailure;
use crate::model::{Category, Extracted, Moved};
use std::path::PathBuf;
use std::time::Duration;

/// Progress updates sent from the organizer thread.
///
/// The final [`SortReport`](crate::model::SortReport) is returned from
/// [`SortHandle::join`](super::SortHandle::join); these messages carry only
/// per-step status for live display.
#[derive(Debug, Clone)]
pub enum SortProgress {
    /// The scan finished and its result is frozen.
    Scanned {
        files: usize,
        folders: usize,
        issues: usize,
    },
    /// Relocation of one category bucket is starting.
    CategoryStarted { category: Category, files: usize },
    /// One file was moved.
    Moved(Moved),
    /// One archive was unpacked and removed.
    Extracted(Extracted),
    /// A non-fatal, per-file failure. The file was left where it was.
    Skipped(FileFailure),
    /// An empty folder was removed.
    Pruned(PathBuf),
    /// The run finished.
    Complete { duration: Duration },
}
