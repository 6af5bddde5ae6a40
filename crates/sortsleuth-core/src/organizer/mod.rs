/// Organizer module — sequences scan, relocation, extraction, and pruning.
///
/// The order is fixed:
/// 1. **Scan** the whole tree into a frozen [`ScanResult`](crate::ScanResult).
/// 2. **Relocate** the five non-archive buckets (optionally in parallel;
///    their files and destination folders are disjoint).
/// 3. **Extract** archives, one at a time.
/// 4. **Prune** empty folders.
///
/// Per-file failures are collected in the report and never stop the run.
/// Only an invalid root is fatal, and it is detected before anything moves.
///
/// No locking is done: callers must not run two sorts over overlapping
/// trees at the same time.
pub mod archive;
pub mod progress;
pub mod prune;
pub mod relocate;

use crate::error::{FileFailure, SortError};
use crate::model::{Category, Moved, SortReport};
use crate::scanner::{scan_with, ReservedFolders};
use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use progress::SortProgress;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

pub use archive::extract_archive;
pub use prune::prune_empty;
pub use relocate::relocate;

/// Maximum number of progress messages that may queue up in the channel.
///
/// If the consumer falls behind, the organizer blocks on `send` rather
/// than growing the queue without bound.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct SortOptions {
    /// Size of the rayon pool used by the directory walker.
    pub scan_threads: usize,
    /// Relocate the five non-archive buckets concurrently.
    pub parallel_relocation: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            scan_threads: num_cpus::get(),
            parallel_relocation: true,
        }
    }
}

/// Handle to a sort running on a background thread.
pub struct SortHandle {
    /// Receiver for progress updates. Drain it before calling [`join`](Self::join);
    /// the channel is bounded.
    pub progress_rx: Receiver<SortProgress>,
    thread: thread::JoinHandle<Result<SortReport, SortError>>,
}

impl SortHandle {
    /// Wait for the run to finish and return its report.
    pub fn join(self) -> Result<SortReport, SortError> {
        match self.thread.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

/// Start a sort of `root` on a background thread.
pub fn start_sort(root: PathBuf, options: SortOptions) -> SortHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<SortProgress>(PROGRESS_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("sortsleuth-organizer".into())
        .spawn(move || run(&root, &options, &progress_tx))
        .expect("failed to spawn organizer thread");

    SortHandle {
        progress_rx,
        thread,
    }
}

/// Check that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), SortError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(SortError::RootNotDirectory {
            path: root.to_path_buf(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(SortError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(err) => Err(err.into()),
    }
}

/// Moves and failures gathered while relocating buckets.
#[derive(Default)]
struct Relocated {
    moved: Vec<Moved>,
    failures: Vec<FileFailure>,
}

fn relocate_bucket(
    files: &[PathBuf],
    root: &Path,
    category: Category,
    progress_tx: &Sender<SortProgress>,
) -> Relocated {
    let mut out = Relocated::default();
    if files.is_empty() {
        return out;
    }
    let _ = progress_tx.send(SortProgress::CategoryStarted {
        category,
        files: files.len(),
    });
    for file in files {
        match relocate(file, root, category) {
            Ok(moved) => {
                let _ = progress_tx.send(SortProgress::Moved(moved.clone()));
                out.moved.push(moved);
            }
            Err(failure) => {
                warn!("Skipping {failure}");
                let _ = progress_tx.send(SortProgress::Skipped(failure.clone()));
                out.failures.push(failure);
            }
        }
    }
    out
}

/// Run the full pipeline on the calling thread.
pub fn run(
    root: &Path,
    options: &SortOptions,
    progress_tx: &Sender<SortProgress>,
) -> Result<SortReport, SortError> {
    let start = Instant::now();
    validate_root(root)?;
    info!("Sorting {}", root.display());

    // ── Scan ─────────────────────────────────────────────────────────────
    let scan = scan_with(root, Arc::new(ReservedFolders), options.scan_threads);
    let _ = progress_tx.send(SortProgress::Scanned {
        files: scan.total_files(),
        folders: scan.folders.len(),
        issues: scan.issues.len(),
    });

    // ── Relocate ─────────────────────────────────────────────────────────
    let relocated = Mutex::new(Relocated::default());
    let merge = |part: Relocated| {
        let mut all = relocated.lock();
        all.moved.extend(part.moved);
        all.failures.extend(part.failures);
    };
    if options.parallel_relocation {
        Category::MOVABLE.par_iter().for_each(|&cat| {
            merge(relocate_bucket(scan.bucket(cat), root, cat, progress_tx));
        });
    } else {
        for cat in Category::MOVABLE {
            merge(relocate_bucket(scan.bucket(cat), root, cat, progress_tx));
        }
    }
    let Relocated {
        mut moved,
        mut failures,
    } = relocated.into_inner();
    // Parallel buckets finish in any order; report them in category order.
    moved.sort_by_key(|m| m.category);

    // ── Extract ──────────────────────────────────────────────────────────
    let mut extracted = Vec::new();
    for archive in scan.bucket(Category::Archive) {
        match extract_archive(archive, root) {
            Ok(done) => {
                let _ = progress_tx.send(SortProgress::Extracted(done.clone()));
                extracted.push(done);
            }
            Err(failure) => {
                warn!("Skipping {failure}");
                let _ = progress_tx.send(SortProgress::Skipped(failure.clone()));
                failures.push(failure);
            }
        }
    }

    // ── Prune ────────────────────────────────────────────────────────────
    let prune = prune_empty(root);
    for dir in &prune.removed {
        let _ = progress_tx.send(SortProgress::Pruned(dir.clone()));
    }

    let duration = start.elapsed();
    info!(
        "Sort complete: {} moved, {} extracted, {} skipped, {} pruned in {duration:?}",
        moved.len(),
        extracted.len(),
        failures.len(),
        prune.removed.len()
    );
    let _ = progress_tx.send(SortProgress::Complete { duration });

    Ok(SortReport {
        scan,
        moved,
        extracted,
        failures,
        prune,
        duration,
    })
}
