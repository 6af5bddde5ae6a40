/// SortSleuth Core — classification, transliteration, and reorganisation.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`model`] — Categories, the scan accumulator, and the run report.
/// - [`analysis`] — The fixed extension table and filename classification.
/// - [`naming`] — Cyrillic → Latin transliteration and filename sanitising.
/// - [`scanner`] — Recursive, reserved-folder-aware directory scan.
/// - [`organizer`] — Move / extract / prune pipeline and its background handle.
/// - [`error`] — Fatal and per-file failure types.
pub mod analysis;
pub mod error;
pub mod model;
pub mod naming;
pub mod organizer;
pub mod scanner;

pub use error::{FailureKind, FileFailure, SortError};
pub use model::{Category, ScanResult, SortReport};
pub use organizer::{run, start_sort, SortHandle, SortOptions};
