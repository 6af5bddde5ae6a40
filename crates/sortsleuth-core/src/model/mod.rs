/// Data model for SortSleuth.
///
/// Re-exports the category set, the scan accumulator, and the run report.
pub mod category;
pub mod report;
pub mod scan_result;

pub use category::{is_reserved_folder, Category};
pub use report::{Extracted, Moved, PruneReport, PruneSkip, SortReport};
pub use scan_result::{ScanIssue, ScanResult};
