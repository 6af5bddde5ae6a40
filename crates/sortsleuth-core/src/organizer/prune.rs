/// Pruner — removes folders left empty after relocation.
///
/// Post-order walk: children are visited before their parent, so a chain
/// of nested empty folders collapses in one pass. The root itself is never
/// removed. Failures (non-empty, permission denied) are recorded as
/// [`PruneSkip`]s and otherwise ignored.
use crate::model::{PruneReport, PruneSkip};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Remove every empty directory below `root`.
pub fn prune_empty(root: &Path) -> PruneReport {
    let mut report = PruneReport::default();
    prune_children(root, &mut report);
    report
}

fn prune_children(dir: &Path, report: &mut PruneReport) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Cannot list {}: {err}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        let path = entry.path();
        prune_children(&path, report);
        match fs::remove_dir(&path) {
            Ok(()) => {
                debug!("Pruned {}", path.display());
                report.removed.push(path);
            }
            Err(err) => report.skipped.push(PruneSkip {
                path,
                kind: err.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn nested_empty_chain_is_removed_children_first() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();

        let report = prune_empty(tmp.path());

        assert_eq!(report.removed.len(), 3);
        assert_eq!(report.removed[0], deep);
        assert_eq!(report.removed[2], tmp.path().join("a"));
        assert!(report.skipped.is_empty());
        assert!(tmp.path().exists(), "root must survive");
    }

    #[test]
    fn non_empty_folders_are_skipped_not_removed() {
        let tmp = TempDir::new().unwrap();
        let keep = tmp.path().join("keep");
        fs::create_dir_all(keep.join("empty")).unwrap();
        fs::write(keep.join("file.txt"), b"x").unwrap();

        let report = prune_empty(tmp.path());

        assert_eq!(report.removed, vec![keep.join("empty")]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, keep);
        assert!(keep.join("file.txt").exists());
    }

    #[test]
    fn empty_root_is_kept() {
        let tmp = TempDir::new().unwrap();
        let report = prune_empty(tmp.path());
        assert!(report.removed.is_empty());
        assert!(tmp.path().is_dir());
    }
}
