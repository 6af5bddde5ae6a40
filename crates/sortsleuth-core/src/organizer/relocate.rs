/// Relocator — moves one file into its category folder under a
/// transliterated name.
///
/// Same-named files already at the destination are overwritten
/// (last write wins). The overwrite is logged, not prevented.
use crate::error::{FailureKind, FileFailure};
use crate::model::{Category, Moved};
use crate::naming::translate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Create `root/<category folder>` if missing and return its path.
///
/// Safe to call concurrently and repeatedly.
pub fn ensure_category_dir(root: &Path, category: Category) -> io::Result<PathBuf> {
    let dir = root.join(category.folder_name());
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Rename `from` to `to`, falling back to copy + delete across devices.
pub(crate) fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            debug!("rename crosses devices, copying {}", from.display());
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
        Err(err) => Err(err),
    }
}

/// Move `file` to `root/<category folder>/<translated name>`.
pub fn relocate(file: &Path, root: &Path, category: Category) -> Result<Moved, FileFailure> {
    let dir = ensure_category_dir(root, category)
        .map_err(|e| FileFailure::new(file, FailureKind::from_move_error(&e)))?;

    let Some(name) = file.file_name() else {
        return Err(FileFailure::new(
            file,
            FailureKind::Io {
                kind: io::ErrorKind::InvalidInput,
                message: "path has no file name".into(),
            },
        ));
    };
    let to = dir.join(translate(&name.to_string_lossy()));

    if to != file && to.is_file() {
        warn!("Overwriting {} with {}", to.display(), file.display());
    }

    move_file(file, &to).map_err(|e| FileFailure::new(file, FailureKind::from_move_error(&e)))?;
    debug!("Moved {} -> {}", file.display(), to.display());

    Ok(Moved {
        from: file.to_path_buf(),
        to,
        category,
    })
}
