/// Archive handler — unpacks an archive into `Archives/<name>` and removes
/// the original.
///
/// Steps:
/// 1. Derive the folder name: strip `.zip` / `.tar` / `.gz` tokens from the
///    end, then transliterate.
/// 2. Create the folder (reusing it if it already exists).
/// 3. Extract. On failure, remove the folder if this call created it, leave
///    the archive untouched, and report the failure.
/// 4. On success, delete the archive.
use crate::error::{FailureKind, FileFailure};
use crate::model::{Category, Extracted};
use crate::naming::{archive_folder_name, strip_archive_suffixes};
use crate::organizer::relocate::ensure_category_dir;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Container formats the handler can unpack, detected from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
    /// A single gzip-compressed file that is not a tarball.
    Gz,
}

impl ArchiveFormat {
    /// Detect the format from the (case-insensitive) file name.
    pub fn from_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".tar.gz") {
            Some(Self::TarGz)
        } else if lower.ends_with(".zip") {
            Some(Self::Zip)
        } else if lower.ends_with(".tar") {
            Some(Self::Tar)
        } else if lower.ends_with(".gz") {
            Some(Self::Gz)
        } else {
            None
        }
    }
}

/// Size of one tar header block.
const TAR_BLOCK: usize = 512;

/// Extraction failure, before mapping into a [`FailureKind`].
#[derive(Debug)]
enum ExtractError {
    /// The archive vanished before it could be opened.
    Missing,
    /// The archive's contents could not be decoded.
    Unsupported(String),
    /// Reading the source or writing the output failed for reasons unrelated
    /// to the archive's format (permissions, disk full, ...).
    Io(io::Error),
}

/// Error kinds that describe the filesystem, not the archive contents.
fn is_environment_error(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::PermissionDenied
            | io::ErrorKind::StorageFull
            | io::ErrorKind::QuotaExceeded
            | io::ErrorKind::FileTooLarge
            | io::ErrorKind::ReadOnlyFilesystem
    )
}

impl From<io::Error> for ExtractError {
    fn from(err: io::Error) -> Self {
        if is_environment_error(err.kind()) {
            Self::Io(err)
        } else {
            Self::Unsupported(err.to_string())
        }
    }
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => e.into(),
            other => Self::Unsupported(other.to_string()),
        }
    }
}

impl From<ExtractError> for FailureKind {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Missing => Self::MissingArchiveSource,
            ExtractError::Unsupported(reason) => Self::UnsupportedArchive { reason },
            ExtractError::Io(e) => Self::Io {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

fn open_source(archive: &Path) -> Result<BufReader<File>, ExtractError> {
    match File::open(archive) {
        Ok(f) => Ok(BufReader::new(f)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ExtractError::Missing),
        Err(e) => Err(ExtractError::Io(e)),
    }
}

/// Stream `reader` into a new file at `out`.
///
/// Read errors come from decoding the archive; write errors always map to
/// [`ExtractError::Io`].
fn write_entry<R: Read>(reader: &mut R, out: &Path) -> Result<(), ExtractError> {
    let mut file = File::create(out).map_err(ExtractError::Io)?;
    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        file.write_all(&buf[..n]).map_err(ExtractError::Io)?;
    }
}

fn extract_zip(archive: &Path, dest: &Path) -> Result<usize, ExtractError> {
    let mut zip = zip::ZipArchive::new(open_source(archive)?)?;
    let mut count = 0;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping unsafe entry {:?} in {}", entry.name(), archive.display());
            continue;
        };
        let out = dest.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&out).map_err(ExtractError::Io)?;
            continue;
        }
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent).map_err(ExtractError::Io)?;
        }
        write_entry(&mut entry, &out)?;
        count += 1;
    }
    Ok(count)
}

/// Unpack a tar stream. An archive of only end-of-archive blocks is valid
/// and yields zero files; anything shorter than one block is not a tar.
fn extract_tar<R: Read>(mut reader: R, dest: &Path) -> Result<usize, ExtractError> {
    let mut first = Vec::with_capacity(TAR_BLOCK);
    (&mut reader)
        .take(TAR_BLOCK as u64)
        .read_to_end(&mut first)?;
    if first.len() < TAR_BLOCK {
        return Err(ExtractError::Unsupported(format!(
            "not a tar archive ({} bytes, need at least {TAR_BLOCK})",
            first.len()
        )));
    }
    if first.iter().all(|&b| b == 0) {
        debug!("Tar archive starts with an end-of-archive block");
    }

    let mut tar = tar::Archive::new(io::Cursor::new(first).chain(reader));
    let mut files = 0;
    for entry in tar.entries()? {
        let mut entry = entry?;
        let is_file = entry.header().entry_type().is_file();
        if entry.unpack_in(dest)? && is_file {
            files += 1;
        }
    }
    Ok(files)
}

fn extract_gz(archive: &Path, dest: &Path) -> Result<usize, ExtractError> {
    let file_name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let inner = match strip_archive_suffixes(&file_name) {
        "" => "data",
        name => name,
    };
    let mut decoder = GzDecoder::new(open_source(archive)?);
    write_entry(&mut decoder, &dest.join(inner))?;
    Ok(1)
}

/// Unpack `archive` into `dest`, returning the number of files written.
fn extract_into(archive: &Path, dest: &Path) -> Result<usize, ExtractError> {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match ArchiveFormat::from_name(&name) {
        Some(ArchiveFormat::Zip) => extract_zip(archive, dest),
        Some(ArchiveFormat::Tar) => extract_tar(open_source(archive)?, dest),
        Some(ArchiveFormat::TarGz) => extract_tar(GzDecoder::new(open_source(archive)?), dest),
        Some(ArchiveFormat::Gz) => extract_gz(archive, dest),
        None => Err(ExtractError::Unsupported(format!("unknown archive format: {name}"))),
    }
}

/// Unpack `archive` into `root/Archives/<name>` and delete it on success.
pub fn extract_archive(archive: &Path, root: &Path) -> Result<Extracted, FileFailure> {
    let fail = |kind: FailureKind| FileFailure::new(archive, kind);

    let archives_dir = ensure_category_dir(root, Category::Archive)
        .map_err(|e| fail(FailureKind::from_move_error(&e)))?;

    let file_name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dest = archives_dir.join(archive_folder_name(&file_name));

    let created = !dest.exists();
    fs::create_dir_all(&dest).map_err(|e| fail(FailureKind::from_move_error(&e)))?;

    match extract_into(archive, &dest) {
        Ok(files) => {
            if let Err(e) = fs::remove_file(archive) {
                warn!("Extracted {} but could not delete it: {e}", archive.display());
            }
            debug!("Extracted {} -> {} ({files} files)", archive.display(), dest.display());
            Ok(Extracted {
                archive: archive.to_path_buf(),
                destination: dest,
                files,
            })
        }
        Err(err) => {
            if created {
                if let Err(e) = fs::remove_dir_all(&dest) {
                    warn!("Could not roll back {}: {e}", dest.display());
                }
            }
            Err(fail(err.into()))
        }
    }
}
