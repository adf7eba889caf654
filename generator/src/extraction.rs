//! Distribution archive extraction.
//!
//! Each server zip is unpacked into its own temporary directory before its
//! binaries are reconciled. Entries are validated so that nothing escapes
//! the destination directory (zip-slip).

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Trait for extracting distribution archives, enabling test mocking.
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveExtractor {
    /// Extract the archive at `archive_path` into `dest_dir`.
    ///
    /// Returns the paths of the extracted files, relative to `dest_dir`,
    /// in archive order. Directory entries are created but not listed.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::PathTraversal`] if any entry attempts to
    /// escape the destination directory, [`ExtractionError::EmptyArchive`]
    /// if the archive holds no files, and [`ExtractionError::Io`] or
    /// [`ExtractionError::Zip`] on read or write failures.
    fn extract(&self, archive_path: &Path, dest_dir: &Path)
    -> Result<Vec<PathBuf>, ExtractionError>;
}

/// Errors arising from archive extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// I/O error during extraction.
    #[error("extraction I/O error: {0}")]
    Io(#[from] io::Error),

    /// The archive is not a readable zip file.
    #[error("invalid zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A path in the archive attempts to traverse outside the destination.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The offending path from the archive entry.
        path: String,
    },

    /// The archive contains no files.
    #[error("archive contains no files")]
    EmptyArchive,
}

/// Default extractor backed by the `zip` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipExtractor;

impl ArchiveExtractor for ZipExtractor {
    fn extract(
        &self,
        archive_path: &Path,
        dest_dir: &Path,
    ) -> Result<Vec<PathBuf>, ExtractionError> {
        let mut archive = zip::ZipArchive::new(File::open(archive_path)?)?;
        let mut extracted = Vec::new();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let Some(entry_path) = entry.enclosed_name() else {
                return Err(ExtractionError::PathTraversal {
                    path: entry.name().to_owned(),
                });
            };

            let dest_path = dest_dir.join(&entry_path);
            if entry.is_dir() {
                fs::create_dir_all(&dest_path)?;
                continue;
            }
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut output = File::create(&dest_path)?;
            io::copy(&mut entry, &mut output)?;
            extracted.push(entry_path);
        }

        if extracted.is_empty() {
            return Err(ExtractionError::EmptyArchive);
        }

        Ok(extracted)
    }
}

/// Select the packaged binaries among extracted entries.
///
/// Returns the file names (last path segment) of every entry with the
/// given extension, ordered by full entry path so that the result does not
/// depend on archive order.
#[must_use]
pub fn binary_entries(entries: &[PathBuf], extension: &str) -> Vec<String> {
    let mut binaries: Vec<&PathBuf> = entries
        .iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();
    binaries.sort();

    binaries
        .into_iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}
