//! Index of a local Maven repository.
//!
//! The generator never talks to a remote repository: the distributions were
//! just built, so every jar they contain is already in the local repository
//! and only needs to be found again. The index maps each jar's file name to
//! its location, and coordinates are read back from the conventional
//! `group/.../artifactId/version/artifactId-version.jar` layout.

use crate::error::{GeneratorError, Result};
use bomgen_common::Coordinate;
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use std::collections::BTreeMap;
use walkdir::WalkDir;

/// File-name index over a local Maven repository tree.
///
/// Two artifacts that share a bare file name cannot both be indexed; the
/// one indexed last replaces the earlier entry.
#[derive(Debug, Clone)]
pub struct RepositoryIndex {
    root: Utf8PathBuf,
    artifacts: BTreeMap<String, Utf8PathBuf>,
}

impl RepositoryIndex {
    /// Create an empty index rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            artifacts: BTreeMap::new(),
        }
    }

    /// Walk `root` and index every file with the given extension.
    ///
    /// Directories are visited in file-name order so that duplicate
    /// resolution is deterministic. Symbolic links are followed; a linked
    /// jar is indexed under the link's own path.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::RepositoryNotFound`] if `root` is not a
    /// directory and [`GeneratorError::Index`] if the walk fails.
    pub fn build(root: &Utf8Path, extension: &str) -> Result<Self> {
        if !root.is_dir() {
            return Err(GeneratorError::RepositoryNotFound {
                path: root.to_owned(),
            });
        }

        let mut index = Self::new(root);
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|source| GeneratorError::Index { source })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(path) = Utf8Path::from_path(entry.path()) else {
                warn!("skipping non-UTF-8 path {}", entry.path().display());
                continue;
            };
            if path.extension() == Some(extension) {
                index.insert(path.to_owned());
            }
        }

        debug!("indexed {} artifacts under {root}", index.len());
        Ok(index)
    }

    /// Index `path` under its file name, returning any entry it replaced.
    pub fn insert(&mut self, path: Utf8PathBuf) -> Option<Utf8PathBuf> {
        let name = path.file_name()?.to_owned();
        let replaced = self.artifacts.insert(name, path);
        if let Some(previous) = &replaced {
            debug!("duplicate artifact file name; {previous} replaced in index");
        }
        replaced
    }

    /// Number of indexed file names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Returns true if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Find the indexed file for a packaged binary's file name.
    ///
    /// Falls back to the first indexed name (in sorted order) that starts
    /// with the last four characters of `name` when there is no exact
    /// entry.
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<&Utf8Path> {
        if let Some(path) = self.artifacts.get(name) {
            return Some(path);
        }

        let (start, _) = name.char_indices().rev().nth(3)?;
        let tail = name.get(start..)?;
        self.artifacts
            .iter()
            .find(|(key, _)| key.starts_with(tail))
            .map(|(_, path)| path.as_path())
    }

    /// Infer a coordinate from a file's location in the repository.
    ///
    /// The parent directory is the version, its parent the artifact id, and
    /// the remaining directories below the root form the dotted group id.
    /// Returns `None` for paths outside the root or without a group.
    ///
    /// # Examples
    ///
    /// ```
    /// use bomgen_generator::repository::RepositoryIndex;
    /// use camino::Utf8Path;
    ///
    /// let index = RepositoryIndex::new("/m2");
    /// let coordinate = index
    ///     .infer(Utf8Path::new("/m2/org/apache/xbean/xbean-naming/4.14/xbean-naming-4.14.jar"))
    ///     .expect("conventional layout");
    /// assert_eq!(coordinate.to_string(), "org.apache.xbean:xbean-naming:4.14");
    /// ```
    #[must_use]
    pub fn infer(&self, path: &Utf8Path) -> Option<Coordinate> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let components: Vec<&str> = relative.iter().collect();
        let [group @ .., artifact, version, _file] = components.as_slice() else {
            return None;
        };
        if group.is_empty() {
            return None;
        }
        Some(Coordinate::new(group.join("."), *artifact, *version))
    }

    /// Locate `name` and infer its coordinate.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<(Coordinate, &Utf8Path)> {
        let path = self.locate(name)?;
        self.infer(path).map(|coordinate| (coordinate, path))
    }
}
