//! Error types for the BOM generator.
//!
//! Setup problems (missing directories, unreadable archives or templates)
//! abort the run immediately. Entries that cannot be mapped to a coordinate
//! are collected instead and surface together as
//! [`GeneratorError::IncompleteMapping`] once every archive is processed.

use crate::extraction::ExtractionError;
use crate::verification::IncompleteMapping;
use bomgen::ConfigError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while generating BOMs.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The directory holding the distribution archives does not exist.
    #[error(
        "distribution directory {path} does not exist; build the server \
         distributions before running the generator"
    )]
    DistributionsNotFound {
        /// Directory that was expected to hold the archives.
        path: Utf8PathBuf,
    },

    /// No archive in the distribution directory matched the selection rules.
    #[error("no {prefix}*.{extension} archives found in {path}")]
    NoDistributions {
        /// Directory that was scanned.
        path: Utf8PathBuf,
        /// Required archive name prefix.
        prefix: String,
        /// Required archive extension.
        extension: String,
    },

    /// The local Maven repository does not exist.
    #[error("local repository {path} does not exist")]
    RepositoryNotFound {
        /// Path of the missing repository.
        path: Utf8PathBuf,
    },

    /// Walking the local repository failed.
    #[error("failed to index local repository")]
    Index {
        /// The underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// A distribution archive could not be extracted.
    #[error("cannot unzip {archive}")]
    Extraction {
        /// Path of the archive.
        archive: Utf8PathBuf,
        /// The underlying extraction error.
        #[source]
        source: ExtractionError,
    },

    /// The manifest template could not be read.
    #[error("failed to read manifest template {path}")]
    TemplateRead {
        /// Path of the template.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A manifest could not be written.
    #[error("failed to write manifest {path}")]
    WriteFailed {
        /// Path of the manifest.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// One or more packaged binaries could not be mapped to a coordinate.
    #[error(transparent)]
    IncompleteMapping(#[from] IncompleteMapping),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`GeneratorError`].
pub type Result<T> = std::result::Result<T, GeneratorError>;
