//! Generator configuration loaded from `bomgen.toml`.
//!
//! Every setting has a default matching the TomEE 8.0 release line, so a
//! missing configuration file is equivalent to an empty one. Overrides are
//! deserialised with `serde` and unknown keys are rejected so a typo in the
//! file cannot silently fall back to a default.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading `bomgen.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration at {path}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`GeneratorConfig`].
    #[error("invalid configuration at {path}: {reason}")]
    Parse {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// The parser's description of the problem.
        reason: String,
    },
}

/// Settings shared by the reconciler, the pipeline, and the CLI.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Only archives whose file name starts with this prefix are processed.
    pub archive_prefix: String,
    /// Extension (without the dot) of distribution archives.
    pub archive_extension: String,
    /// Prefix stripped from an archive name to form the short name.
    pub name_prefix: String,
    /// Extension (without the dot) of packaged binaries, both inside the
    /// archives and in the local repository.
    pub binary_extension: String,
    /// Release line used to trim versions off `openejb-*` and `tomee-*`
    /// jar names, e.g. `8.0` trims `openejb-core-8.0.6.jar` to
    /// `openejb-core`.
    pub release_line: String,
    /// Version pinned for the Eclipse compiler jar, which Tomcat downloads
    /// outside Maven Central.
    pub ecj_version: String,
    /// Packaged binaries that are never mapped to a coordinate.
    pub exclusions: ExclusionConfig,
}

impl GeneratorConfig {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns the TOML deserialiser's error when the source is malformed or
    /// contains unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Loads configuration from `path`, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use bomgen::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::load(None).expect("defaults always load");
    /// assert_eq!(config.release_line, "8.0");
    /// ```
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let Some(config_path) = path else {
            debug!("no configuration file given; using defaults");
            return Ok(Self::default());
        };

        let source =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                path: config_path.to_owned(),
                source,
            })?;

        Self::from_toml_str(&source).map_err(|error| ConfigError::Parse {
            path: config_path.to_owned(),
            reason: error.message().to_owned(),
        })
    }

    /// Returns true when `name` is excluded from reconciliation.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclusions.names.iter().any(|excluded| excluded == name)
            || self
                .exclusions
                .prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            archive_prefix: "apache-tomee-".to_owned(),
            archive_extension: "zip".to_owned(),
            name_prefix: "apache-".to_owned(),
            binary_extension: "jar".to_owned(),
            release_line: "8.0".to_owned(),
            ecj_version: "3.22.0".to_owned(),
            exclusions: ExclusionConfig::default(),
        }
    }
}

/// Binaries shipped in a distribution that have no Maven counterpart.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExclusionConfig {
    /// Exact file names to skip.
    pub names: Vec<String>,
    /// File name prefixes to skip.
    pub prefixes: Vec<String>,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            names: vec!["bootstrap.jar".to_owned(), "catalina-ant.jar".to_owned()],
            prefixes: vec!["tomcat-i18n".to_owned()],
        }
    }
}
