//! Version component of a Maven coordinate.
//!
//! Jars that ship unversioned in a distribution are pinned to a Maven
//! property rather than a literal version, so the generated BOM tracks the
//! build that produced it.

use serde::{Serialize, Serializer};
use std::fmt;

/// Property holding the version of the project being released.
pub const PROJECT_VERSION: &str = "project.version";

/// Property holding the version of the bundled Tomcat platform.
pub const PLATFORM_VERSION: &str = "tomcat.version";

/// A literal version string or a `${property}` placeholder.
///
/// # Examples
///
/// ```
/// use bomgen_common::VersionSpec;
///
/// assert_eq!(VersionSpec::literal("4.14").to_string(), "4.14");
/// assert_eq!(VersionSpec::project().to_string(), "${project.version}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionSpec {
    /// A concrete version such as `1.1.0`.
    Literal(String),
    /// A Maven property name, rendered as `${name}`.
    Property(String),
}

impl VersionSpec {
    /// Create a literal version.
    #[must_use]
    pub fn literal(version: impl Into<String>) -> Self {
        Self::Literal(version.into())
    }

    /// Create a property placeholder.
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self::Property(name.into())
    }

    /// The `${project.version}` placeholder.
    #[must_use]
    pub fn project() -> Self {
        Self::property(PROJECT_VERSION)
    }

    /// The `${tomcat.version}` placeholder.
    #[must_use]
    pub fn platform() -> Self {
        Self::property(PLATFORM_VERSION)
    }
}

impl From<&str> for VersionSpec {
    fn from(version: &str) -> Self {
        Self::literal(version)
    }
}

impl From<String> for VersionSpec {
    fn from(version: String) -> Self {
        Self::Literal(version)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(version) => f.write_str(version),
            Self::Property(name) => write!(f, "${{{name}}}"),
        }
    }
}

impl Serialize for VersionSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
