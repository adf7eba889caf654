//! Maven coordinates.
//!
//! A [`Coordinate`] identifies one published binary by group, artifact and
//! version. Coordinates sort by `group:artifact` so that generated BOMs
//! list dependencies in a stable order.

use crate::version::VersionSpec;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::iter;

/// A `(group, artifact, version)` triple.
///
/// # Examples
///
/// ```
/// use bomgen_common::Coordinate;
///
/// let coordinate = Coordinate::new("org.apache.xbean", "xbean-naming", "4.14");
/// assert_eq!(coordinate.key(), "org.apache.xbean:xbean-naming");
/// assert_eq!(coordinate.to_string(), "org.apache.xbean:xbean-naming:4.14");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    version: VersionSpec,
}

impl Coordinate {
    /// Create a coordinate.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<VersionSpec>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// The dotted group identifier.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The artifact identifier.
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// The version or version placeholder.
    #[must_use]
    pub const fn version(&self) -> &VersionSpec {
        &self.version
    }

    /// The `group:artifact` string the ordering is defined on.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Compare two coordinates by `group:artifact`, ignoring the version.
    ///
    /// This is the ordering used for BOM output. Combined with a stable
    /// sort, coordinates that share a key keep their relative order.
    #[must_use]
    pub fn key_cmp(&self, other: &Self) -> Ordering {
        self.key_bytes().cmp(other.key_bytes())
    }

    fn key_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.group_id
            .bytes()
            .chain(iter::once(b':'))
            .chain(self.artifact_id.bytes())
    }
}

impl Ord for Coordinate {
    /// Orders by `group:artifact`; the version only separates coordinates
    /// that share a key, keeping `Ord` consistent with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_cmp(other)
            .then_with(|| self.version.cmp(&other.version))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
