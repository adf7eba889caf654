//! Reconciled view of one distribution archive.
//!
//! A [`Distribution`] is produced once by the reconciler and never mutated
//! afterwards: it carries the archive's names, the coordinates of every
//! mapped jar, and the names of jars that could not be mapped.

use bomgen_common::Coordinate;
use serde::Serialize;

/// Short and display names derived from an archive file name.
///
/// # Examples
///
/// ```
/// use bomgen_generator::distribution::DistributionName;
///
/// let name = DistributionName::from_archive("apache-tomee-webprofile-8.0.6.zip", "apache-");
/// assert_eq!(name.short(), "tomee-webprofile");
/// assert_eq!(name.display(), "TomEE WebProfile");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionName {
    short: String,
    display: String,
}

impl DistributionName {
    /// Derive names from `archive`, removing `prefix` from the short name.
    ///
    /// The archive name is cut at the first `-` followed by a digit, which
    /// drops the version and extension.
    #[must_use]
    pub fn from_archive(archive: &str, prefix: &str) -> Self {
        let unversioned = strip_version(archive);
        let short = if prefix.is_empty() {
            unversioned.to_owned()
        } else {
            unversioned.replace(prefix, "")
        };
        let display = display_name(&short);
        Self { short, display }
    }

    /// Short name used for the output directory and artifact id, e.g.
    /// `tomee-plume`.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Human readable name, e.g. `TomEE Plume`.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }
}

fn strip_version(archive: &str) -> &str {
    archive
        .match_indices('-')
        .find(|&(index, _)| {
            archive
                .get(index + 1..)
                .and_then(|rest| rest.chars().next())
                .is_some_and(|ch| ch.is_ascii_digit())
        })
        .and_then(|(index, _)| archive.get(..index))
        .unwrap_or(archive)
}

fn display_name(short: &str) -> String {
    short
        .split('-')
        .map(|segment| {
            upper_first(segment)
                .replace("ee", "EE")
                .replace("profile", "Profile")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// The coordinates reconciled from one archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    archive: String,
    #[serde(flatten)]
    name: DistributionName,
    coordinates: Vec<Coordinate>,
    unresolved: Vec<String>,
}

impl Distribution {
    /// Assemble a distribution.
    ///
    /// `coordinates` are sorted by `group:artifact` here; equal keys keep
    /// their relative order.
    #[must_use]
    pub fn new(
        archive: impl Into<String>,
        name: DistributionName,
        mut coordinates: Vec<Coordinate>,
        unresolved: Vec<String>,
    ) -> Self {
        coordinates.sort_by(Coordinate::key_cmp);
        Self {
            archive: archive.into(),
            name,
            coordinates,
            unresolved,
        }
    }

    /// The archive file name, e.g. `apache-tomee-plus-8.0.6.zip`.
    #[must_use]
    pub fn archive(&self) -> &str {
        &self.archive
    }

    /// The derived names.
    #[must_use]
    pub const fn name(&self) -> &DistributionName {
        &self.name
    }

    /// Mapped coordinates in `group:artifact` order.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// File names of jars that could not be mapped, in archive order.
    #[must_use]
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// Returns true when every jar was mapped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}
