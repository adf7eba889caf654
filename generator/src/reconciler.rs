//! Mapping of packaged jars back to Maven coordinates.
//!
//! Each jar name goes through the exception table first, then structural
//! inference from the local repository. A jar that neither can map is
//! recorded as unresolved; the reconciler never guesses a coordinate from
//! partial information.

use crate::distribution::{Distribution, DistributionName};
use crate::exceptions::{ExceptionTable, Rule};
use crate::repository::RepositoryIndex;
use bomgen::GeneratorConfig;
use bomgen_common::Coordinate;
use camino::Utf8PathBuf;
use log::{info, trace};

/// Where a resolved coordinate came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A rule in the exception table.
    Exception(Rule),
    /// Structural inference from this file in the local repository.
    Repository(Utf8PathBuf),
}

/// Outcome of resolving one jar name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The jar maps to `coordinate`.
    Resolved {
        /// The mapped coordinate.
        coordinate: Coordinate,
        /// The rule or repository file that produced it.
        source: Source,
    },
    /// No rule or repository file matched.
    Unresolved,
}

impl Resolution {
    /// The coordinate, if resolved.
    #[must_use]
    pub fn coordinate(&self) -> Option<&Coordinate> {
        match self {
            Self::Resolved { coordinate, .. } => Some(coordinate),
            Self::Unresolved => None,
        }
    }
}

/// Resolves jar names against an exception table and a repository index.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    config: &'a GeneratorConfig,
    exceptions: &'a ExceptionTable,
    index: &'a RepositoryIndex,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler over borrowed, read-only lookup tables.
    #[must_use]
    pub const fn new(
        config: &'a GeneratorConfig,
        exceptions: &'a ExceptionTable,
        index: &'a RepositoryIndex,
    ) -> Self {
        Self {
            config,
            exceptions,
            index,
        }
    }

    /// Resolve a single jar file name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Resolution {
        if let Some((coordinate, rule)) = self.exceptions.lookup(name) {
            trace!("{name} -> {coordinate} ({rule:?})");
            return Resolution::Resolved {
                coordinate,
                source: Source::Exception(rule),
            };
        }

        match self.index.resolve(name) {
            Some((coordinate, path)) => {
                trace!("{name} -> {coordinate} ({path})");
                Resolution::Resolved {
                    coordinate,
                    source: Source::Repository(path.to_owned()),
                }
            }
            None => {
                trace!("{name} -> unresolved");
                Resolution::Unresolved
            }
        }
    }

    /// Reconcile every jar packaged in `archive`.
    ///
    /// Excluded names are skipped. Every other entry ends up in exactly one
    /// of the distribution's coordinate list or unresolved list.
    #[must_use]
    pub fn reconcile(&self, archive: &str, entries: &[String]) -> Distribution {
        let mut coordinates = Vec::new();
        let mut unresolved = Vec::new();

        for entry in entries {
            if self.config.is_excluded(entry) {
                trace!("{entry} excluded");
                continue;
            }
            match self.resolve(entry) {
                Resolution::Resolved { coordinate, .. } => coordinates.push(coordinate),
                Resolution::Unresolved => unresolved.push(entry.clone()),
            }
        }

        info!(
            "{archive}: {} coordinates, {} unresolved",
            coordinates.len(),
            unresolved.len()
        );

        let name = DistributionName::from_archive(archive, &self.config.name_prefix);
        Distribution::new(archive, name, coordinates, unresolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    struct Tables {
        config: GeneratorConfig,
        exceptions: ExceptionTable,
        index: RepositoryIndex,
    }

    impl Tables {
        fn reconciler(&self) -> Reconciler<'_> {
            Reconciler::new(&self.config, &self.exceptions, &self.index)
        }
    }

    #[fixture]
    fn tables() -> Tables {
        let config = GeneratorConfig::default();
        let exceptions = ExceptionTable::new(&config);
        let mut index = RepositoryIndex::new("/m2");
        index.insert(Utf8PathBuf::from(
            "/m2/org/apache/xbean/xbean-naming/4.14/xbean-naming-4.14.jar",
        ));
        index.insert(Utf8PathBuf::from(
            "/m2/org/apache/tomcat/tomcat-catalina/9.0.37/catalina.jar",
        ));
        Tables {
            config,
            exceptions,
            index,
        }
    }

    #[rstest]
    fn exception_table_wins_over_repository(tables: Tables) {
        let resolution = tables.reconciler().resolve("catalina.jar");

        assert_eq!(
            resolution,
            Resolution::Resolved {
                coordinate: Coordinate::new(
                    "org.apache.tomcat",
                    "tomcat-catalina",
                    bomgen_common::VersionSpec::platform()
                ),
                source: Source::Exception(Rule::ExactName),
            }
        );
    }

    #[rstest]
    fn falls_back_to_structural_inference(tables: Tables) {
        let resolution = tables.reconciler().resolve("xbean-naming-4.14.jar");

        let coordinate = resolution.coordinate().expect("resolved");
        assert_eq!(coordinate.to_string(), "org.apache.xbean:xbean-naming:4.14");
        assert!(matches!(
            resolution,
            Resolution::Resolved {
                source: Source::Repository(_),
                ..
            }
        ));
    }

    #[rstest]
    fn unknown_names_are_unresolved(tables: Tables) {
        assert_eq!(
            tables.reconciler().resolve("mystery-1.0.jar"),
            Resolution::Unresolved
        );
    }

    #[rstest]
    fn reconcile_partitions_entries(tables: Tables) {
        let entries: Vec<String> = [
            "xbean-naming-4.14.jar",
            "bootstrap.jar",
            "mystery-1.0.jar",
            "commons-daemon.jar",
            "tomcat-i18n-ja.jar",
        ]
        .iter()
        .map(|name| (*name).to_owned())
        .collect();

        let distribution = tables
            .reconciler()
            .reconcile("apache-tomee-plus-8.0.6.zip", &entries);

        let keys: Vec<String> = distribution
            .coordinates()
            .iter()
            .map(Coordinate::key)
            .collect();
        assert_eq!(
            keys,
            ["commons-daemon:commons-daemon", "org.apache.xbean:xbean-naming"]
        );
        assert_eq!(distribution.unresolved(), ["mystery-1.0.jar"]);
        assert_eq!(distribution.name().short(), "tomee-plus");
    }

    #[rstest]
    fn resolved_and_unresolved_are_disjoint(tables: Tables) {
        let entries = vec!["mystery-1.0.jar".to_owned(), "catalina.jar".to_owned()];

        let distribution = tables
            .reconciler()
            .reconcile("apache-tomee-plume-8.0.6.zip", &entries);

        for name in distribution.unresolved() {
            assert!(tables.reconciler().resolve(name).coordinate().is_none());
        }
        assert_eq!(
            distribution.coordinates().len() + distribution.unresolved().len(),
            entries.len()
        );
    }
}
