//! Completeness gate run before any BOM is written.
//!
//! A BOM missing a jar from its distribution is worse than no BOM, and a
//! warning in the log is easy to miss. If any distribution has an unmapped
//! jar, the whole batch fails with one report covering all of them.

use crate::distribution::Distribution;
use std::fmt;

/// The unmapped jars of one distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteDistribution {
    /// Archive file name.
    pub archive: String,
    /// File names that could not be mapped.
    pub unresolved: Vec<String>,
}

/// Every distribution that still has unmapped jars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteMapping {
    incomplete: Vec<IncompleteDistribution>,
}

impl IncompleteMapping {
    /// Build a report from its entries.
    #[must_use]
    pub const fn new(incomplete: Vec<IncompleteDistribution>) -> Self {
        Self { incomplete }
    }

    /// The affected distributions.
    #[must_use]
    pub fn incomplete(&self) -> &[IncompleteDistribution] {
        &self.incomplete
    }
}

impl fmt::Display for IncompleteMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Unable to find matching maven coordinates from the following distributions."
        )?;
        for distribution in &self.incomplete {
            writeln!(f, "  {}", distribution.archive)?;
            for name in &distribution.unresolved {
                writeln!(f, "    - {name}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for IncompleteMapping {}

/// Fail unless every distribution is complete.
///
/// # Errors
///
/// Returns [`IncompleteMapping`] naming every incomplete distribution and
/// each of its unmapped jars.
pub fn verify(distributions: &[Distribution]) -> Result<(), IncompleteMapping> {
    let incomplete: Vec<IncompleteDistribution> = distributions
        .iter()
        .filter(|distribution| !distribution.is_complete())
        .map(|distribution| IncompleteDistribution {
            archive: distribution.archive().to_owned(),
            unresolved: distribution.unresolved().to_vec(),
        })
        .collect();

    if incomplete.is_empty() {
        Ok(())
    } else {
        Err(IncompleteMapping::new(incomplete))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DistributionName;
    use bomgen_common::Coordinate;
    use rstest::rstest;

    fn distribution(archive: &str, unresolved: &[&str]) -> Distribution {
        Distribution::new(
            archive,
            DistributionName::from_archive(archive, "apache-"),
            vec![Coordinate::new("g", "a", "1")],
            unresolved.iter().map(|name| (*name).to_owned()).collect(),
        )
    }

    #[rstest]
    fn complete_batches_pass() {
        let batch = [
            distribution("apache-tomee-plus-8.0.6.zip", &[]),
            distribution("apache-tomee-plume-8.0.6.zip", &[]),
        ];

        assert!(verify(&batch).is_ok());
    }

    #[rstest]
    fn empty_batches_pass() {
        assert!(verify(&[]).is_ok());
    }

    #[rstest]
    fn report_lists_only_incomplete_distributions() {
        let batch = [
            distribution("apache-tomee-plus-8.0.6.zip", &["a.jar", "b.jar"]),
            distribution("apache-tomee-plume-8.0.6.zip", &[]),
            distribution("apache-tomee-webprofile-8.0.6.zip", &["c.jar"]),
        ];

        let err = verify(&batch).expect_err("two distributions are incomplete");

        let archives: Vec<&str> = err
            .incomplete()
            .iter()
            .map(|entry| entry.archive.as_str())
            .collect();
        assert_eq!(
            archives,
            ["apache-tomee-plus-8.0.6.zip", "apache-tomee-webprofile-8.0.6.zip"]
        );
    }

    #[rstest]
    fn report_renders_every_unresolved_name() {
        let batch = [
            distribution("apache-tomee-plus-8.0.6.zip", &["a.jar", "b.jar"]),
            distribution("apache-tomee-webprofile-8.0.6.zip", &["c.jar"]),
        ];

        let err = verify(&batch).expect_err("incomplete");

        assert_eq!(
            err.to_string(),
            concat!(
                "Unable to find matching maven coordinates from the following distributions.\n",
                "  apache-tomee-plus-8.0.6.zip\n",
                "    - a.jar\n",
                "    - b.jar\n",
                "  apache-tomee-webprofile-8.0.6.zip\n",
                "    - c.jar\n",
            )
        );
    }
}
