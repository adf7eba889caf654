//! Batch orchestration.
//!
//! A run reconciles every selected archive before anything is written. The
//! completeness gate then either lets every BOM through or stops the whole
//! batch, so a run never leaves a partial set of manifests behind.

use crate::distribution::Distribution;
use crate::error::{GeneratorError, Result};
use crate::exceptions::ExceptionTable;
use crate::extraction::{ArchiveExtractor, binary_entries};
use crate::manifest::{ManifestStyle, ManifestWriter, Template};
use crate::reconciler::Reconciler;
use crate::repository::RepositoryIndex;
use crate::verification::verify;
use bomgen::GeneratorConfig;
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info, warn};
use std::fs;

/// Inputs for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory holding the distribution archives.
    pub dists_dir: Utf8PathBuf,
    /// Root of the local Maven repository.
    pub repository: Utf8PathBuf,
    /// Directory the BOMs are written under.
    pub output_dir: Utf8PathBuf,
    /// Template override; the built-in template is used when absent.
    pub template: Option<Utf8PathBuf>,
    /// Dependency rendering style.
    pub style: ManifestStyle,
    /// Reconcile and verify without writing any manifest.
    pub dry_run: bool,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Every reconciled distribution, in archive-name order.
    pub distributions: Vec<Distribution>,
    /// Manifests written, in the same order. Empty for a dry run.
    pub written: Vec<Utf8PathBuf>,
    /// Whether manifest emission was skipped.
    pub dry_run: bool,
}

/// Run the generator over every selected archive.
///
/// # Errors
///
/// Fails on the first setup problem (missing directories, an unreadable
/// archive or template) and, once every archive is reconciled, with
/// [`GeneratorError::IncompleteMapping`] if any jar stayed unmapped. No
/// manifest is written in either case.
pub fn run(
    options: &RunOptions,
    config: &GeneratorConfig,
    extractor: &dyn ArchiveExtractor,
) -> Result<RunReport> {
    if !options.dists_dir.is_dir() {
        return Err(GeneratorError::DistributionsNotFound {
            path: options.dists_dir.clone(),
        });
    }

    let archives = select_archives(&options.dists_dir, config)?;
    let template = match &options.template {
        Some(path) => Template::load(path)?,
        None => Template::builtin(),
    };

    let index = RepositoryIndex::build(&options.repository, &config.binary_extension)?;
    let exceptions = ExceptionTable::new(config);
    let reconciler = Reconciler::new(config, &exceptions, &index);

    let mut distributions = Vec::with_capacity(archives.len());
    for archive in &archives {
        distributions.push(reconcile_archive(
            &options.dists_dir,
            archive,
            config,
            &reconciler,
            extractor,
        )?);
    }

    verify(&distributions)?;

    let written = if options.dry_run {
        info!("dry run: skipping {} manifest(s)", distributions.len());
        Vec::new()
    } else {
        let writer = ManifestWriter::new(options.output_dir.clone(), template, options.style);
        distributions
            .iter()
            .map(|distribution| writer.write(distribution))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(RunReport {
        distributions,
        written,
        dry_run: options.dry_run,
    })
}

/// File names in `dists_dir` carrying the configured archive prefix and
/// extension, sorted. Symbolic links to archives are selected too.
///
/// # Errors
///
/// Returns [`GeneratorError::NoDistributions`] when nothing matches and
/// [`GeneratorError::Io`] if the directory cannot be listed.
pub fn select_archives(dists_dir: &Utf8Path, config: &GeneratorConfig) -> Result<Vec<String>> {
    let suffix = format!(".{}", config.archive_extension);
    let mut archives = Vec::new();

    for entry in fs::read_dir(dists_dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            warn!("skipping non-UTF-8 entry in {dists_dir}");
            continue;
        };
        if name.starts_with(&config.archive_prefix) && name.ends_with(&suffix) {
            archives.push(name);
        }
    }

    if archives.is_empty() {
        return Err(GeneratorError::NoDistributions {
            path: dists_dir.to_owned(),
            prefix: config.archive_prefix.clone(),
            extension: config.archive_extension.clone(),
        });
    }

    archives.sort();
    debug!("selected {} archive(s) in {dists_dir}", archives.len());
    Ok(archives)
}

fn reconcile_archive(
    dists_dir: &Utf8Path,
    archive: &str,
    config: &GeneratorConfig,
    reconciler: &Reconciler<'_>,
    extractor: &dyn ArchiveExtractor,
) -> Result<Distribution> {
    let path = dists_dir.join(archive);
    info!("extracting {path}");

    // Dropped at the end of this call, removing the extracted tree.
    let workdir = tempfile::tempdir()?;
    let entries = extractor
        .extract(path.as_std_path(), workdir.path())
        .map_err(|source| GeneratorError::Extraction {
            archive: path.clone(),
            source,
        })?;

    let binaries = binary_entries(&entries, &config.binary_extension);
    debug!("{archive}: {} binaries", binaries.len());
    Ok(reconciler.reconcile(archive, &binaries))
}
