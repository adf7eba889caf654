//! CLI argument definitions for the BOM generator.
//!
//! Kept apart from the entrypoint so that parsing can be tested without
//! touching the filesystem.

use crate::manifest::ManifestStyle;
use crate::pipeline::RunOptions;
use camino::Utf8PathBuf;
use clap::Parser;
use directories_next::BaseDirs;
use log::LevelFilter;

/// Default location of the built distribution archives.
pub const DEFAULT_DISTS_DIR: &str = "tomee/apache-tomee/target";

/// Default output directory for the generated BOMs.
pub const DEFAULT_OUTPUT_DIR: &str = "boms";

/// Generate TomEE BOMs from distribution archives.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bomgen")]
#[command(version, about)]
#[command(long_about = concat!(
    "Generate one BOM per TomEE server distribution.\n\n",
    "Every jar packaged in each apache-tomee-*.zip archive is mapped back to ",
    "its Maven coordinate, using a table of known renames first and the ",
    "layout of the local Maven repository second. If any jar cannot be ",
    "mapped, no BOM is written and every unmapped jar is reported.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Generate BOMs from a fresh build:\n",
    "    $ bomgen\n\n",
    "  Check that every jar maps without writing anything:\n",
    "    $ bomgen --dry-run\n\n",
    "  Emit dependencyManagement entries instead of exclusion-pinned BOMs:\n",
    "    $ bomgen --style managed --output target/managed",
))]
pub struct Cli {
    /// Directory holding the distribution archives.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DISTS_DIR)]
    pub dists: Utf8PathBuf,

    /// Local Maven repository [default: ~/.m2/repository].
    #[arg(short, long, value_name = "DIR")]
    pub repository: Option<Utf8PathBuf>,

    /// Directory the BOMs are written under.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: Utf8PathBuf,

    /// POM template to use instead of the built-in one.
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<Utf8PathBuf>,

    /// Configuration file (bomgen.toml).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Dependency rendering style.
    #[arg(long, value_enum, default_value_t)]
    pub style: ManifestStyle,

    /// Reconcile and verify without writing any BOM.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by `-v` and `-q`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bomgen_generator::cli::Cli;
    /// use clap::Parser;
    /// use log::LevelFilter;
    ///
    /// let cli = Cli::parse_from(["bomgen", "-vv"]);
    /// assert_eq!(cli.log_level(), LevelFilter::Debug);
    /// ```
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Translate the parsed arguments into pipeline options.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            dists_dir: self.dists.clone(),
            repository: self
                .repository
                .clone()
                .unwrap_or_else(default_repository_dir),
            output_dir: self.output.clone(),
            template: self.template.clone(),
            style: self.style,
            dry_run: self.dry_run,
        }
    }
}

/// `~/.m2/repository`, or a relative `.m2/repository` when the home
/// directory cannot be determined.
#[must_use]
pub fn default_repository_dir() -> Utf8PathBuf {
    let relative = Utf8PathBuf::from(".m2").join("repository");
    BaseDirs::new()
        .and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.home_dir().to_path_buf()).ok())
        .map_or(relative.clone(), |home| home.join(&relative))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
