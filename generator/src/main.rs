//! BOM generator CLI entrypoint.
//!
//! Reconciles every TomEE distribution archive against the local Maven
//! repository and writes one BOM per distribution.

use bomgen::GeneratorConfig;
use bomgen_generator::cli::Cli;
use bomgen_generator::error::Result;
use bomgen_generator::extraction::ZipExtractor;
use bomgen_generator::output::{format_human, format_json};
use bomgen_generator::pipeline;
use clap::Parser;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let config = GeneratorConfig::load(cli.config.as_deref())?;
    let report = pipeline::run(&cli.run_options(), &config, &ZipExtractor)?;

    if cli.json {
        write_line(stdout, format_json(&report));
    } else if !cli.quiet {
        write_line(stdout, format_human(&report));
    }
    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(stderr, err);
            1
        }
    }
}

fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort output; ignore write failures.
    }
}
