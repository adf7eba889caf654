//! Behaviour-driven tests for whole generator runs.
//!
//! Each scenario builds real zip archives and a local repository tree in a
//! temporary directory, then runs the pipeline with the zip extractor.

use bomgen::GeneratorConfig;
use bomgen_generator::error::GeneratorError;
use bomgen_generator::extraction::ZipExtractor;
use bomgen_generator::manifest::ManifestStyle;
use bomgen_generator::pipeline::{RunOptions, RunReport, run};
use camino::{Utf8Path, Utf8PathBuf};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

struct BatchWorld {
    _temp_dir: TempDir,
    options: RunOptions,
    outcome: Option<Result<RunReport, GeneratorError>>,
}

#[fixture]
fn world() -> BatchWorld {
    let temp_dir = TempDir::new().expect("temp dir");
    let base = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("utf-8 path");
    let dists_dir = base.join("target");
    fs::create_dir_all(&dists_dir).expect("mkdir target");

    BatchWorld {
        _temp_dir: temp_dir,
        options: RunOptions {
            dists_dir,
            repository: base.join("m2"),
            output_dir: base.join("boms"),
            template: None,
            style: ManifestStyle::Bom,
            dry_run: false,
        },
        outcome: None,
    }
}

fn write_distribution(path: &Utf8Path, stem: &str, jars: &[&str]) {
    let file = File::create(path).expect("create archive");
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file(format!("{stem}/RELEASE-NOTES"), SimpleFileOptions::default())
        .expect("start notes");
    writer.write_all(b"notes").expect("write notes");
    for jar in jars {
        writer
            .start_file(format!("{stem}/lib/{jar}"), SimpleFileOptions::default())
            .expect("start jar");
        writer.write_all(b"PK").expect("write jar");
    }
    writer.finish().expect("finish archive");
}

fn pom(world: &BatchWorld, short: &str) -> String {
    let path = world.options.output_dir.join(short).join("pom.xml");
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {path}: {err}"))
}

fn failure(world: &BatchWorld) -> &GeneratorError {
    match world.outcome.as_ref().expect("generator ran") {
        Ok(_) => panic!("expected the run to fail"),
        Err(err) => err,
    }
}

#[given("an empty repository")]
fn given_empty_repository(world: &mut BatchWorld) {
    fs::create_dir_all(&world.options.repository).expect("mkdir repository");
}

#[given("the repository holds \"{path}\"")]
fn given_repository_file(world: &mut BatchWorld, path: String) {
    let file = world.options.repository.join(path);
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).expect("mkdir artifact");
    }
    fs::write(&file, b"PK").expect("write artifact");
}

#[given("a distribution \"{archive}\" containing \"{jars}\"")]
fn given_distribution(world: &mut BatchWorld, archive: String, jars: String) {
    let stem = archive.trim_end_matches(".zip");
    let jars: Vec<&str> = jars.split(',').collect();
    write_distribution(&world.options.dists_dir.join(&archive), stem, &jars);
}

#[given("the run is a dry run")]
fn given_dry_run(world: &mut BatchWorld) {
    world.options.dry_run = true;
}

#[when("the generator runs")]
fn when_generator_runs(world: &mut BatchWorld) {
    world.outcome = Some(run(
        &world.options,
        &GeneratorConfig::default(),
        &ZipExtractor,
    ));
}

#[then("the run succeeds")]
fn then_run_succeeds(world: &mut BatchWorld) {
    let outcome = world.outcome.as_ref().expect("generator ran");
    assert!(outcome.is_ok(), "expected success: {outcome:?}");
}

#[then("the run fails")]
fn then_run_fails(world: &mut BatchWorld) {
    assert!(matches!(
        failure(world),
        GeneratorError::IncompleteMapping(_)
    ));
}

#[then("the BOM \"{short}\" lists \"{artifact}\"")]
fn then_bom_lists(world: &mut BatchWorld, short: String, artifact: String) {
    let pom = pom(world, &short);
    assert!(
        pom.contains(&format!("<artifactId>{artifact}</artifactId>")),
        "{short} BOM should list {artifact}"
    );
}

#[then("the BOM \"{short}\" is named \"{display}\"")]
fn then_bom_named(world: &mut BatchWorld, short: String, display: String) {
    let pom = pom(world, &short);
    assert!(pom.contains(&format!("<artifactId>{short}</artifactId>")));
    assert!(pom.contains(&display), "{short} BOM should be named {display}");
}

#[then("the error lists \"{jar}\" under \"{archive}\"")]
fn then_error_lists(world: &mut BatchWorld, jar: String, archive: String) {
    let GeneratorError::IncompleteMapping(mapping) = failure(world) else {
        panic!("expected an incomplete mapping");
    };
    let entry = mapping
        .incomplete()
        .iter()
        .find(|entry| entry.archive == archive)
        .unwrap_or_else(|| panic!("{archive} should be reported"));
    assert!(entry.unresolved.contains(&jar));

    let report = mapping.to_string();
    assert!(report.contains(&format!("  {archive}\n")));
    assert!(report.contains(&format!("    - {jar}\n")));
}

#[then("no BOM is written")]
fn then_no_bom(world: &mut BatchWorld) {
    assert!(!world.options.output_dir.exists());
}

#[scenario(
    path = "tests/features/batch.feature",
    name = "Every distribution gets its own BOM"
)]
fn scenario_every_distribution(world: BatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/batch.feature",
    name = "One unmapped jar blocks every BOM"
)]
fn scenario_fail_fast(world: BatchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/batch.feature", name = "A dry run writes nothing")]
fn scenario_dry_run(world: BatchWorld) {
    let _ = world;
}
