//! Behaviour-driven tests for `bomgen.toml` loading.

use std::cell::RefCell;
use std::fs;

use bomgen::{ConfigError, GeneratorConfig};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

struct ConfigFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn config_file() -> RefCell<Option<ConfigFile>> {
    RefCell::new(None)
}

#[fixture]
fn load_result() -> RefCell<Option<Result<GeneratorConfig, ConfigError>>> {
    RefCell::new(None)
}

fn prepare(contents: Option<&str>) -> ConfigFile {
    let dir = TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("bomgen.toml")).expect("utf-8 path");
    if let Some(contents) = contents {
        fs::write(&path, contents).expect("write configuration");
    }
    ConfigFile { _dir: dir, path }
}

fn loaded(load_result: &RefCell<Option<Result<GeneratorConfig, ConfigError>>>) -> GeneratorConfig {
    match load_result.borrow().as_ref() {
        Some(Ok(config)) => config.clone(),
        Some(Err(error)) => panic!("expected configuration loading to succeed: {error}"),
        None => panic!("configuration should be loaded"),
    }
}

#[given("no configuration file is given")]
fn no_file(config_file: &RefCell<Option<ConfigFile>>) {
    config_file.borrow_mut().take();
}

#[given("a configuration file setting the release line to \"{line}\"")]
fn release_line_override(config_file: &RefCell<Option<ConfigFile>>, line: String) {
    let contents = format!("release_line = \"{line}\"\n");
    config_file.borrow_mut().replace(prepare(Some(&contents)));
}

#[given("a configuration file containing \"{contents}\"")]
fn raw_contents(config_file: &RefCell<Option<ConfigFile>>, contents: String) {
    config_file.borrow_mut().replace(prepare(Some(&contents)));
}

#[given("a configuration file that does not exist")]
fn missing_file(config_file: &RefCell<Option<ConfigFile>>) {
    config_file.borrow_mut().replace(prepare(None));
}

#[when("the configuration is loaded")]
fn load(
    config_file: &RefCell<Option<ConfigFile>>,
    load_result: &RefCell<Option<Result<GeneratorConfig, ConfigError>>>,
) {
    let file = config_file.borrow();
    let outcome = GeneratorConfig::load(file.as_ref().map(|file| file.path.as_path()));
    load_result.borrow_mut().replace(outcome);
}

#[then("the release line is \"{expected}\"")]
fn assert_release_line(
    load_result: &RefCell<Option<Result<GeneratorConfig, ConfigError>>>,
    expected: String,
) {
    assert_eq!(loaded(load_result).release_line, expected);
}

#[then("\"{name}\" is excluded")]
fn assert_excluded(
    load_result: &RefCell<Option<Result<GeneratorConfig, ConfigError>>>,
    name: String,
) {
    assert!(loaded(load_result).is_excluded(&name));
}

#[then("a configuration error mentioning \"{snippet}\" is reported")]
fn assert_error_with_snippet(
    load_result: &RefCell<Option<Result<GeneratorConfig, ConfigError>>>,
    snippet: String,
) {
    let borrow = load_result.borrow();
    match borrow.as_ref() {
        Some(Err(error)) => {
            let message = error.to_string();
            assert!(
                message.contains(snippet.as_str()),
                "expected error '{message}' to mention '{snippet}'",
            );
        }
        Some(Ok(config)) => {
            panic!("expected configuration loading to fail but succeeded with {config:?}")
        }
        None => panic!("configuration should be loaded"),
    }
}

#[scenario("tests/features/config_loading.feature", index = 0)]
fn scenario_defaults(
    config_file: RefCell<Option<ConfigFile>>,
    load_result: RefCell<Option<Result<GeneratorConfig, ConfigError>>>,
) {
    let _ = (config_file, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 1)]
fn scenario_override(
    config_file: RefCell<Option<ConfigFile>>,
    load_result: RefCell<Option<Result<GeneratorConfig, ConfigError>>>,
) {
    let _ = (config_file, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 2)]
fn scenario_unknown_keys(
    config_file: RefCell<Option<ConfigFile>>,
    load_result: RefCell<Option<Result<GeneratorConfig, ConfigError>>>,
) {
    let _ = (config_file, load_result);
}

#[scenario("tests/features/config_loading.feature", index = 3)]
fn scenario_missing_file(
    config_file: RefCell<Option<ConfigFile>>,
    load_result: RefCell<Option<Result<GeneratorConfig, ConfigError>>>,
) {
    let _ = (config_file, load_result);
}
