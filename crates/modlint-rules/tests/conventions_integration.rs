//! Integration tests: the four built-in rules end-to-end via the Checker.
//!
//! Synthesizes `components/modules/<category>/<module>` trees in a temp
//! directory and verifies the full discovery → rules → result pipeline.

use modlint_core::{Checker, CheckerError, Config, DiscoveryError, Severity};
use modlint_rules::all_rules;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DOCUMENTED_HEADER: &str = "/** Initializes the module. */\nint MODULE_init(void);\n\n/** Shuts the module down. */\nint MODULE_deinit(void);\n";
const TAGGED_SOURCE: &str = "#include \"MODULE.h\"\n#include \"event_bus.h\"\n\nDEFINE_COMPONENT_TAG(MODULE);\n\nint MODULE_init(void) { return 0; }\n";

/// Creates a fully conforming module under the fixture tree.
fn write_module(root: &Path, category: &str, name: &str) -> PathBuf {
    let path = root
        .join("components/modules")
        .join(category)
        .join(name);
    fs::create_dir_all(path.join("src")).unwrap();
    fs::create_dir_all(path.join("include")).unwrap();

    fs::write(path.join("CMakeLists.txt"), "idf_component_register()\n").unwrap();
    fs::write(path.join("module.json"), "{ \"name\": \"x\" }\n").unwrap();
    fs::write(path.join("README.md"), "# module\n").unwrap();
    fs::write(
        path.join("include").join(format!("{name}.h")),
        DOCUMENTED_HEADER.replace("MODULE", name),
    )
    .unwrap();
    fs::write(
        path.join("src").join(format!("{name}.c")),
        TAGGED_SOURCE.replace("MODULE", name),
    )
    .unwrap();
    path
}

fn run_check(root: &Path) -> Result<modlint_core::CheckResult, CheckerError> {
    run_check_with(root, &Config::default())
}

fn run_check_with(
    root: &Path,
    config: &Config,
) -> Result<modlint_core::CheckResult, CheckerError> {
    let mut builder = Checker::builder().root(root).config(config.clone());
    for rule in all_rules(config).expect("rule set should assemble") {
        builder = builder.rule_box(rule);
    }
    builder.build().expect("checker should build").check()
}

#[test]
fn conforming_tree_is_clean() {
    let tmp = TempDir::new().unwrap();
    write_module(tmp.path(), "sensors", "dht22");
    write_module(tmp.path(), "actuators", "relay");

    let result = run_check(tmp.path()).expect("check should run");
    assert!(
        result.is_clean(),
        "expected clean result, got: {:#?}",
        result.violations
    );
    assert_eq!(result.modules_checked, 2);
}

#[test]
fn zero_modules_is_a_fatal_error_before_any_rule_runs() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("components/modules")).unwrap();

    let err = run_check(tmp.path()).expect_err("empty tree must abort");
    assert!(matches!(
        err,
        CheckerError::Discovery(DiscoveryError::NoModules { .. })
    ));
}

#[test]
fn missing_artifacts_aggregate_into_one_violation_per_module() {
    let tmp = TempDir::new().unwrap();
    write_module(tmp.path(), "sensors", "dht22");
    let path = write_module(tmp.path(), "sensors", "bme280");
    fs::remove_file(path.join("module.json")).unwrap();
    fs::remove_file(path.join("README.md")).unwrap();

    let result = run_check(tmp.path()).expect("check should run");
    let ml001: Vec<_> = result
        .violations
        .iter()
        .filter(|v| v.code == "ML001")
        .collect();
    assert_eq!(ml001.len(), 1, "one aggregated violation for bme280");
    assert!(ml001[0].message.contains("module.json"));
    assert!(ml001[0].message.contains("README.md"));
}

#[test]
fn missing_tag_yields_exactly_one_violation_for_that_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_module(tmp.path(), "sensors", "dht22");
    fs::write(
        path.join("src").join("dht22_extra.c"),
        "#include \"dht22.h\"\nint dht22_extra(void) { return 1; }\n",
    )
    .unwrap();

    let result = run_check(tmp.path()).expect("check should run");
    let ml002: Vec<_> = result
        .violations
        .iter()
        .filter(|v| v.code == "ML002")
        .collect();
    assert_eq!(ml002.len(), 1);
    assert!(ml002[0]
        .location
        .file
        .to_string_lossy()
        .ends_with("dht22_extra.c"));
}

#[test]
fn undocumented_declaration_is_flagged_with_its_line() {
    let tmp = TempDir::new().unwrap();
    let path = write_module(tmp.path(), "sensors", "dht22");
    fs::write(
        path.join("include").join("dht22.h"),
        "/** Documented. */\nint dht22_init(void);\n\nint dht22_read(void);\n",
    )
    .unwrap();

    let result = run_check(tmp.path()).expect("check should run");
    let ml003: Vec<_> = result
        .violations
        .iter()
        .filter(|v| v.code == "ML003")
        .collect();
    assert_eq!(ml003.len(), 1);
    assert_eq!(ml003[0].location.line, Some(4));
    assert!(ml003[0].message.contains("`dht22_read`"));
}

#[test]
fn peer_include_is_forbidden_while_own_and_system_pass() {
    let tmp = TempDir::new().unwrap();
    let path = write_module(tmp.path(), "sensors", "dht22");
    write_module(tmp.path(), "actuators", "relay");
    fs::write(
        path.join("src").join("dht22.c"),
        "#include <stdio.h>\n#include \"dht22_helpers.h\"\n#include \"relay.h\"\n\nDEFINE_COMPONENT_TAG(DHT22);\n",
    )
    .unwrap();

    let result = run_check(tmp.path()).expect("check should run");
    let ml004: Vec<_> = result
        .violations
        .iter()
        .filter(|v| v.code == "ML004")
        .collect();
    assert_eq!(ml004.len(), 1);
    assert_eq!(ml004[0].location.line, Some(3));
    assert!(ml004[0].message.contains("`relay.h`"));
}

#[test]
fn disabled_rule_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let path = write_module(tmp.path(), "sensors", "dht22");
    fs::remove_file(path.join("README.md")).unwrap();

    let toml = r#"
[rules.required-files]
enabled = false
"#;
    let config = Config::parse(toml).expect("config should parse");

    let result = run_check_with(tmp.path(), &config).expect("check should run");
    assert!(result.is_clean());
}

#[test]
fn severity_override_applies_to_rule_findings() {
    let tmp = TempDir::new().unwrap();
    let path = write_module(tmp.path(), "sensors", "dht22");
    fs::remove_file(path.join("README.md")).unwrap();

    let toml = r#"
[rules.required-files]
severity = "warning"
"#;
    let config = Config::parse(toml).expect("config should parse");

    let result = run_check_with(tmp.path(), &config).expect("check should run");
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Warning);
    assert!(!result.is_clean(), "warnings still fail the run");
}

#[test]
fn violations_are_sorted_by_file_and_line() {
    let tmp = TempDir::new().unwrap();
    let path_b = write_module(tmp.path(), "sensors", "bme280");
    let path_a = write_module(tmp.path(), "actuators", "relay");
    fs::remove_file(path_b.join("README.md")).unwrap();
    fs::remove_file(path_a.join("README.md")).unwrap();

    let result = run_check(tmp.path()).expect("check should run");
    let files: Vec<String> = result
        .violations
        .iter()
        .map(|v| v.location.file.to_string_lossy().into_owned())
        .collect();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn duplicate_module_names_abort_the_run() {
    let tmp = TempDir::new().unwrap();
    write_module(tmp.path(), "sensors", "dht22");
    write_module(tmp.path(), "actuators", "dht22");

    let err = run_check(tmp.path()).expect_err("duplicate names must abort");
    assert!(matches!(
        err,
        CheckerError::Discovery(DiscoveryError::DuplicateName { .. })
    ));
}
