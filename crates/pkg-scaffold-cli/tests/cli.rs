//! End-to-end tests for the `pkg-scaffold` binary.

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GENERATED: &[&str] = &[
    "src/auto-generated.ts",
    "README.md",
    ".gitignore",
    ".npmignore",
    ".prettierignore",
    "LICENSE",
    "package.json",
    "tsconfig.json",
    "webpack.config.ts",
];

/// Copy the os-widgets fixture into a fresh temporary project.
fn fixture_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in ["package.json", "template.json"] {
        std::fs::copy(
            Path::new("tests/fixtures/os-widgets").join(file),
            dir.path().join(file),
        )
        .unwrap();
    }
    dir
}

fn pkg_scaffold() -> Command {
    let mut cmd = cargo_bin_cmd!("pkg-scaffold");
    cmd.env("SOURCE_DATE_EPOCH", "1700000000");
    cmd
}

fn snapshot(dir: &Path) -> Vec<Vec<u8>> {
    GENERATED
        .iter()
        .map(|f| std::fs::read(dir.join(f)).unwrap())
        .collect()
}

#[test]
fn test_generate_writes_scaffolding() {
    let project = fixture_project();

    pkg_scaffold()
        .arg("generate")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("@youwol/os-widgets@0.2.0-wip"));

    for file in GENERATED {
        assert!(project.path().join(file).is_file(), "missing {file}");
        assert!(
            project.path().join(".template").join(file).is_file(),
            "missing .template/{file}"
        );
    }

    let setup = std::fs::read_to_string(project.path().join("src/auto-generated.ts")).unwrap();
    assert!(setup.contains("assetId:'QHlvdXdvbC9vcy13aWRnZXRz'"));
    assert!(setup.contains("\"root\": \"@youwol/os-core_APIv01\""));
    assert!(setup.contains("\"webpm-package-info\": {"));

    let license = std::fs::read_to_string(project.path().join("LICENSE")).unwrap();
    assert!(license.contains("Copyright (c) 2023 greinisch@youwol.com"));
}

#[test]
fn test_regenerated_manifest_keeps_metadata() {
    let project = fixture_project();
    pkg_scaffold()
        .arg("generate")
        .arg(project.path())
        .assert()
        .success();

    let pkg: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(project.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(pkg["name"], "@youwol/os-widgets");
    assert_eq!(pkg["version"], "0.2.0-wip");
    assert_eq!(pkg["description"], "");
    assert_eq!(pkg["author"], "greinisch@youwol.com");
    assert_eq!(pkg["dependencies"]["marked"], "^4.2.3");
}

#[test]
fn test_generate_twice_is_byte_identical() {
    let project = fixture_project();

    pkg_scaffold()
        .arg("generate")
        .arg(project.path())
        .assert()
        .success();
    let first = snapshot(project.path());

    pkg_scaffold()
        .arg("generate")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged: 9"));
    assert_eq!(snapshot(project.path()), first);
}

#[test]
fn test_missing_manifest_writes_nothing() {
    let project = fixture_project();
    std::fs::remove_file(project.path().join("package.json")).unwrap();

    pkg_scaffold()
        .arg("generate")
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("package manifest not found"));

    assert!(!project.path().join(".template").exists());
    for file in GENERATED {
        assert!(!project.path().join(file).exists(), "unexpected {file}");
    }
}

#[test]
fn test_undeclared_dependency_fails() {
    let project = fixture_project();
    let spec_path = project.path().join("template.json");
    let spec = std::fs::read_to_string(&spec_path)
        .unwrap()
        .replace("\"@youwol/fv-input\"\n", "\"lodash\"\n");
    std::fs::write(&spec_path, spec).unwrap();

    pkg_scaffold()
        .arg("generate")
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'lodash'"));
    assert!(!project.path().join(".template").exists());
}

#[test]
fn test_no_copy_only_writes_template_dir() {
    let project = fixture_project();

    pkg_scaffold()
        .args(["generate", "--no-copy"])
        .arg(project.path())
        .assert()
        .success();

    assert!(project.path().join(".template/webpack.config.ts").is_file());
    assert!(!project.path().join("webpack.config.ts").exists());
}

#[test]
fn test_template_override() {
    let project = fixture_project();
    std::fs::rename(
        project.path().join("template.json"),
        project.path().join("bundles.json"),
    )
    .unwrap();

    pkg_scaffold()
        .arg("check")
        .arg(project.path())
        .arg("--template")
        .arg(project.path().join("bundles.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_check_json_prints_config() {
    let project = fixture_project();

    let output = pkg_scaffold()
        .args(["check", "--json"])
        .arg(project.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(config["name"], "@youwol/os-widgets");
    assert_eq!(config["type"], "library");
    assert_eq!(config["bundles"]["auxiliaryModules"].as_array().unwrap().len(), 3);
    assert!(!project.path().join(".template").exists());
}

#[test]
fn test_init_creates_starter_once() {
    let dir = tempfile::tempdir().unwrap();

    pkg_scaffold()
        .arg("init")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no package.json"));
    assert!(dir.path().join("template.json").is_file());

    pkg_scaffold()
        .arg("init")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
