//! Integration tests for the `homestack resolve` command.

use predicates::prelude::*;

use crate::common::{CHAIN_CATALOG, DIAMOND_CATALOG, MULTI_VERSION_CATALOG, TestStack};

#[test]
fn test_resolve_orders_dependencies_first() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);

    stack
        .homestack()
        .args(["resolve", "webapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Install plan for webapp (3 services):"))
        .stdout(predicate::str::contains("1. backup-agent 2.1"))
        .stdout(predicate::str::contains("2. postgres 16.1"))
        .stdout(predicate::str::contains("3. webapp 1.0.0"));
}

#[test]
fn test_resolve_shows_container_images() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);

    stack
        .homestack()
        .args(["resolve", "webapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(postgres:16.1)"))
        .stdout(predicate::str::contains("(example/webapp:1.0.0)"));
}

#[test]
fn test_resolve_marks_installed_services() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);
    stack.install("backup-agent");

    stack
        .homestack()
        .args(["resolve", "webapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backup-agent 2.1  (example/backup:2.1)  [installed]"));
}

#[test]
fn test_resolve_missing_excludes_installed() {
    let stack = TestStack::new();
    stack.write_catalog(DIAMOND_CATALOG);
    stack.install("proxy");

    stack
        .homestack()
        .args(["resolve", "suite", "--missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 services"))
        .stdout(predicate::str::contains("proxy").not());
}

#[test]
fn test_resolve_missing_with_everything_installed() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);
    stack.install("backup-agent");
    stack.install("postgres");
    stack.install("webapp");

    stack
        .homestack()
        .args(["resolve", "webapp", "--missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to install for 'webapp'"));
}

#[test]
fn test_resolve_latest_picks_highest_version() {
    let stack = TestStack::new();
    stack.write_catalog(MULTI_VERSION_CATALOG);

    // 16.1 beats 15, 14.9, and the 16.1-rc1 pre-release
    stack
        .homestack()
        .args(["resolve", "postgres"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. postgres 16.1"))
        .stdout(predicate::str::contains("rc1").not());
}

#[test]
fn test_resolve_pinned_version() {
    let stack = TestStack::new();
    stack.write_catalog(MULTI_VERSION_CATALOG);

    stack
        .homestack()
        .args(["resolve", "postgres", "--version", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. postgres 15"));
}

#[test]
fn test_resolve_json_output() {
    let stack = TestStack::new();
    stack.write_catalog(DIAMOND_CATALOG);

    let output = stack.homestack().args(["resolve", "suite", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let order = parsed["install_order"].as_array().unwrap();
    assert_eq!(order.len(), 4);

    // proxy is shared by api and worker but appears exactly once, first
    assert_eq!(order[0]["service"], "proxy");
    assert_eq!(order[3]["service"], "suite");

    let graph = parsed["graph"].as_object().unwrap();
    assert_eq!(graph["suite"].as_array().unwrap().len(), 2);
}

#[test]
fn test_resolve_unknown_service_suggests_similar_name() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);

    stack
        .homestack()
        .args(["resolve", "webap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service 'webap' not found in catalog"))
        .stderr(predicate::str::contains("did you mean 'webapp'?"));
}

#[test]
fn test_resolve_unknown_version() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);

    stack
        .homestack()
        .args(["resolve", "webapp", "--version", "9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Version '9.9' not found for service 'webapp'"));
}

#[test]
fn test_resolve_without_catalog_file() {
    let stack = TestStack::new();

    stack
        .homestack()
        .args(["resolve", "webapp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog file not found"));
}

#[test]
fn test_paths_from_environment_variables() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);
    stack.install("postgres");

    let mut cmd = assert_cmd::Command::cargo_bin("homestack").unwrap();
    cmd.env("HOMESTACK_CATALOG", stack.catalog_path())
        .env("HOMESTACK_STATE_DIR", stack.state_dir())
        .args(["resolve", "postgres", "--version", "16.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("postgres 16.1"))
        .stdout(predicate::str::contains("[installed]"));
}
