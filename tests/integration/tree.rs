//! Integration tests for the `homestack tree` command.

use predicates::prelude::*;

use crate::common::{CHAIN_CATALOG, DIAMOND_CATALOG, TestStack};

#[test]
fn test_tree_renders_nested_hierarchy() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);

    stack
        .homestack()
        .args(["tree", "webapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("webapp 1.0.0 (not installed)"))
        .stdout(predicate::str::contains("└── postgres 16.1 (not installed)"))
        .stdout(predicate::str::contains("    └── backup-agent 2.1 (not installed)"));
}

#[test]
fn test_tree_marks_installed_services() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);
    stack.install("postgres");

    stack
        .homestack()
        .args(["tree", "webapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("postgres 16.1 (installed)"));
}

#[test]
fn test_tree_marks_shared_subtrees() {
    let stack = TestStack::new();
    stack.write_catalog(DIAMOND_CATALOG);

    stack
        .homestack()
        .args(["tree", "suite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("├── api 1.0"))
        .stdout(predicate::str::contains("(*)"));
}

#[test]
fn test_tree_of_leaf_service() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);

    stack
        .homestack()
        .args(["tree", "backup-agent"])
        .assert()
        .success()
        .stdout(predicate::str::diff("backup-agent 2.1 (not installed)\n"));
}

#[test]
fn test_tree_unknown_service() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);

    stack
        .homestack()
        .args(["tree", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service 'ghost' not found in catalog"));
}
