//! Integration tests for the `homestack validate` command.

use predicates::prelude::*;

use crate::common::{CHAIN_CATALOG, CYCLE_CATALOG, TestStack};

#[test]
fn test_validate_accepts_resolvable_service() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);

    stack
        .homestack()
        .args(["validate", "webapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "'webapp' resolves to an installable plan (3 services, 3 still missing)",
        ));
}

#[test]
fn test_validate_counts_installed_services() {
    let stack = TestStack::new();
    stack.write_catalog(CHAIN_CATALOG);
    stack.install("backup-agent");
    stack.install("postgres");

    stack
        .homestack()
        .args(["validate", "webapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 services, 1 still missing)"));
}

#[test]
fn test_validate_rejects_cyclic_catalog() {
    let stack = TestStack::new();
    stack.write_catalog(CYCLE_CATALOG);

    stack
        .homestack()
        .args(["validate", "alpha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circular dependency detected while resolving"))
        .stderr(predicate::str::contains("alpha"))
        .stderr(predicate::str::contains("beta"));
}

#[test]
fn test_validate_reports_missing_transitive_dependency() {
    let stack = TestStack::new();
    stack.write_catalog(
        r#"
[services.app.versions."1.0"]

[[services.app.versions."1.0".dependencies]]
service = "ghost"
"#,
    );

    stack
        .homestack()
        .args(["validate", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service 'ghost' not found in catalog"));
}

#[test]
fn test_validate_broken_catalog_syntax() {
    let stack = TestStack::new();
    stack.write_catalog("[services.broken\n");

    stack
        .homestack()
        .args(["validate", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid catalog file syntax"));
}
