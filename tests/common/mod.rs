//! Shared test utilities for the integration suite.
//!
//! [`TestStack`] provisions a throwaway catalog file and state directory in
//! a tempdir and hands out `homestack` commands already pointed at them, so
//! every test runs fully isolated from the developer's real configuration.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway catalog + state directory pair.
pub struct TestStack {
    root: TempDir,
}

impl TestStack {
    /// Create an empty stack with no catalog written yet.
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("state")).unwrap();
        Self {
            root,
        }
    }

    /// Write the catalog file this stack's commands will read.
    pub fn write_catalog(&self, content: &str) {
        fs::write(self.catalog_path(), content).unwrap();
    }

    /// Register a service as installed by creating its state subdirectory.
    pub fn install(&self, service: &str) {
        fs::create_dir_all(self.state_dir().join(service)).unwrap();
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.path().join("catalog.toml")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.path().join("state")
    }

    /// A `homestack` command pointed at this stack's catalog and state.
    pub fn homestack(&self) -> Command {
        let mut cmd = Command::cargo_bin("homestack").unwrap();
        cmd.arg("--catalog").arg(self.catalog_path());
        cmd.arg("--state-dir").arg(self.state_dir());
        cmd
    }
}

/// Linear chain: webapp depends on postgres depends on backup-agent.
pub const CHAIN_CATALOG: &str = r#"
[services.backup-agent.versions."2.1"]
image = "example/backup:2.1"

[services.postgres.versions."16.1"]
image = "postgres:16.1"

[[services.postgres.versions."16.1".dependencies]]
service = "backup-agent"

[services.webapp.versions."1.0.0"]
image = "example/webapp:1.0.0"

[[services.webapp.versions."1.0.0".dependencies]]
service = "postgres"
version = "16.1"
"#;

/// Diamond: suite depends on api and worker, which both depend on proxy.
pub const DIAMOND_CATALOG: &str = r#"
[services.proxy.versions."3.0"]
image = "example/proxy:3.0"

[services.api.versions."1.0"]

[[services.api.versions."1.0".dependencies]]
service = "proxy"

[services.worker.versions."1.0"]

[[services.worker.versions."1.0".dependencies]]
service = "proxy"

[services.suite.versions."1.0"]

[[services.suite.versions."1.0".dependencies]]
service = "api"

[[services.suite.versions."1.0".dependencies]]
service = "worker"
"#;

/// Two services depending on each other.
pub const CYCLE_CATALOG: &str = r#"
[services.alpha.versions."1.0"]

[[services.alpha.versions."1.0".dependencies]]
service = "beta"

[services.beta.versions."1.0"]

[[services.beta.versions."1.0".dependencies]]
service = "alpha"
"#;

/// One service published in several versions, including a pre-release.
pub const MULTI_VERSION_CATALOG: &str = r#"
[services.postgres.versions."15"]

[services.postgres.versions."16.1"]

[services.postgres.versions."16.1-rc1"]

[services.postgres.versions."14.9"]
"#;
