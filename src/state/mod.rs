//! Installed-state tracking for resolved services.
//!
//! The resolver only ever asks one question about local state: "does an
//! instance of this service already exist?". That question is answered
//! through the [`InstalledState`] trait so resolution can run against the
//! real on-disk registry, an in-memory set in tests, or whatever registry an
//! embedder maintains.
//!
//! The answer is a snapshot: it is captured once per node at resolution time
//! and recorded on the resulting [`DependencyNode`](crate::resolver::DependencyNode),
//! so a plan stays internally consistent even if services are installed or
//! removed while it is being inspected.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::debug;

/// Read access to the local installation registry.
pub trait InstalledState {
    /// Whether an instance of `name` already exists locally.
    fn has_instance(&self, name: &str) -> bool;
}

/// Directory-backed installation registry.
///
/// The surrounding system materializes one subdirectory per installed
/// service under a state root (holding its env file and runtime artifacts);
/// a service is considered installed when its subdirectory exists.
#[derive(Debug, Clone)]
pub struct InstalledRegistry {
    root: PathBuf,
}

impl InstalledRegistry {
    /// Create a registry over the given state root directory.
    ///
    /// The directory does not have to exist; a missing root simply means
    /// nothing is installed.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// The state root directory this registry reads.
    #[must_use]
    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl InstalledState for InstalledRegistry {
    fn has_instance(&self, name: &str) -> bool {
        let installed = self.root.join(name).is_dir();
        debug!(service = name, installed, "checked installation registry");
        installed
    }
}

/// A set of service names doubles as installed state in tests and examples.
impl InstalledState for HashSet<String> {
    fn has_instance(&self, name: &str) -> bool {
        self.contains(name)
    }
}
