//! Dependency resolution and installation ordering for homestack.
//!
//! This module implements the core resolution algorithm that turns a single
//! `(service, version)` request into a complete, ordered installation plan.
//! Resolution runs in two phases over the same graph:
//!
//! 1. **Discovery** ([`dependency_graph`]): a depth-first traversal from the
//!    requested root service expands declared dependencies into a node set
//!    and an adjacency map, detecting cycles as it goes. Each service's spec
//!    is fetched from the catalog at most once per call.
//! 2. **Ordering** ([`install_order`]): an independent topological sort
//!    linearizes the adjacency map so that every dependency precedes every
//!    dependent. The sort re-validates acyclicity on its own; the two phases
//!    stay separate so each can be tested in isolation.
//!
//! The result of a successful resolve is a [`ResolutionResult`]: the install
//! order, the direct-edge graph, and one [`DependencyNode`] per distinct
//! service in the closure. The result is created fresh on every call, is
//! immutable afterwards, and is never persisted; an external installer
//! consumes it in-process.
//!
//! # Collaborators
//!
//! The resolver performs no I/O of its own. Catalog lookups go through
//! [`ServiceCatalog`] and installed-state checks through [`InstalledState`],
//! both injected at construction time. Every call allocates its own
//! traversal state, so concurrent resolves over shared collaborators are
//! safe as long as the collaborators themselves are.
//!
//! # Examples
//!
//! ```rust
//! use homestack::catalog::{Catalog, DependencySpec, ServiceVersionSpec};
//! use homestack::resolver::Resolver;
//! use std::collections::HashSet;
//!
//! let catalog = Catalog::new()
//!     .with_version("postgres", "16.1", ServiceVersionSpec::default())
//!     .with_version(
//!         "webapp",
//!         "1.0.0",
//!         ServiceVersionSpec::default()
//!             .with_dependency(DependencySpec::new("postgres").with_version("16.1")),
//!     );
//!
//! let installed: HashSet<String> = HashSet::new();
//! let resolver = Resolver::new(catalog, installed);
//! let result = resolver.resolve("webapp", "latest").unwrap();
//!
//! let order: Vec<&str> = result.install_order.iter().map(|n| n.service.as_str()).collect();
//! assert_eq!(order, ["postgres", "webapp"]);
//! ```

pub mod dependency_graph;
pub mod install_order;
mod tree;

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::catalog::ServiceCatalog;
use crate::core::HomestackError;
use crate::state::InstalledState;
use crate::version::{self, VersionComparator};

use dependency_graph::GraphBuilder;

/// One service in a resolved dependency closure.
///
/// Exactly one node exists per distinct service name per resolution, even
/// when the service is reachable over multiple paths. The first successful
/// discovery fixes the `version`; later encounters only lower `depth` and
/// merge `environment`/`required` from the edge that reached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyNode {
    /// Service name.
    pub service: String,

    /// Concrete resolved version.
    pub version: String,

    /// Whether any dependent (or the original request) requires this service.
    ///
    /// Defaults to `true`; updated from the dependency edges that name this
    /// service, last edge wins.
    pub required: bool,

    /// Environment overrides merged from every dependent edge that named
    /// this service. Later edges win on key collisions.
    pub environment: HashMap<String, String>,

    /// Whether an instance already existed when resolution ran.
    pub installed: bool,

    /// Minimum discovery distance from the root (0 = the root itself).
    ///
    /// Informational: surfaced in JSON output, never consulted for ordering.
    pub depth: usize,
}

/// The complete outcome of one resolve call.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResult {
    /// Every service in the closure, dependencies before dependents.
    pub install_order: Vec<DependencyNode>,

    /// Direct dependency edges: service name to the names it depends on.
    /// Services without dependencies have no entry.
    pub graph: HashMap<String, Vec<String>>,

    /// One node per distinct service in the closure, keyed by name.
    pub nodes: HashMap<String, DependencyNode>,
}

impl ResolutionResult {
    /// Services that still need to be installed, in install order.
    ///
    /// Filters the install order down to nodes that are required and not yet
    /// installed. Optional not-yet-installed services are excluded; the
    /// installer treats them as skippable.
    #[must_use]
    pub fn missing_dependencies(&self) -> Vec<&DependencyNode> {
        self.install_order.iter().filter(|node| !node.installed && node.required).collect()
    }

    /// Services in the closure that already have a local instance.
    #[must_use]
    pub fn installed_dependencies(&self) -> Vec<&DependencyNode> {
        self.install_order.iter().filter(|node| node.installed).collect()
    }

    /// Render the dependency tree below `root` as an indented box-drawing
    /// diagram, marking each service installed or not installed.
    ///
    /// Purely cosmetic; ordering decisions never consult it.
    #[must_use]
    pub fn dependency_tree(&self, root: &str) -> String {
        tree::render(self, root)
    }
}

/// The public entry point for dependency resolution.
///
/// Holds read-only collaborators and no other state: a catalog to resolve
/// specs against and an installed-state registry to snapshot. Construct one
/// per catalog/state pairing and call [`Resolver::resolve`] freely.
pub struct Resolver<C, S> {
    catalog: C,
    state: S,
}

impl<C: ServiceCatalog, S: InstalledState> Resolver<C, S> {
    /// Create a resolver over the given catalog and installed-state backend.
    pub const fn new(catalog: C, state: S) -> Self {
        Self {
            catalog,
            state,
        }
    }

    /// The catalog this resolver reads.
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Resolve a service to a complete, ordered installation plan.
    ///
    /// `version` may be a concrete version string, `"latest"`, or empty;
    /// the latter two resolve to the highest version known for the service.
    ///
    /// # Errors
    ///
    /// - [`HomestackError::ServiceNotFound`] / [`HomestackError::VersionNotFound`]
    ///   if the root or any transitive dependency is absent from the catalog
    /// - [`HomestackError::CircularDependency`] if the closure contains a
    ///   cycle; no partial result is ever returned
    pub fn resolve(
        &self,
        service: &str,
        version: &str,
    ) -> Result<ResolutionResult, HomestackError> {
        let version = resolve_version(&self.catalog, service, version)?;
        debug!(service, version = %version, "resolving dependency closure");

        let (graph, nodes) = GraphBuilder::new(&self.catalog, &self.state).build(service, &version)?;
        let install_order = install_order::sort(&graph, &nodes)?;

        debug!(service, services = install_order.len(), "resolution complete");

        Ok(ResolutionResult {
            install_order,
            graph,
            nodes,
        })
    }

    /// Check that a service's dependency closure is resolvable.
    ///
    /// A dry run of [`Resolver::resolve`] that discards the plan.
    pub fn validate(&self, service: &str, version: &str) -> Result<(), HomestackError> {
        self.resolve(service, version).map(|_| ())
    }
}

/// Resolve a version request to a concrete version string.
///
/// Concrete requests pass through untouched; the `"latest"` sentinel (or an
/// empty string) is resolved against the service's known versions. Version
/// keys are scanned in sorted order so the pick is reproducible even when
/// two distinct strings compare equal.
pub(crate) fn resolve_version<C: ServiceCatalog>(
    catalog: &C,
    service: &str,
    requested: &str,
) -> Result<String, HomestackError> {
    if !version::is_latest(requested) {
        return Ok(requested.to_string());
    }

    let known = catalog.service(service)?;

    // A single published version needs no comparison
    if known.versions.len() == 1
        && let Some(only) = known.versions.keys().next()
    {
        return Ok(only.clone());
    }

    let mut candidates: Vec<&str> = known.versions.keys().map(String::as_str).collect();
    candidates.sort_unstable();

    let latest = VersionComparator::latest(candidates).ok_or_else(|| {
        HomestackError::VersionNotFound {
            service: service.to_string(),
            version: version::LATEST.to_string(),
        }
    })?;

    debug!(service, version = latest, "resolved 'latest' to concrete version");
    Ok(latest.to_string())
}

/// Build the cycle error raised when a service re-enters the active
/// traversal. The chain is the set of services under resolution at
/// detection time, sorted for stable output; it is not an ordered walk of
/// the cycle.
pub(crate) fn cycle_error(service: &str, visiting: &HashSet<String>) -> HomestackError {
    let mut chain: Vec<String> = visiting.iter().cloned().collect();
    chain.sort_unstable();
    HomestackError::CircularDependency {
        service: service.to_string(),
        chain,
    }
}
