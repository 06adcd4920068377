//! Depth-first dependency discovery and cycle detection.
//!
//! [`GraphBuilder`] walks the catalog from a root service, expanding declared
//! dependencies into the node set and adjacency map that the rest of the
//! resolver consumes. Cycles are detected during the walk itself: a service
//! re-entered while still on the traversal stack has no valid installation
//! order, and the build fails immediately rather than producing a partial
//! graph.
//!
//! Discovery is memoized per call. The first path to reach a service fixes
//! its resolved version; every later path only lowers the recorded depth and
//! merges the reaching edge's `required` flag and environment overrides.
//! A consequence worth knowing: if two dependents pin *different* versions
//! of the same service, the version discovered first wins silently. The
//! catalog format makes that rare (dependencies usually say `"latest"`), and
//! collapsing to one instance per service is what the installer expects.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{DependencyNode, cycle_error, resolve_version};
use crate::catalog::ServiceCatalog;
use crate::core::HomestackError;
use crate::state::InstalledState;

/// Builds the dependency graph for one resolve call.
///
/// All traversal state is local to the builder, which is consumed by
/// [`GraphBuilder::build`]; independent builds never share state.
pub struct GraphBuilder<'a, C, S> {
    catalog: &'a C,
    state: &'a S,
    nodes: HashMap<String, DependencyNode>,
    graph: HashMap<String, Vec<String>>,
    visiting: HashSet<String>,
}

impl<'a, C: ServiceCatalog, S: InstalledState> GraphBuilder<'a, C, S> {
    /// Create a builder over the injected collaborators.
    pub fn new(catalog: &'a C, state: &'a S) -> Self {
        Self {
            catalog,
            state,
            nodes: HashMap::new(),
            graph: HashMap::new(),
            visiting: HashSet::new(),
        }
    }

    /// Expand the full dependency closure of `(service, version)`.
    ///
    /// Returns the adjacency map (direct edges only; services without
    /// dependencies have no entry) and one node per distinct service.
    ///
    /// # Errors
    ///
    /// [`HomestackError::CircularDependency`] on a cycle; catalog lookup
    /// errors are propagated verbatim. Any error aborts the whole build.
    #[allow(clippy::type_complexity)]
    pub fn build(
        mut self,
        service: &str,
        version: &str,
    ) -> Result<(HashMap<String, Vec<String>>, HashMap<String, DependencyNode>), HomestackError>
    {
        self.visit(service, version, 0)?;
        Ok((self.graph, self.nodes))
    }

    fn visit(
        &mut self,
        service: &str,
        constraint: &str,
        depth: usize,
    ) -> Result<(), HomestackError> {
        if self.visiting.contains(service) {
            return Err(cycle_error(service, &self.visiting));
        }

        // Already fully processed via another path: keep the first-seen
        // version, just record the shorter discovery distance.
        if let Some(node) = self.nodes.get_mut(service) {
            if depth < node.depth {
                node.depth = depth;
            }
            return Ok(());
        }

        self.visiting.insert(service.to_string());

        let catalog = self.catalog;
        let version = resolve_version(catalog, service, constraint)?;
        let spec = catalog.service_version(service, &version)?;

        debug!(service, version = %version, depth, "discovered service");

        self.nodes.insert(
            service.to_string(),
            DependencyNode {
                service: service.to_string(),
                version: version.clone(),
                required: true,
                environment: HashMap::new(),
                installed: self.state.has_instance(service),
                depth,
            },
        );

        let mut edges = Vec::with_capacity(spec.dependencies.len());
        for dependency in &spec.dependencies {
            self.visit(&dependency.service, &dependency.version, depth + 1)?;

            // The edge that named the dependency decides its required flag
            // and contributes environment overrides; later edges win on
            // collisions.
            if let Some(dep_node) = self.nodes.get_mut(dependency.service.as_str()) {
                dep_node.required = dependency.required;
                for (key, value) in &dependency.environment {
                    dep_node.environment.insert(key.clone(), value.clone());
                }
            }

            edges.push(dependency.service.clone());
        }

        if !edges.is_empty() {
            self.graph.insert(service.to_string(), edges);
        }

        self.visiting.remove(service);
        Ok(())
    }
}
