//! Topological ordering of a resolved dependency graph.
//!
//! Converts the adjacency map produced by discovery into a linear install
//! order in which every dependency precedes every dependent. The sort is
//! deliberately independent of the discovery traversal: it re-validates
//! acyclicity on its own, so a graph handed in from any source (including
//! tests that bypass the builder) is checked again before being linearized.
//!
//! Entry points are iterated in sorted name order and edge lists in catalog
//! declaration order, which makes the full output order reproducible for a
//! fixed catalog snapshot rather than only the relative-order invariant.

use std::collections::{HashMap, HashSet};

use super::{DependencyNode, cycle_error};
use crate::core::HomestackError;

/// Linearize `graph` so that dependencies come before dependents.
///
/// Every key of `nodes` appears in the output exactly once, including
/// services reachable only as someone else's dependency.
///
/// # Errors
///
/// [`HomestackError::CircularDependency`] if the graph contains a cycle.
pub fn sort(
    graph: &HashMap<String, Vec<String>>,
    nodes: &HashMap<String, DependencyNode>,
) -> Result<Vec<DependencyNode>, HomestackError> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut visiting: HashSet<String> = HashSet::new();
    let mut order: Vec<DependencyNode> = Vec::with_capacity(nodes.len());

    let mut entry_points: Vec<&String> = nodes.keys().collect();
    entry_points.sort_unstable();

    for name in entry_points {
        if !visited.contains(name.as_str()) {
            visit(name, graph, nodes, &mut visited, &mut visiting, &mut order)?;
        }
    }

    Ok(order)
}

/// Post-order DFS: dependencies are appended before the service itself.
fn visit(
    name: &str,
    graph: &HashMap<String, Vec<String>>,
    nodes: &HashMap<String, DependencyNode>,
    visited: &mut HashSet<String>,
    visiting: &mut HashSet<String>,
    order: &mut Vec<DependencyNode>,
) -> Result<(), HomestackError> {
    if visiting.contains(name) {
        return Err(cycle_error(name, visiting));
    }
    if visited.contains(name) {
        return Ok(());
    }

    visiting.insert(name.to_string());

    if let Some(dependencies) = graph.get(name) {
        for dependency in dependencies {
            visit(dependency, graph, nodes, visited, visiting, order)?;
        }
    }

    visiting.remove(name);
    visited.insert(name.to_string());

    if let Some(node) = nodes.get(name) {
        order.push(node.clone());
    }

    Ok(())
}
