//! Human-readable rendering of a resolved dependency tree.
//!
//! Builds the indented box-drawing view shown by `homestack tree`. Rendering
//! walks the direct-edge graph of a [`ResolutionResult`]; it never influences
//! ordering decisions. Subtrees already rendered once are marked with `(*)`
//! instead of being expanded again, mirroring how shared dependencies appear
//! in `cargo tree`.

use std::collections::HashSet;

use super::ResolutionResult;

/// Render the tree below `root`.
pub(crate) fn render(result: &ResolutionResult, root: &str) -> String {
    let mut out = String::new();
    let mut seen: HashSet<String> = HashSet::new();

    out.push_str(&label(result, root));
    out.push('\n');
    seen.insert(root.to_string());
    render_children(result, root, "", &mut seen, &mut out);

    out
}

fn render_children(
    result: &ResolutionResult,
    service: &str,
    prefix: &str,
    seen: &mut HashSet<String>,
    out: &mut String,
) {
    let Some(children) = result.graph.get(service) else {
        return;
    };

    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        let connector = if last {
            "└── "
        } else {
            "├── "
        };

        let first_visit = seen.insert(child.clone());
        let marker = if first_visit { "" } else { " (*)" };
        out.push_str(&format!("{prefix}{connector}{}{marker}\n", label(result, child)));

        if first_visit {
            let child_prefix = if last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            render_children(result, child, &child_prefix, seen, out);
        }
    }
}

/// One line describing a service: name, version, and status markers.
fn label(result: &ResolutionResult, service: &str) -> String {
    match result.nodes.get(service) {
        Some(node) => {
            let mut markers = vec![if node.installed { "installed" } else { "not installed" }];
            if !node.required {
                markers.push("optional");
            }
            format!("{} {} ({})", node.service, node.version, markers.join(", "))
        }
        // A name the closure does not know; render it bare rather than panic
        None => service.to_string(),
    }
}
