//! Compute the ordered installation plan for a service.
//!
//! The plan lists every service in the dependency closure, dependencies
//! first, so an installer (or a human) can walk it front to back. Services
//! that already have a local instance are marked; `--missing` narrows the
//! listing to what still needs installing.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;

use super::common::{self, EffectivePaths};
use crate::catalog::{Catalog, ServiceCatalog};
use crate::resolver::{DependencyNode, Resolver};
use crate::state::InstalledRegistry;
use crate::version::LATEST;

/// How the plan is printed.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable numbered steps
    #[default]
    Plain,
    /// The full resolution result as JSON
    Json,
}

/// Command to compute an installation plan.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Service to resolve
    service: String,

    /// Version to resolve (defaults to the highest known version)
    #[arg(long, default_value = LATEST)]
    version: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Only list services that still need to be installed
    #[arg(long)]
    missing: bool,
}

impl ResolveCommand {
    pub fn execute(self, paths: &EffectivePaths) -> Result<()> {
        let resolver = common::load_resolver(paths)?;
        let result = common::resolve_with_hints(&resolver, &self.service, &self.version)?;

        match self.format {
            OutputFormat::Json => {
                if self.missing {
                    println!("{}", serde_json::to_string_pretty(&result.missing_dependencies())?);
                } else {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
            }
            OutputFormat::Plain => {
                let steps: Vec<&DependencyNode> = if self.missing {
                    result.missing_dependencies()
                } else {
                    result.install_order.iter().collect()
                };
                print_plan(&resolver, &self.service, &steps);
            }
        }

        Ok(())
    }
}

fn print_plan(
    resolver: &Resolver<Catalog, InstalledRegistry>,
    service: &str,
    steps: &[&DependencyNode],
) {
    if steps.is_empty() {
        println!("Nothing to install for '{service}'");
        return;
    }

    println!("Install plan for {} ({} services):", service.bold(), steps.len());
    for (index, node) in steps.iter().enumerate() {
        let mut line = format!("  {}. {} {}", index + 1, node.service.bold(), node.version);

        if let Ok(spec) = resolver.catalog().service_version(&node.service, &node.version)
            && let Some(image) = &spec.image
        {
            line.push_str(&format!("  ({image})"));
        }

        if node.installed {
            line.push_str(&format!("  {}", "[installed]".green()));
        }
        if !node.required {
            line.push_str(&format!("  {}", "[optional]".yellow()));
        }

        println!("{line}");
    }
}
