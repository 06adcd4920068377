//! Check that a service's dependency graph is installable.
//!
//! A dry run of resolution: the plan is computed and thrown away. Exit code
//! 0 means the service exists, every transitive dependency exists, and the
//! graph has a valid installation order; any resolution error is reported
//! and the process exits non-zero.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{self, EffectivePaths};
use crate::version::LATEST;

/// Command to validate a service's dependency graph.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Service to validate
    service: String,

    /// Version to validate (defaults to the highest known version)
    #[arg(long, default_value = LATEST)]
    version: String,
}

impl ValidateCommand {
    pub fn execute(self, paths: &EffectivePaths) -> Result<()> {
        let resolver = common::load_resolver(paths)?;
        let result = common::resolve_with_hints(&resolver, &self.service, &self.version)?;

        println!(
            "{} '{}' resolves to an installable plan ({} services, {} still missing)",
            "✓".green().bold(),
            self.service,
            result.install_order.len(),
            result.missing_dependencies().len()
        );
        Ok(())
    }
}
