//! Display the dependency tree of a service.
//!
//! Renders the resolved dependency graph as a hierarchy with box-drawing
//! characters, similar to `cargo tree`:
//!
//! ```text
//! nextcloud 28.0 (not installed)
//! ├── postgres 16.1 (installed)
//! │   └── backup-agent 2.0 (not installed, optional)
//! └── redis 7.2 (not installed)
//! ```
//!
//! Dependencies shared by several services are expanded once and marked
//! with `(*)` on later occurrences.

use anyhow::Result;
use clap::Args;

use super::common::{self, EffectivePaths};
use crate::version::LATEST;

/// Command to display a dependency tree.
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Service whose dependency tree to display
    service: String,

    /// Version to resolve (defaults to the highest known version)
    #[arg(long, default_value = LATEST)]
    version: String,
}

impl TreeCommand {
    pub fn execute(self, paths: &EffectivePaths) -> Result<()> {
        let resolver = common::load_resolver(paths)?;
        let result = common::resolve_with_hints(&resolver, &self.service, &self.version)?;

        print!("{}", result.dependency_tree(&self.service));
        Ok(())
    }
}
