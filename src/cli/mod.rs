//! Command-line interface for homestack
//!
//! Each command is implemented in its own module with its argument struct
//! and execution logic. All commands are read-only over the catalog and the
//! installation registry: they compute and display plans, they never install
//! anything themselves.
//!
//! # Available Commands
//!
//! - `resolve` - Compute the ordered installation plan for a service
//! - `tree` - Display the dependency tree of a service
//! - `validate` - Check that a service's dependency graph is installable
//!
//! # Usage
//!
//! ```bash
//! # Full install plan for the highest known version
//! homestack resolve nextcloud
//!
//! # Pin a version and show only what still needs installing
//! homestack resolve nextcloud --version 28.0 --missing
//!
//! # Machine-readable plan
//! homestack resolve nextcloud --format json
//!
//! # Visualize the dependency graph
//! homestack tree nextcloud
//!
//! # Dry-run: does this service have a valid installation order?
//! homestack validate nextcloud
//! ```
//!
//! # Catalog and State Location
//!
//! Every command needs a catalog file and a state directory. Both resolve
//! with the same precedence: CLI flag, then environment variable
//! (`HOMESTACK_CATALOG` / `HOMESTACK_STATE_DIR`), then
//! `~/.homestack/config.toml`, then the built-in default (`./catalog.toml`
//! and `~/.homestack/services`).

mod common;
mod resolve;
mod tree;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Top-level CLI argument parser.
#[derive(Parser, Debug)]
#[command(
    name = "homestack",
    version,
    about = "Dependency resolution and install planning for self-hosted service stacks"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to the service catalog file
    #[arg(long, global = true, env = "HOMESTACK_CATALOG", value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Directory where installed services are registered
    #[arg(long, global = true, env = "HOMESTACK_STATE_DIR", value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Enable verbose output (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the ordered installation plan for a service
    Resolve(resolve::ResolveCommand),

    /// Display the dependency tree of a service
    Tree(tree::TreeCommand),

    /// Check that a service's dependency graph is installable
    Validate(validate::ValidateCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes logging from the verbosity flags, resolves the effective
    /// catalog/state paths, and dispatches to the subcommand.
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        let paths = common::EffectivePaths::resolve(self.catalog, self.state_dir)?;

        match self.command {
            Commands::Resolve(cmd) => cmd.execute(&paths),
            Commands::Tree(cmd) => cmd.execute(&paths),
            Commands::Validate(cmd) => cmd.execute(&paths),
        }
    }

    /// Set up the tracing subscriber on stderr.
    ///
    /// An explicit `RUST_LOG` wins over the verbosity flags.
    fn init_logging(&self) {
        let default_level = if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        };

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .ok();
    }
}
