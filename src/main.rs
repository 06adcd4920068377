//! homestack CLI entry point
//!
//! Parses command-line arguments, executes the requested command, and
//! renders any escaping error through the user-friendly error path before
//! exiting non-zero.

use anyhow::Result;
use clap::Parser;
use homestack::cli;
use homestack::core::error::user_friendly_error;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
