//! Error handling for homestack
//!
//! This module provides the error types and user-friendly error reporting for
//! the homestack resolver. The error system is designed around two core
//! principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`HomestackError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! The library surface returns [`HomestackError`] everywhere; the CLI converts
//! to [`anyhow::Error`] at the boundary and routes anything that escapes
//! through [`user_friendly_error`] before display.
//!
//! # Error Categories
//!
//! - **Resolution**: [`HomestackError::ServiceNotFound`],
//!   [`HomestackError::VersionNotFound`], [`HomestackError::CircularDependency`]
//! - **Catalog**: [`HomestackError::CatalogNotFound`],
//!   [`HomestackError::CatalogParseError`]
//! - **Configuration**: [`HomestackError::ConfigError`]
//! - **Conversions**: [`std::io::Error`] → [`HomestackError::IoError`],
//!   [`toml::de::Error`] → [`HomestackError::TomlError`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use homestack::core::{ErrorContext, HomestackError};
//!
//! let error = HomestackError::ServiceNotFound {
//!     name: "postgres".to_string(),
//! };
//! let context = ErrorContext::new(error)
//!     .with_suggestion("Check the service name against the catalog")
//!     .with_details("Service names are case-sensitive");
//!
//! // Display with colors on stderr
//! context.display();
//!
//! // Or get as a string for logging
//! let message = format!("{}", context);
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for homestack operations
///
/// Each variant represents a specific failure mode and carries the context a
/// caller needs to react to it (which service, which version, which file).
/// Resolution errors are never retried: the catalog is immutable for the
/// duration of a resolve call, so retrying cannot change the outcome.
#[derive(Error, Debug)]
pub enum HomestackError {
    /// Requested service does not exist in the catalog
    #[error("Service '{name}' not found in catalog")]
    ServiceNotFound {
        /// Name of the service that could not be found
        name: String,
    },

    /// Requested version does not exist for an otherwise-known service
    ///
    /// Also raised when a "latest" request cannot be satisfied because the
    /// service has no versions at all.
    #[error("Version '{version}' not found for service '{service}'")]
    VersionNotFound {
        /// Name of the service for which the version was not found
        service: String,
        /// The version string that could not be found
        version: String,
    },

    /// Circular dependency detected in the service graph
    ///
    /// Raised when a service is reachable from itself through dependency
    /// edges, making an installation order impossible.
    ///
    /// # Fields
    /// - `service`: the service whose re-entry exposed the cycle
    /// - `chain`: the set of services under resolution when the cycle was
    ///   detected (sorted for stable output; not an ordered walk of the cycle)
    #[error("Circular dependency detected while resolving '{service}' (cycle involves: {})", .chain.join(", "))]
    CircularDependency {
        /// The service whose re-entry exposed the cycle
        service: String,
        /// Services that were under resolution at detection time
        chain: Vec<String>,
    },

    /// Catalog file missing from disk
    #[error("Catalog file not found at {path}")]
    CatalogNotFound {
        /// Path that was checked for the catalog file
        path: String,
    },

    /// Catalog file exists but could not be parsed
    #[error("Invalid catalog file syntax in {path}")]
    CatalogParseError {
        /// Path to the catalog file that failed to parse
        path: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Generic error for cases not covered by specific variants
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

impl Clone for HomestackError {
    fn clone(&self) -> Self {
        match self {
            Self::ServiceNotFound {
                name,
            } => Self::ServiceNotFound {
                name: name.clone(),
            },
            Self::VersionNotFound {
                service,
                version,
            } => Self::VersionNotFound {
                service: service.clone(),
                version: version.clone(),
            },
            Self::CircularDependency {
                service,
                chain,
            } => Self::CircularDependency {
                service: service.clone(),
                chain: chain.clone(),
            },
            Self::CatalogNotFound {
                path,
            } => Self::CatalogNotFound {
                path: path.clone(),
            },
            Self::CatalogParseError {
                path,
                reason,
            } => Self::CatalogParseError {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            // Not Clone; preserve the message instead
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// User-friendly error wrapper with optional suggestion and details
///
/// Wraps a [`HomestackError`] with additional context shown to CLI users:
/// an actionable suggestion (green) and explanatory details (yellow).
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: HomestackError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details
    #[must_use]
    pub const fn new(error: HomestackError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// Error message in red, details in yellow, suggestion in green. This is
    /// the primary way homestack presents errors to users in the CLI.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions
///
/// This function is the main entry point for converting arbitrary errors into
/// user-friendly messages for CLI display. It recognizes [`HomestackError`]
/// variants and common wrapped error types and attaches appropriate context.
///
/// # Examples
///
/// ```rust,no_run
/// use homestack::core::{HomestackError, user_friendly_error};
///
/// let error = HomestackError::ServiceNotFound {
///     name: "grafana".to_string(),
/// };
/// let context = user_friendly_error(anyhow::Error::from(error));
/// context.display();
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // A command may have already attached a context (e.g. a "did you mean"
    // suggestion computed against the loaded catalog); keep it intact.
    if let Some(ctx) = error.downcast_ref::<ErrorContext>() {
        return ErrorContext {
            error: ctx.error.clone(),
            suggestion: ctx.suggestion.clone(),
            details: ctx.details.clone(),
        };
    }

    if let Some(hs_error) = error.downcast_ref::<HomestackError>() {
        return create_error_context(hs_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(HomestackError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion(
                    "Check file ownership or run with permissions that can read the catalog and state directory",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(HomestackError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(HomestackError::Other {
            message: format!("TOML parsing error: {toml_error}"),
        })
        .with_suggestion(
            "Check the TOML syntax of the file. Verify quotes, brackets, and table headers",
        );
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(HomestackError::Other {
        message,
    })
}

/// Map each [`HomestackError`] variant to a context with tailored suggestions
fn create_error_context(error: HomestackError) -> ErrorContext {
    match &error {
        HomestackError::ServiceNotFound {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Check the spelling of the service name against the catalog")
            .with_details("Service names are case-sensitive"),

        HomestackError::VersionNotFound {
            service,
            ..
        } => {
            let suggestion = format!(
                "List the versions declared for '{service}' in the catalog, or request 'latest'"
            );
            ErrorContext::new(error.clone()).with_suggestion(suggestion)
        }

        HomestackError::CircularDependency {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Break the cycle by removing one of the dependency declarations")
            .with_details(
                "Services that depend on each other in a cycle have no valid installation order",
            ),

        HomestackError::CatalogNotFound {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Pass --catalog <path> or set the catalog path in ~/.homestack/config.toml"),

        HomestackError::CatalogParseError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error.clone())
                .with_suggestion("Check the TOML syntax of the catalog file")
                .with_details(details)
        }

        HomestackError::ConfigError {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Check ~/.homestack/config.toml for syntax errors or remove it to use defaults"),

        _ => ErrorContext::new(error.clone()),
    }
}
