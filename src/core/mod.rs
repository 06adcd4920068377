//! Core types and error handling for homestack
//!
//! This module hosts the crate-wide error types and their user-facing
//! presentation layer. Everything else in the crate returns
//! [`HomestackError`]; the CLI converts to [`anyhow::Error`] at its boundary
//! and renders through [`user_friendly_error`].

pub mod error;

pub use error::{ErrorContext, HomestackError, user_friendly_error};
