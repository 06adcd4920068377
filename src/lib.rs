//! homestack - dependency resolution for self-hosted service stacks
//!
//! Homestack computes installation plans over a catalog of versioned service
//! definitions. Given a single `(service, version)` request it determines
//! which concrete version satisfies an unpinned request, expands the full
//! transitive closure of required and optional dependencies, rejects cyclic
//! graphs, and produces a deterministic installation order in which every
//! dependency precedes its dependents.
//!
//! The crate is consumed two ways: as a library (the [`resolver`] module is
//! the entry point) and through the `homestack` binary, which wraps the
//! resolver in a small read-only CLI.
//!
//! # Architecture Overview
//!
//! Resolution is a pure, synchronous computation. All I/O sits behind two
//! injected collaborator traits, so the algorithmic core can be tested
//! against in-memory fakes and embedders can bring their own backends:
//!
//! - [`catalog::ServiceCatalog`] answers "what does version X of service Y
//!   declare?" - implemented by the TOML-file-backed [`catalog::Catalog`]
//! - [`state::InstalledState`] answers "does a local instance of Y exist?" -
//!   implemented by the directory-backed [`state::InstalledRegistry`]
//!
//! # Core Modules
//!
//! - [`resolver`] - Graph discovery, cycle detection, topological ordering,
//!   and the [`Resolver`](resolver::Resolver) facade
//! - [`catalog`] - Catalog data model, access trait, and TOML loading
//! - [`version`] - Ordering for loose (not-necessarily-semver) version strings
//! - [`state`] - Installed-state tracking
//! - [`config`] - Global configuration (`~/.homestack/config.toml`)
//! - [`cli`] - Command-line interface (`resolve`, `tree`, `validate`)
//! - [`core`] - Error types and user-facing error presentation
//!
//! # Example
//!
//! ```rust
//! use homestack::catalog::{Catalog, DependencySpec, ServiceVersionSpec};
//! use homestack::resolver::Resolver;
//! use std::collections::HashSet;
//!
//! let catalog = Catalog::new()
//!     .with_version("postgres", "16.1", ServiceVersionSpec::default())
//!     .with_version("redis", "7.2", ServiceVersionSpec::default())
//!     .with_version(
//!         "nextcloud",
//!         "28.0",
//!         ServiceVersionSpec::default()
//!             .with_dependency(DependencySpec::new("postgres"))
//!             .with_dependency(DependencySpec::new("redis")),
//!     );
//!
//! let installed: HashSet<String> = ["redis".to_string()].into_iter().collect();
//! let resolver = Resolver::new(catalog, installed);
//!
//! let result = resolver.resolve("nextcloud", "latest").unwrap();
//! assert_eq!(result.install_order.last().unwrap().service, "nextcloud");
//!
//! // redis is already installed, so only postgres and nextcloud remain
//! let missing: Vec<_> =
//!     result.missing_dependencies().iter().map(|n| n.service.clone()).collect();
//! assert_eq!(missing, ["postgres", "nextcloud"]);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod resolver;
pub mod state;
pub mod version;
