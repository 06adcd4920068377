//! Service catalog model and access.
//!
//! The catalog is the full collection of known services and their versioned
//! specs. It is read-only from the resolver's point of view: resolution walks
//! it, never mutates it.
//!
//! # Catalog Format
//!
//! On disk the catalog is a single TOML document (see [`Catalog::load`]):
//!
//! ```toml
//! [services.postgres]
//! description = "PostgreSQL relational database"
//!
//! [services.postgres.versions."16.1"]
//! image = "postgres:16.1"
//!
//! [[services.postgres.versions."16.1".dependencies]]
//! service = "backup-agent"
//! version = "latest"
//! required = false
//!
//! [services.postgres.versions."16.1".dependencies.environment]
//! BACKUP_SOURCE = "postgres"
//! ```
//!
//! # Access
//!
//! Consumers read the catalog through the [`ServiceCatalog`] trait so that
//! tests and embedders can substitute their own backends (an in-memory
//! catalog built with [`Catalog::with_version`], a caching wrapper, a fake
//! that counts lookups). [`Catalog`] itself implements the trait over its
//! parsed contents.
//!
//! # Examples
//!
//! Building a catalog in memory:
//!
//! ```rust
//! use homestack::catalog::{Catalog, DependencySpec, ServiceCatalog, ServiceVersionSpec};
//!
//! let catalog = Catalog::new()
//!     .with_version("redis", "7.2", ServiceVersionSpec::default())
//!     .with_version(
//!         "webapp",
//!         "1.0.0",
//!         ServiceVersionSpec::default().with_dependency(DependencySpec::new("redis")),
//!     );
//!
//! assert!(catalog.service("webapp").is_ok());
//! assert!(catalog.service("mysql").is_err());
//! ```

mod file;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::HomestackError;
use crate::version::LATEST;

/// Maximum allowed Levenshtein distance as a percentage of target length for
/// "did you mean" suggestions on unknown service names.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// A parsed service catalog.
///
/// Maps case-sensitive service names to their [`CatalogService`] entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// All known services, keyed by name.
    #[serde(default)]
    pub services: HashMap<String, CatalogService>,
}

/// One service in the catalog: its description and known versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogService {
    /// Human-readable description, shown in CLI output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// All published versions of this service, keyed by version string.
    #[serde(default)]
    pub versions: HashMap<String, ServiceVersionSpec>,
}

/// The immutable spec of one published service version.
///
/// Beyond its dependency declarations the spec carries installer-facing data
/// (the container image reference) that the resolver passes through untouched.
/// Unknown fields are tolerated so catalogs can grow installer-side metadata
/// without breaking older binaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceVersionSpec {
    /// Container image reference for this version, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Dependencies this version declares on other services.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencySpec>,
}

impl ServiceVersionSpec {
    /// Set the container image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Append a dependency declaration.
    #[must_use]
    pub fn with_dependency(mut self, dependency: DependencySpec) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

/// A dependency declared by one service version on another service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencySpec {
    /// Name of the service this dependency targets.
    pub service: String,

    /// Version constraint: a concrete version string, or `"latest"`.
    #[serde(default = "default_version")]
    pub version: String,

    /// Whether the dependent can function without this dependency.
    ///
    /// Optional dependencies are still resolved into the graph; the installer
    /// decides whether a failure to install one aborts the plan.
    #[serde(default = "default_required")]
    pub required: bool,

    /// Environment overrides to apply to the dependency when it is installed
    /// as a side effect of this dependent.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub environment: HashMap<String, String>,
}

fn default_version() -> String {
    LATEST.to_string()
}

const fn default_required() -> bool {
    true
}

impl DependencySpec {
    /// Create a required dependency on the latest version of `service`.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            version: default_version(),
            required: true,
            environment: HashMap::new(),
        }
    }

    /// Pin the dependency to a concrete version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Mark the dependency as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Add an environment override for the dependency.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }
}

/// Read access to a service catalog.
///
/// Both lookups are read-only and idempotent. Implementations must return
/// [`HomestackError::ServiceNotFound`] for unknown names and
/// [`HomestackError::VersionNotFound`] for unknown versions of known
/// services, so callers can react to the two cases separately.
pub trait ServiceCatalog {
    /// Look up a service by name, exposing all of its known versions.
    fn service(&self, name: &str) -> Result<&CatalogService, HomestackError>;

    /// Look up the spec of one concrete service version.
    fn service_version(
        &self,
        name: &str,
        version: &str,
    ) -> Result<&ServiceVersionSpec, HomestackError>;
}

impl ServiceCatalog for Catalog {
    fn service(&self, name: &str) -> Result<&CatalogService, HomestackError> {
        self.services.get(name).ok_or_else(|| HomestackError::ServiceNotFound {
            name: name.to_string(),
        })
    }

    fn service_version(
        &self,
        name: &str,
        version: &str,
    ) -> Result<&ServiceVersionSpec, HomestackError> {
        let service = self.service(name)?;
        service.versions.get(version).ok_or_else(|| HomestackError::VersionNotFound {
            service: name.to_string(),
            version: version.to_string(),
        })
    }
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a version spec for a service, creating the service on first use.
    ///
    /// Intended for tests and embedders that assemble catalogs in memory
    /// instead of loading them from disk.
    #[must_use]
    pub fn with_version(
        mut self,
        service: impl Into<String>,
        version: impl Into<String>,
        spec: ServiceVersionSpec,
    ) -> Self {
        self.services
            .entry(service.into())
            .or_default()
            .versions
            .insert(version.into(), spec);
        self
    }

    /// Set the description of a service, creating the service on first use.
    #[must_use]
    pub fn with_description(
        mut self,
        service: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.services.entry(service.into()).or_default().description = Some(description.into());
        self
    }
}

/// Find catalog service names similar to `target` using Levenshtein distance.
///
/// Returns up to 3 names within a 50% distance threshold, closest first.
/// Used to build "did you mean" suggestions for unknown-service errors.
#[must_use]
pub fn similar_service_names(target: &str, catalog: &Catalog) -> Vec<String> {
    let mut scored: Vec<_> = catalog
        .services
        .keys()
        .map(|name| (name.clone(), strsim::levenshtein(target, name)))
        .collect();

    // Sort by distance (closest first)
    scored.sort_by_key(|(_, distance)| *distance);

    scored
        .into_iter()
        .filter(|(_, distance)| *distance <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .take(3)
        .map(|(name, _)| name)
        .collect()
}
