//! Shared helpers for CLI commands.

use anyhow::Result;
use std::path::PathBuf;

use crate::catalog::{self, Catalog};
use crate::config::GlobalConfig;
use crate::core::{ErrorContext, HomestackError};
use crate::resolver::{ResolutionResult, Resolver};
use crate::state::InstalledRegistry;

/// Catalog file used when neither flag, environment, nor config names one.
pub(crate) const DEFAULT_CATALOG: &str = "catalog.toml";

/// The catalog/state locations a command actually operates on.
pub(crate) struct EffectivePaths {
    pub catalog: PathBuf,
    pub state_dir: PathBuf,
}

impl EffectivePaths {
    /// Combine CLI flags, the global config file, and built-in defaults.
    ///
    /// The config file is only consulted when a flag leaves a gap, so fully
    /// flag-driven invocations (tests, scripts) never touch the home
    /// directory.
    pub(crate) fn resolve(
        catalog_flag: Option<PathBuf>,
        state_flag: Option<PathBuf>,
    ) -> Result<Self> {
        let config = match (&catalog_flag, &state_flag) {
            (Some(_), Some(_)) => GlobalConfig::default(),
            _ => GlobalConfig::load()?,
        };

        let catalog = catalog_flag
            .or_else(|| config.catalog_path())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

        let state_dir = match state_flag.or_else(|| config.state_dir_path()) {
            Some(dir) => dir,
            None => default_state_dir()?,
        };

        Ok(Self {
            catalog,
            state_dir,
        })
    }
}

fn default_state_dir() -> Result<PathBuf> {
    dirs::home_dir().map(|home| home.join(".homestack").join("services")).ok_or_else(|| {
        anyhow::Error::new(HomestackError::ConfigError {
            message: "cannot determine a state directory; pass --state-dir".to_string(),
        })
    })
}

/// Load the catalog and installation registry into a ready resolver.
pub(crate) fn load_resolver(
    paths: &EffectivePaths,
) -> Result<Resolver<Catalog, InstalledRegistry>> {
    let catalog = Catalog::load(&paths.catalog)?;
    let registry = InstalledRegistry::new(paths.state_dir.clone());
    Ok(Resolver::new(catalog, registry))
}

/// Resolve a service, upgrading unknown-service errors with a "did you
/// mean" hint computed against the loaded catalog.
pub(crate) fn resolve_with_hints(
    resolver: &Resolver<Catalog, InstalledRegistry>,
    service: &str,
    version: &str,
) -> Result<ResolutionResult> {
    resolver.resolve(service, version).map_err(|err| {
        if let HomestackError::ServiceNotFound {
            name,
        } = &err
        {
            let similar = catalog::similar_service_names(name, resolver.catalog());
            if !similar.is_empty() {
                let quoted: Vec<String> = similar.iter().map(|s| format!("'{s}'")).collect();
                return anyhow::Error::new(
                    ErrorContext::new(err.clone())
                        .with_suggestion(format!("did you mean {}?", quoted.join(" or "))),
                );
            }
        }
        anyhow::Error::new(err)
    })
}
