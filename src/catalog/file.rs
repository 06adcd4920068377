//! Loading a catalog from a TOML file on disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::Catalog;
use crate::core::HomestackError;

impl Catalog {
    /// Load a catalog from a TOML file.
    ///
    /// How the file got there (bundled, synced from a registry, hand-written)
    /// is not this crate's concern; the content is parsed structurally and
    /// taken at face value.
    ///
    /// # Errors
    ///
    /// Returns [`HomestackError::CatalogNotFound`] if `path` does not exist
    /// and [`HomestackError::CatalogParseError`] if the file is not valid
    /// TOML for the catalog schema.
    pub fn load(path: &Path) -> Result<Self, HomestackError> {
        if !path.exists() {
            return Err(HomestackError::CatalogNotFound {
                path: path.display().to_string(),
            });
        }

        let raw = fs::read_to_string(path)?;
        let catalog: Self =
            toml::from_str(&raw).map_err(|e| HomestackError::CatalogParseError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            path = %path.display(),
            services = catalog.services.len(),
            "loaded service catalog"
        );

        Ok(catalog)
    }
}
