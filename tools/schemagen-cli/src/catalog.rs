use std::{fs, path::Path};

use anyhow::{Context, Result};
use schemagen::{catalog::foxglove_catalog, core::Catalog};
use tracing::debug;

/// Load the catalog at `path`, or the bundled Foxglove catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            Catalog::from_json(&text)
                .with_context(|| format!("invalid catalog {}", path.display()))?
        }
        None => foxglove_catalog().context("bundled catalog is invalid")?,
    };
    debug!(
        messages = catalog.messages().count(),
        enums = catalog.enums().count(),
        "loaded catalog"
    );
    Ok(catalog)
}
