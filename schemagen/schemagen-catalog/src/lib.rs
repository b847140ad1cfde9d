//! Schema catalogs shipped with `schemagen`.
//!
//! - [`foxglove_catalog`]: the Foxglove visualization message schemas.
//! - [`example_catalog`]: a small catalog exercising every primitive, array
//!   shape, enum and nesting form once. Used as a rendering fixture.

use schemagen_core::{Catalog, CatalogError};

/// Catalog document describing the Foxglove message schemas.
pub const FOXGLOVE_CATALOG_JSON: &str = include_str!("../catalog/foxglove.json");

/// Catalog document with `ExampleMessage`, `NestedMessage` and `ExampleEnum`.
pub const EXAMPLE_CATALOG_JSON: &str = include_str!("../catalog/example.json");

/// Parse and validate the bundled Foxglove catalog.
pub fn foxglove_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(FOXGLOVE_CATALOG_JSON)
}

/// Parse and validate the example catalog.
pub fn example_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(EXAMPLE_CATALOG_JSON)
}
