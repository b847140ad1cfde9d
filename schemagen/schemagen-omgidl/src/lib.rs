//! OMG IDL [`Renderer`] for the schemagen pipeline.
//!
//! Messages become `struct`s and enums become `enum`s inside
//! `module foxglove`, one file per schema. References to other schemas are
//! `#include "foxglove/<Name>.idl"` directives, so enums are rendered as files
//! of their own and [`TIME_IDL`] / [`DURATION_IDL`] ship alongside.

mod generate;

use schemagen_core::{
    Catalog, RenderError, Renderer, SchemaKind, SchemaRef, SupportFile, Target,
};
pub use generate::{DURATION_IDL, TIME_IDL, generate_omgidl};

/// Renders `.idl` files via the [`Renderer`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct OmgIdlRenderer;

impl OmgIdlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for OmgIdlRenderer {
    fn target(&self) -> Target {
        Target::OmgIdl
    }

    fn renders(&self, _kind: SchemaKind) -> bool {
        true
    }

    fn render(&self, catalog: &Catalog, schema: SchemaRef<'_>) -> Result<String, RenderError> {
        generate_omgidl(catalog, schema)
    }

    fn support_files(&self, _catalog: &Catalog) -> Result<Vec<SupportFile>, RenderError> {
        Ok(vec![
            SupportFile::new("Time.idl", TIME_IDL),
            SupportFile::new("Duration.idl", DURATION_IDL),
        ])
    }
}
