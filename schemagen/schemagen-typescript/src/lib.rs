//! TypeScript [`Renderer`] for the schemagen pipeline.
//!
//! Messages become `export type` object types and enums become `export enum`s,
//! one module per schema. Cross-schema references are relative imports, so
//! the rendered directory also needs the [`TIME_TS`] / [`DURATION_TS`]
//! modules and an `index.ts` re-exporting every schema
//! (see [`TypeScriptRenderer::support_files`]).

mod generate;
mod options;

use schemagen_core::{
    Catalog, RenderError, Renderer, SchemaKind, SchemaRef, SupportFile, Target,
};
pub use generate::{DURATION_TS, TIME_TS, generate_index, generate_typescript};
pub use options::TypeScriptOptions;

/// Renders `.ts` modules via the [`Renderer`] trait.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptRenderer {
    options: TypeScriptOptions,
}

impl TypeScriptRenderer {
    pub fn new(options: TypeScriptOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TypeScriptOptions {
        &self.options
    }
}

impl Renderer for TypeScriptRenderer {
    fn target(&self) -> Target {
        Target::TypeScript
    }

    fn renders(&self, _kind: SchemaKind) -> bool {
        true
    }

    fn render(&self, catalog: &Catalog, schema: SchemaRef<'_>) -> Result<String, RenderError> {
        generate_typescript(catalog, schema, &self.options)
    }

    fn support_files(&self, catalog: &Catalog) -> Result<Vec<SupportFile>, RenderError> {
        Ok(vec![
            SupportFile::new("Time.ts", TIME_TS),
            SupportFile::new("Duration.ts", DURATION_TS),
            SupportFile::new("index.ts", generate_index(catalog)),
        ])
    }
}
