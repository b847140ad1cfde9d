//! Error types for the generator facade.

use schemagen_core::{RenderError, Target};

/// Errors produced by [`Generator`](crate::Generator).
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// No [`Renderer`](schemagen_core::Renderer) is registered for the target.
    #[error("no renderer registered for target '{target}'")]
    NoRenderer { target: Target },

    /// The requested schema is not in the catalog.
    #[error("schema '{name}' not found in catalog")]
    UnknownSchema { name: String },

    /// A renderer failed on one schema.
    #[error("failed to render '{schema}' for target '{target}': {source}")]
    Render {
        target: Target,
        schema: String,
        #[source]
        source: RenderError,
    },

    /// The reference documentation could not be rendered.
    #[error("failed to render documentation: {0}")]
    Docs(#[source] RenderError),
}
