//! Protocol Buffers [`Renderer`] for the schemagen pipeline.
//!
//! Each message becomes one proto3 file in package `foxglove`. Enums scoped
//! under the message are nested inside it under their `protobuf_enum_name`;
//! nested messages and time types are imported.
//!
//! Field numbers are assigned in declaration order starting at 1. A field
//! with `protobuf_field_number` keeps that number and does not advance the
//! counter (see [`field_numbers`]).

mod generate;

use schemagen_core::{Catalog, RenderError, Renderer, SchemaRef, Target};
pub use generate::{field_numbers, generate_proto};

/// Renders `.proto` files via the [`Renderer`] trait.
///
/// Enums are not rendered standalone; they live inside their parent message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufRenderer;

impl ProtobufRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for ProtobufRenderer {
    fn target(&self) -> Target {
        Target::Protobuf
    }

    fn render(&self, catalog: &Catalog, schema: SchemaRef<'_>) -> Result<String, RenderError> {
        generate_proto(catalog, schema)
    }
}
