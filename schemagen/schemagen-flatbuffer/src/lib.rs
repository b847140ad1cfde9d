//! FlatBuffers [`Renderer`] for the schemagen pipeline.
//!
//! Every message becomes a `table` (and the file's `root_type`) in namespace
//! `foxglove`. Enums owned by the message are emitted as `ubyte` enums in the
//! same file. FlatBuffers has no fixed-length vectors and no nested vectors,
//! so fixed arrays become plain vectors with a `/// length N` note and arrays
//! of `bytes` go through the [`BYTE_VECTOR_FB`] wrapper table.

mod generate;

use schemagen_core::{Catalog, RenderError, Renderer, SchemaRef, SupportFile, Target};
pub use generate::{BYTE_VECTOR_FB, DURATION_FB, TIME_FB, generate_flatbuffer};

/// Renders `.fbs` files via the [`Renderer`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatBufferRenderer;

impl FlatBufferRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for FlatBufferRenderer {
    fn target(&self) -> Target {
        Target::FlatBuffer
    }

    fn render(&self, catalog: &Catalog, schema: SchemaRef<'_>) -> Result<String, RenderError> {
        generate_flatbuffer(catalog, schema)
    }

    fn support_files(&self, _catalog: &Catalog) -> Result<Vec<SupportFile>, RenderError> {
        Ok(vec![
            SupportFile::new("ByteVector.fbs", BYTE_VECTOR_FB),
            SupportFile::new("Time.fbs", TIME_FB),
            SupportFile::new("Duration.fbs", DURATION_FB),
        ])
    }
}
