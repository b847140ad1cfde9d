//! Generate schema definitions for several target grammars from one [`Catalog`](core::Catalog).
//!
//! [`Generator`] holds one [`Renderer`](core::Renderer) per [`Target`](core::Target)
//! and lays out the rendered text as `<target>/<SchemaName>.<ext>` files.
//! Each target crate sits behind a cargo feature of the same name.

mod error;
mod generator;

pub use error::GeneratorError;
pub use generator::{DOCS_PATH, Generator, GeneratorBuilder, RenderedFile};
pub use schemagen_catalog as catalog;
pub use schemagen_core as core;

#[cfg(feature = "flatbuffer")]
pub use schemagen_flatbuffer as flatbuffer;
#[cfg(feature = "jsonschema")]
pub use schemagen_jsonschema as jsonschema;
#[cfg(feature = "markdown")]
pub use schemagen_markdown as markdown;
#[cfg(feature = "omgidl")]
pub use schemagen_omgidl as omgidl;
#[cfg(feature = "protobuf")]
pub use schemagen_protobuf as protobuf;
#[cfg(feature = "ros")]
pub use schemagen_ros as ros;
#[cfg(feature = "typescript")]
pub use schemagen_typescript as typescript;
