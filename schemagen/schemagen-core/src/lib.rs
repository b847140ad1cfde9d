//! Target-agnostic core types and renderer contracts for `schemagen`.
//!
//! This crate provides the schema IR ([`MessageSchema`] / [`EnumSchema`]),
//! the immutable [`Catalog`] they live in, the dependency walk shared by the
//! renderers ([`resolve_dependencies`]) and the [`Renderer`] trait.
//!
//! ```text
//! Catalog ──┬─ resolve_dependencies ─┐
//!           └─ Renderer::render ─────┴─→ String (one file per schema/target)
//! ```

mod catalog;
mod error;
mod renderer;
mod resolve;
mod schema;
mod target;

pub use catalog::Catalog;
pub use error::{CatalogError, RenderError};
pub use renderer::{Renderer, SupportFile};
pub use resolve::{Dependency, ExternalLibrary, nested_enums, resolve_dependencies};
pub use schema::{
    ArrayKind, DefaultValue, EnumSchema, EnumValue, Field, FieldType, GENERATED_BY,
    MessageSchema, Primitive, SchemaKind, SchemaRef, description_lines, join_sections,
};
pub use target::Target;
