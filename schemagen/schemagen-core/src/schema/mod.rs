//! Target-independent schema intermediate representation.

mod text;
mod types;

pub use text::{GENERATED_BY, description_lines, join_sections};
pub use types::{
    ArrayKind, DefaultValue, EnumSchema, EnumValue, Field, FieldType, MessageSchema, Primitive,
    SchemaKind, SchemaRef,
};
