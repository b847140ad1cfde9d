//! Error types for catalog construction and rendering.

use crate::{schema::SchemaKind, target::Target};

/// Error returned while loading or validating a [`Catalog`](crate::Catalog).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON or does not match the document shape.
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("message schema '{name}' is defined more than once")]
    DuplicateMessage { name: String },

    #[error("enum schema '{name}' is defined more than once")]
    DuplicateEnum { name: String },

    /// Every schema maps to one output file, so names are shared across kinds.
    #[error("name '{name}' is used by both a message and an enum")]
    NameClash { name: String },

    /// An enum names a parent message that is not in the catalog.
    #[error("enum '{enum_name}' refers to unknown parent schema '{parent}'")]
    UnknownParent { enum_name: String, parent: String },

    /// A field references a message or enum that is not in the catalog.
    #[error("field '{schema}.{field}' references unknown {kind} '{name}'")]
    UnknownReference {
        schema: String,
        field: String,
        kind: SchemaKind,
        name: String,
    },

    /// Schema, enum and enum value descriptions must fit on one line.
    #[error("description of '{name}' must be a single line")]
    MultiLineDescription { name: String },

    /// The description contains text that would close a generated block comment.
    #[error("description of '{name}' must not contain '*/'")]
    InvalidDescription { name: String },

    #[error("enum '{name}' has no values")]
    EmptyEnum { name: String },

    #[error("enum '{enum_name}' defines value '{value}' more than once")]
    DuplicateEnumValue { enum_name: String, value: String },

    #[error("message '{schema}' defines field '{field}' more than once")]
    DuplicateField { schema: String, field: String },

    #[error("field '{schema}.{field}' has fixed array length 0")]
    InvalidArrayLength { schema: String, field: String },

    /// The nested-message graph is not acyclic.
    #[error("schema cycle detected: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },
}

/// Error returned by [`Renderer`](crate::Renderer) implementations.
///
/// Renderers never recover from these; the render call in progress fails and
/// the message names the offending schema, field or value.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unknown message schema '{name}'")]
    UnknownMessage { name: String },

    #[error("unknown enum schema '{name}'")]
    UnknownEnum { name: String },

    /// A `ros_equivalent` names a definition the external library does not know.
    #[error("unknown external definition '{name}'")]
    UnknownExternal { name: String },

    #[error("schema cycle detected: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },

    #[error("Flatbuffers does not support non-scalar default values ({schema}.{field})")]
    NonScalarDefault { schema: String, field: String },

    /// The default value's kind does not match the field type.
    #[error("invalid default value for '{schema}.{field}': {detail}")]
    InvalidDefault {
        schema: String,
        field: String,
        detail: String,
    },

    #[error(
        "Enum value {enum_name}.{value} at index {index} has value {actual}; index and value must match for OMG IDL"
    )]
    NonSequentialEnum {
        enum_name: String,
        value: String,
        index: usize,
        actual: u32,
    },

    #[error("Array of bytes is not supported in ROS msg ({schema}.{field})")]
    ByteArray { schema: String, field: String },

    #[error(
        "Enum value {value} occurs in more than one enum referenced by {schema}, this is not supported in ROS msg files"
    )]
    EnumConstantCollision { value: String, schema: String },

    #[error("Only uint8 enums are currently supported; value {name}={value} is out of range")]
    EnumValueOutOfRange { name: String, value: u32 },

    #[error("protobuf field number {number} is used more than once in '{schema}'")]
    DuplicateFieldNumber { schema: String, number: u32 },

    #[error("target '{target}' cannot render {kind} schema '{name}'")]
    UnsupportedSchemaKind {
        target: Target,
        kind: SchemaKind,
        name: String,
    },

    #[error("Constant {name} has no valueText")]
    MissingConstantValue { name: String },

    #[error(transparent)]
    Format(#[from] std::fmt::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
