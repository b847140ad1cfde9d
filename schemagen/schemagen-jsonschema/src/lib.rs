//! JSON Schema [`Renderer`] for the schemagen pipeline.
//!
//! Each message becomes one self-contained object schema: nested messages,
//! enums and the time types are inlined rather than referenced, so a file can
//! be used without its siblings.

use schemagen_core::{
    ArrayKind, Catalog, EnumSchema, FieldType, MessageSchema, Primitive, RenderError, Renderer,
    SchemaKind, SchemaRef, Target,
};
use serde_json::{Map, Value, json};

/// Renders `.json` schema files via the [`Renderer`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaRenderer;

impl JsonSchemaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for JsonSchemaRenderer {
    fn target(&self) -> Target {
        Target::JsonSchema
    }

    fn render(&self, catalog: &Catalog, schema: SchemaRef<'_>) -> Result<String, RenderError> {
        let SchemaRef::Message(message) = schema else {
            return Err(RenderError::UnsupportedSchemaKind {
                target: Target::JsonSchema,
                kind: SchemaKind::Enum,
                name: schema.name().to_string(),
            });
        };
        let value = generate_json_schema(catalog, message)?;
        Ok(serde_json::to_string_pretty(&value)? + "\n")
    }
}

/// Build the JSON Schema document for `message`.
///
/// Fails with [`RenderError::Cycle`] if the message (transitively) contains
/// itself, since inlining would not terminate.
pub fn generate_json_schema(
    catalog: &Catalog,
    message: &MessageSchema,
) -> Result<Value, RenderError> {
    let mut stack = Vec::new();
    message_schema(catalog, message, &mut stack)
}

fn message_schema<'a>(
    catalog: &'a Catalog,
    message: &'a MessageSchema,
    stack: &mut Vec<&'a str>,
) -> Result<Value, RenderError> {
    if let Some(start) = stack.iter().position(|name| *name == message.name) {
        let mut path: Vec<String> = stack[start..].iter().map(|s| s.to_string()).collect();
        path.push(message.name.clone());
        return Err(RenderError::Cycle { path });
    }
    stack.push(&message.name);

    let mut properties = Map::new();
    for field in &message.fields {
        let item = match &field.ty {
            FieldType::Primitive(primitive) => primitive_schema(*primitive),
            FieldType::Nested(name) => message_schema(catalog, catalog.message(name)?, stack)?,
            FieldType::Enum(name) => enum_schema(catalog.enum_schema(name)?, &field.description),
        };
        let mut property = match field.array {
            None => item,
            Some(ArrayKind::Variable) => json!({ "type": "array", "items": item }),
            Some(ArrayKind::Fixed(n)) => json!({
                "type": "array",
                "items": item,
                "minItems": n,
                "maxItems": n,
            }),
        };
        // Replaces the nested message's own description, keeping its position.
        if let Value::Object(map) = &mut property {
            map.insert("description".to_string(), field.description.clone().into());
        }
        properties.insert(field.name.clone(), property);
    }

    stack.pop();
    Ok(json!({
        "$comment": format!("Generated from {} by @foxglove/schemas", message.name),
        "title": message.name,
        "description": message.description,
        "type": "object",
        "properties": properties,
    }))
}

fn enum_schema(enum_schema: &EnumSchema, field_description: &str) -> Value {
    let one_of: Vec<Value> = enum_schema
        .values
        .iter()
        .map(|value| {
            let mut entry = Map::new();
            entry.insert("title".to_string(), value.name.clone().into());
            entry.insert("const".to_string(), value.value.into());
            if let Some(description) = &value.description {
                entry.insert("description".to_string(), description.clone().into());
            }
            Value::Object(entry)
        })
        .collect();

    json!({
        "title": format!("{}: {}", enum_schema.name, enum_schema.description),
        "description": field_description,
        "oneOf": one_of,
    })
}

fn primitive_schema(primitive: Primitive) -> Value {
    match primitive {
        Primitive::String => json!({ "type": "string" }),
        Primitive::Boolean => json!({ "type": "boolean" }),
        Primitive::Float64 => json!({ "type": "number" }),
        Primitive::Uint32 => json!({ "type": "integer", "minimum": 0 }),
        Primitive::Bytes => json!({ "type": "string", "contentEncoding": "base64" }),
        Primitive::Time => json!({
            "type": "object",
            "title": "time",
            "properties": {
                "sec": { "type": "integer", "minimum": 0 },
                "nsec": { "type": "integer", "minimum": 0, "maximum": 999_999_999 },
            },
        }),
        Primitive::Duration => json!({
            "type": "object",
            "title": "duration",
            "properties": {
                "sec": { "type": "integer" },
                "nsec": { "type": "integer", "minimum": 0, "maximum": 999_999_999 },
            },
        }),
    }
}
