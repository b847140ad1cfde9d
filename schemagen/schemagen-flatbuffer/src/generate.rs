use std::collections::BTreeSet;

use schemagen_core::{
    Catalog, DefaultValue, EnumSchema, Field, FieldType, GENERATED_BY, MessageSchema, Primitive,
    RenderError, SchemaRef, description_lines, join_sections, nested_enums,
};

/// Wrapper table for vectors of byte vectors, which FlatBuffers cannot nest directly.
pub const BYTE_VECTOR_FB: &str = "namespace foxglove;

/// Used for nesting byte vectors
table ByteVector {
  data:[uint8];
}
root_type ByteVector;
";

pub const TIME_FB: &str = "namespace foxglove;

struct Time {
  /// Represents seconds of UTC time since Unix epoch 1970-01-01T00:00:00Z
  sec:uint32;
  /// Nano-second fractions from 0 to 999,999,999 inclusive
  nsec:uint32;
}
";

pub const DURATION_FB: &str = "namespace foxglove;

struct Duration {
  /// Signed seconds of the span of time. Must be from -315,576,000,000 to +315,576,000,000 inclusive.
  sec:int32;
  /// if sec === 0 : -999,999,999 <= nsec <= +999,999,999
  /// otherwise sign of sec must match sign of nsec or be 0 and abs(nsec) <= 999,999,999
  nsec:int32;
}
";

/// Render one schema as a `.fbs` file.
pub fn generate_flatbuffer(
    catalog: &Catalog,
    schema: SchemaRef<'_>,
) -> Result<String, RenderError> {
    let mut includes = BTreeSet::new();
    let definition = match schema {
        SchemaRef::Enum(enum_schema) => enum_definition(enum_schema)?,
        SchemaRef::Message(message) => table_definition(catalog, message, &mut includes)?,
    };

    let includes = includes
        .iter()
        .map(|name| format!("include \"{name}.fbs\";"))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(join_sections([
        format!("// {GENERATED_BY}"),
        includes,
        "namespace foxglove;".to_string(),
        definition,
    ]))
}

fn enum_definition(enum_schema: &EnumSchema) -> Result<String, RenderError> {
    let mut values = Vec::with_capacity(enum_schema.values.len());
    for value in &enum_schema.values {
        if value.value > u8::MAX.into() {
            return Err(RenderError::EnumValueOutOfRange {
                name: format!("{}.{}", enum_schema.name, value.name),
                value: value.value,
            });
        }
        values.push(match &value.description {
            Some(description) => format!("/// {description}\n  {} = {},", value.name, value.value),
            None => format!("{} = {},", value.name, value.value),
        });
    }

    // `///` so the comments survive into compiled schemas.
    Ok(format!(
        "/// {}\nenum {} : ubyte {{\n  {}\n}}\n",
        enum_schema.description,
        enum_schema.name,
        values.join("\n\n  ")
    ))
}

fn table_definition(
    catalog: &Catalog,
    message: &MessageSchema,
    includes: &mut BTreeSet<String>,
) -> Result<String, RenderError> {
    let enums = nested_enums(catalog, message)
        .into_iter()
        .map(enum_definition)
        .collect::<Result<Vec<_>, _>>()?;

    let mut fields = Vec::with_capacity(message.fields.len());
    for field in &message.fields {
        let ty = field_type(catalog, message, field, includes)?;
        let ty = match field.array {
            Some(_) => format!("[{ty}]"),
            None => ty,
        };

        let mut text = String::new();
        for line in description_lines(&field.description) {
            text.push_str(format!("  /// {line}").trim_end());
            text.push('\n');
        }
        // No inline comments in FlatBuffers, and vectors outside structs have no length.
        if let Some(len) = field.array.and_then(|a| a.fixed_len()) {
            text.push_str(&format!("  /// length {len}\n"));
        }
        text.push_str(&format!("  {}:{ty}", field.name.to_lowercase()));
        if let Some(default) = default_value(catalog, message, field)? {
            text.push_str(&format!(" = {default}"));
        }
        text.push(';');
        fields.push(text);
    }

    Ok(format!(
        "{}/// {}\ntable {} {{\n{}\n}}\n\nroot_type {};",
        enums.join("\n\n"),
        message.description,
        message.name,
        fields.join("\n\n"),
        message.name
    ))
}

fn field_type(
    catalog: &Catalog,
    message: &MessageSchema,
    field: &Field,
    includes: &mut BTreeSet<String>,
) -> Result<String, RenderError> {
    Ok(match &field.ty {
        FieldType::Enum(name) => {
            let enum_schema = catalog.enum_schema(name)?;
            if enum_schema.parent_schema == message.name {
                enum_schema.name.clone()
            } else {
                includes.insert(enum_schema.parent_schema.clone());
                format!("foxglove.{}", enum_schema.name)
            }
        }
        FieldType::Nested(name) => {
            let nested = catalog.message(name)?;
            includes.insert(nested.name.clone());
            format!("foxglove.{}", nested.name)
        }
        FieldType::Primitive(Primitive::Time) => {
            includes.insert("Time".to_string());
            "Time".to_string()
        }
        FieldType::Primitive(Primitive::Duration) => {
            includes.insert("Duration".to_string());
            "Duration".to_string()
        }
        FieldType::Primitive(Primitive::Bytes) if field.array.is_some() => {
            includes.insert("ByteVector".to_string());
            "ByteVector".to_string()
        }
        FieldType::Primitive(Primitive::Bytes) => "[uint8]".to_string(),
        FieldType::Primitive(Primitive::Uint32) => "uint32".to_string(),
        FieldType::Primitive(Primitive::String) => "string".to_string(),
        FieldType::Primitive(Primitive::Boolean) => "bool".to_string(),
        FieldType::Primitive(Primitive::Float64) => "double".to_string(),
    })
}

/// Only non-array scalar primitives and enums may carry a default.
fn default_value(
    catalog: &Catalog,
    message: &MessageSchema,
    field: &Field,
) -> Result<Option<String>, RenderError> {
    let Some(default) = &field.default else {
        return Ok(None);
    };
    let non_scalar = || RenderError::NonScalarDefault {
        schema: message.name.clone(),
        field: field.name.clone(),
    };
    let invalid = |detail: String| RenderError::InvalidDefault {
        schema: message.name.clone(),
        field: field.name.clone(),
        detail,
    };
    if field.array.is_some() {
        return Err(non_scalar());
    }

    let text = match (&field.ty, default) {
        (FieldType::Nested(_), _) => return Err(non_scalar()),
        (FieldType::Primitive(p), _) if !p.is_scalar() => return Err(non_scalar()),
        (FieldType::Enum(name), DefaultValue::String(value)) => {
            let enum_schema = catalog.enum_schema(name)?;
            if enum_schema.value(value).is_none() {
                return Err(invalid(format!("'{value}' is not a value of enum {name}")));
            }
            value.clone()
        }
        (FieldType::Primitive(Primitive::String), DefaultValue::String(value)) => {
            format!("\"{value}\"")
        }
        (FieldType::Primitive(Primitive::Boolean), DefaultValue::Boolean(value)) => {
            value.to_string()
        }
        (FieldType::Primitive(Primitive::Float64), DefaultValue::Number(value)) => {
            if value.fract() == 0.0 {
                format!("{value}.0")
            } else {
                value.to_string()
            }
        }
        (FieldType::Primitive(Primitive::Uint32), DefaultValue::Number(value)) => {
            if value.fract() != 0.0 || *value < 0.0 || *value > f64::from(u32::MAX) {
                return Err(invalid(format!("{value} is not a uint32")));
            }
            value.to_string()
        }
        (FieldType::Enum(_), other) => {
            return Err(invalid(format!("expected an enum value name, got a {}", other.kind())));
        }
        (FieldType::Primitive(p), other) => {
            return Err(invalid(format!("expected a {p}, got a {}", other.kind())));
        }
    };
    Ok(Some(text))
}
