use std::collections::{BTreeSet, HashSet};

use schemagen_core::{
    Catalog, EnumSchema, FieldType, GENERATED_BY, MessageSchema, Primitive, RenderError,
    SchemaRef, description_lines, join_sections, nested_enums,
};

/// Render one schema as a proto3 file.
pub fn generate_proto(catalog: &Catalog, schema: SchemaRef<'_>) -> Result<String, RenderError> {
    let mut imports = BTreeSet::new();
    let definition = match schema {
        SchemaRef::Message(message) => message_definition(catalog, message, &mut imports)?,
        SchemaRef::Enum(enum_schema) => enum_definition(enum_schema, &enum_schema.name, ""),
    };

    let imports = imports
        .iter()
        .map(|path| format!("import \"{path}.proto\";"))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(join_sections([
        format!("// {GENERATED_BY}"),
        "syntax = \"proto3\";".to_string(),
        imports,
        "package foxglove;".to_string(),
        definition,
    ]))
}

/// Field numbers of `message`, in field order.
///
/// Sequential from 1; a pinned `protobuf_field_number` is used as-is and
/// does not consume a sequential number.
pub fn field_numbers(message: &MessageSchema) -> Result<Vec<u32>, RenderError> {
    let mut next = 1;
    let mut seen = HashSet::new();
    let mut numbers = Vec::with_capacity(message.fields.len());
    for field in &message.fields {
        let number = match field.protobuf_field_number {
            Some(pinned) => pinned,
            None => {
                next += 1;
                next - 1
            }
        };
        if !seen.insert(number) {
            return Err(RenderError::DuplicateFieldNumber {
                schema: message.name.clone(),
                number,
            });
        }
        numbers.push(number);
    }
    Ok(numbers)
}

fn message_definition(
    catalog: &Catalog,
    message: &MessageSchema,
    imports: &mut BTreeSet<String>,
) -> Result<String, RenderError> {
    let enums: Vec<String> = nested_enums(catalog, message)
        .into_iter()
        .map(|e| enum_definition(e, &e.protobuf_enum_name, "  ") + "\n")
        .collect();

    let numbers = field_numbers(message)?;
    let mut fields = Vec::with_capacity(message.fields.len());
    for (field, number) in message.fields.iter().zip(numbers) {
        let mut qualifiers = Vec::new();
        if field.array.is_some() {
            qualifiers.push("repeated".to_string());
        }
        qualifiers.push(field_type(catalog, message, &field.ty, imports)?);

        let mut text = String::new();
        for line in description_lines(&field.description) {
            text.push_str(format!("  // {line}").trim_end());
            text.push('\n');
        }
        text.push_str(&format!("  {} {} = {number};", qualifiers.join(" "), field.name));
        if let Some(len) = field.array.and_then(|a| a.fixed_len()) {
            text.push_str(&format!(" // length {len}"));
        }
        fields.push(text);
    }

    Ok(format!(
        "// {}\nmessage {} {{\n{}{}\n}}",
        message.description,
        message.name,
        enums.join("\n\n"),
        fields.join("\n\n")
    ))
}

fn field_type(
    catalog: &Catalog,
    message: &MessageSchema,
    ty: &FieldType,
    imports: &mut BTreeSet<String>,
) -> Result<String, RenderError> {
    Ok(match ty {
        FieldType::Enum(name) => {
            let enum_schema = catalog.enum_schema(name)?;
            if enum_schema.parent_schema == message.name {
                enum_schema.protobuf_enum_name.clone()
            } else {
                imports.insert(format!("foxglove/{}", enum_schema.parent_schema));
                format!(
                    "foxglove.{}.{}",
                    enum_schema.parent_schema, enum_schema.protobuf_enum_name
                )
            }
        }
        FieldType::Nested(name) => {
            let nested = catalog.message(name)?;
            imports.insert(format!("foxglove/{}", nested.name));
            format!("foxglove.{}", nested.name)
        }
        FieldType::Primitive(Primitive::Time) => {
            imports.insert("google/protobuf/timestamp".to_string());
            "google.protobuf.Timestamp".to_string()
        }
        FieldType::Primitive(Primitive::Duration) => {
            imports.insert("google/protobuf/duration".to_string());
            "google.protobuf.Duration".to_string()
        }
        FieldType::Primitive(Primitive::Uint32) => "fixed32".to_string(),
        FieldType::Primitive(Primitive::Bytes) => "bytes".to_string(),
        FieldType::Primitive(Primitive::String) => "string".to_string(),
        FieldType::Primitive(Primitive::Boolean) => "bool".to_string(),
        FieldType::Primitive(Primitive::Float64) => "double".to_string(),
    })
}

/// `indent` is the indentation of the `enum` keyword itself.
fn enum_definition(enum_schema: &EnumSchema, name: &str, indent: &str) -> String {
    let inner = format!("{indent}  ");
    let mut items = Vec::with_capacity(enum_schema.values.len() + 1);
    if enum_schema.has_aliases() {
        items.push("option allow_alias = true;".to_string());
    }
    for value in &enum_schema.values {
        items.push(match &value.description {
            Some(description) => {
                format!("// {description}\n{inner}{} = {};", value.name, value.value)
            }
            None => format!("{} = {};", value.name, value.value),
        });
    }

    format!(
        "{indent}// {}\n{indent}enum {name} {{\n{inner}{}\n{indent}}}",
        enum_schema.description,
        items.join(&format!("\n\n{inner}"))
    )
}
