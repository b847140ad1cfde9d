use std::collections::BTreeSet;

use schemagen_core::{
    ArrayKind, Catalog, EnumSchema, FieldType, GENERATED_BY, MessageSchema, Primitive,
    RenderError, SchemaRef, description_lines, join_sections,
};

pub const TIME_IDL: &str = "module foxglove {

struct Time {
  uint32 sec;
  uint32 nsec;
};

};
";

pub const DURATION_IDL: &str = "module foxglove {

struct Duration {
  int32 sec;
  uint32 nsec;
};

};
";

/// Render one schema as an `.idl` file in module `foxglove`.
pub fn generate_omgidl(catalog: &Catalog, schema: SchemaRef<'_>) -> Result<String, RenderError> {
    let mut includes = BTreeSet::new();
    let definition = match schema {
        SchemaRef::Enum(enum_schema) => enum_definition(enum_schema)?,
        SchemaRef::Message(message) => struct_definition(catalog, message, &mut includes)?,
    };

    let includes = includes
        .iter()
        .map(|name| format!("#include \"foxglove/{name}.idl\""))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(join_sections([
        format!("// {GENERATED_BY}"),
        includes,
        format!("module foxglove {{\n\n{definition}\n\n}};"),
    ]))
}

/// IDL enumerators are implicitly numbered, so values must be `0..n` in order.
fn enum_definition(enum_schema: &EnumSchema) -> Result<String, RenderError> {
    let mut values = Vec::with_capacity(enum_schema.values.len());
    for (index, value) in enum_schema.values.iter().enumerate() {
        if usize::try_from(value.value).ok() != Some(index) {
            return Err(RenderError::NonSequentialEnum {
                enum_name: enum_schema.name.clone(),
                value: value.name.clone(),
                index,
                actual: value.value,
            });
        }
        values.push(match &value.description {
            Some(description) => format!(
                "// {description}\n  // Value: {}\n  {}",
                value.value, value.name
            ),
            None => format!("// Value: {}\n  {}", value.value, value.name),
        });
    }

    Ok(format!(
        "// {}\nenum {} {{\n  {}\n}};",
        enum_schema.description,
        enum_schema.name,
        values.join(",\n\n  ")
    ))
}

fn struct_definition(
    catalog: &Catalog,
    message: &MessageSchema,
    includes: &mut BTreeSet<String>,
) -> Result<String, RenderError> {
    let mut fields = Vec::with_capacity(message.fields.len());
    for field in &message.fields {
        let ty = match &field.ty {
            FieldType::Enum(name) => {
                let enum_schema = catalog.enum_schema(name)?;
                includes.insert(enum_schema.name.clone());
                enum_schema.name.clone()
            }
            FieldType::Nested(name) => {
                let nested = catalog.message(name)?;
                includes.insert(nested.name.clone());
                nested.name.clone()
            }
            FieldType::Primitive(Primitive::Time) => {
                includes.insert("Time".to_string());
                "Time".to_string()
            }
            FieldType::Primitive(Primitive::Duration) => {
                includes.insert("Duration".to_string());
                "Duration".to_string()
            }
            FieldType::Primitive(Primitive::Bytes) => "sequence<uint8>".to_string(),
            FieldType::Primitive(Primitive::Boolean) => "boolean".to_string(),
            FieldType::Primitive(Primitive::Float64) => "double".to_string(),
            FieldType::Primitive(Primitive::Uint32) => "uint32".to_string(),
            FieldType::Primitive(Primitive::String) => "string".to_string(),
        };

        let mut text = String::new();
        for line in description_lines(&field.description) {
            text.push_str(format!("  // {line}").trim_end());
            text.push('\n');
        }
        let declaration = match field.array {
            None => format!("  {ty} {};", field.name),
            Some(ArrayKind::Variable) => format!("  sequence<{ty}> {};", field.name),
            Some(ArrayKind::Fixed(n)) => format!("  {ty} {}[{n}];", field.name),
        };
        text.push_str(&declaration);
        fields.push(text);
    }

    Ok(format!(
        "// {}\nstruct {} {{\n{}\n}};",
        message.description,
        message.name,
        fields.join("\n\n")
    ))
}
