use std::collections::BTreeSet;

use schemagen_core::{
    Catalog, EnumSchema, Field, FieldType, GENERATED_BY, MessageSchema, Primitive, RenderError,
    SchemaRef, description_lines, join_sections,
};

use crate::options::TypeScriptOptions;

pub const TIME_TS: &str = "export type Time = {
  sec: number;
  nsec: number;
};
";

pub const DURATION_TS: &str = "export type Duration = {
  sec: number;
  nsec: number;
};
";

/// Render one schema as a TypeScript module.
pub fn generate_typescript(
    catalog: &Catalog,
    schema: SchemaRef<'_>,
    options: &TypeScriptOptions,
) -> Result<String, RenderError> {
    let mut imports = BTreeSet::new();
    let definition = match schema {
        SchemaRef::Enum(enum_schema) => enum_definition(enum_schema),
        SchemaRef::Message(message) => message_definition(catalog, message, options, &mut imports)?,
    };

    let header = format!("// {GENERATED_BY}\n// Options: {}", serde_json::to_string(options)?);
    let imports = imports
        .iter()
        .map(|name| format!("import {{ {name} }} from \"./{name}\";"))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(join_sections([header, imports, definition]))
}

/// `index.ts` re-exporting every catalog schema, sorted by name ignoring case.
/// `Time` and `Duration` are not re-exported.
pub fn generate_index(catalog: &Catalog) -> String {
    let mut modules: Vec<&str> = catalog.schemas().map(|s| s.name()).collect();
    modules.sort_by_cached_key(|name| (name.to_lowercase(), *name));

    let mut out = String::new();
    for module in modules {
        out.push_str(&format!("export * from \"./{module}\";\n"));
    }
    out
}

fn enum_definition(enum_schema: &EnumSchema) -> String {
    let values: Vec<String> = enum_schema
        .values
        .iter()
        .map(|v| match &v.description {
            Some(description) => format!("/** {description} */\n  {} = {},", v.name, v.value),
            None => format!("{} = {},", v.name, v.value),
        })
        .collect();

    format!(
        "/** {} */\nexport enum {} {{\n  {}\n}}",
        enum_schema.description,
        enum_schema.name,
        values.join("\n\n  ")
    )
}

fn message_definition(
    catalog: &Catalog,
    message: &MessageSchema,
    options: &TypeScriptOptions,
    imports: &mut BTreeSet<String>,
) -> Result<String, RenderError> {
    let mut fields = Vec::with_capacity(message.fields.len());
    for field in &message.fields {
        let field_type = field_type(catalog, field, options, imports)?;
        fields.push(format!("{}\n  {}: {field_type};", doc_comment(field), field.name));
    }

    Ok(format!(
        "/** {} */\nexport type {} = {{\n  {}\n}};",
        message.description,
        message.name,
        fields.join("\n\n  ")
    ))
}

fn field_type(
    catalog: &Catalog,
    field: &Field,
    options: &TypeScriptOptions,
    imports: &mut BTreeSet<String>,
) -> Result<String, RenderError> {
    let base = match &field.ty {
        FieldType::Enum(name) => {
            let enum_schema = catalog.enum_schema(name)?;
            imports.insert(enum_schema.name.clone());
            enum_schema.name.clone()
        }
        FieldType::Nested(name) => {
            let nested = catalog.message(name)?;
            imports.insert(nested.name.clone());
            nested.name.clone()
        }
        FieldType::Primitive(Primitive::Time) => {
            imports.insert("Time".to_string());
            "Time".to_string()
        }
        FieldType::Primitive(Primitive::Duration) => {
            imports.insert("Duration".to_string());
            "Duration".to_string()
        }
        FieldType::Primitive(p) => primitive_type(*p).to_string(),
    };

    let Some(array) = field.array else {
        return Ok(base);
    };
    let mut ty = match array.fixed_len() {
        Some(n) => format!("[{}]", vec![base.as_str(); n].join(", ")),
        None => format!("{base}[]"),
    };
    if options.include_typed_arrays
        && let FieldType::Primitive(p) = &field.ty
    {
        for typed in typed_arrays(*p) {
            ty.push_str(" | ");
            ty.push_str(typed);
        }
    }
    Ok(ty)
}

fn doc_comment(field: &Field) -> String {
    let lines: Vec<&str> = description_lines(&field.description).collect();
    if let [line] = lines.as_slice() {
        return format!("/** {line} */");
    }
    let body: Vec<String> = lines
        .iter()
        .map(|line| format!(" * {line}").trim_end().to_string())
        .collect();
    format!("/**\n  {}\n   */", body.join("\n  "))
}

fn primitive_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Bytes => "Uint8Array",
        Primitive::String => "string",
        Primitive::Boolean => "boolean",
        Primitive::Float64 | Primitive::Uint32 => "number",
        Primitive::Time => "Time",
        Primitive::Duration => "Duration",
    }
}

fn typed_arrays(primitive: Primitive) -> &'static [&'static str] {
    match primitive {
        Primitive::Float64 => &["Float32Array", "Float64Array"],
        Primitive::Uint32 => &["Uint32Array"],
        _ => &[],
    }
}
