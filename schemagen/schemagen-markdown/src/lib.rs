//! Markdown reference documentation for a whole schemagen [`Catalog`].
//!
//! Unlike the per-schema renderers this produces a single document:
//!
//! ```text
//! # title
//! ## Contents        – enums, then messages, sorted by name
//! ----
//! ## enum <Name>     – value table
//! ## <Name>          – HTML field table, types linked to their sections
//! ```

use std::fmt::Write as _;

use schemagen_core::{
    ArrayKind, Catalog, EnumSchema, Field, FieldType, GENERATED_BY, MessageSchema, RenderError,
};

/// Default title of the document.
pub const DEFAULT_TITLE: &str = "Foxglove schemas";

/// Render the catalog as one Markdown document titled [`DEFAULT_TITLE`].
pub fn generate_markdown(catalog: &Catalog) -> Result<String, RenderError> {
    generate_markdown_with_title(catalog, DEFAULT_TITLE)
}

pub fn generate_markdown_with_title(catalog: &Catalog, title: &str) -> Result<String, RenderError> {
    let mut enums: Vec<&EnumSchema> = catalog.enums().collect();
    enums.sort_by(|a, b| sort_key(&a.name).cmp(&sort_key(&b.name)));
    let mut messages: Vec<&MessageSchema> = catalog.messages().collect();
    messages.sort_by(|a, b| sort_key(&a.name).cmp(&sort_key(&b.name)));

    let mut sections = vec![
        format!("# {title}\n\n{GENERATED_BY}"),
        "## Contents".to_string(),
    ];

    let contents = enums
        .iter()
        .map(|e| format!("- [enum {}]({})", e.name, enum_anchor(&e.name)))
        .chain(
            messages
                .iter()
                .map(|m| format!("- [{}]({})", m.name, message_anchor(&m.name))),
        )
        .collect::<Vec<_>>()
        .join("\n");
    sections.push(contents);
    sections.push("----".to_string());

    for enum_schema in enums {
        sections.push(enum_section(enum_schema)?);
    }
    for message in messages {
        sections.push(message_section(catalog, message)?);
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    Ok(out)
}

/// Case-insensitive ordering with the exact name as tie breaker.
fn sort_key(name: &str) -> (String, &str) {
    (name.to_lowercase(), name)
}

fn enum_anchor(name: &str) -> String {
    format!("#enum-{}", name.to_lowercase())
}

fn message_anchor(name: &str) -> String {
    format!("#{}", name.to_lowercase())
}

fn enum_section(enum_schema: &EnumSchema) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, "## enum {}", enum_schema.name)?;
    writeln!(out)?;
    writeln!(out, "{}", enum_schema.description)?;
    writeln!(out)?;
    writeln!(out, "name | value | description")?;
    write!(out, "---- | ----- | -----------")?;
    for value in &enum_schema.values {
        write!(
            out,
            "\n`{}` | {} | {}",
            value.name,
            value.value,
            value.description.as_deref().unwrap_or_default()
        )?;
    }
    Ok(out)
}

fn message_section(catalog: &Catalog, message: &MessageSchema) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, "## {}", message.name)?;
    writeln!(out)?;
    writeln!(out, "{}", message.description)?;
    writeln!(out)?;
    writeln!(out, "<table>")?;
    writeln!(out, "  <tr>")?;
    writeln!(out, "    <th>field</th>")?;
    writeln!(out, "    <th>type</th>")?;
    writeln!(out, "    <th>description</th>")?;
    writeln!(out, "  </tr>")?;
    for field in &message.fields {
        let ty = field_type(catalog, field)?;
        writeln!(out, "<tr>")?;
        writeln!(out, "<td><code>{}</code></td>", field.name)?;
        writeln!(out, "<td>\n\n{ty}\n\n</td>")?;
        writeln!(out, "<td>\n\n{}\n\n</td>", field.description.trim())?;
        writeln!(out, "</tr>")?;
    }
    write!(out, "</table>")?;
    Ok(out)
}

fn field_type(catalog: &Catalog, field: &Field) -> Result<String, RenderError> {
    let base = match &field.ty {
        FieldType::Primitive(primitive) => primitive.as_str().to_string(),
        FieldType::Enum(name) => {
            let enum_schema = catalog.enum_schema(name)?;
            format!("[enum {}]({})", enum_schema.name, enum_anchor(&enum_schema.name))
        }
        FieldType::Nested(name) => {
            let nested = catalog.message(name)?;
            format!("[{}]({})", nested.name, message_anchor(&nested.name))
        }
    };
    let suffix = match field.array {
        None => String::new(),
        Some(ArrayKind::Variable) => "[]".to_string(),
        Some(ArrayKind::Fixed(n)) => format!("[{n}]"),
    };
    Ok(base + &suffix)
}
