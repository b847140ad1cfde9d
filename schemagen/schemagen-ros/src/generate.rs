use std::fmt::Write;

use schemagen_core::{GENERATED_BY, RenderError, description_lines};

use crate::definition::{RosField, RosMsgDefinition};

/// Write `definition` as `.msg` text.
///
/// Commented fields are surrounded by blank lines; consecutive uncommented
/// fields are kept together.
pub fn generate_ros_msg(definition: &RosMsgDefinition) -> Result<String, RenderError> {
    let mut source = String::new();
    writeln!(source, "# {}", definition.full_interface_name)?;
    if let Some(description) = &definition.description {
        writeln!(source, "# {description}")?;
    }
    writeln!(source, "\n# {GENERATED_BY}")?;

    // The header counts as a comment.
    let mut prev_had_comment = true;
    for field in &definition.fields {
        if prev_had_comment || field.description.is_some() {
            source.push('\n');
        }
        prev_had_comment = false;
        if let Some(description) = &field.description {
            for line in description_lines(description) {
                writeln!(source, "{}", format!("# {line}").trim_end())?;
            }
            prev_had_comment = true;
        }
        write_field(&mut source, field)?;
    }
    Ok(source)
}

fn write_field(source: &mut String, field: &RosField) -> Result<(), RenderError> {
    write!(source, "{}", field.ty)?;
    if field.is_array {
        match field.array_length {
            Some(len) => write!(source, "[{len}]")?,
            None => source.push_str("[]"),
        }
    }
    write!(source, " {}", field.name)?;
    if field.is_constant {
        let value = field
            .value_text
            .as_deref()
            .ok_or_else(|| RenderError::MissingConstantValue {
                name: field.name.clone(),
            })?;
        write!(source, "={value}")?;
    }
    source.push('\n');
    Ok(())
}
