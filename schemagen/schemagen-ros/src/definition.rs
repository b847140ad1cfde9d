//! Lowering of a catalog message into a `.msg` field list.

use std::collections::HashSet;

use schemagen_core::{Catalog, FieldType, MessageSchema, Primitive, RenderError};

use crate::version::RosVersion;

/// Package every catalog message is published under.
pub const PACKAGE: &str = "foxglove_msgs";

/// One line of a `.msg` file: a field or a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosField {
    pub name: String,
    /// ROS type name (`float64`, `geometry_msgs/Pose`, ...).
    pub ty: String,
    pub is_array: bool,
    /// Fixed length; `None` with `is_array` is an unbounded array.
    pub array_length: Option<usize>,
    /// References another message definition.
    pub is_complex: bool,
    pub is_constant: bool,
    /// Right-hand side of a constant (`uint8 NAME=<value_text>`).
    pub value_text: Option<String>,
    pub description: Option<String>,
}

impl RosField {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_array: false,
            array_length: None,
            is_complex: false,
            is_constant: false,
            value_text: None,
            description: None,
        }
    }

    pub fn complex(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_complex: true,
            ..Self::new(ty, name)
        }
    }

    pub fn constant(
        ty: impl Into<String>,
        name: impl Into<String>,
        value_text: impl Into<String>,
    ) -> Self {
        Self {
            is_constant: true,
            value_text: Some(value_text.into()),
            ..Self::new(ty, name)
        }
    }

    pub fn with_array(mut self, length: Option<usize>) -> Self {
        self.is_array = true;
        self.array_length = length;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A `.msg` definition ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosMsgDefinition {
    /// Catalog name, or the external name for common definitions.
    pub original_name: String,
    pub description: Option<String>,
    /// Name as used inside `.msg` files (`foxglove_msgs/Bar`).
    pub interface_name: String,
    /// Name as used at runtime (`foxglove_msgs/Bar` for ROS 1,
    /// `foxglove_msgs/msg/Bar` for ROS 2).
    pub full_interface_name: String,
    pub fields: Vec<RosField>,
}

/// Build the `.msg` definition of `message`.
///
/// Enum fields become `uint8` fields preceded by one `uint8` constant per enum
/// value. Each enum is expanded once per message, and constant names must be
/// unique across all enums the message references.
pub fn build_definition(
    catalog: &Catalog,
    message: &MessageSchema,
    version: RosVersion,
) -> Result<RosMsgDefinition, RenderError> {
    let mut constant_names = HashSet::new();
    let mut seen_enums = HashSet::new();
    let mut fields = Vec::with_capacity(message.fields.len());

    for field in &message.fields {
        let mut is_array = field.array.is_some();
        let ty = match &field.ty {
            FieldType::Enum(name) => {
                let enum_schema = catalog.enum_schema(name)?;
                if seen_enums.insert(enum_schema.name.as_str()) {
                    for value in &enum_schema.values {
                        if !constant_names.insert(value.name.as_str()) {
                            return Err(RenderError::EnumConstantCollision {
                                value: value.name.clone(),
                                schema: message.name.clone(),
                            });
                        }
                        if value.value > u8::MAX.into() {
                            return Err(RenderError::EnumValueOutOfRange {
                                name: value.name.clone(),
                                value: value.value,
                            });
                        }
                        let mut constant =
                            RosField::constant("uint8", &value.name, value.value.to_string());
                        constant.description = value.description.clone();
                        fields.push(constant);
                    }
                }
                "uint8".to_string()
            }
            FieldType::Nested(name) => {
                let nested = catalog.message(name)?;
                match &nested.ros_equivalent {
                    Some(equivalent) => equivalent.clone(),
                    None => format!("{PACKAGE}/{}", nested.name),
                }
            }
            FieldType::Primitive(Primitive::Bytes) => {
                if is_array {
                    return Err(RenderError::ByteArray {
                        schema: message.name.clone(),
                        field: field.name.clone(),
                    });
                }
                is_array = true;
                "uint8".to_string()
            }
            FieldType::Primitive(Primitive::Uint32) => "uint32".to_string(),
            FieldType::Primitive(Primitive::String) => "string".to_string(),
            FieldType::Primitive(Primitive::Boolean) => "bool".to_string(),
            FieldType::Primitive(Primitive::Float64) => "float64".to_string(),
            FieldType::Primitive(Primitive::Time) => version.time_type().to_string(),
            FieldType::Primitive(Primitive::Duration) => version.duration_type().to_string(),
        };

        fields.push(RosField {
            name: version.field_name(&field.name),
            ty,
            is_array,
            array_length: field.array.and_then(|a| a.fixed_len()),
            is_complex: matches!(field.ty, FieldType::Nested(_)),
            is_constant: false,
            value_text: None,
            description: Some(field.description.clone()),
        });
    }

    Ok(RosMsgDefinition {
        original_name: message.name.clone(),
        description: Some(message.description.clone()),
        interface_name: format!("{PACKAGE}/{}", message.name),
        full_interface_name: version.full_interface_name(PACKAGE, &message.name),
        fields,
    })
}
