use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Built-in scalar and well-known types a field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    Float64,
    Uint32,
    Boolean,
    Bytes,
    /// Seconds and nanoseconds since the epoch.
    Time,
    /// Signed seconds and nanoseconds.
    Duration,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Float64 => "float64",
            Primitive::Uint32 => "uint32",
            Primitive::Boolean => "boolean",
            Primitive::Bytes => "bytes",
            Primitive::Time => "time",
            Primitive::Duration => "duration",
        }
    }

    /// `time`, `duration` and `bytes` are composite in every target grammar.
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            Primitive::Time | Primitive::Duration | Primitive::Bytes
        )
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Type of a message field.
///
/// Serialized externally tagged: `{"primitive": "float64"}`, `{"enum": "LineType"}`,
/// `{"nested": "Pose"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Primitive(Primitive),
    /// Name of an [`EnumSchema`] in the same catalog.
    Enum(String),
    /// Name of a [`MessageSchema`] in the same catalog.
    Nested(String),
}

/// Array-ness of a field: `true` in the catalog document is a variable-length
/// array, a positive integer is a fixed-length one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ArrayRepr", into = "ArrayRepr")]
pub enum ArrayKind {
    Variable,
    Fixed(usize),
}

impl ArrayKind {
    pub fn fixed_len(&self) -> Option<usize> {
        match self {
            ArrayKind::Variable => None,
            ArrayKind::Fixed(n) => Some(*n),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ArrayRepr {
    Flag(bool),
    Length(usize),
}

impl TryFrom<ArrayRepr> for ArrayKind {
    type Error = String;

    fn try_from(value: ArrayRepr) -> std::result::Result<Self, Self::Error> {
        match value {
            ArrayRepr::Flag(true) => Ok(ArrayKind::Variable),
            ArrayRepr::Flag(false) => Err("`array: false` is not allowed; omit the key".into()),
            ArrayRepr::Length(n) => Ok(ArrayKind::Fixed(n)),
        }
    }
}

impl From<ArrayKind> for ArrayRepr {
    fn from(value: ArrayKind) -> Self {
        match value {
            ArrayKind::Variable => ArrayRepr::Flag(true),
            ArrayKind::Fixed(n) => ArrayRepr::Length(n),
        }
    }
}

/// Field default, kept in the JSON kind it was written in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl DefaultValue {
    pub fn kind(&self) -> &'static str {
        match self {
            DefaultValue::Boolean(_) => "boolean",
            DefaultValue::Number(_) => "number",
            DefaultValue::String(_) => "string",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// May span several lines.
    pub description: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array: Option<ArrayKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Pins the protobuf field number; such fields do not advance the counter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protobuf_field_number: Option<u32>,
}

impl Field {
    pub fn new(name: impl Into<String>, description: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ty,
            array: None,
            default: None,
            protobuf_field_number: None,
        }
    }

    pub fn primitive(
        name: impl Into<String>,
        description: impl Into<String>,
        primitive: Primitive,
    ) -> Self {
        Self::new(name, description, FieldType::Primitive(primitive))
    }

    pub fn with_array(mut self, array: ArrayKind) -> Self {
        self.array = Some(array);
        self
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_protobuf_field_number(mut self, number: u32) -> Self {
        self.protobuf_field_number = Some(number);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSchema {
    pub name: String,
    pub description: String,
    /// Message the enum is scoped under (protobuf nesting, FlatBuffers file).
    pub parent_schema: String,
    /// Identifier used only inside the protobuf parent message.
    pub protobuf_enum_name: String,
    pub values: Vec<EnumValue>,
}

impl EnumSchema {
    /// Two or more values share a number.
    pub fn has_aliases(&self) -> bool {
        self.values
            .iter()
            .enumerate()
            .any(|(i, v)| self.values[..i].iter().any(|w| w.value == v.value))
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSchema {
    pub name: String,
    pub description: String,
    /// Two-segment name of an external ROS definition (`geometry_msgs/Pose`)
    /// used in place of a generated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ros_equivalent: Option<String>,
    pub fields: Vec<Field>,
}

impl MessageSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ros_equivalent: None,
            fields,
        }
    }

    pub fn with_ros_equivalent(mut self, name: impl Into<String>) -> Self {
        self.ros_equivalent = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Message,
    Enum,
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            SchemaKind::Message => "message",
            SchemaKind::Enum => "enum",
        })
    }
}

/// Borrowed view of either kind of top-level schema.
#[derive(Debug, Clone, Copy)]
pub enum SchemaRef<'a> {
    Message(&'a MessageSchema),
    Enum(&'a EnumSchema),
}

impl<'a> SchemaRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            SchemaRef::Message(m) => &m.name,
            SchemaRef::Enum(e) => &e.name,
        }
    }

    pub fn description(&self) -> &'a str {
        match self {
            SchemaRef::Message(m) => &m.description,
            SchemaRef::Enum(e) => &e.description,
        }
    }

    pub fn kind(&self) -> SchemaKind {
        match self {
            SchemaRef::Message(_) => SchemaKind::Message,
            SchemaRef::Enum(_) => SchemaKind::Enum,
        }
    }
}

impl<'a> From<&'a MessageSchema> for SchemaRef<'a> {
    fn from(value: &'a MessageSchema) -> Self {
        SchemaRef::Message(value)
    }
}

impl<'a> From<&'a EnumSchema> for SchemaRef<'a> {
    fn from(value: &'a EnumSchema) -> Self {
        SchemaRef::Enum(value)
    }
}
