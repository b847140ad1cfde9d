use std::{fmt, str::FromStr};

/// Output grammars a [`Renderer`](crate::Renderer) can produce.
///
/// The string form doubles as the output directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// TypeScript type definitions (`typescript`)
    TypeScript,
    /// Protocol Buffers, proto3 syntax (`proto`)
    Protobuf,
    /// FlatBuffers schema (`flatbuffer`)
    FlatBuffer,
    /// ROS 1 message definition (`ros1`)
    Ros1,
    /// ROS 2 message definition (`ros2`)
    Ros2,
    /// JSON Schema (`jsonschema`)
    JsonSchema,
    /// OMG IDL (`omgidl`)
    OmgIdl,
}

impl Target {
    pub const ALL: [Target; 7] = [
        Self::TypeScript,
        Self::Protobuf,
        Self::FlatBuffer,
        Self::Ros1,
        Self::Ros2,
        Self::JsonSchema,
        Self::OmgIdl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Protobuf => "proto",
            Self::FlatBuffer => "flatbuffer",
            Self::Ros1 => "ros1",
            Self::Ros2 => "ros2",
            Self::JsonSchema => "jsonschema",
            Self::OmgIdl => "omgidl",
        }
    }

    /// File extension (without the dot) of rendered files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::Protobuf => "proto",
            Self::FlatBuffer => "fbs",
            Self::Ros1 | Self::Ros2 => "msg",
            Self::JsonSchema => "json",
            Self::OmgIdl => "idl",
        }
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typescript" => Ok(Self::TypeScript),
            "proto" | "protobuf" => Ok(Self::Protobuf),
            "flatbuffer" => Ok(Self::FlatBuffer),
            "ros1" => Ok(Self::Ros1),
            "ros2" => Ok(Self::Ros2),
            "jsonschema" => Ok(Self::JsonSchema),
            "omgidl" => Ok(Self::OmgIdl),
            other => Err(format!("unknown target '{other}'")),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
