use schemagen_core::Target;

/// ROS generation to emit `.msg` files for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RosVersion {
    /// ROS 1: `time` / `duration` builtins, `pkg/Name` interface names.
    Ros1,
    /// ROS 2: `builtin_interfaces` types, `pkg/msg/Name` interface names and
    /// lower-case field names.
    #[default]
    Ros2,
}

impl RosVersion {
    pub fn target(self) -> Target {
        match self {
            RosVersion::Ros1 => Target::Ros1,
            RosVersion::Ros2 => Target::Ros2,
        }
    }

    pub fn time_type(self) -> &'static str {
        match self {
            RosVersion::Ros1 => "time",
            RosVersion::Ros2 => "builtin_interfaces/Time",
        }
    }

    pub fn duration_type(self) -> &'static str {
        match self {
            RosVersion::Ros1 => "duration",
            RosVersion::Ros2 => "builtin_interfaces/Duration",
        }
    }

    /// Name used to refer to `package/name` at runtime.
    pub fn full_interface_name(self, package: &str, name: &str) -> String {
        match self {
            RosVersion::Ros1 => format!("{package}/{name}"),
            RosVersion::Ros2 => format!("{package}/msg/{name}"),
        }
    }

    pub fn field_name(self, name: &str) -> String {
        match self {
            RosVersion::Ros1 => name.to_string(),
            RosVersion::Ros2 => name.to_lowercase(),
        }
    }
}
