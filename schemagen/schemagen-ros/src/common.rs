//! Common ROS message definitions that catalog messages may map onto through
//! `ros_equivalent`.

use std::collections::BTreeMap;

use schemagen_core::ExternalLibrary;

use crate::definition::{RosField, RosMsgDefinition};

/// Table of common definitions keyed by two-segment name (`geometry_msgs/Pose`).
#[derive(Debug, Clone)]
pub struct CommonDefinitions {
    definitions: BTreeMap<String, Vec<RosField>>,
}

impl Default for CommonDefinitions {
    fn default() -> Self {
        Self::new()
    }
}

impl CommonDefinitions {
    /// The `geometry_msgs` definitions used by the bundled catalog.
    pub fn new() -> Self {
        let xyz = || {
            vec![
                RosField::new("float64", "x"),
                RosField::new("float64", "y"),
                RosField::new("float64", "z"),
            ]
        };
        let mut quaternion = xyz();
        quaternion.push(RosField::new("float64", "w"));

        let mut definitions = BTreeMap::new();
        definitions.insert("geometry_msgs/Point".to_string(), xyz());
        definitions.insert("geometry_msgs/Vector3".to_string(), xyz());
        definitions.insert("geometry_msgs/Quaternion".to_string(), quaternion);
        definitions.insert(
            "geometry_msgs/Pose".to_string(),
            vec![
                RosField::complex("geometry_msgs/Point", "position"),
                RosField::complex("geometry_msgs/Quaternion", "orientation"),
            ],
        );
        definitions.insert(
            "geometry_msgs/Transform".to_string(),
            vec![
                RosField::complex("geometry_msgs/Vector3", "translation"),
                RosField::complex("geometry_msgs/Quaternion", "rotation"),
            ],
        );
        Self { definitions }
    }

    /// Add or replace a definition.
    pub fn insert(&mut self, name: impl Into<String>, fields: Vec<RosField>) {
        self.definitions.insert(name.into(), fields);
    }

    pub fn fields(&self, name: &str) -> Option<&[RosField]> {
        self.definitions.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Definition of `name` as written into a merged schema section.
    pub fn definition(&self, name: &str) -> Option<RosMsgDefinition> {
        let fields = self.fields(name)?;
        Some(RosMsgDefinition {
            original_name: name.to_string(),
            description: None,
            interface_name: name.to_string(),
            full_interface_name: name.to_string(),
            fields: fields.to_vec(),
        })
    }
}

impl ExternalLibrary for CommonDefinitions {
    fn complex_dependencies(&self, name: &str) -> Option<Vec<String>> {
        let fields = self.fields(name)?;
        Some(
            fields
                .iter()
                .filter(|f| f.is_complex)
                .map(|f| f.ty.clone())
                .collect(),
        )
    }
}
