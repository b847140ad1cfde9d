//! ROS 1 / ROS 2 `.msg` [`Renderer`] for the schemagen pipeline.
//!
//! Rendering happens in two steps: [`build_definition`] lowers a catalog
//! message into a [`RosMsgDefinition`] (enum constants expanded, types mapped
//! for the chosen [`RosVersion`]) and [`generate_ros_msg`] writes it out.
//! [`generate_merged_schema`] concatenates the root definition with all of its
//! dependencies, substituting [`CommonDefinitions`] for messages that declare a
//! `ros_equivalent`.
//!
//! # Example
//!
//! ```ignore
//! use schemagen_ros::{RosRenderer, RosVersion};
//!
//! let renderer = RosRenderer::new(RosVersion::Ros1).with_merged(true);
//! let text = renderer.render(&catalog, catalog.schema("PoseInFrame").unwrap())?;
//! ```

mod common;
mod definition;
mod generate;
mod merged;
mod version;

use schemagen_core::{Catalog, RenderError, Renderer, SchemaKind, SchemaRef, Target};

pub use common::CommonDefinitions;
pub use definition::{PACKAGE, RosField, RosMsgDefinition, build_definition};
pub use generate::generate_ros_msg;
pub use merged::{MergedSchema, MergedSchemaError, MergedSection, SEPARATOR, generate_merged_schema};
pub use version::RosVersion;

/// Renders `.msg` files for one [`RosVersion`] via the [`Renderer`] trait.
///
/// By default each file holds a single definition; with
/// [`with_merged`](Self::with_merged) every file is a self-contained merged
/// schema.
#[derive(Debug, Clone, Default)]
pub struct RosRenderer {
    version: RosVersion,
    merged: bool,
    common: CommonDefinitions,
}

impl RosRenderer {
    pub fn new(version: RosVersion) -> Self {
        Self {
            version,
            merged: false,
            common: CommonDefinitions::new(),
        }
    }

    pub fn with_merged(mut self, merged: bool) -> Self {
        self.merged = merged;
        self
    }

    pub fn with_common_definitions(mut self, common: CommonDefinitions) -> Self {
        self.common = common;
        self
    }

    pub fn version(&self) -> RosVersion {
        self.version
    }
}

impl Renderer for RosRenderer {
    fn target(&self) -> Target {
        self.version.target()
    }

    fn render(&self, catalog: &Catalog, schema: SchemaRef<'_>) -> Result<String, RenderError> {
        let SchemaRef::Message(message) = schema else {
            return Err(RenderError::UnsupportedSchemaKind {
                target: self.target(),
                kind: SchemaKind::Enum,
                name: schema.name().to_string(),
            });
        };
        if self.merged {
            generate_merged_schema(catalog, message, self.version, &self.common)
        } else {
            generate_ros_msg(&build_definition(catalog, message, self.version)?)
        }
    }
}
