//! Merged (bundled) `.msg` schemas.
//!
//! A merged schema is the root definition followed by one section per
//! transitive dependency, each introduced by a separator line and an
//! `MSG: <name>` header:
//!
//! ```text
//! # foxglove_msgs/msg/PoseInFrame
//! ...
//! ================================================================================
//! MSG: geometry_msgs/Pose
//! ...
//! ```
//!
//! This is the form MCAP channels and ROS 1 bags carry as their schema.

use std::fmt::Write;

use schemagen_core::{
    Catalog, Dependency, ExternalLibrary, MessageSchema, RenderError, resolve_dependencies,
};

use crate::{
    common::CommonDefinitions, definition::build_definition, generate::generate_ros_msg,
    version::RosVersion,
};

/// Line separating the sections of a merged schema.
pub const SEPARATOR: &str =
    "================================================================================";

#[derive(Debug, thiserror::Error)]
pub enum MergedSchemaError {
    #[error("merged schema has no root definition")]
    Empty,

    #[error("section {index} does not start with an `MSG: <name>` header")]
    MissingHeader { index: usize },
}

/// Render `message` together with all of its dependencies.
///
/// Nested messages with a `ros_equivalent` are taken from `common`; every
/// other dependency is a `foxglove_msgs` message from the catalog. Each
/// dependency appears once, in depth-first order of first use.
pub fn generate_merged_schema(
    catalog: &Catalog,
    message: &MessageSchema,
    version: RosVersion,
    common: &CommonDefinitions,
) -> Result<String, RenderError> {
    let library: &dyn ExternalLibrary = common;
    let dependencies = resolve_dependencies(catalog, message, Some(library))?;

    let mut out = generate_ros_msg(&build_definition(catalog, message, version)?)?;
    for dependency in &dependencies {
        let definition = match dependency {
            Dependency::Local(name) => build_definition(catalog, catalog.message(name)?, version)?,
            Dependency::External(name) => {
                common
                    .definition(name)
                    .ok_or_else(|| RenderError::UnknownExternal { name: name.clone() })?
            }
        };
        write!(
            out,
            "{SEPARATOR}\nMSG: {}\n{}",
            definition.interface_name,
            generate_ros_msg(&definition)?
        )?;
    }
    Ok(out)
}

/// One dependency section of a merged schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSection {
    /// Name from the `MSG:` header.
    pub name: String,
    pub body: String,
}

/// A merged schema split back into its sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSchema {
    pub root: String,
    pub dependencies: Vec<MergedSection>,
}

impl MergedSchema {
    pub fn parse(text: &str) -> Result<Self, MergedSchemaError> {
        let mut blocks: Vec<Vec<&str>> = vec![Vec::new()];
        for line in text.lines() {
            if is_separator_line(line) {
                blocks.push(Vec::new());
            } else if let Some(block) = blocks.last_mut() {
                block.push(line);
            }
        }

        let mut blocks = blocks.into_iter();
        let root = blocks
            .next()
            .filter(|lines| lines.iter().any(|l| !l.trim().is_empty()))
            .ok_or(MergedSchemaError::Empty)?;

        let mut dependencies = Vec::new();
        for (index, lines) in blocks.enumerate() {
            let (header, body) = lines
                .split_first()
                .ok_or(MergedSchemaError::MissingHeader { index })?;
            let name = header
                .strip_prefix("MSG:")
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(MergedSchemaError::MissingHeader { index })?;
            dependencies.push(MergedSection {
                name: name.to_string(),
                body: join_lines(body),
            });
        }

        Ok(Self {
            root: join_lines(&root),
            dependencies,
        })
    }

    pub fn dependency(&self, name: &str) -> Option<&MergedSection> {
        self.dependencies.iter().find(|s| s.name == name)
    }
}

fn is_separator_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.chars().all(|c| c == '=')
}

fn join_lines(lines: &[&str]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
