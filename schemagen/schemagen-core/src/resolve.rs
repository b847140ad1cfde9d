//! Dependency resolution: the ordered set of schemas a rendering must import
//! or inline.
//!
//! [`resolve_dependencies`] walks the nested-message graph of a root schema
//! depth-first and records every schema in pre-order, at its first
//! occurrence. The root itself is not part of the result.
//!
//! # External equivalents
//!
//! When an [`ExternalLibrary`] is supplied, a nested message carrying a
//! `ros_equivalent` is replaced by [`Dependency::External`] and the walk
//! continues into the external definition's own complex fields instead of
//! the local message. Without a library, `ros_equivalent` is ignored.

use std::collections::HashSet;

use crate::{
    catalog::Catalog,
    error::RenderError,
    schema::{EnumSchema, FieldType, MessageSchema},
};

/// One schema a rendering depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// Name of a [`MessageSchema`] in the catalog.
    Local(String),
    /// Two-segment name of a definition provided by an [`ExternalLibrary`].
    External(String),
}

impl Dependency {
    pub fn name(&self) -> &str {
        match self {
            Dependency::Local(name) | Dependency::External(name) => name,
        }
    }
}

/// Table of externally defined types (e.g. ROS common messages) that can stand
/// in for catalog messages.
pub trait ExternalLibrary {
    /// Names of the complex types referenced by the fields of `name`, in field
    /// order. `None` if the library does not define `name`.
    fn complex_dependencies(&self, name: &str) -> Option<Vec<String>>;
}

/// Resolve the transitive nested dependencies of `root`.
///
/// Fails with [`RenderError::UnknownMessage`] on a dangling reference,
/// [`RenderError::UnknownExternal`] when the library lacks an equivalent and
/// [`RenderError::Cycle`] if the graph is not acyclic.
pub fn resolve_dependencies(
    catalog: &Catalog,
    root: &MessageSchema,
    external: Option<&dyn ExternalLibrary>,
) -> Result<Vec<Dependency>, RenderError> {
    let mut walker = Walker {
        catalog,
        external,
        visited: HashSet::new(),
        stack: Vec::new(),
        out: Vec::new(),
    };
    walker.walk_local(root)?;
    Ok(walker.out)
}

/// Enums scoped under `message` (`parent_schema == message.name`), sorted by name.
pub fn nested_enums<'a>(catalog: &'a Catalog, message: &'a MessageSchema) -> Vec<&'a EnumSchema> {
    catalog.enums_of(&message.name).collect()
}

struct Walker<'a> {
    catalog: &'a Catalog,
    external: Option<&'a dyn ExternalLibrary>,
    visited: HashSet<Dependency>,
    /// Schemas currently being expanded, root first.
    stack: Vec<Dependency>,
    out: Vec<Dependency>,
}

impl Walker<'_> {
    fn enter(&mut self, dep: &Dependency) -> Result<(), RenderError> {
        if let Some(start) = self.stack.iter().position(|d| d == dep) {
            let mut path: Vec<String> = self.stack[start..]
                .iter()
                .map(|d| d.name().to_string())
                .collect();
            path.push(dep.name().to_string());
            return Err(RenderError::Cycle { path });
        }
        self.stack.push(dep.clone());
        Ok(())
    }

    fn walk_local(&mut self, message: &MessageSchema) -> Result<(), RenderError> {
        self.enter(&Dependency::Local(message.name.clone()))?;
        for field in &message.fields {
            let FieldType::Nested(name) = &field.ty else {
                continue;
            };
            let nested = self.catalog.message(name)?;
            match (&nested.ros_equivalent, self.external) {
                (Some(equivalent), Some(_)) => self.visit_external(equivalent)?,
                _ => {
                    let dep = Dependency::Local(nested.name.clone());
                    if self.stack.contains(&dep) {
                        self.enter(&dep)?;
                    }
                    if self.visited.insert(dep.clone()) {
                        self.out.push(dep);
                        self.walk_local(nested)?;
                    }
                }
            }
        }
        self.stack.pop();
        Ok(())
    }

    fn visit_external(&mut self, name: &str) -> Result<(), RenderError> {
        let Some(library) = self.external else {
            return Ok(());
        };
        let children = library
            .complex_dependencies(name)
            .ok_or_else(|| RenderError::UnknownExternal {
                name: name.to_string(),
            })?;

        let dep = Dependency::External(name.to_string());
        if self.stack.contains(&dep) {
            self.enter(&dep)?;
        }
        if !self.visited.insert(dep.clone()) {
            return Ok(());
        }
        self.out.push(dep.clone());

        self.enter(&dep)?;
        for child in &children {
            self.visit_external(child)?;
        }
        self.stack.pop();
        Ok(())
    }
}
