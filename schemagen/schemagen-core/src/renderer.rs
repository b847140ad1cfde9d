//! Renderer trait used to register pluggable target grammars.

use crate::{
    catalog::Catalog,
    error::RenderError,
    schema::{SchemaKind, SchemaRef},
    target::Target,
};

/// Auxiliary file shipped next to the rendered schemas of a target
/// (well-known types, index files).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportFile {
    /// File name relative to the target directory.
    pub name: String,
    pub contents: String,
}

impl SupportFile {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Lowers one schema of a [`Catalog`] into the text of one target grammar.
///
/// Implementations are registered with `schemagen::Generator` and dispatched
/// based on [`Target`]. Rendering is a pure function of the catalog and the
/// schema, so a renderer may be shared across threads.
pub trait Renderer: Send + Sync {
    /// Returns the grammar this renderer produces.
    fn target(&self) -> Target;

    /// Whether standalone files are produced for schemas of `kind`.
    ///
    /// Defaults to messages only.
    fn renders(&self, kind: SchemaKind) -> bool {
        kind == SchemaKind::Message
    }

    /// Render a single schema.
    ///
    /// Returns `Err` on a catalog inconsistency or a construct the target
    /// cannot express.
    fn render(&self, catalog: &Catalog, schema: SchemaRef<'_>) -> Result<String, RenderError>;

    /// Files the rendered schemas depend on but that do not come from the catalog.
    fn support_files(&self, _catalog: &Catalog) -> Result<Vec<SupportFile>, RenderError> {
        Ok(Vec::new())
    }
}
