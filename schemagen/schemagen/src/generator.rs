//! Renderer registry and file layout.

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use rayon::prelude::*;
use schemagen_core::{Catalog, Renderer, SchemaRef, Target};
#[cfg(feature = "flatbuffer")]
use schemagen_flatbuffer::FlatBufferRenderer;
#[cfg(feature = "jsonschema")]
use schemagen_jsonschema::JsonSchemaRenderer;
#[cfg(feature = "omgidl")]
use schemagen_omgidl::OmgIdlRenderer;
#[cfg(feature = "protobuf")]
use schemagen_protobuf::ProtobufRenderer;
#[cfg(feature = "ros")]
use schemagen_ros::{RosRenderer, RosVersion};
#[cfg(feature = "typescript")]
use schemagen_typescript::TypeScriptRenderer;
use tracing::debug;

use crate::error::GeneratorError;

/// Output path of the catalog-wide documentation.
pub const DOCS_PATH: &str = "README.md";

/// One generated file, with a path relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// `None` for catalog-wide documents such as [`DOCS_PATH`].
    pub target: Option<Target>,
    pub path: PathBuf,
    pub contents: String,
}

impl RenderedFile {
    fn for_target(target: Target, name: &str, contents: String) -> Self {
        Self {
            target: Some(target),
            path: PathBuf::from(target.as_str()).join(name),
            contents,
        }
    }
}

/// Renders catalog schemas using registered [`Renderer`]s.
pub struct Generator {
    renderers: HashMap<Target, Arc<dyn Renderer>>,
}

/// Builder for configuring [`Generator`].
pub struct GeneratorBuilder {
    renderers: Vec<Arc<dyn Renderer>>,
}

enum Job<'a> {
    Schema(Arc<dyn Renderer>, SchemaRef<'a>),
    Support(Arc<dyn Renderer>),
}

impl Generator {
    /// Create a builder for [`Generator`].
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder {
            renderers: Vec::new(),
        }
    }

    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer, replacing any previous one for the same target.
    pub fn register_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.register_shared_renderer(Arc::from(renderer));
    }

    pub fn register_shared_renderer(&mut self, renderer: Arc<dyn Renderer>) {
        self.renderers.insert(renderer.target(), renderer);
    }

    /// Registered targets in [`Target`] order.
    pub fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = self.renderers.keys().copied().collect();
        targets.sort();
        targets
    }

    fn find_renderer(&self, target: Target) -> Result<&Arc<dyn Renderer>, GeneratorError> {
        self.renderers
            .get(&target)
            .ok_or(GeneratorError::NoRenderer { target })
    }

    /// Render the schema `name` for `target`.
    pub fn render(
        &self,
        catalog: &Catalog,
        target: Target,
        name: &str,
    ) -> Result<String, GeneratorError> {
        let renderer = self.find_renderer(target)?;
        let schema = catalog
            .schema(name)
            .ok_or_else(|| GeneratorError::UnknownSchema {
                name: name.to_string(),
            })?;
        render_schema(renderer.as_ref(), catalog, schema)
    }

    /// Render every schema the target supports, followed by its support files.
    pub fn render_target(
        &self,
        catalog: &Catalog,
        target: Target,
    ) -> Result<Vec<RenderedFile>, GeneratorError> {
        let renderer = self.find_renderer(target)?;
        let mut files = Vec::new();
        for schema in sorted_schemas(catalog) {
            if renderer.renders(schema.kind()) {
                files.push(schema_file(renderer.as_ref(), catalog, schema)?);
            }
        }
        files.extend(support_files(renderer.as_ref(), catalog)?);
        Ok(files)
    }

    /// Render all (target, schema) pairs in parallel and report each outcome.
    ///
    /// Results are ordered by target, then schema name, with each target's
    /// support files after its schemas.
    pub fn render_each(&self, catalog: &Catalog) -> Vec<Result<RenderedFile, GeneratorError>> {
        let schemas = sorted_schemas(catalog);
        let mut jobs = Vec::new();
        for target in self.targets() {
            let renderer = &self.renderers[&target];
            for schema in &schemas {
                if renderer.renders(schema.kind()) {
                    jobs.push(Job::Schema(Arc::clone(renderer), *schema));
                }
            }
            jobs.push(Job::Support(Arc::clone(renderer)));
        }

        let outcomes: Vec<Vec<Result<RenderedFile, GeneratorError>>> = jobs
            .par_iter()
            .map(|job| match job {
                Job::Schema(renderer, schema) => {
                    vec![schema_file(renderer.as_ref(), catalog, *schema)]
                }
                Job::Support(renderer) => match support_files(renderer.as_ref(), catalog) {
                    Ok(files) => files.into_iter().map(Ok).collect(),
                    Err(e) => vec![Err(e)],
                },
            })
            .collect();
        outcomes.into_iter().flatten().collect()
    }

    /// Render all (target, schema) pairs, failing on the first error.
    ///
    /// The returned files are sorted by target, then path.
    pub fn render_all(&self, catalog: &Catalog) -> Result<Vec<RenderedFile>, GeneratorError> {
        let mut files = self
            .render_each(catalog)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        files.sort_by(|a, b| (a.target, &a.path).cmp(&(b.target, &b.path)));
        Ok(files)
    }

    /// Render the Markdown reference for the whole catalog to [`DOCS_PATH`].
    #[cfg(feature = "markdown")]
    pub fn render_docs(&self, catalog: &Catalog) -> Result<RenderedFile, GeneratorError> {
        debug!(path = DOCS_PATH, "rendering documentation");
        let contents =
            schemagen_markdown::generate_markdown(catalog).map_err(GeneratorError::Docs)?;
        Ok(RenderedFile {
            target: None,
            path: PathBuf::from(DOCS_PATH),
            contents,
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorBuilder {
    /// Register a renderer. Later registrations for the same target win.
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderers.push(Arc::from(renderer));
        self
    }

    /// Register every renderer enabled by cargo features, with default options.
    pub fn with_default_renderers(self) -> Self {
        let s = self;
        #[cfg(feature = "typescript")]
        let s = s.with_renderer(Box::new(TypeScriptRenderer::default()));
        #[cfg(feature = "protobuf")]
        let s = s.with_renderer(Box::new(ProtobufRenderer::new()));
        #[cfg(feature = "flatbuffer")]
        let s = s.with_renderer(Box::new(FlatBufferRenderer::new()));
        #[cfg(feature = "ros")]
        let s = s
            .with_renderer(Box::new(RosRenderer::new(RosVersion::Ros1)))
            .with_renderer(Box::new(RosRenderer::new(RosVersion::Ros2)));
        #[cfg(feature = "jsonschema")]
        let s = s.with_renderer(Box::new(JsonSchemaRenderer::new()));
        #[cfg(feature = "omgidl")]
        let s = s.with_renderer(Box::new(OmgIdlRenderer::new()));
        s
    }

    /// Build the generator.
    pub fn build(self) -> Generator {
        let mut generator = Generator::new();
        for renderer in self.renderers {
            generator.register_shared_renderer(renderer);
        }
        generator
    }
}

fn sorted_schemas(catalog: &Catalog) -> Vec<SchemaRef<'_>> {
    let mut schemas: Vec<SchemaRef<'_>> = catalog.schemas().collect();
    schemas.sort_by(|a, b| a.name().cmp(b.name()));
    schemas
}

fn render_schema(
    renderer: &dyn Renderer,
    catalog: &Catalog,
    schema: SchemaRef<'_>,
) -> Result<String, GeneratorError> {
    let target = renderer.target();
    debug!(%target, schema = schema.name(), "rendering schema");
    renderer
        .render(catalog, schema)
        .map_err(|source| GeneratorError::Render {
            target,
            schema: schema.name().to_string(),
            source,
        })
}

fn schema_file(
    renderer: &dyn Renderer,
    catalog: &Catalog,
    schema: SchemaRef<'_>,
) -> Result<RenderedFile, GeneratorError> {
    let target = renderer.target();
    let contents = render_schema(renderer, catalog, schema)?;
    let name = format!("{}.{}", schema.name(), target.extension());
    Ok(RenderedFile::for_target(target, &name, contents))
}

fn support_files(
    renderer: &dyn Renderer,
    catalog: &Catalog,
) -> Result<Vec<RenderedFile>, GeneratorError> {
    let target = renderer.target();
    let files = renderer
        .support_files(catalog)
        .map_err(|source| GeneratorError::Render {
            target,
            schema: "<support files>".to_string(),
            source,
        })?;
    debug!(%target, count = files.len(), "rendered support files");
    Ok(files
        .into_iter()
        .map(|file| RenderedFile::for_target(target, &file.name, file.contents))
        .collect())
}
