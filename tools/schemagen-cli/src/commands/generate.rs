use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use schemagen::{Generator, RenderedFile, core::Target};
use tracing::{debug, info, warn};

use crate::{
    catalog::load_catalog,
    target::{RenderOptions, TargetArg, renderer_for},
};

#[derive(Args)]
pub struct GenerateArgs {
    /// Catalog document (bundled Foxglove catalog if not specified)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    out: PathBuf,

    /// Targets to generate (all if not specified)
    #[arg(short, long, value_enum)]
    target: Vec<TargetArg>,

    /// Accept typed arrays on numeric TypeScript array fields
    #[arg(long)]
    typed_arrays: bool,

    /// Write every file that renders and report the failures at the end
    #[arg(long)]
    keep_going: bool,

    /// Skip the Markdown reference
    #[arg(long)]
    no_docs: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let generator = self.generator();

        let mut failures = 0usize;
        let mut files = Vec::new();
        if self.keep_going {
            for outcome in generator.render_each(&catalog) {
                match outcome {
                    Ok(file) => files.push(file),
                    Err(e) => {
                        warn!("{e}");
                        failures += 1;
                    }
                }
            }
        } else {
            files = generator.render_all(&catalog)?;
        }
        if !self.no_docs {
            files.push(generator.render_docs(&catalog)?);
        }

        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )?
            .progress_chars("=>-"),
        );
        for file in &files {
            write_file(&self.out, file)?;
            pb.set_message(file.path.display().to_string());
            pb.inc(1);
        }
        pb.finish_with_message("done");
        info!(count = files.len(), out = %self.out.display(), "generated files");

        if failures > 0 {
            bail!("{failures} file(s) failed to render");
        }
        Ok(())
    }

    fn targets(&self) -> Vec<Target> {
        if self.target.is_empty() {
            Target::ALL.to_vec()
        } else {
            self.target.iter().map(|t| t.target()).collect()
        }
    }

    fn generator(&self) -> Generator {
        let options = RenderOptions {
            typed_arrays: self.typed_arrays,
            merged: false,
        };
        self.targets()
            .into_iter()
            .fold(Generator::builder(), |builder, target| {
                builder.with_renderer(renderer_for(target, options))
            })
            .build()
    }
}

fn write_file(out: &Path, file: &RenderedFile) -> Result<()> {
    let path = out.join(&file.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &file.contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}
