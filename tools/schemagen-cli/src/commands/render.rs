use std::{fs, path::PathBuf};

use anyhow::{Result, bail};
use clap::Args;
use schemagen::Generator;

use crate::{
    catalog::load_catalog,
    target::{RenderOptions, TargetArg, renderer_for},
};

#[derive(Args)]
pub struct RenderArgs {
    /// Schema name
    schema: String,

    /// Target format
    #[arg(short, long, value_enum)]
    target: TargetArg,

    /// Catalog document (bundled Foxglove catalog if not specified)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Bundle the message with all of its dependencies (ROS targets only)
    #[arg(long)]
    merged: bool,

    /// Accept typed arrays on numeric TypeScript array fields
    #[arg(long)]
    typed_arrays: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        if self.merged && !matches!(self.target, TargetArg::Ros1 | TargetArg::Ros2) {
            bail!("--merged requires --target ros1 or ros2");
        }
        let catalog = load_catalog(self.catalog.as_deref())?;
        let target = self.target.target();
        let options = RenderOptions {
            typed_arrays: self.typed_arrays,
            merged: self.merged,
        };
        let generator = Generator::builder()
            .with_renderer(renderer_for(target, options))
            .build();
        let text = generator.render(&catalog, target, &self.schema)?;

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
