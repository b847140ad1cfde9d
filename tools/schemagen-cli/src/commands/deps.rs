use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use schemagen::{
    core::{Dependency, ExternalLibrary, resolve_dependencies},
    ros::CommonDefinitions,
};

use crate::catalog::load_catalog;

#[derive(Args)]
pub struct DepsArgs {
    /// Message name
    schema: String,

    /// Catalog document (bundled Foxglove catalog if not specified)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Substitute ROS common definitions for messages with a ROS equivalent
    #[arg(long)]
    ros: bool,
}

impl DepsArgs {
    pub fn run(self) -> Result<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let message = catalog.message(&self.schema)?;
        let common = CommonDefinitions::new();
        let library: Option<&dyn ExternalLibrary> = if self.ros { Some(&common) } else { None };

        for dependency in resolve_dependencies(&catalog, message, library)? {
            match dependency {
                Dependency::Local(name) => println!("{name}"),
                Dependency::External(name) => println!("{name} (external)"),
            }
        }
        Ok(())
    }
}
