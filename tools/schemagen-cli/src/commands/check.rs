use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::catalog::load_catalog;

#[derive(Args)]
pub struct CheckArgs {
    /// Catalog document (bundled Foxglove catalog if not specified)
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        println!(
            "ok: {} messages, {} enums",
            catalog.messages().count(),
            catalog.enums().count()
        );
        Ok(())
    }
}
