//! CLI definitions and execution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fontpack_core::{FontBundleBuilder, base_filename};
use log::info;

use crate::archive::write_zip;

#[derive(Parser)]
#[command(name = "fontpack")]
#[command(about = "Download google fonts files for self-hosting")]
pub struct Cli {
    /// ZIP file with font contents to write.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Font family to download.
    #[arg(short, long)]
    pub family: String,

    /// Download italic font variations.
    #[arg(short, long)]
    pub italic: bool,

    /// Font weights to download (100-900), default 400 (regular).
    #[arg(short, long, num_args = 1.., default_values = ["400"])]
    pub weight: Vec<String>,

    /// Character subsets (e.g. latin, latin-ext, greek, cyrillic, etc).
    #[arg(short, long, num_args = 1.., default_values = ["latin", "latin-ext"])]
    pub subset: Vec<String>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        info!("Downloading {} ({})", self.family, self.weight.join(" "));

        let bundle = FontBundleBuilder::new()
            .build_bundle(&self.family, &self.weight, &self.subset, self.italic)
            .with_context(|| format!("Failed to download font family {}", self.family))?;

        let dir_name = base_filename(&self.family, &self.subset);
        write_zip(&self.output, &dir_name, &bundle)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        println!("Wrote {} ({} files)", self.output.display(), bundle.len());
        Ok(())
    }
}
