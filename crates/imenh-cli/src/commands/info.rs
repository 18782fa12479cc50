use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use imenh_core::io::input::InputSource;
use imenh_core::render::dimensions_label;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file (.png or .jpg)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = InputSource::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let frame = source
        .decode()
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;
    let (width, height) = frame.dimensions();

    println!("File:        {}", source.label());
    println!("Dimensions:  {}", dimensions_label(width, height));

    let size_kb = source.bytes().len() as f64 / 1024.0;
    println!("File size:   {:.1} KB", size_kb);

    Ok(())
}
