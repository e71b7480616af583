use anyhow::{Context, Result};
use console::style;

use crate::cli::ScanOptions;
use crate::config::resolve_config;

pub fn run(options: ScanOptions) -> Result<()> {
    let config = resolve_config(options.config.as_deref())?;
    let detector = config.detector()?;

    let files = detector
        .files(&options.root)
        .with_context(|| format!("Failed to scan {}", options.root.display()))?;

    if files.is_empty() {
        eprintln!("{} No build files found", style("!").yellow().bold());
        return Ok(());
    }

    for file in &files {
        let relative = file.strip_prefix(&options.root).unwrap_or(file);
        println!("{}", relative.display());
    }

    Ok(())
}
