use anyhow::{Context, Result};

use crate::cli::ScanOptions;
use crate::config::resolve_config;

/// Print the fingerprint alone on stdout, for use in scripts
pub fn run(options: ScanOptions) -> Result<()> {
    let config = resolve_config(options.config.as_deref())?;
    let detector = config.detector()?;

    let fingerprint = detector
        .fingerprint(&options.root)
        .with_context(|| format!("Failed to hash build files under {}", options.root.display()))?;

    println!("{fingerprint}");
    Ok(())
}
