use anyhow::Result;
use console::style;
use std::path::PathBuf;

use crate::config::resolve_config;
use crate::detector::Record;

pub fn run(record: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(config.as_deref())?;
    let record = Record::new(record.unwrap_or(config.record.path));

    if record.remove()? {
        println!(
            "{} Removed record: {}",
            style("✓").green(),
            record.path().display()
        );
    } else {
        println!(
            "{} Record not found: {}",
            style("-").dim(),
            record.path().display()
        );
    }

    Ok(())
}
