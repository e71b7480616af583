use anyhow::{Context, Result};
use console::style;

use crate::cli::CheckOptions;
use crate::config::resolve_config;
use crate::detector::{Outcome, Record};

pub fn run(options: CheckOptions, quiet: bool) -> Result<Outcome> {
    let root = &options.scan.root;
    if !root.is_dir() {
        anyhow::bail!("Project root is not a directory: {}", root.display());
    }

    let mut config = resolve_config(options.scan.config.as_deref())?;
    if let Some(record) = options.record {
        config.record.path = record;
    }

    let detector = config.detector()?;
    let report = detector
        .check(root)
        .with_context(|| format!("Failed to check build files under {}", root.display()))?;

    if !quiet {
        print_report(detector.record(), report.outcome, report.files, &report.fingerprint);
    }

    Ok(report.outcome)
}

fn print_report(record: &Record, outcome: Outcome, files: usize, fingerprint: &str) {
    match outcome {
        Outcome::Unchanged => println!(
            "{} Build files unchanged ({} files, {})",
            style("✓").green().bold(),
            files,
            style(fingerprint).dim()
        ),
        Outcome::Changed => println!(
            "{} Build files changed ({} files, {}) → {}",
            style("!").yellow().bold(),
            files,
            style(fingerprint).cyan(),
            record.path().display()
        ),
    }
}
