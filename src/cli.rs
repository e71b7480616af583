use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "projectfiles-check",
    version,
    about = "Detect changes to a project's build-description files",
    long_about = "projectfiles-check - cheap \"did the build configuration change\" guard.\n\n\
                  Hashes every *.pro, CMakeLists.txt and Info.plist under a directory and\n\
                  compares the result with the fingerprint stored by the previous run.\n\
                  Exit status: 0 unchanged, 1 changed, 2 error."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare build files with the stored fingerprint (default)
    Check {
        #[command(flatten)]
        options: CheckOptions,
    },

    /// Print the current fingerprint without touching the record
    Hash {
        #[command(flatten)]
        scan: ScanOptions,
    },

    /// List matched build files in the order they are hashed
    List {
        #[command(flatten)]
        scan: ScanOptions,
    },

    /// Remove the stored fingerprint so the next check reports a change
    Clean {
        /// Record file (default: projectfiles.md5.tmp)
        #[arg(short, long)]
        record: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new projectfiles-check.toml configuration file
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Clone, Debug)]
pub struct ScanOptions {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct CheckOptions {
    #[command(flatten)]
    pub scan: ScanOptions,

    /// Record file (default: projectfiles.md5.tmp)
    #[arg(short, long)]
    pub record: Option<PathBuf>,
}

impl CheckOptions {
    /// Options used when no subcommand is given
    pub fn current_dir() -> Self {
        Self {
            scan: ScanOptions {
                root: PathBuf::from("."),
                config: None,
            },
            record: None,
        }
    }
}
