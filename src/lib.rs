//! Detect whether a project's build-description files changed since the last
//! run.
//!
//! ```no_run
//! use projectfiles_check::{ChangeDetector, Outcome};
//! use std::path::Path;
//!
//! let report = ChangeDetector::default().check(Path::new("."))?;
//! if report.outcome == Outcome::Changed {
//!     // regenerate build files
//! }
//! # Ok::<(), projectfiles_check::DetectorError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod detector;
pub mod error;
pub mod logging;

pub use detector::{ChangeDetector, Outcome, Report};
pub use error::DetectorError;
