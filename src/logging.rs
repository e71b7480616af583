use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "projectfiles_check=warn";

/// Install the global subscriber. Logs go to stderr so stdout stays usable
/// from scripts.
///
/// `RUST_LOG` wins unless `-v` or `-q` was passed.
pub fn init(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("projectfiles_check=debug")
    } else if quiet {
        EnvFilter::new("projectfiles_check=error")
    } else {
        EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
