use clap::Parser;
use console::style;
use std::process::ExitCode;

use projectfiles_check::cli::{CheckOptions, Cli, Commands};
use projectfiles_check::{commands, logging, Outcome};

/// Exit status for any failure, kept apart from the changed/unchanged codes
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        None => commands::check::run(CheckOptions::current_dir(), cli.quiet).map(Outcome::exit_code),
        Some(Commands::Check { options }) => {
            commands::check::run(options, cli.quiet).map(Outcome::exit_code)
        }
        Some(Commands::Hash { scan }) => commands::hash::run(scan).map(|()| 0),
        Some(Commands::List { scan }) => commands::list::run(scan).map(|()| 0),
        Some(Commands::Clean { record, config }) => commands::clean::run(record, config).map(|()| 0),
        Some(Commands::Init { force }) => commands::init::run(force).map(|()| 0),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
