use docmeta_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state dir; fall back to stderr if it is not writable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("docmeta error: {:#}", err);
        std::process::exit(1);
    }
}
