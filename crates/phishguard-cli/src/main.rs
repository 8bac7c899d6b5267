use phishguard_core::logging;

mod cli;
mod render;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        match logging::init_logging_stderr() {
            Ok(()) => tracing::warn!("file logging unavailable, using stderr: {:#}", err),
            Err(stderr_err) => {
                eprintln!("phishguard: logging disabled: {err:#}; {stderr_err:#}")
            }
        }
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("phishguard error: {:#}", err);
        std::process::exit(1);
    }
}
