//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use eventhub_cli::CliError;

#[expect(clippy::print_stderr, reason = "the binary reports failures on stderr")]
fn main() -> ExitCode {
    match eventhub_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("eventhub: {err}");
            ExitCode::FAILURE
        }
    }
}
