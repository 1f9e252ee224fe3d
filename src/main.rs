//! Binary entrypoint that launches the keepsake journal server.

use std::process::ExitCode;

use keepsake::startup;

/// Start the journal server from environment configuration.
fn main() -> ExitCode {
    startup::run()
}
