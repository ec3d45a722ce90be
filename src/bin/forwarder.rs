//! Forwarding step: asks the connections proxy to GET the configured target
//! and publishes `status_code`, `body` and `duration`.

use connection_steps::{io, logging, App, ForwarderConfig, ReqwestClient, StepError};
use std::process::ExitCode;

fn run() -> Result<(), StepError> {
    let app = App::new(ReqwestClient::new(), ForwarderConfig::default());
    let outputs = app.run()?;
    io::set_outputs(&outputs)?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Step failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
