//! Greeting step: `{"name": ...}` on stdin, `{"message": ...}` on stdout.

use anyhow::{Context, Result};
use connection_steps::{io, logging, Greeter};

fn main() -> Result<()> {
    logging::init();

    let inputs = io::get_inputs();
    let outputs = Greeter::default().run(&inputs);

    io::set_outputs(&outputs).context("failed to write outputs")
}
