//! # connection-steps
//!
//! Workflow steps for the pipeline platform.
//!
//! * `greeter` reads a `name` input and publishes a `message`.
//! * `forwarder` asks the local connections proxy to perform a GET request and
//!   publishes the proxy's `status_code`, `body` and `duration`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use connection_steps::{App, ForwarderConfig, ReqwestClient};
//!
//! let app = App::new(ReqwestClient::new(), ForwarderConfig::default());
//! let outputs = app.run()?;
//! connection_steps::io::set_outputs(&outputs)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Testing
//!
//! The proxy call goes through the [`HttpClient`] trait, so tests can swap in
//! a double:
//!
//! ```rust
//! use connection_steps::{App, BoxError, ForwarderConfig, HttpClient, HttpResponse};
//!
//! struct Canned;
//!
//! impl HttpClient for Canned {
//!     fn post(&self, _: &str, _: &str, _: Vec<u8>) -> Result<HttpResponse, BoxError> {
//!         Ok(HttpResponse::new(200, &br#"{"status_code": 200}"#[..]))
//!     }
//! }
//!
//! let outputs = App::new(Canned, ForwarderConfig::default()).run().unwrap();
//! assert_eq!(outputs.get("status_code"), Some(&200.into()));
//! ```

pub mod client;
pub mod config;
mod error;
pub mod forwarder;
pub mod greeter;
pub mod io;
pub mod logging;
mod payload;

pub use client::{HttpClient, HttpResponse, ReqwestClient};
pub use config::ForwarderConfig;
pub use error::{BoxError, StepError};
pub use forwarder::{App, Stage};
pub use greeter::{Greeter, GreeterInputs};
pub use io::{StepInputs, StepOutputs};
pub use payload::RequestDescriptor;

/// Re-export common types
pub use serde_json::Value;
