//! Request-forwarding step.
//!
//! Describes a GET request, hands it to the connections proxy and republishes
//! the proxy's `status_code`, `body` and `duration` as step outputs.

use crate::client::{HttpClient, HttpResponse};
use crate::config::ForwarderConfig;
use crate::error::StepError;
use crate::io::StepOutputs;
use crate::payload::RequestDescriptor;
use serde_json::{Map, Value};
use std::fmt;

/// Content type of the payload sent to the proxy.
pub const CONTENT_TYPE: &str = "application/json";

/// Result keys copied to the step outputs, in publication order.
pub const OUTPUT_KEYS: [&str; 3] = ["status_code", "body", "duration"];

/// Stages a run passes through. A failure stops the run at the stage it occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prepared,
    Sent,
    Parsed,
    Published,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Prepared => "prepared",
            Stage::Sent => "sent",
            Stage::Parsed => "parsed",
            Stage::Published => "published",
        };
        f.write_str(name)
    }
}

/// The forwarder with its HTTP client and configuration.
#[derive(Debug)]
pub struct App<C> {
    client: C,
    config: ForwarderConfig,
}

impl<C: HttpClient> App<C> {
    pub fn new(client: C, config: ForwarderConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &ForwarderConfig {
        &self.config
    }

    /// Build the JSON request descriptor.
    pub fn prepare_payload(&self) -> Result<Vec<u8>, StepError> {
        RequestDescriptor::from_config(&self.config).to_json()
    }

    /// POST the payload to the connections proxy.
    pub fn send_request(&self, payload: Vec<u8>) -> Result<HttpResponse, StepError> {
        self.client
            .post(&self.config.connections_url, CONTENT_TYPE, payload)
            .map_err(StepError::Transport)
    }

    /// Decode the proxy's JSON response. The body is released before returning.
    ///
    /// A `null` document decodes to an empty result.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Map<String, Value>, StepError> {
        let body = response.into_body();
        let result: Option<Map<String, Value>> =
            serde_json::from_reader(body).map_err(StepError::Decode)?;
        Ok(result.unwrap_or_default())
    }

    /// Copy the published keys from a decoded result. Missing keys become `null`.
    pub fn outputs(&self, result: &Map<String, Value>) -> StepOutputs {
        let mut outputs = StepOutputs::new();
        for key in OUTPUT_KEYS {
            outputs.set(key, result.get(key).cloned().unwrap_or(Value::Null));
        }
        outputs
    }

    /// Run all stages and return the outputs to publish.
    pub fn run(&self) -> Result<StepOutputs, StepError> {
        tracing::info!(
            proxy = %self.config.connections_url,
            target = %self.config.target_url,
            "Forwarding request"
        );
        let start = std::time::Instant::now();

        let payload = self.prepare_payload()?;
        tracing::debug!(stage = %Stage::Prepared, bytes = payload.len(), "Stage completed");

        let response = self.send_request(payload)?;
        tracing::debug!(stage = %Stage::Sent, status = response.status(), "Stage completed");

        let result = self.parse_response(response)?;
        tracing::debug!(stage = %Stage::Parsed, keys = result.len(), "Stage completed");

        let outputs = self.outputs(&result);
        tracing::debug!(stage = %Stage::Published, outputs = outputs.len(), "Stage completed");

        let total_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(total_ms = total_ms, "Forwarding completed");

        Ok(outputs)
    }
}
