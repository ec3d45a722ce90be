//! Request descriptor sent to the connections proxy.

use crate::config::ForwarderConfig;
use crate::error::StepError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An outbound request the proxy performs on our behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// HTTP method the proxy uses (always "GET" here)
    pub method: String,

    /// URL the proxy requests
    pub url: String,

    /// Headers the proxy attaches
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl RequestDescriptor {
    /// Describe a GET request.
    pub fn get(url: &str, headers: BTreeMap<String, String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.to_string(),
            headers,
        }
    }

    /// Describe the GET request a forwarder configuration asks for.
    pub fn from_config(config: &ForwarderConfig) -> Self {
        Self::get(&config.target_url, config.headers.clone())
    }

    /// Serialize to the JSON body POSTed to the proxy.
    pub fn to_json(&self) -> Result<Vec<u8>, StepError> {
        serde_json::to_vec(self).map_err(StepError::Serialization)
    }
}
