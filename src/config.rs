//! Forwarder configuration.

use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Endpoint of the local connections proxy.
pub const DEFAULT_CONNECTIONS_URL: &str = "http://localhost:8081/api/v1/connections/send";

/// URL the proxy is asked to fetch.
pub const DEFAULT_TARGET_URL: &str = "https://httpbin.org/get";

pub const DEFAULT_USER_AGENT: &str = "Visual-Go-Test/1.0";

/// Where and what the forwarder asks the proxy to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwarderConfig {
    /// Proxy endpoint the payload is POSTed to
    pub connections_url: String,

    /// URL the proxy performs the GET against
    pub target_url: String,

    /// Headers the proxy sends with the GET (sorted for a stable payload)
    pub headers: BTreeMap<String, String>,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            connections_url: DEFAULT_CONNECTIONS_URL.to_string(),
            target_url: DEFAULT_TARGET_URL.to_string(),
            headers,
        }
    }
}

impl ForwarderConfig {
    /// Start from the default configuration.
    pub fn builder() -> ForwarderConfigBuilder {
        ForwarderConfigBuilder::new()
    }

    /// Check that both URLs parse and every header has a name.
    pub fn validate(&self) -> Result<()> {
        if self.connections_url.is_empty() {
            anyhow::bail!("Connections URL cannot be empty");
        }
        Url::parse(&self.connections_url)
            .with_context(|| format!("Invalid connections URL: {}", self.connections_url))?;

        if self.target_url.is_empty() {
            anyhow::bail!("Target URL cannot be empty");
        }
        Url::parse(&self.target_url)
            .with_context(|| format!("Invalid target URL: {}", self.target_url))?;

        if self.headers.keys().any(|name| name.trim().is_empty()) {
            anyhow::bail!("Header names cannot be empty");
        }

        Ok(())
    }
}

/// Builder for [`ForwarderConfig`].
#[derive(Debug, Clone, Default)]
pub struct ForwarderConfigBuilder {
    config: ForwarderConfig,
}

impl ForwarderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connections_url(mut self, url: &str) -> Self {
        self.config.connections_url = url.to_string();
        self
    }

    pub fn target_url(mut self, url: &str) -> Self {
        self.config.target_url = url.to_string();
        self
    }

    /// Add or replace a header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.config.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Remove all headers, including the defaults.
    pub fn clear_headers(mut self) -> Self {
        self.config.headers.clear();
        self
    }

    pub fn build(self) -> ForwarderConfig {
        self.config
    }
}

impl From<ForwarderConfigBuilder> for ForwarderConfig {
    fn from(builder: ForwarderConfigBuilder) -> Self {
        builder.build()
    }
}

/// Parse a forwarder configuration from YAML. Missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use connection_steps::config::parse_yaml;
///
/// let yaml = r#"
/// target_url: https://example.com/status
/// headers:
///   Accept: text/plain
/// "#;
///
/// let config = parse_yaml(yaml).unwrap();
/// assert_eq!(config.target_url, "https://example.com/status");
/// assert_eq!(config.headers.len(), 1);
/// ```
pub fn parse_yaml(yaml: &str) -> Result<ForwarderConfig> {
    let config: ForwarderConfig =
        serde_yaml::from_str(yaml).context("Failed to parse forwarder config YAML")?;

    config.validate()?;

    Ok(config)
}

/// Load and parse a forwarder configuration from a YAML file.
pub fn load_file(path: impl AsRef<Path>) -> Result<ForwarderConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_yaml(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
