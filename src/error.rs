//! Error kinds raised while running a step.

use thiserror::Error;

/// Boxed error returned by [`crate::HttpClient`] implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a single stage of the forwarder. Every variant is fatal to the run.
#[derive(Error, Debug)]
pub enum StepError {
    #[error("failed to prepare payload: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to send request: {0}")]
    Transport(#[source] BoxError),

    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to write outputs: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_prefixed_by_stage() {
        let err = StepError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "failed to send request: connection refused");

        let decode = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = StepError::Decode(decode);
        assert!(err.to_string().starts_with("failed to parse response: "));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = StepError::Transport("network error".into());
        assert_eq!(err.source().unwrap().to_string(), "network error");
    }
}
