use thiserror::Error;

/// Why a fetch produced no statistics. All variants take the same silent
/// failure path in the controller; the split exists for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("statistics API answered with HTTP {0}")]
    Status(u16),
    #[error("response is not a statistics payload: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Enter a username to proceed")]
    EmptyUsername,
}
