use thiserror::Error;

/// Error type for control-plane gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gateway returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Failed to decode gateway response: {0}")]
    Decode(String),
}
