/// Top-level error type for the PayOK client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service answered with its own error envelope.
    #[error("[{code}] PayOK Error: {message}")]
    Api {
        /// Error code reported by the service.
        code: String,
        /// Human-readable text reported by the service.
        message: String,
    },

    /// A response payload did not match the documented schema.
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network-level failure, surfaced from the transport untouched.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The call was rejected before anything was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
