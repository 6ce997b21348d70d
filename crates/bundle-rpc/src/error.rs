use crate::request::RpcErrorObject;

/// Result type for [`BlockEngineClient`] operations.
///
/// [`BlockEngineClient`]: crate::client::BlockEngineClient
pub type Result<T> = std::result::Result<T, BundleRpcError>;

/// Errors returned by the [`BlockEngineClient`].
///
/// [`BlockEngineClient`]: crate::client::BlockEngineClient
#[derive(thiserror::Error, Debug)]
pub enum BundleRpcError {
    /// An error occurred while contacting the block engine.
    #[error("error sending request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request body could not be serialized.
    #[error("error marshaling request: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The response body or result could not be deserialized.
    #[error("error decoding response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The block engine returned a JSON-RPC error.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    Rpc(RpcErrorObject),

    /// The block engine answered with a non-success status and a body that
    /// is not a JSON-RPC envelope. Takes the place of [`Self::Decoding`] for
    /// non-2xx responses; the decode failure is kept as the source.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status.
        status: reqwest::StatusCode,
        /// The raw response body.
        body: String,
        /// Why the body could not be decoded as an envelope.
        #[source]
        source: serde_json::Error,
    },

    /// Input was rejected before any request was made.
    #[error("invalid request: {0}")]
    Validation(&'static str),

    /// The tip account list returned by the block engine was empty.
    #[error("no tip accounts available")]
    NoTipAccounts,

    /// An error occurred while parsing the URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl BundleRpcError {
    /// The JSON-RPC error object, if the server reported one.
    pub const fn rpc_error(&self) -> Option<&RpcErrorObject> {
        match self {
            Self::Rpc(err) => Some(err),
            _ => None,
        }
    }

    /// True if the error came from the transport layer.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
