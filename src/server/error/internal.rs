use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs.
///
/// All variants result in a 500 Internal Server Error with a generic message returned
/// to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to sign a session token.
    #[error("Failed to sign session token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    /// Failure to build a URL from configured base URL and a path.
    #[error("Failed to build URL from '{base}' and '{path}': {source}")]
    UrlJoin {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// Failure to serialize an outbound event payload.
    #[error("Failed to serialize event '{event}': {source}")]
    EventSerialization {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}
