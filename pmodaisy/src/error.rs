//! Error types for the DAISY Online client

use crate::soap::SoapFault;

/// Result type alias for DAISY Online operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`DaisyClient`](crate::DaisyClient) calls
///
/// Callers are expected to branch on [`Error::Fault`]: it is the only
/// variant carrying a message from the remote service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP exchange did not complete
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A message could not be encoded or a response could not be decoded
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// The service answered with a SOAP fault
    #[error("{0}")]
    Fault(#[from] SoapFault),

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The remote fault, if the service signaled one
    pub fn fault(&self) -> Option<&SoapFault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is an encoding error
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }
}

/// Network level failures. Never retried by the client.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (connection, TLS, timeout...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    /// Reading the response body failed
    #[error("failed to read response body: {0}")]
    Io(#[source] std::io::Error),

    /// The call context was cancelled
    #[error("call cancelled")]
    Cancelled,

    /// The call context deadline has passed
    #[error("call deadline exceeded")]
    DeadlineExceeded,
}

/// Malformed XML on the send or receive path
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// XML syntax error
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The payload element does not match the destination type
    #[error("XML deserialization failed: {0}")]
    Deserialize(#[from] quick_xml::de::DeError),

    /// The request payload could not be serialized
    #[error("XML serialization failed: {0}")]
    Serialize(String),

    /// Writing the envelope failed
    #[error("failed to write envelope: {0}")]
    Io(#[from] std::io::Error),

    /// The response is not valid UTF-8
    #[error("invalid UTF-8 in payload: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The gzip stream is truncated or corrupted
    #[error("gzip decompression failed: {0}")]
    Gzip(#[source] std::io::Error),

    #[error("missing SOAP Envelope")]
    MissingEnvelope,

    #[error("missing SOAP Body")]
    MissingBody,

    /// The document ended before the Body was closed
    #[error("unexpected end of document inside SOAP {0}")]
    UnexpectedEof(&'static str),

    /// Non-success HTTP status with an empty Body
    #[error("HTTP status {status} without SOAP fault")]
    MissingFault { status: u16 },
}
