use thiserror::Error;

pub type Result<T> = error_stack::Result<T, Error>;

/// Failure taxonomy shared by every contract client.
///
/// None of these are retried or recovered inside the client layer. Remote diagnostics travel
/// verbatim in [`Error::RemoteExecution`] so callers can tell a misuse apart from a contract
/// rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("failed to reach the transport")]
    Transport,
    #[error("signing identity is unavailable or refused to sign")]
    Signing,
    #[error("contract rejected the call: {0}")]
    RemoteExecution(String),
    #[error("no contract address is configured for this client")]
    InvalidClient,
    #[error("failed to encode the call descriptor")]
    Encoding,
    #[error("failed to decode the contract response")]
    Decoding,
    #[error("operation was cancelled")]
    Cancelled,
}

impl Error {
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::RemoteExecution(_))
    }
}
