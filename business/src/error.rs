use thiserror::Error;

/// Why a users fetch produced no list.
///
/// Every variant is handled the same way: log it, keep the previous list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("failed to decode users payload: {0}")]
    Decode(String),
}
