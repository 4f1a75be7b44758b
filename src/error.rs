use thiserror::Error;

use crate::notice::Resource;

/// Why a fetch against the lottery API failed.
///
/// Only [`FetchError::Rejected`] is a classified failure: the server answered
/// with a client-fault status and a `{ "message": ... }` body. Everything else
/// is unclassified and surfaces as a generic notice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server error status {status}")]
    Server { status: u16 },
    #[error("status {status} without an error message")]
    Unstructured { status: u16 },
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl FetchError {
    pub fn is_classified(&self) -> bool {
        matches!(self, FetchError::Rejected { .. })
    }

    /// Text shown to the user for this failure while fetching `resource`.
    pub fn notice_text(&self, resource: Resource) -> String {
        match self {
            FetchError::Rejected { message, .. } => message.clone(),
            _ => resource.unknown_error().to_string(),
        }
    }
}
