//! Save/fetch error taxonomy shared by the gateway and the edit controller.

use crate::uploads::AssetKind;
use thiserror::Error;

/// Everything that can go wrong between "user pressed save" and a promoted
/// baseline. `AuthExpired` is handled globally (credentials cleared, redirect
/// to login) and is never surfaced as an inline message; the rest are.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaveError {
    /// 401/403 from the backend, or no token found in any storage key.
    #[error("session expired; sign in again")]
    AuthExpired,

    /// A staged upload exceeds its byte limit. Raised client-side, before
    /// any network call.
    #[error("{kind} is too large ({size} bytes; limit {limit} bytes)")]
    TooLarge {
        kind: AssetKind,
        size: usize,
        limit: usize,
    },

    /// Non-auth 4xx; the message comes from the server and is shown verbatim.
    #[error("{0}")]
    ValidationFailed(String),

    /// Network failure or 5xx. The caller may retry immediately.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Attempted save of an unchanged record; rejected before any network
    /// call.
    #[error("no changes to save")]
    NoChanges,
}

impl SaveError {
    /// Whether an immediate retry of the same request is reasonable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SaveError::Unavailable(_))
    }
}
