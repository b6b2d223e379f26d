//! Error type for catalog requests.

/// Failure of a catalog request.
///
/// A 404 on a single-record lookup is never an error; it surfaces as `Ok(None)`
/// so batch callers can drop the slot and keep going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog answered with a status other than 2xx or 404.
    #[error("catalog request failed with HTTP status {status} ({url})")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("catalog request failed: {0}")]
    Transport(String),
    /// The response body could not be turned into a valid record.
    #[error("malformed catalog record: {0}")]
    Malformed(String),
}

impl CatalogError {
    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Malformed(_) => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Malformed(err.to_string());
        }
        match (err.status(), err.url()) {
            (Some(status), Some(url)) => Self::Status {
                status: status.as_u16(),
                url: url.to_string(),
            },
            _ => Self::Transport(err.to_string()),
        }
    }
}
