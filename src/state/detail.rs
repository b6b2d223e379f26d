//! Detail screen state.

use crate::state::{ErrorInfo, ItemDetail};

/// State of the single open detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    /// Identifier being shown; kept on error so retry can reuse it.
    pub key: Option<String>,
    /// Loaded record.
    pub detail: Option<ItemDetail>,
    /// Fetch in flight.
    pub is_loading: bool,
    /// Not-found or fetch failure.
    pub error: Option<ErrorInfo>,
    /// Show the back sprite instead of the front one.
    pub show_back: bool,
}

impl DetailState {
    /// URL of the sprite currently selected by the flip toggle.
    #[must_use]
    pub fn current_sprite(&self) -> Option<&str> {
        self.detail.as_ref().map(|d| {
            if self.show_back {
                d.images.back.as_str()
            } else {
                d.images.front.as_str()
            }
        })
    }
}

/// A detail fetch the loader wants performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    /// Monotonic id used to drop responses for earlier opens.
    pub id: u64,
    /// Id or name to fetch.
    pub key: String,
}
