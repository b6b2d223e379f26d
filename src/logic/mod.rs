//! Core controllers: browse list, search, view-mode arbitration and detail loading.
//!
//! Controllers never perform I/O. Triggers return the request the runtime should run, and
//! `apply` folds the response back in, reporting an [`Outcome`].

pub mod arbiter;
pub mod detail;
pub mod list;
pub mod search;

pub use arbiter::{ErrorDisplay, ViewMode, ViewModel, grid_rows, view_model};
pub use detail::{DetailLoader, DetailResponse, MAX_SAMPLE_MOVES, STAT_BAR_MAX, sample_moves, stat_ratio};
pub use list::{DEFAULT_NEAR_BOTTOM_THRESHOLD, ListController, PageResponse, is_near_bottom};
pub use search::SearchController;

use crate::state::ErrorInfo;

/// What applying a response did to controller state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// State updated with the response.
    Applied,
    /// A failure was stored in state for the user to see.
    Surfaced(ErrorInfo),
    /// A failure was logged but left no trace in state.
    Swallowed(ErrorInfo),
    /// The response did not match the pending request and was ignored.
    Discarded,
}

impl Outcome {
    /// True when the response was ignored as stale.
    #[must_use]
    pub const fn is_discarded(&self) -> bool {
        matches!(self, Self::Discarded)
    }
}
