//! Search state and the tickets exchanged with the debounced search worker.

use crate::state::{ErrorInfo, ItemSummary};

/// Default debounce window for search input, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
/// Default minimum trimmed query length before a search is issued.
pub const DEFAULT_SEARCH_MIN_CHARS: usize = 2;

/// Current search input and what it produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Raw query text as typed.
    pub query: String,
    /// True whenever the trimmed query is non-empty.
    pub is_active: bool,
    /// The current ticket is being fetched.
    pub is_loading: bool,
    /// Matches for the current ticket.
    pub results: Vec<ItemSummary>,
    /// Failure or the empty-result marker for the current ticket.
    pub error: Option<ErrorInfo>,
}

/// One search submission. Only the most recently issued ticket may change state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    /// Monotonic id.
    pub id: u64,
    /// Trimmed term sent to the catalog.
    pub term: String,
}

/// Instruction for the debounce worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchCommand {
    /// Drop any pending (not yet fired) ticket.
    Cancel,
    /// Replace the pending ticket and restart the debounce window.
    Schedule(SearchTicket),
}
