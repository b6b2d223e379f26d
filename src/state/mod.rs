//! Application state: value types, controller state and the central `AppState`.
//!
//! Everything is re-exported under `crate::state::*`.

pub mod app_state;
pub mod detail;
pub mod page;
pub mod search;
pub mod types;

pub use app_state::{AppState, Focus, Screen};
pub use detail::{DetailRequest, DetailState};
pub use page::{DEFAULT_PAGE_SIZE, PageLoadKind, PageRequest, PageState, ScrollMetrics};
pub use search::{
    DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_SEARCH_MIN_CHARS, SearchCommand, SearchState, SearchTicket,
};
pub use types::{
    AbilityEntry, CategoryTag, ErrorInfo, ErrorKind, ItemDetail, ItemSummary, MoveEntry,
    SearchLookup, SpriteSet, StatEntry,
};
