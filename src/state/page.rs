//! Browse list state and the page requests that feed it.

use crate::state::{ErrorInfo, ItemSummary};

/// Default number of items fetched per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Incrementally loaded browse list.
///
/// `items` never holds two entries with the same id; `next_offset` grows by the page size with
/// every successful append.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PageState {
    /// Loaded items in catalog order.
    pub items: Vec<ItemSummary>,
    /// Offset of the next page to request.
    pub next_offset: usize,
    /// False once a page came back shorter than the page size.
    pub has_more: bool,
    /// First page (or retry of it) is loading.
    pub is_initial_loading: bool,
    /// A follow-up page is loading.
    pub is_loading_more: bool,
    /// A pull-to-refresh style reload is running.
    pub is_refreshing: bool,
    /// Last surfaced failure, cleared by the next initial load or refresh.
    pub error: Option<ErrorInfo>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_offset: 0,
            has_more: true,
            is_initial_loading: false,
            is_loading_more: false,
            is_refreshing: false,
            error: None,
        }
    }
}

impl PageState {
    /// True while any of the three loads is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.is_initial_loading || self.is_loading_more || self.is_refreshing
    }
}

/// Which trigger produced a page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLoadKind {
    /// First page of the session (or a retry of it).
    Initial,
    /// Next page appended at the bottom.
    More,
    /// Reload from offset zero, replacing items on success.
    Refresh,
}

/// A page fetch the list controller wants performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Monotonic id used to match the response to this request.
    pub id: u64,
    /// Trigger that issued the request.
    pub kind: PageLoadKind,
    /// Page size.
    pub limit: usize,
    /// First index requested.
    pub offset: usize,
}

/// Scroll position reported by the presentation layer.
///
/// Units are whatever the host measures in (pixels, rows); only the comparison matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Position of the bottom edge of the viewport.
    pub viewport_bottom: usize,
    /// Total height of the scrollable content.
    pub content_height: usize,
}
