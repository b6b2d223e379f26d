//! Browse list controller: initial load, load-more, refresh and near-bottom detection.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::Outcome;
use crate::sources::CatalogError;
use crate::state::{
    DEFAULT_PAGE_SIZE, ErrorInfo, ItemSummary, PageLoadKind, PageRequest, PageState,
    ScrollMetrics,
};

/// Distance from the content end (in host units) that counts as "near the bottom".
pub const DEFAULT_NEAR_BOTTOM_THRESHOLD: usize = 200;

/// What: Decide whether the viewport is close enough to the end to fetch more.
///
/// Inputs:
/// - `metrics`: Current viewport bottom and content height
/// - `threshold`: Allowed distance from the end
///
/// Output:
/// - `true` when `viewport_bottom + threshold >= content_height`.
#[must_use]
pub const fn is_near_bottom(metrics: ScrollMetrics, threshold: usize) -> bool {
    metrics.viewport_bottom.saturating_add(threshold) >= metrics.content_height
}

/// Response to a [`PageRequest`].
#[derive(Clone, Debug)]
pub struct PageResponse {
    /// Request this answers.
    pub request: PageRequest,
    /// Items in catalog order, or the failure.
    pub result: Result<Vec<ItemSummary>, CatalogError>,
}

/// Owns [`PageState`] and serializes the three page loads.
///
/// At most one page request is pending at a time; triggers that arrive while one is pending are
/// refused by returning `None`.
#[derive(Debug)]
pub struct ListController {
    state: PageState,
    page_size: usize,
    threshold: usize,
    pending: Option<PageRequest>,
    next_request_id: u64,
}

impl Default for ListController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListController {
    /// What: Create a controller with the given page size (clamped to at least one).
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            state: PageState::default(),
            page_size: page_size.max(1),
            threshold: DEFAULT_NEAR_BOTTOM_THRESHOLD,
            pending: None,
            next_request_id: 0,
        }
    }

    /// What: Replace the near-bottom threshold used by [`Self::on_scroll`].
    #[must_use]
    pub const fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Current list state.
    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    /// Configured page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Request awaiting its response, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PageRequest> {
        self.pending.as_ref()
    }

    fn issue(&mut self, kind: PageLoadKind, offset: usize) -> PageRequest {
        self.next_request_id += 1;
        let request = PageRequest {
            id: self.next_request_id,
            kind,
            limit: self.page_size,
            offset,
        };
        debug!(id = request.id, ?kind, offset, limit = request.limit, "page request issued");
        self.pending = Some(request);
        request
    }

    /// What: Start the first page load.
    ///
    /// Output:
    /// - The request to run, or `None` when another load is pending.
    pub fn initial_load(&mut self) -> Option<PageRequest> {
        if self.pending.is_some() {
            return None;
        }
        self.state.is_initial_loading = true;
        self.state.error = None;
        Some(self.issue(PageLoadKind::Initial, 0))
    }

    /// What: Retry after a surfaced failure.
    ///
    /// Details:
    /// - With nothing loaded this reruns the initial load; with items on screen it refreshes so
    ///   they stay visible while the reload runs.
    pub fn retry(&mut self) -> Option<PageRequest> {
        if self.state.items.is_empty() {
            self.initial_load()
        } else {
            self.refresh()
        }
    }

    /// What: Request the next page.
    ///
    /// Output:
    /// - `None` when a load is pending or the list is exhausted.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.pending.is_some() || !self.state.has_more {
            return None;
        }
        self.state.is_loading_more = true;
        let offset = self.state.next_offset;
        Some(self.issue(PageLoadKind::More, offset))
    }

    /// What: Reload from offset zero, keeping current items until the response lands.
    pub fn refresh(&mut self) -> Option<PageRequest> {
        if self.pending.is_some() {
            return None;
        }
        self.state.next_offset = 0;
        self.state.has_more = true;
        self.state.error = None;
        self.state.is_refreshing = true;
        Some(self.issue(PageLoadKind::Refresh, 0))
    }

    /// What: Feed a scroll position; loads more when near the bottom.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<PageRequest> {
        if is_near_bottom(metrics, self.threshold) {
            self.load_more()
        } else {
            None
        }
    }

    /// What: Fold a page response into state.
    ///
    /// Output:
    /// - `Discarded` unless the response answers the pending request.
    /// - Load-more failures are `Swallowed`; initial/refresh failures are `Surfaced`.
    pub fn apply(&mut self, response: PageResponse) -> Outcome {
        if self.pending.as_ref() != Some(&response.request) {
            debug!(id = response.request.id, "discarding page response for a stale request");
            return Outcome::Discarded;
        }
        self.pending = None;
        let PageResponse { request, result } = response;
        match request.kind {
            PageLoadKind::Initial => self.state.is_initial_loading = false,
            PageLoadKind::More => self.state.is_loading_more = false,
            PageLoadKind::Refresh => self.state.is_refreshing = false,
        }

        let items = match result {
            Ok(items) => items,
            Err(e) => {
                let info = ErrorInfo::fetch(&e);
                return if request.kind == PageLoadKind::More {
                    warn!(offset = request.offset, error = %e, "load more failed; will retry on next scroll");
                    Outcome::Swallowed(info)
                } else {
                    warn!(kind = ?request.kind, error = %e, "page load failed");
                    self.state.error = Some(info.clone());
                    Outcome::Surfaced(info)
                };
            }
        };

        let count = items.len();
        match request.kind {
            PageLoadKind::Initial | PageLoadKind::Refresh => {
                self.state.items = dedup_by_id(items, &HashSet::new());
            }
            PageLoadKind::More => {
                if count == 0 {
                    self.state.has_more = false;
                    info!(total = self.state.items.len(), "reached end of catalog");
                    return Outcome::Applied;
                }
                let seen: HashSet<u32> = self.state.items.iter().map(|i| i.id).collect();
                let fresh = dedup_by_id(items, &seen);
                self.state.items.extend(fresh);
            }
        }
        self.state.next_offset = request.offset + request.limit;
        self.state.has_more = count == request.limit;
        debug!(
            kind = ?request.kind,
            received = count,
            total = self.state.items.len(),
            next_offset = self.state.next_offset,
            has_more = self.state.has_more,
            "page applied"
        );
        Outcome::Applied
    }
}

/// Keep the first occurrence of each id not already in `seen`, preserving order.
fn dedup_by_id(items: Vec<ItemSummary>, seen: &HashSet<u32>) -> Vec<ItemSummary> {
    let mut seen = seen.clone();
    items.into_iter().filter(|i| seen.insert(i.id)).collect()
}
