//! Pure view-mode arbitration between browse and search.

use crate::state::{ErrorInfo, ItemSummary, PageState, SearchState};

/// Which content source the screen shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Paginated browse list.
    Browse,
    /// Query is active but still too short; browse content stays visible.
    PendingSearch,
    /// Search results.
    Search,
}

/// How an error should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorDisplay<'a> {
    /// Replaces the content area; offers retry in browse mode.
    Blocking(&'a ErrorInfo),
    /// Shown above content that is still usable.
    Banner(&'a ErrorInfo),
    /// Informational empty state (a search with no matches).
    Notice(&'a ErrorInfo),
}

/// Render-ready snapshot of what the main screen should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ViewModel<'a> {
    /// Active mode.
    pub mode: ViewMode,
    /// Items to lay out in the grid.
    pub items: &'a [ItemSummary],
    /// Full-screen loading indicator.
    pub is_loading: bool,
    /// Refresh indicator.
    pub is_refreshing: bool,
    /// Footer spinner for load-more.
    pub is_loading_more: bool,
    /// Footer "end of list" marker.
    pub show_end_of_list: bool,
    /// Error presentation, if any.
    pub error: Option<ErrorDisplay<'a>>,
}

/// What: Decide what to show from the search and page states.
///
/// Inputs:
/// - `search`: Search controller state
/// - `page`: List controller state
/// - `min_chars`: Trimmed query length at which search mode takes over
///
/// Output:
/// - A [`ViewModel`] borrowing the chosen items.
///
/// Details:
/// - Search mode suppresses load-more and end-of-list affordances.
/// - A browse error with nothing loaded blocks the screen; with items it is a banner.
#[must_use]
pub fn view_model<'a>(
    search: &'a SearchState,
    page: &'a PageState,
    min_chars: usize,
) -> ViewModel<'a> {
    let query_len = search.query.trim().chars().count();
    if search.is_active && query_len >= min_chars {
        let error = search.error.as_ref().map(|e| {
            if e.is_failure() {
                ErrorDisplay::Blocking(e)
            } else {
                ErrorDisplay::Notice(e)
            }
        });
        return ViewModel {
            mode: ViewMode::Search,
            items: &search.results,
            is_loading: search.is_loading,
            is_refreshing: false,
            is_loading_more: false,
            show_end_of_list: false,
            error,
        };
    }

    let mode = if search.is_active {
        ViewMode::PendingSearch
    } else {
        ViewMode::Browse
    };
    let error = page.error.as_ref().map(|e| {
        if page.items.is_empty() {
            ErrorDisplay::Blocking(e)
        } else {
            ErrorDisplay::Banner(e)
        }
    });
    ViewModel {
        mode,
        items: &page.items,
        is_loading: page.is_initial_loading,
        is_refreshing: page.is_refreshing,
        is_loading_more: page.is_loading_more,
        show_end_of_list: !page.has_more && !page.items.is_empty(),
        error,
    }
}

/// What: Group items into rows of `columns`, preserving order.
///
/// Output:
/// - Row slices; the last row may be shorter.
#[must_use]
pub fn grid_rows(items: &[ItemSummary], columns: usize) -> Vec<&[ItemSummary]> {
    items.chunks(columns.max(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: u32) -> Vec<ItemSummary> {
        (1..=n)
            .map(|id| ItemSummary {
                id,
                name: format!("mon-{id}"),
                primary_image_url: String::new(),
                secondary_image_url: None,
                categories: Vec::new(),
            })
            .collect()
    }

    #[test]
    /// What: Active search with a long enough query shows results and hides browse affordances.
    fn search_mode_overrides_browse() {
        let page = PageState {
            items: items(12),
            is_loading_more: true,
            has_more: false,
            ..PageState::default()
        };
        let search = SearchState {
            query: "pika".into(),
            is_active: true,
            results: items(1),
            ..SearchState::default()
        };
        let vm = view_model(&search, &page, 2);
        assert_eq!(vm.mode, ViewMode::Search);
        assert_eq!(vm.items.len(), 1);
        assert!(!vm.is_loading_more);
        assert!(!vm.show_end_of_list);
    }

    #[test]
    /// What: A one-character query keeps the browse grid visible.
    fn pending_search_keeps_browse_content() {
        let page = PageState {
            items: items(3),
            ..PageState::default()
        };
        let search = SearchState {
            query: "p".into(),
            is_active: true,
            ..SearchState::default()
        };
        let vm = view_model(&search, &page, 2);
        assert_eq!(vm.mode, ViewMode::PendingSearch);
        assert_eq!(vm.items.len(), 3);
    }

    #[test]
    fn browse_error_blocks_only_when_empty() {
        let err = ErrorInfo::fetch("offline");
        let empty = PageState {
            error: Some(err.clone()),
            ..PageState::default()
        };
        let search = SearchState::default();
        assert_eq!(
            view_model(&search, &empty, 2).error,
            Some(ErrorDisplay::Blocking(&err))
        );
        let loaded = PageState {
            items: items(2),
            error: Some(err.clone()),
            ..PageState::default()
        };
        assert_eq!(
            view_model(&search, &loaded, 2).error,
            Some(ErrorDisplay::Banner(&err))
        );
    }

    #[test]
    fn empty_search_is_a_notice() {
        let search = SearchState {
            query: "zzz".into(),
            is_active: true,
            error: Some(ErrorInfo::no_results()),
            ..SearchState::default()
        };
        let page = PageState::default();
        let vm = view_model(&search, &page, 2);
        assert!(matches!(vm.error, Some(ErrorDisplay::Notice(_))));
    }

    #[test]
    /// What: Rows of two keep item order and leave a short last row.
    fn grid_rows_pairs_items_in_order() {
        let all = items(5);
        let rows = grid_rows(&all, 2);
        let ids: Vec<Vec<u32>> = rows
            .iter()
            .map(|r| r.iter().map(|i| i.id).collect())
            .collect();
        assert_eq!(ids, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }
}
