//! Central `AppState` container shared by the event, runtime and UI layers.

use crate::logic::{
    DetailLoader, ListController, SearchController, ViewMode, ViewModel, grid_rows, view_model,
};
use crate::state::{ItemSummary, ScrollMetrics};
use crate::theme::{Settings, ThemeMode};

/// Number of cards per grid row.
pub const GRID_COLUMNS: usize = 2;

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Grid of cards with the search bar.
    #[default]
    Browse,
    /// Full record of one item.
    Detail,
}

/// Which widget receives typed characters on the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the grid selection; letters are commands.
    #[default]
    Grid,
    /// Characters edit the search query.
    Search,
}

/// Global application state.
///
/// Mutated by input handlers and by responses coming back from the workers; read by the
/// renderer on every frame.
#[derive(Debug)]
pub struct AppState {
    /// Current screen.
    pub screen: Screen,
    /// Input focus on the browse screen.
    pub focus: Focus,
    /// Browse list controller.
    pub list: ListController,
    /// Search controller.
    pub search: SearchController,
    /// Detail loader.
    pub detail: DetailLoader,
    /// Index of the highlighted card in the current view's items.
    pub selected: usize,
    /// First grid row drawn.
    pub scroll_row: usize,
    /// Grid rows that fit on screen, updated by the renderer.
    pub visible_rows: usize,
    /// Active color scheme.
    pub theme: ThemeMode,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AppState {
    /// What: Build state from loaded settings.
    ///
    /// Details:
    /// - The list controller measures near-bottom distance in grid rows.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            screen: Screen::Browse,
            focus: Focus::Grid,
            list: ListController::new(settings.page_size).with_threshold(settings.near_bottom_rows),
            search: SearchController::new(settings.search_min_chars),
            detail: DetailLoader::default(),
            selected: 0,
            scroll_row: 0,
            visible_rows: 1,
            theme: settings.theme,
        }
    }

    /// Render-ready view of the browse screen.
    #[must_use]
    pub fn view(&self) -> ViewModel<'_> {
        view_model(
            self.search.state(),
            self.list.state(),
            self.search.min_chars(),
        )
    }

    /// Item under the selection, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ItemSummary> {
        self.view().items.get(self.selected)
    }

    /// Number of grid rows for the current view.
    #[must_use]
    pub fn row_count(&self) -> usize {
        grid_rows(self.view().items, GRID_COLUMNS).len()
    }

    /// Scroll position in grid rows, as fed to the list controller.
    #[must_use]
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            viewport_bottom: self.scroll_row + self.visible_rows,
            content_height: self.row_count(),
        }
    }

    /// True when scrolling should page in more browse items.
    #[must_use]
    pub fn scroll_feeds_list(&self) -> bool {
        matches!(self.view().mode, ViewMode::Browse | ViewMode::PendingSearch)
    }

    /// What: Clamp the selection to the current items and keep its row on screen.
    pub fn clamp_selection(&mut self) {
        let len = self.view().items.len();
        if len == 0 {
            self.selected = 0;
            self.scroll_row = 0;
            return;
        }
        self.selected = self.selected.min(len - 1);
        let row = self.selected / GRID_COLUMNS;
        let visible = self.visible_rows.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }

    /// What: Move the selection by whole rows and columns, saturating at the edges.
    pub fn move_selection(&mut self, rows: isize, cols: isize) {
        let len = self.view().items.len();
        if len == 0 {
            return;
        }
        let columns = isize::try_from(GRID_COLUMNS).unwrap_or(1);
        let delta = rows * columns + cols;
        let target = self.selected.saturating_add_signed(delta);
        self.selected = target.min(len - 1);
        self.clamp_selection();
    }

    /// What: Scroll the viewport by `rows` without moving past the content.
    pub fn scroll_by(&mut self, rows: isize) {
        let max_top = self.row_count().saturating_sub(1);
        self.scroll_row = self.scroll_row.saturating_add_signed(rows).min(max_top);
        let first = self.scroll_row * GRID_COLUMNS;
        let last = (self.scroll_row + self.visible_rows.max(1)) * GRID_COLUMNS;
        if self.selected < first || self.selected >= last {
            self.selected = first;
        }
        self.clamp_selection();
    }

    /// Reset selection and scroll, e.g. when the view switches content.
    pub const fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::PageResponse;

    fn loaded(n: u32, visible_rows: usize) -> AppState {
        let mut app = AppState::default();
        app.visible_rows = visible_rows;
        let req = app.list.initial_load().expect("initial");
        app.list.apply(PageResponse {
            request: req,
            result: Ok((1..=n)
                .map(|id| ItemSummary {
                    id,
                    name: format!("mon-{id}"),
                    primary_image_url: String::new(),
                    secondary_image_url: None,
                    categories: Vec::new(),
                })
                .collect()),
        });
        app
    }

    #[test]
    /// What: Moving down a row follows the grid layout and scrolls to keep the selection visible.
    fn selection_moves_by_rows_and_scrolls() {
        let mut app = loaded(12, 2);
        app.move_selection(1, 1);
        assert_eq!(app.selected, 3);
        app.move_selection(2, 0);
        assert_eq!(app.selected, 7);
        assert_eq!(app.scroll_row, 2);
        app.move_selection(10, 0);
        assert_eq!(app.selected, 11);
        app.move_selection(-10, 0);
        assert_eq!(app.selected, 0);
        assert_eq!(app.scroll_row, 0);
    }

    #[test]
    /// What: Scroll metrics are measured in grid rows.
    fn scroll_metrics_use_grid_rows() {
        let mut app = loaded(12, 3);
        app.scroll_by(2);
        assert_eq!(
            app.scroll_metrics(),
            ScrollMetrics {
                viewport_bottom: 5,
                content_height: 6,
            }
        );
        assert!(app.selected >= 4);
    }
}
