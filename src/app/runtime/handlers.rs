//! Apply worker responses to `AppState`.

use tracing::{debug, info};

use super::channels::{Dispatch, SearchEvent};
use crate::logic::{DetailResponse, Outcome, PageResponse};
use crate::state::AppState;

/// What: Apply a page response and keep the grid filled.
///
/// Inputs:
/// - `app`: Application state
/// - `response`: Page worker answer
/// - `dispatch`: Used to request the next page when the screen is still not full
///
/// Output:
/// - The controller's [`Outcome`].
///
/// Details:
/// - After a successful page the near-bottom check runs again, so a tall terminal keeps
///   loading until the viewport is covered or the catalog ends. Swallowed failures do not
///   retry here; the next scroll does.
pub fn handle_page_response(
    app: &mut AppState,
    response: PageResponse,
    dispatch: &Dispatch,
) -> Outcome {
    let outcome = app.list.apply(response);
    match &outcome {
        Outcome::Applied => {
            app.clamp_selection();
            if app.scroll_feeds_list() {
                dispatch.page(app.list.on_scroll(app.scroll_metrics()));
            }
        }
        Outcome::Surfaced(err) => info!(error = %err, "[Runtime] page load failed"),
        Outcome::Swallowed(_) | Outcome::Discarded => {}
    }
    outcome
}

/// What: Apply a search worker event.
///
/// Output:
/// - The controller's [`Outcome`]; new results reset the grid selection.
pub fn handle_search_event(app: &mut AppState, event: SearchEvent) -> Outcome {
    match event {
        SearchEvent::Started(ticket) => app.search.on_started(&ticket),
        SearchEvent::Finished(ticket, result) => {
            let outcome = app.search.apply(&ticket, result);
            if !outcome.is_discarded() {
                app.reset_selection();
                app.clamp_selection();
            }
            debug!(id = ticket.id, ?outcome, "[Runtime] search event handled");
            outcome
        }
    }
}

/// What: Apply a detail response.
pub fn handle_detail_response(app: &mut AppState, response: DetailResponse) -> Outcome {
    app.detail.apply(response)
}
