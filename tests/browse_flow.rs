//! Browse pagination and detail flows driven through the runtime handlers.

mod common;

use common::FakeCatalog;
use dexterm::app::runtime::handlers::{handle_detail_response, handle_page_response};
use dexterm::app::runtime::{Dispatch, DispatchCapture};
use dexterm::logic::{DetailResponse, ErrorDisplay, Outcome, PageResponse, ViewMode};
use dexterm::sources::Catalog;
use dexterm::state::{AppState, ErrorKind};

/// Answer every queued page request until the dispatch goes quiet.
async fn drain_pages(
    app: &mut AppState,
    catalog: &FakeCatalog,
    dispatch: &Dispatch,
    capture: &mut DispatchCapture,
) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    while let Ok(request) = capture.pages.try_recv() {
        let result = catalog.list_page(request.limit, request.offset).await;
        outcomes.push(handle_page_response(
            app,
            PageResponse { request, result },
            dispatch,
        ));
    }
    outcomes
}

#[tokio::test]
/// What: 20 items with page size 12 load as 12 then 8, and the list then stops asking.
async fn twenty_items_page_twice_then_end() {
    let catalog = FakeCatalog::with_count(20);
    let (dispatch, mut capture) = Dispatch::capture();
    let mut app = AppState::default();

    dispatch.page(app.list.initial_load());
    drain_pages(&mut app, &catalog, &dispatch, &mut capture).await;
    assert_eq!(app.list.state().items.len(), 12);
    assert!(app.list.state().has_more);

    // Tall viewport: scrolling near the bottom pages in the rest.
    app.visible_rows = 10;
    for _ in 0..5 {
        dispatch.page(app.list.on_scroll(app.scroll_metrics()));
    }
    drain_pages(&mut app, &catalog, &dispatch, &mut capture).await;

    let state = app.list.state();
    assert_eq!(state.items.len(), 20);
    assert!(!state.has_more);
    assert_eq!(state.next_offset, 24);
    assert_eq!(catalog.list_calls(), 2);
    let ids: Vec<u32> = state.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    assert!(app.view().show_end_of_list);

    dispatch.page(app.list.on_scroll(app.scroll_metrics()));
    assert!(capture.pages.try_recv().is_err());
}

#[tokio::test]
/// What: A terminal taller than one page keeps loading until it is covered.
async fn tall_viewport_autofills() {
    let catalog = FakeCatalog::with_count(60);
    let (dispatch, mut capture) = Dispatch::capture();
    let mut app = AppState::default();
    app.visible_rows = 15;

    dispatch.page(app.list.initial_load());
    drain_pages(&mut app, &catalog, &dispatch, &mut capture).await;

    // 15 visible rows of 2 cards plus the one-row threshold.
    assert!(app.list.state().items.len() >= 32);
    assert!(app.list.state().has_more);
}

#[tokio::test]
/// What: A failed initial load blocks the screen; retry starts over and recovers.
async fn failed_initial_load_is_retryable() {
    let failing = FakeCatalog::with_count(5).with_failing_pages();
    let (dispatch, mut capture) = Dispatch::capture();
    let mut app = AppState::default();

    dispatch.page(app.list.initial_load());
    let outcomes = drain_pages(&mut app, &failing, &dispatch, &mut capture).await;
    assert!(matches!(outcomes.as_slice(), [Outcome::Surfaced(_)]));
    assert!(matches!(app.view().error, Some(ErrorDisplay::Blocking(_))));

    let healthy = FakeCatalog::with_count(5);
    dispatch.page(app.list.retry());
    drain_pages(&mut app, &healthy, &dispatch, &mut capture).await;
    let view = app.view();
    assert_eq!(view.mode, ViewMode::Browse);
    assert!(view.error.is_none());
    assert_eq!(view.items.len(), 5);
    assert!(view.show_end_of_list);
}

#[tokio::test]
/// What: Opening 99999 yields a retryable not-found that keeps the identifier.
async fn unknown_detail_is_retryable_not_found() {
    let catalog = FakeCatalog::with_count(3);
    let mut app = AppState::default();

    let request = app.detail.open("99999");
    let result = catalog.get_detail(&request.key).await;
    let outcome = handle_detail_response(&mut app, DetailResponse { request, result });

    assert!(matches!(&outcome, Outcome::Surfaced(e) if e.kind == ErrorKind::NotFound));
    assert_eq!(app.detail.state().key.as_deref(), Some("99999"));
    let again = app.detail.retry().expect("retry issues a request");
    assert_eq!(again.key, "99999");
}

#[tokio::test]
/// What: A detail answer for a screen the user already left is dropped.
async fn detail_answer_after_close_is_discarded() {
    let catalog = FakeCatalog::with_count(3);
    let mut app = AppState::default();

    let first = app.detail.open("1");
    let second = app.detail.open("2");
    let late = catalog.get_detail(&first.key).await;
    assert_eq!(
        handle_detail_response(&mut app, DetailResponse { request: first, result: late }),
        Outcome::Discarded
    );
    let fresh = catalog.get_detail(&second.key).await;
    assert_eq!(
        handle_detail_response(&mut app, DetailResponse { request: second, result: fresh }),
        Outcome::Applied
    );
    assert_eq!(app.detail.state().detail.as_ref().map(|d| d.id), Some(2));
}
