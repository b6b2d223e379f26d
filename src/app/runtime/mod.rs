use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};
use tracing::{info, warn};

use crate::sources::{Catalog, CatalogClient, HttpApi};
use crate::state::AppState;
use crate::theme::Settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
pub mod handlers;
mod workers;

pub use channels::{Channels, Dispatch, DispatchCapture, SearchEvent};
pub use workers::{spawn_detail_worker, spawn_page_worker, spawn_search_worker};

use handlers::{handle_detail_response, handle_page_response, handle_search_event};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Build the HTTP-backed catalog described by `settings`.
///
/// # Errors
/// - Returns `Err` when the HTTP client cannot be created.
pub fn http_catalog(settings: &Settings) -> Result<Arc<dyn Catalog>> {
    let api = HttpApi::new(
        &settings.base_url,
        Duration::from_secs(settings.connect_timeout_secs),
        Duration::from_secs(settings.request_timeout_secs),
    )?;
    let client = CatalogClient::new(api)
        .with_search_limits(settings.search_index_cap, settings.search_result_limit);
    Ok(Arc::new(client))
}

/// What: Run the dexterm TUI end-to-end against the configured catalog.
///
/// Inputs:
/// - `settings`: Effective settings (file plus CLI overrides)
///
/// Output:
/// - `Ok(())` when the user quits; `Err` on terminal setup or HTTP client failures.
///
/// Details:
/// - With `DEXTERM_TEST_HEADLESS=1` the terminal is left untouched and nothing is drawn.
///
/// # Errors
/// - Propagates terminal and HTTP client construction errors.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var("DEXTERM_TEST_HEADLESS").ok().as_deref() == Some("1");
    let catalog = http_catalog(&settings)?;
    run_with(catalog, &settings, headless).await
}

/// What: Run the event loop with an injected catalog.
///
/// Inputs:
/// - `catalog`: Catalog shared by the workers
/// - `settings`: Effective settings
/// - `headless`: Skip terminal setup, drawing and the input thread
///
/// Output:
/// - `Ok(())` once a quit key is handled.
///
/// Details:
/// - Starts the initial page load immediately, then multiplexes terminal events and worker
///   responses on one `select!` loop. Every state change happens on this task.
///
/// # Errors
/// - Propagates terminal setup/restore errors.
pub async fn run_with(
    catalog: Arc<dyn Catalog>,
    settings: &Settings,
    headless: bool,
) -> Result<()> {
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::new(settings);
    let mut channels = Channels::new(
        &catalog,
        Duration::from_millis(settings.search_debounce_ms),
    );
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );
    info!(base_url = %settings.base_url, page_size = settings.page_size, "[Runtime] started");

    channels.dispatch.page(app.list.initial_load());

    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, &mut app))
        {
            warn!(error = %e, "[Runtime] draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app, &channels.dispatch) {
                    break;
                }
            }
            Some(response) = channels.page_res_rx.recv() => {
                handle_page_response(&mut app, response, &channels.dispatch);
            }
            Some(event) = channels.search_rx.recv() => {
                handle_search_event(&mut app, event);
            }
            Some(response) = channels.detail_res_rx.recv() => {
                handle_detail_response(&mut app, response);
            }
            else => break,
        }
    }

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    info!("[Runtime] exiting");

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}

/// What: Read crossterm events on a dedicated thread and forward them to the event loop.
///
/// Details:
/// - Polls with a short timeout so the cancellation flag is honoured promptly.
/// - Does nothing in headless mode.
fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
