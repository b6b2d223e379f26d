//! Channels between the event loop and the background workers.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tracing::debug;

use super::workers::{spawn_detail_worker, spawn_page_worker, spawn_search_worker};
use crate::logic::{DetailResponse, PageResponse};
use crate::sources::{Catalog, CatalogError};
use crate::state::{DetailRequest, PageRequest, SearchCommand, SearchLookup, SearchTicket};

/// Message from the debounced search worker.
#[derive(Debug)]
pub enum SearchEvent {
    /// The debounce window for this ticket elapsed and the request was sent.
    Started(SearchTicket),
    /// The catalog answered for this ticket.
    Finished(SearchTicket, Result<SearchLookup, CatalogError>),
}

/// Request side of the worker channels, handed to input handlers.
#[derive(Clone, Debug)]
pub struct Dispatch {
    page_tx: mpsc::UnboundedSender<PageRequest>,
    search_tx: mpsc::UnboundedSender<SearchCommand>,
    detail_tx: mpsc::UnboundedSender<DetailRequest>,
}

/// Receiving ends of a [`Dispatch`] built by [`Dispatch::capture`].
#[derive(Debug)]
pub struct DispatchCapture {
    /// Page requests sent through the dispatch.
    pub pages: mpsc::UnboundedReceiver<PageRequest>,
    /// Search commands sent through the dispatch.
    pub searches: mpsc::UnboundedReceiver<SearchCommand>,
    /// Detail requests sent through the dispatch.
    pub details: mpsc::UnboundedReceiver<DetailRequest>,
}

impl Dispatch {
    /// What: Build a dispatch that is not wired to any worker.
    ///
    /// Output:
    /// - The dispatch and the receivers where its requests land, for driving handlers directly.
    #[must_use]
    pub fn capture() -> (Self, DispatchCapture) {
        let (page_tx, pages) = mpsc::unbounded_channel();
        let (search_tx, searches) = mpsc::unbounded_channel();
        let (detail_tx, details) = mpsc::unbounded_channel();
        (
            Self {
                page_tx,
                search_tx,
                detail_tx,
            },
            DispatchCapture {
                pages,
                searches,
                details,
            },
        )
    }

    /// What: Forward a page request if the controller issued one.
    pub fn page(&self, request: Option<PageRequest>) {
        if let Some(req) = request
            && self.page_tx.send(req).is_err()
        {
            debug!("[Runtime] page worker gone; dropping request");
        }
    }

    /// What: Forward a command to the debounce worker.
    pub fn search(&self, command: SearchCommand) {
        if self.search_tx.send(command).is_err() {
            debug!("[Runtime] search worker gone; dropping command");
        }
    }

    /// What: Forward a detail request.
    pub fn detail(&self, request: DetailRequest) {
        if self.detail_tx.send(request).is_err() {
            debug!("[Runtime] detail worker gone; dropping request");
        }
    }
}

/// All channels owned by the event loop.
pub struct Channels {
    /// Sender cloned into the terminal event thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the event thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Request senders.
    pub dispatch: Dispatch,
    /// Page responses.
    pub page_res_rx: mpsc::UnboundedReceiver<PageResponse>,
    /// Search worker events.
    pub search_rx: mpsc::UnboundedReceiver<SearchEvent>,
    /// Detail responses.
    pub detail_res_rx: mpsc::UnboundedReceiver<DetailResponse>,
}

impl Channels {
    /// What: Create every channel and spawn the page, search and detail workers.
    ///
    /// Inputs:
    /// - `catalog`: Shared catalog used by all workers
    /// - `debounce`: Search debounce window
    ///
    /// Details:
    /// - Must be called inside a tokio runtime.
    pub fn new(catalog: &Arc<dyn Catalog>, debounce: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (page_tx, page_req_rx) = mpsc::unbounded_channel::<PageRequest>();
        let (page_res_tx, page_res_rx) = mpsc::unbounded_channel::<PageResponse>();
        let (search_tx, search_cmd_rx) = mpsc::unbounded_channel::<SearchCommand>();
        let (search_event_tx, search_rx) = mpsc::unbounded_channel::<SearchEvent>();
        let (detail_tx, detail_req_rx) = mpsc::unbounded_channel::<DetailRequest>();
        let (detail_res_tx, detail_res_rx) = mpsc::unbounded_channel::<DetailResponse>();

        spawn_page_worker(Arc::clone(catalog), page_req_rx, page_res_tx);
        spawn_search_worker(Arc::clone(catalog), search_cmd_rx, search_event_tx, debounce);
        spawn_detail_worker(Arc::clone(catalog), detail_req_rx, detail_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            dispatch: Dispatch {
                page_tx,
                search_tx,
                detail_tx,
            },
            page_res_rx,
            search_rx,
            detail_res_rx,
        }
    }
}
