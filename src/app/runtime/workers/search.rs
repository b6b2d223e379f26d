use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};
use tracing::debug;

use crate::app::runtime::channels::SearchEvent;
use crate::sources::Catalog;
use crate::state::{SearchCommand, SearchTicket};

/// What: Spawn the debounced search worker.
///
/// Inputs:
/// - `catalog`: Catalog used for `search_by_name`
/// - `cmd_rx`: Schedule/cancel commands from the search controller
/// - `event_tx`: `Started`/`Finished` events back to the event loop
/// - `debounce`: Quiet period required before a ticket fires
///
/// Details:
/// - A new command restarts the window and replaces the pending ticket (last write wins).
/// - `Cancel` drops the pending ticket without firing.
/// - Fired searches run on their own task and are never aborted; the controller discards
///   answers for superseded tickets.
pub fn spawn_search_worker(
    catalog: Arc<dyn Catalog>,
    mut cmd_rx: mpsc::UnboundedReceiver<SearchCommand>,
    event_tx: mpsc::UnboundedSender<SearchEvent>,
    debounce: Duration,
) {
    tokio::spawn(async move {
        let mut pending: Option<SearchTicket> = None;
        loop {
            let Some(ticket) = pending.take() else {
                match cmd_rx.recv().await {
                    Some(SearchCommand::Schedule(t)) => pending = Some(t),
                    Some(SearchCommand::Cancel) => {}
                    None => break,
                }
                continue;
            };
            select! {
                cmd = cmd_rx.recv() => match cmd {
                    Some(SearchCommand::Schedule(t)) => pending = Some(t),
                    Some(SearchCommand::Cancel) => {
                        debug!(id = ticket.id, "[Search] pending search cancelled");
                    }
                    None => break,
                },
                () = sleep(debounce) => fire(&catalog, &event_tx, ticket),
            }
        }
        debug!("[Search] worker stopped");
    });
}

/// Announce the ticket and run the search on a separate task.
fn fire(
    catalog: &Arc<dyn Catalog>,
    event_tx: &mpsc::UnboundedSender<SearchEvent>,
    ticket: SearchTicket,
) {
    debug!(id = ticket.id, term = %ticket.term, "[Search] debounce elapsed; searching");
    let _ = event_tx.send(SearchEvent::Started(ticket.clone()));
    let catalog = Arc::clone(catalog);
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = catalog.search_by_name(&ticket.term).await;
        let _ = tx.send(SearchEvent::Finished(ticket, result));
    });
}
