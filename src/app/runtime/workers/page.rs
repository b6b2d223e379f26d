use std::sync::Arc;

use tokio::sync::mpsc;

use crate::logic::PageResponse;
use crate::sources::Catalog;
use crate::state::PageRequest;

/// What: Spawn the background worker that fetches browse pages.
///
/// Inputs:
/// - `catalog`: Catalog used for `list_page`
/// - `req_rx`: Page requests issued by the list controller
/// - `res_tx`: Responses tagged with their request
///
/// Details:
/// - Each request runs on its own task; the controller guarantees only one is pending.
pub fn spawn_page_worker(
    catalog: Arc<dyn Catalog>,
    mut req_rx: mpsc::UnboundedReceiver<PageRequest>,
    res_tx: mpsc::UnboundedSender<PageResponse>,
) {
    tokio::spawn(async move {
        while let Some(request) = req_rx.recv().await {
            let catalog = Arc::clone(&catalog);
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let result = catalog.list_page(request.limit, request.offset).await;
                let _ = tx.send(PageResponse { request, result });
            });
        }
        tracing::debug!("[Runtime] page worker stopped");
    });
}
