use std::sync::Arc;

use tokio::sync::mpsc;

use crate::logic::DetailResponse;
use crate::sources::Catalog;
use crate::state::DetailRequest;

/// What: Spawn the background worker that fetches detail records.
///
/// Inputs:
/// - `catalog`: Catalog used for `get_detail`
/// - `req_rx`: Detail requests issued by the detail loader
/// - `res_tx`: Responses tagged with their request
///
/// Details:
/// - Requests are never aborted; the loader drops answers for identifiers no longer shown.
pub fn spawn_detail_worker(
    catalog: Arc<dyn Catalog>,
    mut req_rx: mpsc::UnboundedReceiver<DetailRequest>,
    res_tx: mpsc::UnboundedSender<DetailResponse>,
) {
    tokio::spawn(async move {
        while let Some(request) = req_rx.recv().await {
            let catalog = Arc::clone(&catalog);
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let result = catalog.get_detail(&request.key).await;
                let _ = tx.send(DetailResponse { request, result });
            });
        }
        tracing::debug!("[Runtime] detail worker stopped");
    });
}
