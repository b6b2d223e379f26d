//! Ordered concurrent resolution of index names into summaries.

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tracing::{debug, warn};

use super::CatalogError;
use super::api::CatalogApi;
use crate::state::ItemSummary;

/// What: Look up every key concurrently and return summaries in input order.
///
/// Inputs:
/// - `api`: Transport used for the per-item lookups
/// - `keys`: Names or ids in the order the caller wants them back
///
/// Output:
/// - Summaries ordered like `keys`; absent (404) and malformed records are dropped.
///
/// # Errors
/// - The first transport/status failure of any item fails the whole batch.
///
/// Details:
/// - Completions land in a slot array indexed by original position, so a slow first item
///   never reorders the output.
pub(super) async fn resolve_ordered<A>(
    api: &A,
    keys: &[String],
) -> Result<Vec<ItemSummary>, CatalogError>
where
    A: CatalogApi + ?Sized,
{
    let mut slots: Vec<Option<ItemSummary>> = vec![None; keys.len()];
    let mut pending: FuturesUnordered<_> = keys
        .iter()
        .enumerate()
        .map(|(slot, key)| async move { (slot, key, api.record(key).await) })
        .collect();

    while let Some((slot, key, result)) = pending.next().await {
        match result? {
            Some(raw) => match raw.into_summary() {
                Ok(summary) => slots[slot] = Some(summary),
                Err(e) => warn!(key = %key, error = %e, "skipping malformed record"),
            },
            None => debug!(key = %key, "record absent; skipping"),
        }
    }
    Ok(slots.into_iter().flatten().collect())
}
