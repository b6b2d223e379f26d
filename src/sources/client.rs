//! High-level catalog operations: paginated listing, detail lookup and name search.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::CatalogError;
use super::api::CatalogApi;
use super::fanout::resolve_ordered;
use crate::state::{ItemDetail, ItemSummary, SearchLookup};

/// Number of index entries scanned by the substring search fallback.
pub const DEFAULT_SEARCH_INDEX_CAP: usize = 200;
/// Maximum number of summaries returned by the substring search fallback.
pub const DEFAULT_SEARCH_RESULT_LIMIT: usize = 6;

/// Catalog operations the controllers' workers depend on.
///
/// Object safe so the runtime can hold an `Arc<dyn Catalog>` and tests can swap in fakes.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// What: Fetch one page of summaries.
    ///
    /// Inputs:
    /// - `limit`: Page size
    /// - `offset`: Index of the first item
    ///
    /// Output:
    /// - Summaries in index order. Absent and malformed items are filtered out, so the result
    ///   may be shorter than the index page.
    ///
    /// # Errors
    /// - Index fetch failure or any per-item transport failure.
    async fn list_page(&self, limit: usize, offset: usize)
    -> Result<Vec<ItemSummary>, CatalogError>;

    /// What: Fetch a full record by id or name.
    ///
    /// Output:
    /// - `Ok(None)` when the record does not exist.
    ///
    /// # Errors
    /// - Transport failure or a record that fails validation.
    async fn get_detail(&self, key: &str) -> Result<Option<ItemDetail>, CatalogError>;

    /// What: Search summaries by name.
    ///
    /// Output:
    /// - `SearchLookup::NoQuery` for a blank term (no request made), otherwise the matches.
    ///
    /// # Errors
    /// - Transport failure on the exact probe, the index scan, or any resolved match.
    async fn search_by_name(&self, term: &str) -> Result<SearchLookup, CatalogError>;
}

/// [`Catalog`] built on a raw [`CatalogApi`] transport. Holds no cache.
#[derive(Clone, Debug)]
pub struct CatalogClient<A> {
    api: A,
    search_index_cap: usize,
    search_result_limit: usize,
}

impl<A: CatalogApi> CatalogClient<A> {
    /// What: Wrap a transport with default search limits.
    pub const fn new(api: A) -> Self {
        Self {
            api,
            search_index_cap: DEFAULT_SEARCH_INDEX_CAP,
            search_result_limit: DEFAULT_SEARCH_RESULT_LIMIT,
        }
    }

    /// What: Override how many index entries the substring fallback scans and how many
    /// matches it resolves.
    #[must_use]
    pub const fn with_search_limits(mut self, index_cap: usize, result_limit: usize) -> Self {
        self.search_index_cap = index_cap;
        self.search_result_limit = result_limit;
        self
    }

    /// Underlying transport.
    pub const fn api(&self) -> &A {
        &self.api
    }
}

/// Lookup key form used for names: trimmed and lowercased.
fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[async_trait]
impl<A: CatalogApi> Catalog for CatalogClient<A> {
    async fn list_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ItemSummary>, CatalogError> {
        let page = self.api.index(limit, offset).await?;
        let names: Vec<String> = page.results.into_iter().map(|e| e.name).collect();
        let items = resolve_ordered(&self.api, &names).await?;
        info!(
            limit,
            offset,
            listed = names.len(),
            resolved = items.len(),
            "fetched catalog page"
        );
        Ok(items)
    }

    async fn get_detail(&self, key: &str) -> Result<Option<ItemDetail>, CatalogError> {
        let key = normalize_key(key);
        if key.is_empty() {
            return Ok(None);
        }
        match self.api.record(&key).await? {
            Some(raw) => raw.into_detail().map(Some),
            None => {
                debug!(key = %key, "detail not found");
                Ok(None)
            }
        }
    }

    async fn search_by_name(&self, term: &str) -> Result<SearchLookup, CatalogError> {
        let term = normalize_key(term);
        if term.is_empty() {
            return Ok(SearchLookup::NoQuery);
        }

        match self.api.record(&term).await? {
            Some(raw) => match raw.into_summary() {
                Ok(exact) => {
                    debug!(term = %term, id = exact.id, "exact search hit");
                    return Ok(SearchLookup::Matches(vec![exact]));
                }
                Err(e) => warn!(term = %term, error = %e, "exact hit malformed; scanning index"),
            },
            None => debug!(term = %term, "no exact hit; scanning index"),
        }

        let index = self.api.index(self.search_index_cap, 0).await?;
        let names: Vec<String> = index
            .results
            .into_iter()
            .map(|e| e.name)
            .filter(|name| name.to_lowercase().contains(&term))
            .take(self.search_result_limit)
            .collect();
        if names.is_empty() {
            return Ok(SearchLookup::Matches(Vec::new()));
        }
        let matches = resolve_ordered(&self.api, &names).await?;
        debug!(term = %term, matches = matches.len(), "substring search resolved");
        Ok(SearchLookup::Matches(matches))
    }
}
