//! Shared fixtures for integration tests: an in-memory [`Catalog`] with scripted latency.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use dexterm::sources::{Catalog, CatalogError};
use dexterm::state::{CategoryTag, ItemDetail, ItemSummary, MoveEntry, SearchLookup, SpriteSet, StatEntry};

/// In-memory catalog; the record at index `i` has id `i + 1`.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    names: Vec<String>,
    search_delay: HashMap<String, Duration>,
    fail_pages: bool,
    list_calls: AtomicUsize,
    searched: Mutex<Vec<String>>,
}

impl FakeCatalog {
    /// What: Catalog of `n` generated names.
    pub fn with_count(n: u32) -> Self {
        Self {
            names: (1..=n).map(|i| format!("mon-{i}")).collect(),
            ..Self::default()
        }
    }

    /// What: Catalog with explicit names.
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| (*n).to_string()).collect(),
            ..Self::default()
        }
    }

    /// Delay the answer for one search term.
    pub fn with_search_delay(mut self, term: &str, delay: Duration) -> Self {
        self.search_delay.insert(term.to_string(), delay);
        self
    }

    /// Every page request fails.
    pub const fn with_failing_pages(mut self) -> Self {
        self.fail_pages = true;
        self
    }

    /// Number of `list_page` calls.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Terms passed to `search_by_name`, in call order.
    pub fn searched(&self) -> Vec<String> {
        self.searched.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn summary(&self, index: usize) -> ItemSummary {
        let id = u32::try_from(index + 1).expect("id fits");
        ItemSummary {
            id,
            name: self.names[index].clone(),
            primary_image_url: format!("https://img/{id}.png"),
            secondary_image_url: None,
            categories: vec![CategoryTag::new("normal")],
        }
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn list_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ItemSummary>, CatalogError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_pages {
            return Err(CatalogError::Transport("connection refused".into()));
        }
        let end = (offset + limit).min(self.names.len());
        Ok((offset.min(end)..end).map(|i| self.summary(i)).collect())
    }

    async fn get_detail(&self, key: &str) -> Result<Option<ItemDetail>, CatalogError> {
        let key = key.trim().to_lowercase();
        let index = key
            .parse::<usize>()
            .ok()
            .and_then(|id| id.checked_sub(1))
            .filter(|i| *i < self.names.len())
            .or_else(|| self.names.iter().position(|n| *n == key));
        Ok(index.map(|i| {
            let s = self.summary(i);
            ItemDetail {
                id: s.id,
                name: s.name,
                categories: s.categories,
                height: 7,
                weight: 69,
                base_experience: 64,
                stats: vec![StatEntry {
                    name: "hp".into(),
                    value: 45,
                }],
                abilities: Vec::new(),
                moves: (0..10)
                    .map(|m| MoveEntry {
                        name: format!("move-{m}"),
                    })
                    .collect(),
                images: SpriteSet {
                    front: s.primary_image_url.clone(),
                    back: s.primary_image_url,
                    front_shiny: None,
                    back_shiny: None,
                },
            }
        }))
    }

    async fn search_by_name(&self, term: &str) -> Result<SearchLookup, CatalogError> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Ok(SearchLookup::NoQuery);
        }
        if let Ok(mut searched) = self.searched.lock() {
            searched.push(term.clone());
        }
        if let Some(delay) = self.search_delay.get(&term) {
            tokio::time::sleep(*delay).await;
        }
        Ok(SearchLookup::Matches(
            (0..self.names.len())
                .filter(|i| self.names[*i].contains(&term))
                .map(|i| self.summary(i))
                .collect(),
        ))
    }
}
