//! Test utilities for common test setup.
//!
//! This module provides an in-memory catalog transport shared by unit tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::sources::{
    CatalogApi, CatalogError, IndexEntry, IndexPage, RawNamed, RawPokemon, RawSprites,
    RawTypeSlot,
};
use crate::state::AppState;

/// What: Provide a baseline `AppState` for handler tests.
///
/// Inputs: None
///
/// Output: Fresh `AppState` with default values
pub fn new_app() -> AppState {
    AppState::default()
}

/// In-memory [`CatalogApi`]: the record at index `i` has id `i + 1`.
#[derive(Debug, Default)]
pub struct FakeApi {
    names: Vec<String>,
    missing: HashSet<u32>,
    malformed: HashSet<u32>,
    failing: HashSet<u32>,
    descending_latency: bool,
    requests: AtomicUsize,
    index_calls: AtomicUsize,
}

impl FakeApi {
    /// What: Catalog of `n` records named `bulba-1`, `bulba-2`, ...
    pub fn with_count(n: u32) -> Self {
        Self {
            names: (1..=n).map(|i| format!("bulba-{i}")).collect(),
            ..Self::default()
        }
    }

    /// What: Catalog with explicit names, ids assigned in order.
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| (*n).to_string()).collect(),
            ..Self::default()
        }
    }

    /// Listed in the index but 404 on lookup.
    pub fn with_missing(mut self, id: u32) -> Self {
        self.missing.insert(id);
        self
    }

    /// Lookup returns a record without identity.
    pub fn with_malformed(mut self, id: u32) -> Self {
        self.malformed.insert(id);
        self
    }

    /// Lookup fails with a transport error.
    pub fn with_failing(mut self, id: u32) -> Self {
        self.failing.insert(id);
        self
    }

    /// Lower ids answer slower than higher ones.
    pub const fn with_descending_latency(mut self) -> Self {
        self.descending_latency = true;
        self
    }

    /// Total requests of any kind.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Index requests only.
    pub fn index_calls(&self) -> usize {
        self.index_calls.load(Ordering::SeqCst)
    }

    fn resolve(&self, key: &str) -> Option<u32> {
        if let Ok(id) = key.parse::<u32>() {
            return (id >= 1 && (id as usize) <= self.names.len()).then_some(id);
        }
        self.names
            .iter()
            .position(|n| n == key)
            .and_then(|i| u32::try_from(i + 1).ok())
    }
}

/// What: Build a minimal valid raw record.
pub fn raw_record(id: u32, name: &str) -> RawPokemon {
    RawPokemon {
        id: Some(id),
        name: Some(name.to_string()),
        height: Some(7),
        weight: Some(69),
        base_experience: Some(64),
        types: vec![RawTypeSlot {
            slot: 1,
            kind: RawNamed {
                name: "grass".into(),
            },
        }],
        sprites: Some(RawSprites {
            front_default: Some(format!("https://img/{id}.png")),
            back_default: Some(format!("https://img/back/{id}.png")),
            ..RawSprites::default()
        }),
        ..RawPokemon::default()
    }
}

#[async_trait]
impl CatalogApi for FakeApi {
    async fn index(&self, limit: usize, offset: usize) -> Result<IndexPage, CatalogError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.index_calls.fetch_add(1, Ordering::SeqCst);
        let results = self
            .names
            .iter()
            .skip(offset)
            .take(limit)
            .map(|name| IndexEntry {
                name: name.clone(),
                url: String::new(),
            })
            .collect();
        Ok(IndexPage {
            count: self.names.len() as u64,
            next: None,
            previous: None,
            results,
        })
    }

    async fn record(&self, key: &str) -> Result<Option<RawPokemon>, CatalogError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let Some(id) = self.resolve(key) else {
            return Ok(None);
        };
        if self.descending_latency {
            let rank = self.names.len() as u64 - u64::from(id);
            tokio::time::sleep(Duration::from_millis(5 * rank)).await;
        }
        if self.failing.contains(&id) {
            return Err(CatalogError::Transport(format!("connection reset for {key}")));
        }
        if self.missing.contains(&id) {
            return Ok(None);
        }
        if self.malformed.contains(&id) {
            return Ok(Some(RawPokemon::default()));
        }
        let name = &self.names[(id - 1) as usize];
        Ok(Some(raw_record(id, name)))
    }
}
