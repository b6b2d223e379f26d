//! Catalog data retrieval: HTTP transport, payload validation and the high-level client.

mod api;
mod client;
mod error;
mod fanout;
mod schema;

pub use api::{CatalogApi, HttpApi};
pub use client::{Catalog, CatalogClient, DEFAULT_SEARCH_INDEX_CAP, DEFAULT_SEARCH_RESULT_LIMIT};
pub use error::CatalogError;
pub use schema::{
    IndexEntry, IndexPage, RawAbility, RawArtwork, RawMove, RawNamed, RawOtherSprites, RawPokemon,
    RawSprites, RawStat, RawTypeSlot,
};
