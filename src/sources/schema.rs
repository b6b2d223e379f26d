//! Raw PokeAPI payloads and their validation into domain records.
//!
//! Every raw field is optional or defaulted so a sparse record still parses;
//! validation then either normalizes the gap or rejects the record.

use serde::Deserialize;

use super::CatalogError;
use crate::state::{
    AbilityEntry, CategoryTag, ItemDetail, ItemSummary, MoveEntry, SpriteSet, StatEntry,
};

/// Canonical sprite location used when a record carries no front sprite at all.
const SPRITE_FALLBACK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// `GET /pokemon/?limit=&offset=` response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IndexPage {
    /// Total number of records in the catalog.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Index entries in catalog order.
    #[serde(default)]
    pub results: Vec<IndexEntry>,
}

/// One `{name, url}` index entry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IndexEntry {
    /// Record name, usable as lookup key.
    pub name: String,
    /// Record URL.
    #[serde(default)]
    pub url: String,
}

/// `{name, url}` reference used all over the API.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawNamed {
    /// Referenced resource name.
    #[serde(default)]
    pub name: String,
}

/// Entry of the `types` array.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawTypeSlot {
    /// 1-based position of the type on the record.
    #[serde(default)]
    pub slot: u8,
    /// The type itself.
    #[serde(rename = "type", default)]
    pub kind: RawNamed,
}

/// Entry of the `stats` array.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawStat {
    /// Base value.
    #[serde(default)]
    pub base_stat: u32,
    /// Stat name reference.
    #[serde(default)]
    pub stat: RawNamed,
}

/// Entry of the `abilities` array.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawAbility {
    /// Ability name reference.
    #[serde(default)]
    pub ability: RawNamed,
}

/// Entry of the `moves` array.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawMove {
    /// Move name reference.
    #[serde(rename = "move", default)]
    pub entry: RawNamed,
}

/// Official artwork block.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawArtwork {
    /// Official artwork URL.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// `sprites.other` block.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawOtherSprites {
    /// Official artwork, when published.
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<RawArtwork>,
}

/// `sprites` block.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawSprites {
    /// Front sprite URL.
    #[serde(default)]
    pub front_default: Option<String>,
    /// Back sprite URL.
    #[serde(default)]
    pub back_default: Option<String>,
    /// Shiny front sprite URL.
    #[serde(default)]
    pub front_shiny: Option<String>,
    /// Shiny back sprite URL.
    #[serde(default)]
    pub back_shiny: Option<String>,
    /// Alternative artwork sets.
    #[serde(default)]
    pub other: Option<RawOtherSprites>,
}

/// `GET /pokemon/{idOrName}` response, reduced to the fields the app reads.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawPokemon {
    /// National dex number; required.
    #[serde(default)]
    pub id: Option<u32>,
    /// Lowercase name; required and non-empty.
    #[serde(default)]
    pub name: Option<String>,
    /// Height in decimetres.
    #[serde(default)]
    pub height: Option<u32>,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: Option<u32>,
    /// Base experience yield.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Type slots.
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    /// Base stats.
    #[serde(default)]
    pub stats: Vec<RawStat>,
    /// Abilities.
    #[serde(default)]
    pub abilities: Vec<RawAbility>,
    /// Learnable moves.
    #[serde(default)]
    pub moves: Vec<RawMove>,
    /// Sprite URLs.
    #[serde(default)]
    pub sprites: Option<RawSprites>,
}

/// Treat `Some("")` the same as a missing URL.
fn non_empty(url: Option<&String>) -> Option<String> {
    url.map(|s| s.trim()).filter(|s| !s.is_empty()).map(str::to_string)
}

impl RawPokemon {
    /// What: Check the identity fields every record must carry.
    ///
    /// Output:
    /// - `(id, name)` with the name lowercased; `Err(Malformed)` when either is missing.
    fn identity(&self) -> Result<(u32, String), CatalogError> {
        let id = self
            .id
            .ok_or_else(|| CatalogError::Malformed("record without id".to_string()))?;
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CatalogError::Malformed(format!("record {id} without name")))?;
        Ok((id, name.to_lowercase()))
    }

    /// What: Resolve the front sprite, walking the fallback chain.
    ///
    /// Details:
    /// - `sprites.front_default`, then the official artwork, then the canonical sprite URL for `id`.
    fn front_sprite(&self, id: u32) -> String {
        let sprites = self.sprites.as_ref();
        sprites
            .and_then(|s| non_empty(s.front_default.as_ref()))
            .or_else(|| {
                sprites
                    .and_then(|s| s.other.as_ref())
                    .and_then(|o| o.official_artwork.as_ref())
                    .and_then(|a| non_empty(a.front_default.as_ref()))
            })
            .unwrap_or_else(|| format!("{SPRITE_FALLBACK_BASE}/{id}.png"))
    }

    fn back_sprite(&self) -> Option<String> {
        self.sprites
            .as_ref()
            .and_then(|s| non_empty(s.back_default.as_ref()))
    }

    fn categories(&self) -> Vec<CategoryTag> {
        let mut slots: Vec<&RawTypeSlot> = self
            .types
            .iter()
            .filter(|t| !t.kind.name.is_empty())
            .collect();
        slots.sort_by_key(|t| t.slot);
        slots
            .into_iter()
            .map(|t| CategoryTag::new(t.kind.name.clone()))
            .collect()
    }

    /// What: Validate into the summary shape.
    ///
    /// # Errors
    /// - `CatalogError::Malformed` when the id or name is missing.
    pub fn into_summary(self) -> Result<ItemSummary, CatalogError> {
        let (id, name) = self.identity()?;
        Ok(ItemSummary {
            id,
            name,
            primary_image_url: self.front_sprite(id),
            secondary_image_url: self.back_sprite(),
            categories: self.categories(),
        })
    }

    /// What: Validate into the full detail shape.
    ///
    /// # Errors
    /// - `CatalogError::Malformed` when the id or name is missing.
    pub fn into_detail(self) -> Result<ItemDetail, CatalogError> {
        let (id, name) = self.identity()?;
        let front = self.front_sprite(id);
        let back = self.back_sprite().unwrap_or_else(|| front.clone());
        let sprites = self.sprites.as_ref();
        let images = SpriteSet {
            front,
            back,
            front_shiny: sprites.and_then(|s| non_empty(s.front_shiny.as_ref())),
            back_shiny: sprites.and_then(|s| non_empty(s.back_shiny.as_ref())),
        };
        Ok(ItemDetail {
            id,
            name,
            categories: self.categories(),
            height: self.height.unwrap_or(0),
            weight: self.weight.unwrap_or(0),
            base_experience: self.base_experience.unwrap_or(0),
            stats: self
                .stats
                .iter()
                .filter(|s| !s.stat.name.is_empty())
                .map(|s| StatEntry {
                    name: s.stat.name.clone(),
                    value: s.base_stat,
                })
                .collect(),
            abilities: self
                .abilities
                .iter()
                .filter(|a| !a.ability.name.is_empty())
                .map(|a| AbilityEntry {
                    name: a.ability.name.clone(),
                })
                .collect(),
            moves: self
                .moves
                .iter()
                .filter(|m| !m.entry.name.is_empty())
                .map(|m| MoveEntry {
                    name: m.entry.name.clone(),
                })
                .collect(),
            images,
        })
    }
}
