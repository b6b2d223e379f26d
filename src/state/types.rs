//! Core value types handed from the catalog client to controllers and views.

use std::fmt;

/// Category badge attached to an item (a Pokémon type such as `grass`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CategoryTag {
    /// Lowercase category name as reported by the catalog.
    pub name: String,
}

impl CategoryTag {
    /// What: Build a tag from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Minimal item record used in grids and search results.
///
/// Built only by the catalog client from validated raw records; for the full
/// record, see [`ItemDetail`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemSummary {
    /// Catalog id (national dex number).
    pub id: u32,
    /// Canonical lowercase name.
    pub name: String,
    /// Front sprite URL (always present after normalization).
    pub primary_image_url: String,
    /// Back sprite URL when the catalog provides one.
    pub secondary_image_url: Option<String>,
    /// Ordered category tags (slot order).
    pub categories: Vec<CategoryTag>,
}

/// One base stat line, e.g. `hp = 45`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatEntry {
    /// Stat name (`hp`, `attack`, `special-defense`, ...).
    pub name: String,
    /// Base value.
    pub value: u32,
}

/// Ability reference.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AbilityEntry {
    /// Ability name.
    pub name: String,
}

/// Move reference.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveEntry {
    /// Move name.
    pub name: String,
}

/// Sprite URLs of a detail record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpriteSet {
    /// Front sprite.
    pub front: String,
    /// Back sprite; falls back to the front sprite when the catalog has none.
    pub back: String,
    /// Shiny front sprite, if any.
    pub front_shiny: Option<String>,
    /// Shiny back sprite, if any.
    pub back_shiny: Option<String>,
}

/// Full record for the detail screen.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemDetail {
    /// Catalog id.
    pub id: u32,
    /// Canonical lowercase name.
    pub name: String,
    /// Ordered category tags.
    pub categories: Vec<CategoryTag>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Base experience yield.
    pub base_experience: u32,
    /// Base stats in catalog order.
    pub stats: Vec<StatEntry>,
    /// Abilities in catalog order.
    pub abilities: Vec<AbilityEntry>,
    /// Learnable moves in catalog order.
    pub moves: Vec<MoveEntry>,
    /// Sprite URLs.
    pub images: SpriteSet,
}

impl ItemDetail {
    /// What: Project the detail record down to the summary shape used by grids.
    ///
    /// Output:
    /// - `ItemSummary` with the same id, name and categories; the secondary image is only set
    ///   when the back sprite differs from the front one (i.e. it was not a fallback).
    #[must_use]
    pub fn summary(&self) -> ItemSummary {
        let secondary = (self.images.back != self.images.front).then(|| self.images.back.clone());
        ItemSummary {
            id: self.id,
            name: self.name.clone(),
            primary_image_url: self.images.front.clone(),
            secondary_image_url: secondary,
            categories: self.categories.clone(),
        }
    }
}

/// Classification of an [`ErrorInfo`] so views can pick a presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog could not be reached or answered with a failure status.
    Fetch,
    /// A single requested record does not exist.
    NotFound,
    /// A search ran fine but matched nothing.
    NoResults,
}

/// User-facing error marker stored in controller state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    /// What kind of failure this is.
    pub kind: ErrorKind,
    /// Display message; opaque to the controllers.
    pub message: String,
}

impl ErrorInfo {
    /// What: Build a fetch failure marker from any displayable error.
    pub fn fetch(err: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Fetch,
            message: err.to_string(),
        }
    }

    /// What: Build a not-found marker for a single-record lookup.
    pub fn not_found(key: &str) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: format!("No Pokémon found for \"{key}\""),
        }
    }

    /// What: Build the "search matched nothing" marker.
    #[must_use]
    pub fn no_results() -> Self {
        Self {
            kind: ErrorKind::NoResults,
            message: "No Pokémon found".to_string(),
        }
    }

    /// True for real failures, false for the empty-search marker.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.kind != ErrorKind::NoResults
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a name search at the catalog boundary.
///
/// Keeps "nothing was asked" apart from "asked and nothing matched".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchLookup {
    /// The term was empty or whitespace only; no request was made.
    NoQuery,
    /// Matches in catalog order; empty when nothing matched.
    Matches(Vec<ItemSummary>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(front: &str, back: &str) -> ItemDetail {
        ItemDetail {
            id: 25,
            name: "pikachu".into(),
            categories: vec![CategoryTag::new("electric")],
            height: 4,
            weight: 60,
            base_experience: 112,
            stats: Vec::new(),
            abilities: Vec::new(),
            moves: Vec::new(),
            images: SpriteSet {
                front: front.into(),
                back: back.into(),
                front_shiny: None,
                back_shiny: None,
            },
        }
    }

    #[test]
    /// What: The summary projection keeps identity fields and the real back sprite.
    fn summary_keeps_identity_and_back_sprite() {
        let s = detail("f.png", "b.png").summary();
        assert_eq!(s.id, 25);
        assert_eq!(s.name, "pikachu");
        assert_eq!(s.primary_image_url, "f.png");
        assert_eq!(s.secondary_image_url.as_deref(), Some("b.png"));
        assert_eq!(s.categories, vec![CategoryTag::new("electric")]);
    }

    #[test]
    /// What: A back sprite that is only the front fallback is not reported as secondary.
    fn summary_drops_fallback_back_sprite() {
        let s = detail("f.png", "f.png").summary();
        assert!(s.secondary_image_url.is_none());
    }

    #[test]
    fn no_results_marker_is_not_a_failure() {
        assert!(!ErrorInfo::no_results().is_failure());
        assert!(ErrorInfo::fetch("boom").is_failure());
        assert!(ErrorInfo::not_found("missingno").is_failure());
    }
}
