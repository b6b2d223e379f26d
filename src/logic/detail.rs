//! Detail loader: one record at a time, retryable, never cached.

use tracing::{debug, warn};

use super::Outcome;
use crate::sources::CatalogError;
use crate::state::{DetailRequest, DetailState, ErrorInfo, ItemDetail, MoveEntry};

/// Number of moves shown in the "sample moves" section.
pub const MAX_SAMPLE_MOVES: usize = 6;
/// Stat value that fills a stat bar completely.
pub const STAT_BAR_MAX: u32 = 100;

/// Response to a [`DetailRequest`].
#[derive(Clone, Debug)]
pub struct DetailResponse {
    /// Request this answers.
    pub request: DetailRequest,
    /// `Ok(None)` means not found.
    pub result: Result<Option<ItemDetail>, CatalogError>,
}

/// Owns [`DetailState`] for the open detail screen.
#[derive(Debug, Default)]
pub struct DetailLoader {
    state: DetailState,
    pending: Option<DetailRequest>,
    next_request_id: u64,
}

impl DetailLoader {
    /// Current detail state.
    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    fn issue(&mut self, key: String) -> DetailRequest {
        self.next_request_id += 1;
        let request = DetailRequest {
            id: self.next_request_id,
            key,
        };
        self.state.is_loading = true;
        self.state.error = None;
        self.pending = Some(request.clone());
        debug!(id = request.id, key = %request.key, "detail request issued");
        request
    }

    /// What: Open the detail screen for an id or name, replacing whatever was shown.
    pub fn open(&mut self, key: impl Into<String>) -> DetailRequest {
        let key = key.into();
        self.state = DetailState {
            key: Some(key.clone()),
            ..DetailState::default()
        };
        self.issue(key)
    }

    /// What: Reissue the load for the current identifier.
    ///
    /// Output:
    /// - `None` when nothing is open or a load is already running.
    pub fn retry(&mut self) -> Option<DetailRequest> {
        if self.state.is_loading {
            return None;
        }
        let key = self.state.key.clone()?;
        self.state.detail = None;
        self.state.show_back = false;
        Some(self.issue(key))
    }

    /// What: Leave the detail screen; any in-flight response will be discarded.
    pub fn close(&mut self) {
        self.state = DetailState::default();
        self.pending = None;
    }

    /// What: Flip between front and back sprite.
    ///
    /// Output:
    /// - `true` when a record is loaded and the flag changed.
    pub fn toggle_sprite(&mut self) -> bool {
        if self.state.detail.is_none() {
            return false;
        }
        self.state.show_back = !self.state.show_back;
        true
    }

    /// What: Fold a detail response into state.
    ///
    /// Output:
    /// - `Discarded` for responses to an earlier open; not-found and failures are `Surfaced`
    ///   with the identifier kept for retry.
    pub fn apply(&mut self, response: DetailResponse) -> Outcome {
        if self.pending.as_ref() != Some(&response.request) {
            debug!(id = response.request.id, "discarding stale detail response");
            return Outcome::Discarded;
        }
        self.pending = None;
        self.state.is_loading = false;
        let key = response.request.key;
        match response.result {
            Ok(Some(detail)) => {
                self.state.detail = Some(detail);
                Outcome::Applied
            }
            Ok(None) => {
                let info = ErrorInfo::not_found(&key);
                warn!(key = %key, "detail not found");
                self.state.error = Some(info.clone());
                Outcome::Surfaced(info)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "detail load failed");
                let info = ErrorInfo::fetch(&e);
                self.state.error = Some(info.clone());
                Outcome::Surfaced(info)
            }
        }
    }
}

/// What: First few moves plus the total count.
///
/// Output:
/// - `(sample, total)` where `sample` holds at most [`MAX_SAMPLE_MOVES`] moves.
#[must_use]
pub fn sample_moves(detail: &ItemDetail) -> (&[MoveEntry], usize) {
    let total = detail.moves.len();
    (&detail.moves[..total.min(MAX_SAMPLE_MOVES)], total)
}

/// Fill ratio of a stat bar in `0.0..=1.0`.
#[must_use]
pub fn stat_ratio(value: u32) -> f64 {
    f64::from(value.min(STAT_BAR_MAX)) / f64::from(STAT_BAR_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CategoryTag, ErrorKind, SpriteSet};

    fn detail(id: u32, moves: usize) -> ItemDetail {
        ItemDetail {
            id,
            name: "bulbasaur".into(),
            categories: vec![CategoryTag::new("grass")],
            height: 7,
            weight: 69,
            base_experience: 64,
            stats: Vec::new(),
            abilities: Vec::new(),
            moves: (0..moves)
                .map(|i| MoveEntry {
                    name: format!("move-{i}"),
                })
                .collect(),
            images: SpriteSet {
                front: "front.png".into(),
                back: "back.png".into(),
                front_shiny: None,
                back_shiny: None,
            },
        }
    }

    #[test]
    /// What: A missing record becomes a retryable error that keeps the identifier.
    fn not_found_is_retryable_with_same_key() {
        let mut loader = DetailLoader::default();
        let req = loader.open("99999");
        let outcome = loader.apply(DetailResponse {
            request: req,
            result: Ok(None),
        });
        assert!(matches!(outcome, Outcome::Surfaced(ref e) if e.kind == ErrorKind::NotFound));
        assert_eq!(loader.state().key.as_deref(), Some("99999"));
        assert!(!loader.state().is_loading);
        let retry = loader.retry().expect("retry");
        assert_eq!(retry.key, "99999");
        assert!(loader.state().is_loading);
        assert!(loader.state().error.is_none());
    }

    #[test]
    fn transport_failure_is_surfaced() {
        let mut loader = DetailLoader::default();
        let req = loader.open("1");
        let outcome = loader.apply(DetailResponse {
            request: req,
            result: Err(CatalogError::Transport("reset".into())),
        });
        assert!(matches!(outcome, Outcome::Surfaced(ref e) if e.kind == ErrorKind::Fetch));
        assert!(loader.retry().is_some());
    }

    #[test]
    /// What: Reopening drops the response for the previous identifier.
    fn response_for_previous_open_is_discarded() {
        let mut loader = DetailLoader::default();
        let first = loader.open("1");
        let second = loader.open("4");
        assert_eq!(
            loader.apply(DetailResponse {
                request: first,
                result: Ok(Some(detail(1, 0))),
            }),
            Outcome::Discarded
        );
        assert!(loader.state().is_loading);
        assert_eq!(
            loader.apply(DetailResponse {
                request: second,
                result: Ok(Some(detail(4, 0))),
            }),
            Outcome::Applied
        );
        assert_eq!(loader.state().detail.as_ref().map(|d| d.id), Some(4));
    }

    #[test]
    fn close_discards_in_flight_response() {
        let mut loader = DetailLoader::default();
        let req = loader.open("7");
        loader.close();
        assert_eq!(
            loader.apply(DetailResponse {
                request: req,
                result: Ok(Some(detail(7, 0))),
            }),
            Outcome::Discarded
        );
        assert_eq!(loader.state(), &DetailState::default());
    }

    #[test]
    /// What: The sprite flip only works once a record is loaded.
    fn sprite_toggle_flips_current_sprite() {
        let mut loader = DetailLoader::default();
        let req = loader.open("1");
        assert!(!loader.toggle_sprite());
        loader.apply(DetailResponse {
            request: req,
            result: Ok(Some(detail(1, 0))),
        });
        assert_eq!(loader.state().current_sprite(), Some("front.png"));
        assert!(loader.toggle_sprite());
        assert_eq!(loader.state().current_sprite(), Some("back.png"));
    }

    #[test]
    fn sample_moves_caps_at_six_and_reports_total() {
        let d = detail(1, 40);
        let (sample, total) = sample_moves(&d);
        assert_eq!(sample.len(), 6);
        assert_eq!(total, 40);
        let d = detail(1, 2);
        assert_eq!(sample_moves(&d).0.len(), 2);
    }

    #[test]
    fn stat_ratio_is_capped() {
        assert!((stat_ratio(50) - 0.5).abs() < f64::EPSILON);
        assert!((stat_ratio(255) - 1.0).abs() < f64::EPSILON);
    }
}
