//! Search controller: query changes become debounce commands, responses are guarded by ticket id.

use tracing::{debug, warn};

use super::Outcome;
use crate::sources::CatalogError;
use crate::state::{
    DEFAULT_SEARCH_MIN_CHARS, ErrorInfo, SearchCommand, SearchLookup, SearchState, SearchTicket,
};

/// Owns [`SearchState`] and the id of the latest ticket.
#[derive(Debug)]
pub struct SearchController {
    state: SearchState,
    min_chars: usize,
    current: Option<SearchTicket>,
    next_ticket_id: u64,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_MIN_CHARS)
    }
}

impl SearchController {
    /// What: Create a controller that searches once the trimmed query has `min_chars` characters.
    #[must_use]
    pub fn new(min_chars: usize) -> Self {
        Self {
            state: SearchState::default(),
            min_chars: min_chars.max(1),
            current: None,
            next_ticket_id: 0,
        }
    }

    /// Current search state.
    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Minimum trimmed length before a search is issued.
    #[must_use]
    pub const fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Latest issued ticket, if a search is scheduled or running.
    #[must_use]
    pub const fn current_ticket(&self) -> Option<&SearchTicket> {
        self.current.as_ref()
    }

    fn reset(&mut self) {
        self.state = SearchState::default();
        self.current = None;
    }

    /// What: React to an edit of the search input.
    ///
    /// Inputs:
    /// - `query`: Full input text after the edit
    ///
    /// Output:
    /// - `SearchCommand::Schedule` when the trimmed query is long enough, else `Cancel`.
    ///
    /// Details:
    /// - Each scheduled ticket supersedes the previous one, so only the last edit inside the
    ///   debounce window reaches the catalog and only its response may change state.
    pub fn on_query_changed(&mut self, query: &str) -> SearchCommand {
        let term = query.trim().to_lowercase();
        let len = term.chars().count();
        if len == 0 {
            self.reset();
            self.state.query = query.to_string();
            return SearchCommand::Cancel;
        }

        self.state.query = query.to_string();
        self.state.is_active = true;
        self.state.is_loading = false;
        self.state.results.clear();
        self.state.error = None;
        if len < self.min_chars {
            self.current = None;
            return SearchCommand::Cancel;
        }

        self.next_ticket_id += 1;
        let ticket = SearchTicket {
            id: self.next_ticket_id,
            term,
        };
        debug!(id = ticket.id, term = %ticket.term, "search scheduled");
        self.current = Some(ticket.clone());
        SearchCommand::Schedule(ticket)
    }

    /// What: Clear the query and all search state.
    ///
    /// Output:
    /// - `SearchCommand::Cancel` for the debounce worker.
    pub fn clear(&mut self) -> SearchCommand {
        self.reset();
        SearchCommand::Cancel
    }

    /// What: Mark a ticket as fetching once its debounce window elapsed.
    pub fn on_started(&mut self, ticket: &SearchTicket) -> Outcome {
        if !self.is_current(ticket) {
            return Outcome::Discarded;
        }
        self.state.is_loading = true;
        Outcome::Applied
    }

    /// What: Fold a search response into state.
    ///
    /// Output:
    /// - `Discarded` for any ticket other than the latest one.
    /// - `Surfaced` for transport failures; an empty match set is `Applied` with the
    ///   no-results marker set.
    pub fn apply(
        &mut self,
        ticket: &SearchTicket,
        result: Result<SearchLookup, CatalogError>,
    ) -> Outcome {
        if !self.is_current(ticket) {
            debug!(id = ticket.id, term = %ticket.term, "discarding stale search response");
            return Outcome::Discarded;
        }
        self.state.is_loading = false;
        match result {
            Ok(SearchLookup::NoQuery) => {
                self.state.results.clear();
                self.state.error = None;
                Outcome::Applied
            }
            Ok(SearchLookup::Matches(matches)) if matches.is_empty() => {
                self.state.results.clear();
                self.state.error = Some(ErrorInfo::no_results());
                Outcome::Applied
            }
            Ok(SearchLookup::Matches(matches)) => {
                debug!(term = %ticket.term, matches = matches.len(), "search applied");
                self.state.results = matches;
                self.state.error = None;
                Outcome::Applied
            }
            Err(e) => {
                warn!(term = %ticket.term, error = %e, "search failed");
                let info = ErrorInfo::fetch(&e);
                self.state.results.clear();
                self.state.error = Some(info.clone());
                Outcome::Surfaced(info)
            }
        }
    }

    fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.current.as_ref().is_some_and(|c| c.id == ticket.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ErrorKind, ItemSummary};

    fn summary(id: u32, name: &str) -> ItemSummary {
        ItemSummary {
            id,
            name: name.into(),
            primary_image_url: String::new(),
            secondary_image_url: None,
            categories: Vec::new(),
        }
    }

    fn schedule(ctrl: &mut SearchController, q: &str) -> SearchTicket {
        match ctrl.on_query_changed(q) {
            SearchCommand::Schedule(t) => t,
            SearchCommand::Cancel => panic!("expected a scheduled search for {q:?}"),
        }
    }

    #[test]
    /// What: Blank input deactivates search and cancels pending work.
    fn empty_query_resets_state() {
        let mut ctrl = SearchController::default();
        let _ = schedule(&mut ctrl, "pika");
        assert_eq!(ctrl.on_query_changed("   "), SearchCommand::Cancel);
        assert!(!ctrl.state().is_active);
        assert!(ctrl.state().results.is_empty());
        assert!(ctrl.current_ticket().is_none());
    }

    #[test]
    /// What: A single character activates search without fetching.
    fn short_query_is_active_but_not_fetched() {
        let mut ctrl = SearchController::default();
        assert_eq!(ctrl.on_query_changed("p"), SearchCommand::Cancel);
        assert!(ctrl.state().is_active);
        assert!(!ctrl.state().is_loading);
        assert!(ctrl.current_ticket().is_none());
    }

    #[test]
    /// What: Terms are trimmed and lowercased before they reach the worker.
    fn scheduled_term_is_normalized() {
        let mut ctrl = SearchController::default();
        let t = schedule(&mut ctrl, "  PiKa ");
        assert_eq!(t.term, "pika");
        assert_eq!(ctrl.state().query, "  PiKa ");
    }

    #[test]
    /// What: "char" resolving after "chari" became current must not overwrite it.
    fn stale_response_is_discarded() {
        let mut ctrl = SearchController::default();
        let char_ticket = schedule(&mut ctrl, "char");
        assert_eq!(ctrl.on_started(&char_ticket), Outcome::Applied);
        let chari_ticket = schedule(&mut ctrl, "chari");

        let chari = ctrl.apply(
            &chari_ticket,
            Ok(SearchLookup::Matches(vec![summary(5, "charmeleon")])),
        );
        assert_eq!(chari, Outcome::Applied);
        let late = ctrl.apply(
            &char_ticket,
            Ok(SearchLookup::Matches(vec![
                summary(4, "charmander"),
                summary(5, "charmeleon"),
            ])),
        );
        assert_eq!(late, Outcome::Discarded);
        assert_eq!(ctrl.state().results.len(), 1);
        assert_eq!(ctrl.state().results[0].name, "charmeleon");
        assert_eq!(ctrl.on_started(&char_ticket), Outcome::Discarded);
    }

    #[test]
    /// What: Zero matches set the no-results marker, which is not a failure.
    fn empty_matches_set_no_results_marker() {
        let mut ctrl = SearchController::default();
        let t = schedule(&mut ctrl, "zzz");
        ctrl.on_started(&t);
        assert!(ctrl.state().is_loading);
        assert_eq!(ctrl.apply(&t, Ok(SearchLookup::Matches(Vec::new()))), Outcome::Applied);
        let err = ctrl.state().error.as_ref().expect("marker");
        assert_eq!(err.kind, ErrorKind::NoResults);
        assert!(!ctrl.state().is_loading);
    }

    #[test]
    fn failure_is_surfaced_and_clears_results() {
        let mut ctrl = SearchController::default();
        let t = schedule(&mut ctrl, "mew");
        let outcome = ctrl.apply(&t, Err(CatalogError::Transport("dns".into())));
        assert!(matches!(outcome, Outcome::Surfaced(ref e) if e.kind == ErrorKind::Fetch));
        assert!(ctrl.state().results.is_empty());
    }

    #[test]
    /// What: Clearing cancels the pending ticket so its late response is dropped.
    fn clear_discards_in_flight_response() {
        let mut ctrl = SearchController::default();
        let t = schedule(&mut ctrl, "eevee");
        assert_eq!(ctrl.clear(), SearchCommand::Cancel);
        assert_eq!(
            ctrl.apply(&t, Ok(SearchLookup::Matches(vec![summary(133, "eevee")]))),
            Outcome::Discarded
        );
        assert_eq!(ctrl.state(), &SearchState::default());
    }
}
