//! Search input state
//!
//! Holds the query and the suggestion list and decides what each event
//! should do. Timers and requests are driven by the caller; this type only
//! hands out tickets and checks them when results come back.

use crate::backend::api::query_url;
use crate::backend::types::Suggestion;
use crate::error::LookupError;

/// Queries shorter than this never reach the backend
pub const MIN_LOOKUP_CHARS: usize = 2;

/// Outcome of a debounce timer firing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The timer was superseded by a later keystroke
    Superseded,
    /// Query too short; suggestions were cleared locally
    Cleared,
    /// Issue a request for `term`, tagged with `seq`
    Fetch { seq: u64, term: String },
}

#[derive(Debug, Default)]
pub struct SearchState {
    query: String,
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
    /// Bumped on every query change
    generation: u64,
    /// Sequence of the latest issued lookup
    issued: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Store the raw input and return the ticket for its debounce timer.
    pub fn set_query(&mut self, query: String) -> u64 {
        self.query = query;
        self.generation += 1;
        self.generation
    }

    /// The debounce timer tagged `ticket` has elapsed.
    pub fn debounce_elapsed(&mut self, ticket: u64) -> Lookup {
        if ticket != self.generation {
            return Lookup::Superseded;
        }

        // any lookup still in flight is now stale
        self.issued += 1;

        if self.query.chars().count() < MIN_LOOKUP_CHARS {
            self.clear_suggestions();
            return Lookup::Cleared;
        }

        Lookup::Fetch {
            seq: self.issued,
            term: self.query.clone(),
        }
    }

    /// Apply a finished lookup. Returns false when `seq` was superseded and
    /// the result was dropped.
    pub fn lookup_finished(&mut self, seq: u64, result: Result<Vec<Suggestion>, LookupError>) -> bool {
        if seq != self.issued {
            tracing::debug!("Discarding stale lookup #{} (latest #{})", seq, self.issued);
            return false;
        }

        match result {
            Ok(list) => {
                tracing::debug!("Lookup #{} returned {} suggestions", seq, list.len());
                self.suggestions = list;
                self.selected = None;
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.clear_suggestions();
            }
        }
        true
    }

    /// Navigation target for the current query, if it is not blank.
    pub fn submit(&self, search_url: &str) -> Option<String> {
        let term = self.query.trim();
        if term.is_empty() {
            return None;
        }
        Some(query_url(search_url, term))
    }

    /// Navigation target for the suggestion at `index`.
    pub fn select(&self, index: usize, search_url: &str) -> Option<String> {
        self.suggestions
            .get(index)
            .map(|s| select_target(s, search_url))
    }

    /// Enter key: the highlighted suggestion wins over the raw query.
    pub fn activate(&self, search_url: &str) -> Option<String> {
        match self.selected {
            Some(index) => self.select(index, search_url),
            None => self.submit(search_url),
        }
    }

    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.suggestions.len(),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    /// Drop the query and suggestions and invalidate every ticket handed out.
    pub fn reset(&mut self) {
        self.query.clear();
        self.clear_suggestions();
        self.generation += 1;
        self.issued += 1;
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.selected = None;
    }
}

/// Navigation target for a suggestion: its label, not the full text.
pub fn select_target(suggestion: &Suggestion, search_url: &str) -> String {
    query_url(search_url, suggestion.search_term())
}
