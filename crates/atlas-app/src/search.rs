//! Debounced, cancelable country lookup.
//!
//! Keystrokes funnel through [`SearchController::set_query`]. Short
//! queries clear the suggestions without touching the network; anything
//! else is looked up after a quiet period. A generation counter guards
//! every state write so a response for a superseded query can never
//! clobber the current one, on top of the cooperative cancellation the
//! debouncer already provides.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use atlas_api::{Country, CountryApi};

use crate::timer::Debouncer;

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 3;

/// Quiet period between the last keystroke and the lookup.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Displayed search state.
///
/// `loading` is true only while a request for the current query is
/// outstanding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub suggestions: Vec<Country>,
    pub loading: bool,
}

/// Converts free-text input into a debounced lookup of country candidates.
pub struct SearchController {
    api: Arc<dyn CountryApi>,
    state: Arc<Mutex<SearchState>>,
    generation: Arc<AtomicU64>,
    debouncer: Debouncer,
}

impl SearchController {
    pub fn new(api: Arc<dyn CountryApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(SearchState::default())),
            generation: Arc::new(AtomicU64::new(0)),
            debouncer: Debouncer::new(),
        }
    }

    /// Record a keystroke.
    ///
    /// Trimmed queries under [`MIN_QUERY_CHARS`] clear the suggestions
    /// immediately and cancel any pending lookup. Longer queries schedule
    /// a lookup after [`DEBOUNCE_DELAY`] of quiet; a newer keystroke
    /// cancels and reschedules it.
    pub fn set_query(&self, raw: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let trimmed = raw.trim().to_owned();
        let below_minimum = trimmed.chars().count() < MIN_QUERY_CHARS;

        {
            let mut state = self.state.lock();
            state.query = raw.to_owned();
            state.loading = false;
            if below_minimum {
                state.suggestions.clear();
            }
        }

        if below_minimum {
            self.debouncer.cancel();
            return;
        }

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let generations = Arc::clone(&self.generation);

        self.debouncer.schedule(DEBOUNCE_DELAY, async move {
            // A newer keystroke may have won the race to cancel us.
            if generations.load(Ordering::SeqCst) != generation {
                return;
            }

            state.lock().loading = true;
            let result = api.search(&trimmed).await;

            let mut state = state.lock();
            if generations.load(Ordering::SeqCst) != generation {
                // Stale response; the current query owns the state now.
                return;
            }
            state.loading = false;
            match result {
                Ok(countries) => {
                    tracing::debug!(query = %trimmed, count = countries.len(), "Search completed");
                    state.suggestions = countries;
                }
                Err(e) => {
                    tracing::warn!(query = %trimmed, error = %e, "Country search failed");
                    state.suggestions.clear();
                }
            }
        });
    }

    /// Reset the field, e.g. after a successful save.
    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.debouncer.cancel();

        let mut state = self.state.lock();
        state.query.clear();
        state.suggestions.clear();
        state.loading = false;
    }

    /// Snapshot of the current state for rendering.
    pub fn state(&self) -> SearchState {
        self.state.lock().clone()
    }

    /// Cancel pending and in-flight work. No state mutation can happen
    /// after this returns.
    pub(crate) fn shutdown(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.debouncer.cancel();
    }
}
