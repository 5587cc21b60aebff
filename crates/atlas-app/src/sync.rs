//! Periodic refresh of the saved-countries list.
//!
//! Polls the weather endpoint once immediately on start and then at a
//! fixed interval until stopped. Every fetch stands alone: a failure is
//! logged and the previously displayed list stays put.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use atlas_api::{CountryApi, SavedCountry};
use atlas_auth::SessionStore;

/// Fixed period between scheduled refreshes.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Background poll loop plus the saved list it maintains.
pub struct SyncScheduler {
    api: Arc<dyn CountryApi>,
    session: SessionStore,
    saved: Arc<Mutex<Vec<SavedCountry>>>,
    running: Mutex<Option<CancellationToken>>,
}

impl SyncScheduler {
    pub(crate) fn new(api: Arc<dyn CountryApi>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            saved: Arc::new(Mutex::new(Vec::new())),
            running: Mutex::new(None),
        }
    }

    /// Start polling: one fetch immediately, then every [`POLL_INTERVAL`].
    /// Idempotent while already running.
    pub fn start(&self) {
        let mut slot = self.running.lock();
        if slot.is_some() {
            return;
        }
        let token = CancellationToken::new();
        *slot = Some(token.clone());

        let api = Arc::clone(&self.api);
        let session = self.session.clone();
        let saved = Arc::clone(&self.saved);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(POLL_INTERVAL);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => refresh(&api, &session, &saved).await,
                }
            }
            tracing::debug!("Weather poll loop stopped");
        });
    }

    /// Stop polling. In-flight work is cancelled with the loop.
    pub fn stop(&self) {
        if let Some(token) = self.running.lock().take() {
            token.cancel();
        }
    }

    /// One out-of-band refresh, used after a successful save. Overlap with
    /// a scheduled tick is harmless: both fetch the same authoritative
    /// list, so last-response-wins.
    pub async fn refresh_now(&self) {
        refresh(&self.api, &self.session, &self.saved).await;
    }

    /// Snapshot of the saved list for rendering.
    pub fn saved(&self) -> Vec<SavedCountry> {
        self.saved.lock().clone()
    }
}

impl Drop for SyncScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn refresh(
    api: &Arc<dyn CountryApi>,
    session: &SessionStore,
    saved: &Mutex<Vec<SavedCountry>>,
) {
    // Authorization is re-evaluated on every fetch, never cached.
    let Some(session) = session.current() else {
        tracing::debug!("Skipping saved-country refresh without a session");
        return;
    };

    match api.saved_with_weather(session.user_id).await {
        Ok(list) => {
            tracing::debug!(count = list.len(), "Refreshed saved countries");
            *saved.lock() = list;
        }
        Err(e) => {
            // Stale-but-available beats empty-on-error.
            tracing::warn!(error = %e, "Failed to refresh saved countries");
        }
    }
}
