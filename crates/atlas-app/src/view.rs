//! Composition root for the weather view.
//!
//! Session and notification handles are passed in explicitly; there is no
//! ambient context to reach into. The view model owns the search state
//! and the saved list and routes user actions to the components behind
//! them.

use std::sync::Arc;

use atlas_api::{Country, CountryApi, SavedCountry};
use atlas_auth::SessionStore;

use crate::notify::{DismissReason, Notification, NotificationQueue};
use crate::save::{self, SaveError};
use crate::search::{SearchController, SearchState};
use crate::sync::SyncScheduler;

pub struct WeatherViewModel {
    api: Arc<dyn CountryApi>,
    session: SessionStore,
    notifications: NotificationQueue,
    search: SearchController,
    sync: SyncScheduler,
}

impl WeatherViewModel {
    pub fn new(
        api: Arc<dyn CountryApi>,
        session: SessionStore,
        notifications: NotificationQueue,
    ) -> Self {
        let search = SearchController::new(Arc::clone(&api));
        let sync = SyncScheduler::new(Arc::clone(&api), session.clone());
        Self {
            api,
            session,
            notifications,
            search,
            sync,
        }
    }

    /// Start the background weather refresh. Idempotent.
    pub fn activate(&self) {
        self.sync.start();
    }

    /// Cancel the poll loop and any pending or in-flight search work.
    pub fn deactivate(&self) {
        self.sync.stop();
        self.search.shutdown();
    }

    /// Route a keystroke to the search controller.
    pub fn set_query(&self, raw: &str) {
        self.search.set_query(raw);
    }

    /// Persist a selected suggestion against the current session.
    pub async fn select_country(&self, country: &Country) -> Result<(), SaveError> {
        save::save_country(
            &self.api,
            &self.session,
            &self.notifications,
            &self.search,
            &self.sync,
            country,
        )
        .await
    }

    /// Clear the session and tear the view down.
    pub fn logout(&self) {
        self.deactivate();
        self.session.logout();
    }

    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    pub fn saved_countries(&self) -> Vec<SavedCountry> {
        self.sync.saved()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifications.current()
    }

    pub fn dismiss_notification(&self, reason: DismissReason) {
        self.notifications.dismiss(reason);
    }
}
