//! Create-then-refresh save workflow.
//!
//! The saved list is never pre-inserted into: a country appears only via
//! the refresh that follows a confirmed create, so the display always
//! reflects server truth.

use std::sync::Arc;

use thiserror::Error;

use atlas_api::{ApiError, Country, CountryApi, CreateCountryRequest};
use atlas_auth::SessionStore;

use crate::notify::{NotificationQueue, Severity};
use crate::search::SearchController;
use crate::sync::SyncScheduler;

/// Save workflow failures.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The selection was made without a session; nothing was sent.
    #[error("not authenticated")]
    NotAuthenticated,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub(crate) async fn save_country(
    api: &Arc<dyn CountryApi>,
    session: &SessionStore,
    notifications: &NotificationQueue,
    search: &SearchController,
    sync: &SyncScheduler,
    country: &Country,
) -> Result<(), SaveError> {
    // Fail fast before the network; not user-visible, unlike a rejected save.
    let Some(session) = session.current() else {
        tracing::warn!(country = %country.name, "Refusing to save without a session");
        return Err(SaveError::NotAuthenticated);
    };

    let request = CreateCountryRequest::from(country);
    match api.create(&session.token, &request).await {
        Ok(()) => {
            tracing::info!(country = %country.name, "Country saved");
            notifications.show(
                format!("Country {} has been saved successfully.", country.name),
                Severity::Success,
            );
            sync.refresh_now().await;
            search.clear();
            Ok(())
        }
        Err(e) => {
            tracing::error!(country = %country.name, error = %e, "Failed to save country");
            notifications.show("Error saving country. Please try again.", Severity::Error);
            Err(e.into())
        }
    }
}
