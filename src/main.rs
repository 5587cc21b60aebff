use std::sync::Arc;

use anyhow::{Context, Result};

use atlas_api::CountryClient;
use atlas_app::{NotificationQueue, Severity, WeatherViewModel};
use atlas_auth::{AuthClient, SessionStore};
use atlas_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    atlas_core::init()?;

    let (config, _validation) = Config::load_validated()?;

    let session = SessionStore::new();
    let notifications = NotificationQueue::new();

    // The login form is out of scope for the headless binary; credentials
    // come from the environment.
    let email = std::env::var("ATLAS_EMAIL").context("ATLAS_EMAIL is not set")?;
    let password = std::env::var("ATLAS_PASSWORD").context("ATLAS_PASSWORD is not set")?;

    let auth = AuthClient::new(&config.auth.base_url, &config.auth.password_key)?;
    match auth.login(&email, &password).await {
        Ok(s) => session.login(s.token, s.user_id),
        Err(e) => {
            notifications.show(e.user_message(), Severity::Error);
            return Err(anyhow::Error::from(e).context("Login failed"));
        }
    }

    let api = Arc::new(CountryClient::new(&config.api.base_url)?);
    let view = WeatherViewModel::new(api, session, notifications);
    view.activate();

    tracing::info!("Atlas started; press Ctrl-C to exit");
    tokio::signal::ctrl_c().await?;

    view.logout();
    Ok(())
}
