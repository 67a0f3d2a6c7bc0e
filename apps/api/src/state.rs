use std::sync::Arc;

use crate::config::Config;
use crate::contact::dispatch::EmailDispatcher;
use crate::models::profile::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub profile: Profile,
    /// Mail relay used by the contact form. `EmailJsClient` in production.
    pub mailer: Arc<dyn EmailDispatcher>,
}
