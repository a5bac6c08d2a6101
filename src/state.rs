use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Shared application state injected into all handlers.
///
/// Constructed once at startup and cloned per request; the store handle is
/// never reached through ambient global state.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<SqliteUrlRepository>>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService<SqliteUrlRepository>>) -> Self {
        Self { url_service }
    }
}
