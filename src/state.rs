//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The demo keeps nothing between requests, so the only shared value is
//! the page rendered once at startup.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::page;

/// Read-only per-process state. The rendered page is shared, not re-rendered per clone.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub page: Arc<str>,
}

impl AppState {
    /// Render the page and capture the config.
    ///
    /// # Errors
    ///
    /// Returns an error if the page template fails to render.
    pub fn new(config: ServerConfig) -> Result<Self, askama::Error> {
        Ok(Self { config, page: Arc::from(page::render_page()?) })
    }
}
