use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// The pipeline itself is stateless; only configuration is carried.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
