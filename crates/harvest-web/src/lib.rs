pub mod api;
pub mod config;
pub mod state;

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::ServerConfig;
pub use state::AppState;

/// Largest accepted request body, for pasted documents.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Routes are served at the root and again under `/api`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api::router())
        .nest("/api", api::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
