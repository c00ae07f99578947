mod error;
mod extract;
mod health;

pub use error::{ApiError, ErrorResponse};

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(extract::router())
        .merge(health::router())
}
