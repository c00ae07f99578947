use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use harvest_core::{ContactRecord, ExtractionRequest};

use super::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/extract", post(extract_contacts))
}

async fn extract_contacts(
    State(state): State<AppState>,
    payload: Result<Json<ExtractionRequest>, JsonRejection>,
) -> Result<Json<Vec<ContactRecord>>, ApiError> {
    let Json(request) = payload?;
    tracing::info!(kind = ?request.kind, chars = request.source.len(), "extract request");

    let records = state.pipeline.run(&request).await?;

    Ok(Json(records))
}
