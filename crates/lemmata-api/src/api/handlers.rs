//! HTTP handlers

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::ProcessRequest;

use super::state::AppState;

/// POST /process endpoint
///
/// # Request Body
/// ```json
/// { "text": "Gatos bonitos estão pulando sobre cadeiras" }
/// ```
///
/// # Response
/// - 200 OK: JSON array of lemmas
/// - 400 Bad Request: blank text, text too long
/// - 500 Internal Server Error: processing failure
pub async fn post_process(
  State(state): State<AppState>,
  Json(request): Json<ProcessRequest>,
) -> Result<Json<Vec<String>>, ApiError> {
  debug!(text_len = request.text.len(), "Received lemmatization request");

  // Lemmatization is CPU bound and the first request per language loads a model
  let service = state.service.clone();

  let analysis =
    tokio::task::spawn_blocking(move || service.process(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking error");
      ApiError::internal("failed to run the request")
    })??;

  info!(
    language = %analysis.language,
    lemma_count = analysis.lemmas.len(),
    "Lemmatization completed"
  );

  Ok(Json(analysis.lemmas))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
  "OK"
}
