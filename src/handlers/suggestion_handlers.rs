use crate::app_state::AppState;
use crate::genai::{Suggestion, SuggestionRequest, suggest_text};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::error;

/// Failure is surfaced to the caller as a rejected suggestion; the client
/// decides what, if anything, to do about it.
pub async fn suggest_handler(
    State(app_state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<Suggestion>, (StatusCode, String)> {
    match suggest_text(&app_state.gemini, &request).await {
        Ok(suggestion) => Ok(Json(suggestion)),
        Err(e) => {
            error!("Suggestion failed: {:#?}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                "suggestion unavailable".to_string(),
            ))
        }
    }
}
