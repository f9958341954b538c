use crate::app_state::AppState;
use crate::model::{Category, CategoryDraft};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

pub async fn list_categories_handler(State(app_state): State<AppState>) -> Json<Vec<Category>> {
    Json(app_state.categories.list())
}

pub async fn add_category_handler(
    State(app_state): State<AppState>,
    Json(draft): Json<CategoryDraft>,
) -> (StatusCode, Json<Category>) {
    let created = app_state.add_category(draft);
    (StatusCode::CREATED, Json(created))
}

pub async fn delete_category_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    app_state.delete_category(&id);
    StatusCode::NO_CONTENT
}
