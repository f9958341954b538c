use crate::app_state::AppState;
use crate::model::{BudgetGoal, BudgetGoalDraft};
use crate::spending::BudgetStatus;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

/// Goals are always served with `current_spending` derived from the
/// expense collection at this moment.
pub async fn list_budget_goals_handler(
    State(app_state): State<AppState>,
) -> Json<Vec<BudgetStatus>> {
    Json(app_state.budget_overview())
}

pub async fn add_budget_goal_handler(
    State(app_state): State<AppState>,
    Json(draft): Json<BudgetGoalDraft>,
) -> (StatusCode, Json<BudgetGoal>) {
    let created = app_state.add_budget_goal(draft);
    (StatusCode::CREATED, Json(created))
}

pub async fn delete_budget_goal_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    app_state.delete_budget_goal(&id);
    StatusCode::NO_CONTENT
}
