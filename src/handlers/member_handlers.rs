use crate::app_state::AppState;
use crate::model::{Contribution, Member, MemberDraft};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

pub async fn list_members_handler(State(app_state): State<AppState>) -> Json<Vec<Member>> {
    Json(app_state.members.list())
}

pub async fn add_member_handler(
    State(app_state): State<AppState>,
    Json(draft): Json<MemberDraft>,
) -> (StatusCode, Json<Member>) {
    let created = app_state.add_member(draft);
    (StatusCode::CREATED, Json(created))
}

pub async fn delete_member_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    app_state.delete_member(&id);
    StatusCode::NO_CONTENT
}

/// Works for deleted members too: their contributions are not cascaded.
pub async fn member_contributions_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Contribution>> {
    Json(app_state.member_contributions(&id))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionTotal {
    pub member_id: String,
    pub total: f64,
}

pub async fn member_contribution_total_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ContributionTotal> {
    let total = app_state.member_total_contribution(&id);
    Json(ContributionTotal {
        member_id: id,
        total,
    })
}
