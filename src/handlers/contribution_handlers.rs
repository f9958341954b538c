use crate::app_state::AppState;
use crate::csv::{ContributionCsv, VecToCsv};
use crate::model::{Contribution, ContributionDraft};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

pub async fn list_contributions_handler(
    State(app_state): State<AppState>,
) -> Json<Vec<Contribution>> {
    Json(app_state.contributions.list())
}

pub async fn add_contribution_handler(
    State(app_state): State<AppState>,
    Json(draft): Json<ContributionDraft>,
) -> (StatusCode, Json<Contribution>) {
    let created = app_state.add_contribution(draft);
    (StatusCode::CREATED, Json(created))
}

pub async fn contributions_to_csv_handler(State(app_state): State<AppState>) -> String {
    let rows: Vec<ContributionCsv> = app_state
        .contributions
        .list()
        .iter()
        .map(|contribution| {
            let mut row: ContributionCsv = contribution.into();
            if let Some(member) = app_state.get_member_by_id(&contribution.member_id) {
                row.set_member(&member);
            }
            row
        })
        .collect();
    rows.to_csv()
}
