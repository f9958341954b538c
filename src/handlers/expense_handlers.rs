use crate::app_state::AppState;
use crate::csv::{ExpenseCsv, VecToCsv};
use crate::model::{Expense, ExpenseDraft};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

pub async fn list_expenses_handler(State(app_state): State<AppState>) -> Json<Vec<Expense>> {
    Json(app_state.expenses.list())
}

pub async fn add_expense_handler(
    State(app_state): State<AppState>,
    Json(draft): Json<ExpenseDraft>,
) -> (StatusCode, Json<Expense>) {
    let created = app_state.add_expense(draft);
    (StatusCode::CREATED, Json(created))
}

pub async fn update_expense_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(mut expense): Json<Expense>,
) -> StatusCode {
    // the path id is authoritative
    expense.id = id;
    app_state.update_expense(expense);
    StatusCode::NO_CONTENT
}

pub async fn delete_expense_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    app_state.delete_expense(&id);
    StatusCode::NO_CONTENT
}

pub async fn expenses_to_csv_handler(State(app_state): State<AppState>) -> String {
    let mut expenses = app_state.expenses.list();
    // oldest first; unparseable dates sort to the front
    expenses.sort_by_key(|e| e.parsed_date());

    let rows: Vec<ExpenseCsv> = expenses
        .iter()
        .map(|expense| {
            let mut row: ExpenseCsv = expense.into();
            if let Some(category) = app_state.get_category_by_id(&expense.category_id) {
                row.set_category(&category);
            }
            row
        })
        .collect();
    rows.to_csv()
}
