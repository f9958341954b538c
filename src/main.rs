use axum::{
    Router,
    routing::{delete, get, post, put},
};
use clokwerk::{Job, Scheduler, TimeUnits};
use household_ledger::app_state::AppState;
use household_ledger::genai::GeminiClient;
use household_ledger::handlers::{
    add_budget_goal_handler, add_category_handler, add_contribution_handler, add_expense_handler,
    add_member_handler, contributions_to_csv_handler, delete_budget_goal_handler,
    delete_category_handler, delete_expense_handler, delete_member_handler,
    expenses_to_csv_handler, list_budget_goals_handler, list_categories_handler,
    list_contributions_handler, list_expenses_handler, list_members_handler,
    member_contribution_total_handler, member_contributions_handler, suggest_handler,
    update_expense_handler,
};
use household_ledger::review::run_budget_review;
use household_ledger::store::{
    BudgetGoalsDb, CategoriesDb, ContributionsDb, ExpensesDb, JsonFileStore, MembersDb,
};
use std::time::Duration;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // init file-backed collections; a missing or corrupt data directory
    // degrades to empty in-memory collections, never a startup failure
    let store = JsonFileStore::from_env();
    let app_state = AppState {
        expenses: ExpensesDb::open_expenses(&store),
        categories: CategoriesDb::open_categories(&store),
        budget_goals: BudgetGoalsDb::open_budget_goals(&store),
        members: MembersDb::open_members(&store),
        contributions: ContributionsDb::open_contributions(&store),
        gemini: GeminiClient::new(),
    };

    // optional daily budget review, logged only
    if let Ok(review_at) = dotenv::var("SCHEDULER_BUDGET_REVIEW_AT") {
        let mut scheduler = Scheduler::new();
        let app_state = app_state.clone();
        scheduler.every(1.day()).at(&review_at).run(move || {
            run_budget_review(&app_state);
        });

        tokio::spawn(async move {
            info!("Scheduler started.");
            loop {
                scheduler.run_pending();
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        });
    }

    // build our application with a route
    let app = Router::new()
        .route("/", get(root))
        .route(
            "/expenses",
            get(list_expenses_handler).post(add_expense_handler),
        )
        .route("/expenses/csv", get(expenses_to_csv_handler))
        .route(
            "/expenses/{id}",
            put(update_expense_handler).delete(delete_expense_handler),
        )
        .route(
            "/categories",
            get(list_categories_handler).post(add_category_handler),
        )
        .route("/categories/{id}", delete(delete_category_handler))
        .route(
            "/budget-goals",
            get(list_budget_goals_handler).post(add_budget_goal_handler),
        )
        .route("/budget-goals/{id}", delete(delete_budget_goal_handler))
        .route("/members", get(list_members_handler).post(add_member_handler))
        .route("/members/{id}", delete(delete_member_handler))
        .route(
            "/members/{id}/contributions",
            get(member_contributions_handler),
        )
        .route(
            "/members/{id}/contributions/total",
            get(member_contribution_total_handler),
        )
        .route(
            "/contributions",
            get(list_contributions_handler).post(add_contribution_handler),
        )
        .route("/contributions/csv", get(contributions_to_csv_handler))
        .route("/suggest", post(suggest_handler))
        .with_state(app_state)
        .layer((
            TraceLayer::new_for_http(),
            // Graceful shutdown will wait for outstanding requests to complete. Add a timeout so
            // requests don't hang forever.
            TimeoutLayer::new(Duration::from_secs(10)),
        ));

    let addr = dotenv::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn root() -> String {
    "ok".to_string()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down.");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down.");
        },
    }
}
