//! Scheduled budget review: recomputes every goal's spending and logs the
//! ones at or over their ceiling.

use crate::app_state::AppState;
use crate::model::UNCATEGORIZED;
use crate::spending::BudgetStatus;
use chrono::Local;
use tracing::{info, warn};

pub fn run_budget_review(app_state: &AppState) {
    let today = Local::now().date_naive();
    let overview = app_state.budget_overview();
    info!("Budget review for {}: {} goals.", today, overview.len());

    for status in over_budget(&overview) {
        let category = app_state
            .get_category_by_id(&status.goal.category_id)
            .map(|c| c.name)
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        warn!(
            "Budget goal for {} ({}) reached: {:.2} of {:.2} spent.",
            category, status.goal.period, status.current_spending, status.goal.amount
        );
    }
}

fn over_budget(statuses: &[BudgetStatus]) -> Vec<&BudgetStatus> {
    statuses
        .iter()
        .filter(|s| s.current_spending >= s.goal.amount)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BudgetGoal, Period};

    fn status(id: &str, ceiling: f64, spent: f64) -> BudgetStatus {
        BudgetStatus {
            goal: BudgetGoal {
                id: id.to_string(),
                category_id: "c1".to_string(),
                amount: ceiling,
                period: Period::Monthly,
            },
            current_spending: spent,
        }
    }

    #[test]
    fn flags_goals_at_or_over_the_ceiling() {
        let statuses = vec![
            status("under", 100.0, 50.0),
            status("exact", 100.0, 100.0),
            status("over", 100.0, 120.0),
        ];

        let flagged: Vec<&str> = over_budget(&statuses)
            .iter()
            .map(|s| s.goal.id.as_str())
            .collect();

        assert_eq!(flagged, vec!["exact", "over"]);
    }
}
