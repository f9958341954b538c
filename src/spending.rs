//! Derived-state calculator for budget goals.
//!
//! `current_spending` is never stored; it is recomputed from the expense
//! collection every time goals are read. Pull-based derivation keeps the
//! value consistent without mutation hooks.

use crate::model::{BudgetGoal, Expense};
use serde::Serialize;

/// A budget goal together with its derived spending, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    #[serde(flatten)]
    pub goal: BudgetGoal,
    pub current_spending: f64,
}

/// Sum of `amount` over expenses in the goal's category. Pure and
/// idempotent; the goal's `period` does not window the sum.
pub fn current_spending(goal: &BudgetGoal, expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|e| e.category_id == goal.category_id)
        .map(|e| e.amount)
        .sum()
}

/// Attaches derived spending to every goal, preserving goal order.
pub fn summarize(goals: Vec<BudgetGoal>, expenses: &[Expense]) -> Vec<BudgetStatus> {
    goals
        .into_iter()
        .map(|goal| {
            let current_spending = current_spending(&goal, expenses);
            BudgetStatus {
                goal,
                current_spending,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Period;

    fn expense(id: &str, category_id: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            description: String::new(),
            amount,
            date: "2026-08-01".to_string(),
            category_id: category_id.to_string(),
            notes: None,
        }
    }

    fn goal(id: &str, category_id: &str, amount: f64) -> BudgetGoal {
        BudgetGoal {
            id: id.to_string(),
            category_id: category_id.to_string(),
            amount,
            period: Period::Monthly,
        }
    }

    #[test]
    fn sums_only_matching_category() {
        let expenses = vec![
            expense("e1", "c1", 40.0),
            expense("e2", "c1", 10.0),
            expense("e3", "c2", 99.0),
        ];
        let g = goal("g1", "c1", 100.0);

        assert_eq!(current_spending(&g, &expenses), 50.0);
    }

    #[test]
    fn empty_expense_list_spends_nothing() {
        let g = goal("g1", "c1", 100.0);
        assert_eq!(current_spending(&g, &[]), 0.0);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let expenses = vec![expense("e1", "c1", 40.0), expense("e2", "c1", 10.0)];
        let g = goal("g1", "c1", 100.0);

        let first = current_spending(&g, &expenses);
        let second = current_spending(&g, &expenses);

        assert_eq!(first, second);
        assert_eq!(expenses.len(), 2);
    }

    #[test]
    fn summarize_keeps_goal_order() {
        let expenses = vec![expense("e1", "c2", 5.0)];
        let statuses = summarize(vec![goal("g1", "c1", 10.0), goal("g2", "c2", 10.0)], &expenses);

        assert_eq!(statuses[0].goal.id, "g1");
        assert_eq!(statuses[0].current_spending, 0.0);
        assert_eq!(statuses[1].goal.id, "g2");
        assert_eq!(statuses[1].current_spending, 5.0);
    }
}
