use serde::{Deserialize, Serialize};

use super::fresh_id;

/**
A spending ceiling for one category.

The goal stores only the target; the amount actually spent against it is
derived from the expense collection at read time (see [`crate::spending`])
and is never persisted, so it cannot go stale.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetGoal {
    /// UUID v4, assigned at creation.
    pub id: String,

    /// Id of the category this goal constrains. Expected to be unique per
    /// category, but not enforced.
    pub category_id: String,

    /// Target ceiling.
    pub amount: f64,

    /// Informational cadence label. Does not window the derived sum.
    pub period: Period,
}

/// Cadence a budget goal is described with.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Period {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetGoalDraft {
    pub category_id: String,
    pub amount: f64,
    pub period: Period,
}

impl From<BudgetGoalDraft> for BudgetGoal {
    fn from(draft: BudgetGoalDraft) -> Self {
        BudgetGoal {
            id: fresh_id(),
            category_id: draft.category_id,
            amount: draft.amount,
            period: draft.period,
        }
    }
}
