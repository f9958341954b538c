/*!
The expense record, the central transaction type of the ledger.
*/

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fresh_id;

/**
A single recorded expense.

`category_id` references a [`super::Category`] by id. The reference is not
enforced: a dangling id renders as "Uncategorized" instead of failing.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// UUID v4, assigned at creation.
    pub id: String,

    /// Short human-entered label, e.g. "Groceries at Lidl".
    pub description: String,

    /// Non-negative amount in the household currency.
    pub amount: f64,

    /// ISO-8601 calendar date (YYYY-MM-DD).
    pub date: String,

    /// Id of the category this expense belongs to.
    pub category_id: String,

    /// Free-form notes, optional.
    pub notes: Option<String>,
}

impl Expense {
    /// Parses `date`; `None` when the stored string is not a valid
    /// ISO-8601 date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// An expense as submitted by a client, before an id is assigned.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub category_id: String,
    pub notes: Option<String>,
}

impl From<ExpenseDraft> for Expense {
    fn from(draft: ExpenseDraft) -> Self {
        Expense {
            id: fresh_id(),
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            category_id: draft.category_id,
            notes: draft.notes,
        }
    }
}
