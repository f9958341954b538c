use serde::{Deserialize, Serialize};

use super::fresh_id;

/**
Money a member put into the shared household finances.

`member_id` references a [`super::Member`] by id. Deleting a member does not
cascade here: orphaned contributions stay in the collection and render with
the fallback member label.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// UUID v4, assigned at creation.
    pub id: String,

    pub member_id: String,

    pub amount: f64,

    /// ISO-8601 calendar date (YYYY-MM-DD).
    pub date: String,

    pub notes: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionDraft {
    pub member_id: String,
    pub amount: f64,
    pub date: String,
    pub notes: Option<String>,
}

impl From<ContributionDraft> for Contribution {
    fn from(draft: ContributionDraft) -> Self {
        Contribution {
            id: fresh_id(),
            member_id: draft.member_id,
            amount: draft.amount,
            date: draft.date,
            notes: draft.notes,
        }
    }
}
