mod budget_goal;
mod category;
mod contribution;
mod expense;
mod member;

pub use self::budget_goal::*;
pub use self::category::*;
pub use self::contribution::*;
pub use self::expense::*;
pub use self::member::*;

/// Every persisted entity carries a stable string id (UUID v4).
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for BudgetGoal {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Member {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Contribution {
    fn id(&self) -> &str {
        &self.id
    }
}

pub(crate) fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
