//! The composed read/write surface every consumer goes through.

use crate::genai::GeminiClient;
use crate::model::{
    BudgetGoal, BudgetGoalDraft, Category, CategoryDraft, Contribution, ContributionDraft,
    Expense, ExpenseDraft, Member, MemberDraft,
};
use crate::spending::{self, BudgetStatus};
use crate::store::{BudgetGoalsDb, CategoriesDb, ContributionsDb, ExpensesDb, MembersDb};

/**
Facade over the five entity repositories plus cross-entity lookups.

No operation here fails: storage errors are swallowed at the store boundary
and dangling foreign keys resolve to `None` (callers render a fallback
label). Derived values (`current_spending`, contribution totals) are
recomputed from the underlying collections on every read.
*/
#[derive(Clone)]
pub struct AppState {
    pub expenses: ExpensesDb,
    pub categories: CategoriesDb,
    pub budget_goals: BudgetGoalsDb,
    pub members: MembersDb,
    pub contributions: ContributionsDb,
    pub gemini: GeminiClient,
}

impl AppState {
    // --- categories ---

    /// `None` for unknown ids; callers fall back to the
    /// [`crate::model::UNCATEGORIZED`] label.
    pub fn get_category_by_id(&self, id: &str) -> Option<Category> {
        self.categories.find_by_id(id)
    }

    pub fn add_category(&self, draft: CategoryDraft) -> Category {
        self.categories.add(draft)
    }

    /// No cascade: expenses and goals referencing the category keep their
    /// now-dangling `category_id`.
    pub fn delete_category(&self, id: &str) {
        self.categories.remove(id);
    }

    // --- expenses ---

    pub fn add_expense(&self, draft: ExpenseDraft) -> Expense {
        self.expenses.add(draft)
    }

    pub fn update_expense(&self, expense: Expense) {
        self.expenses.update(expense);
    }

    pub fn delete_expense(&self, id: &str) {
        self.expenses.remove(id);
    }

    // --- budget goals ---

    /// The draft carries no spending figure; `current_spending` is derived
    /// at read time, never stored.
    pub fn add_budget_goal(&self, draft: BudgetGoalDraft) -> BudgetGoal {
        self.budget_goals.add(draft)
    }

    pub fn delete_budget_goal(&self, id: &str) {
        self.budget_goals.remove(id);
    }

    /// All goals with `current_spending` computed against the current
    /// expense collection.
    pub fn budget_overview(&self) -> Vec<BudgetStatus> {
        let expenses = self.expenses.list();
        spending::summarize(self.budget_goals.list(), &expenses)
    }

    // --- members ---

    pub fn add_member(&self, draft: MemberDraft) -> Member {
        self.members.add(draft)
    }

    /// Contributions of the deleted member are kept (no cascade) and render
    /// with the [`crate::model::UNKNOWN_MEMBER`] label.
    pub fn delete_member(&self, id: &str) {
        self.members.remove(id);
    }

    pub fn get_member_by_id(&self, id: &str) -> Option<Member> {
        self.members.find_by_id(id)
    }

    // --- contributions ---

    pub fn add_contribution(&self, draft: ContributionDraft) -> Contribution {
        self.contributions.add(draft)
    }

    pub fn member_contributions(&self, member_id: &str) -> Vec<Contribution> {
        self.contributions
            .list()
            .into_iter()
            .filter(|c| c.member_id == member_id)
            .collect()
    }

    pub fn member_total_contribution(&self, member_id: &str) -> f64 {
        self.member_contributions(member_id)
            .iter()
            .map(|c| c.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Period;
    use crate::store::JsonFileStore;

    fn app_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let state = AppState {
            expenses: ExpensesDb::open_expenses(&store),
            categories: CategoriesDb::open_categories(&store),
            budget_goals: BudgetGoalsDb::open_budget_goals(&store),
            members: MembersDb::open_members(&store),
            contributions: ContributionsDb::open_contributions(&store),
            gemini: GeminiClient::new(),
        };
        (dir, state)
    }

    #[test]
    fn budget_overview_derives_spending_from_expenses() {
        let (_dir, state) = app_state();
        let food = state.add_category(CategoryDraft {
            name: "Food".to_string(),
            icon: "cart".to_string(),
            color: "#4caf50".to_string(),
        });

        state.add_expense(ExpenseDraft {
            description: "groceries".to_string(),
            amount: 40.0,
            date: "2026-08-02".to_string(),
            category_id: food.id.clone(),
            notes: None,
        });
        state.add_expense(ExpenseDraft {
            description: "bakery".to_string(),
            amount: 10.0,
            date: "2026-08-03".to_string(),
            category_id: food.id.clone(),
            notes: None,
        });
        state.add_budget_goal(BudgetGoalDraft {
            category_id: food.id.clone(),
            amount: 100.0,
            period: Period::Monthly,
        });

        let overview = state.budget_overview();
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].current_spending, 50.0);

        // reflected on the next read, no hook needed
        state.add_expense(ExpenseDraft {
            description: "takeaway".to_string(),
            amount: 25.0,
            date: "2026-08-04".to_string(),
            category_id: food.id,
            notes: None,
        });
        assert_eq!(state.budget_overview()[0].current_spending, 75.0);
    }

    #[test]
    fn deleting_a_member_keeps_their_contributions() {
        let (_dir, state) = app_state();
        let member = state.add_member(MemberDraft {
            name: "Sam".to_string(),
        });
        state.add_contribution(ContributionDraft {
            member_id: member.id.clone(),
            amount: 20.0,
            date: "2026-08-01".to_string(),
            notes: None,
        });

        state.delete_member(&member.id);

        assert_eq!(state.get_member_by_id(&member.id), None);
        assert_eq!(state.member_contributions(&member.id).len(), 1);
        assert_eq!(state.member_total_contribution(&member.id), 20.0);
    }

    #[test]
    fn unknown_category_resolves_to_none() {
        let (_dir, state) = app_state();
        assert_eq!(state.get_category_by_id("no-such-id"), None);
    }
}
