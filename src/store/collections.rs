use super::file_store::JsonFileStore;
use super::repository::Repository;
use crate::model::{BudgetGoal, Category, Contribution, Expense, Member};
use tracing::info;

pub type ExpensesDb = Repository<Expense>;

impl ExpensesDb {
    pub fn open_expenses(store: &JsonFileStore) -> Self {
        let db = Repository::open(store.clone(), "expenses");
        info!("Expenses DB initialized.");
        db
    }
}

pub type CategoriesDb = Repository<Category>;

impl CategoriesDb {
    pub fn open_categories(store: &JsonFileStore) -> Self {
        let db = Repository::open(store.clone(), "categories");
        info!("Categories DB initialized.");
        db
    }
}

pub type BudgetGoalsDb = Repository<BudgetGoal>;

impl BudgetGoalsDb {
    pub fn open_budget_goals(store: &JsonFileStore) -> Self {
        let db = Repository::open(store.clone(), "budget_goals");
        info!("Budget goals DB initialized.");
        db
    }
}

pub type MembersDb = Repository<Member>;

impl MembersDb {
    pub fn open_members(store: &JsonFileStore) -> Self {
        let db = Repository::open(store.clone(), "members");
        info!("Members DB initialized.");
        db
    }
}

pub type ContributionsDb = Repository<Contribution>;

impl ContributionsDb {
    pub fn open_contributions(store: &JsonFileStore) -> Self {
        let db = Repository::open(store.clone(), "contributions");
        info!("Contributions DB initialized.");
        db
    }
}
