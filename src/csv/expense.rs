use crate::csv::ToCsv;
use crate::model::{Category, Expense, UNCATEGORIZED};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCsv {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub notes: String,
}

impl From<&Expense> for ExpenseCsv {
    fn from(e: &Expense) -> Self {
        ExpenseCsv {
            date: e.date.clone(),
            description: e.description.clone(),
            amount: e.amount,
            category: UNCATEGORIZED.to_string(),
            notes: e.notes.clone().unwrap_or_default(),
        }
    }
}

impl ExpenseCsv {
    pub fn set_category(&mut self, category: &Category) {
        self.category = category.name.clone();
    }
}

impl ToCsv for ExpenseCsv {
    fn header() -> &'static [&'static str] {
        &["date", "description", "amount", "category", "notes"]
    }

    fn to_row(&self) -> Vec<String> {
        let ExpenseCsv {
            date,
            description,
            amount,
            category,
            notes,
        } = self;

        vec![
            date.clone(),
            description.clone(),
            format!("{amount:.2}"),
            category.clone(),
            notes.clone(),
        ]
    }
}
