use crate::csv::ToCsv;
use crate::model::{Contribution, Member, UNKNOWN_MEMBER};

#[derive(Debug, Clone, PartialEq)]
pub struct ContributionCsv {
    pub date: String,
    pub member: String,
    pub amount: f64,
    pub notes: String,
}

impl From<&Contribution> for ContributionCsv {
    fn from(c: &Contribution) -> Self {
        ContributionCsv {
            date: c.date.clone(),
            member: UNKNOWN_MEMBER.to_string(),
            amount: c.amount,
            notes: c.notes.clone().unwrap_or_default(),
        }
    }
}

impl ContributionCsv {
    pub fn set_member(&mut self, member: &Member) {
        self.member = member.name.clone();
    }
}

impl ToCsv for ContributionCsv {
    fn header() -> &'static [&'static str] {
        &["date", "member", "amount", "notes"]
    }

    fn to_row(&self) -> Vec<String> {
        let ContributionCsv {
            date,
            member,
            amount,
            notes,
        } = self;

        vec![
            date.clone(),
            member.clone(),
            format!("{amount:.2}"),
            notes.clone(),
        ]
    }
}
