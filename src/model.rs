use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

/// Field values captured from the add form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseDraft {
    /// The amount as a finite float, if it parses as one.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MonthlySummary {
    pub month: String,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub count: u32,
    pub total: f64,
}
