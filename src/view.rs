//! Display-ready view models for the expense table and summary cards.
//!
//! Components only map these onto markup; every placeholder decision and
//! every formatted number is made here.

use crate::{
    format::{format_currency, format_percentage},
    model::{CategorySummary, Expense, MonthlySummary},
    summary::{category_shares, grand_total, total_amount},
};

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_EXPENSES_TEXT: &str = "No expenses yet. Add one to get started!";
pub const NO_MONTHLY_TEXT: &str = "No monthly data yet.";
pub const NO_CATEGORY_TEXT: &str = "No category data yet.";

#[derive(Clone, Debug, PartialEq)]
pub enum TableBody<R> {
    /// A single full-width row with this text.
    Placeholder(&'static str),
    Rows(Vec<R>),
}

impl<R> TableBody<R> {
    fn from_rows(rows: Vec<R>, empty_text: &'static str) -> Self {
        if rows.is_empty() {
            TableBody::Placeholder(empty_text)
        } else {
            TableBody::Rows(rows)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseTableView {
    pub body: TableBody<ExpenseRow>,
    pub total: String,
}

/// `None` means the list is still loading.
pub fn expense_table(expenses: Option<&[Expense]>, symbol: &str) -> ExpenseTableView {
    let Some(expenses) = expenses else {
        return ExpenseTableView {
            body: TableBody::Placeholder(LOADING_TEXT),
            total: format_currency(0.0, symbol),
        };
    };

    let rows = expenses
        .iter()
        .map(|expense| ExpenseRow {
            id: expense.id,
            date: expense.date.clone(),
            category: expense.category.clone(),
            description: expense.description.clone(),
            amount: format_currency(expense.amount, symbol),
        })
        .collect();

    ExpenseTableView {
        body: TableBody::from_rows(rows, NO_EXPENSES_TEXT),
        total: format_currency(total_amount(expenses), symbol),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyRow {
    pub month: String,
    pub total: String,
}

pub fn monthly_summary_view(
    entries: Option<&[MonthlySummary]>,
    symbol: &str,
) -> TableBody<MonthlyRow> {
    let Some(entries) = entries else {
        return TableBody::Placeholder(LOADING_TEXT);
    };
    let rows = entries
        .iter()
        .map(|entry| MonthlyRow {
            month: entry.month.clone(),
            total: format_currency(entry.total, symbol),
        })
        .collect();
    TableBody::from_rows(rows, NO_MONTHLY_TEXT)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub count: u32,
    pub total: String,
    pub percentage: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryView {
    pub body: TableBody<CategoryRow>,
    pub grand_total: String,
}

pub fn category_summary_view(entries: Option<&[CategorySummary]>, symbol: &str) -> CategoryView {
    let Some(entries) = entries else {
        return CategoryView {
            body: TableBody::Placeholder(LOADING_TEXT),
            grand_total: format_currency(0.0, symbol),
        };
    };

    let rows = category_shares(entries)
        .into_iter()
        .map(|share| CategoryRow {
            category: share.category,
            count: share.count,
            total: format_currency(share.total, symbol),
            percentage: format_percentage(share.percentage),
        })
        .collect();

    CategoryView {
        body: TableBody::from_rows(rows, NO_CATEGORY_TEXT),
        grand_total: format_currency(grand_total(entries), symbol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, category: &str, amount: f64) -> Expense {
        Expense {
            id,
            date: "2024-01-01".to_string(),
            category: category.to_string(),
            description: "Lunch".to_string(),
            amount,
        }
    }

    fn rows<R: Clone>(body: &TableBody<R>) -> Vec<R> {
        match body {
            TableBody::Rows(rows) => rows.clone(),
            TableBody::Placeholder(text) => panic!("expected rows, got placeholder {text:?}"),
        }
    }

    #[test]
    fn empty_list_shows_placeholder_and_zero_total() {
        let view = expense_table(Some(&[]), "$");

        assert_eq!(view.body, TableBody::Placeholder(NO_EXPENSES_TEXT));
        assert_eq!(view.total, "$0.00");
    }

    #[test]
    fn loading_list_shows_loading_row() {
        let view = expense_table(None, "$");
        assert_eq!(view.body, TableBody::Placeholder(LOADING_TEXT));
    }

    #[test]
    fn single_lunch_renders_formatted_amount() {
        let view = expense_table(Some(&[expense(1, "Food", 12.5)]), "$");

        let rows = rows(&view.body);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, "$12.50");
        assert_eq!(rows[0].category, "Food");
        assert_eq!(rows[0].id, 1);
    }

    #[test]
    fn total_sums_all_rows() {
        let view = expense_table(
            Some(&[expense(2, "Food", 10.0), expense(1, "Food", 5.25)]),
            "$",
        );
        assert_eq!(view.total, "$15.25");
    }

    #[test]
    fn rendered_total_matches_sum_for_many_amounts() {
        let amounts = [0.1, 0.2, 19.99, 3.33, 1000.0, 0.01, 7.77];
        let expenses = amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| expense(i as i64, "Misc", *amount))
            .collect::<Vec<_>>();
        let view = expense_table(Some(&expenses), "$");

        let sum: f64 = amounts.iter().sum();
        assert_eq!(view.total, format_currency(sum, "$"));
        assert_eq!(view.total, "$1,031.40");
    }

    #[test]
    fn category_view_of_food_and_transport() {
        let entries = vec![
            CategorySummary {
                category: "Food".to_string(),
                count: 1,
                total: 30.0,
            },
            CategorySummary {
                category: "Transport".to_string(),
                count: 1,
                total: 70.0,
            },
        ];

        let view = category_summary_view(Some(&entries), "$");

        let rows = rows(&view.body);
        assert_eq!(rows[0].percentage, "30.0%");
        assert_eq!(rows[1].percentage, "70.0%");
        assert_eq!(rows[1].total, "$70.00");
        assert_eq!(view.grand_total, "$100.00");
    }

    #[test]
    fn empty_summaries_show_placeholders() {
        assert_eq!(
            monthly_summary_view(Some(&[]), "$"),
            TableBody::Placeholder(NO_MONTHLY_TEXT)
        );
        let view = category_summary_view(Some(&[]), "$");
        assert_eq!(view.body, TableBody::Placeholder(NO_CATEGORY_TEXT));
        assert_eq!(view.grand_total, "$0.00");
    }

    #[test]
    fn monthly_rows_are_formatted() {
        let entries = vec![MonthlySummary {
            month: "January 2024".to_string(),
            total: 42.5,
        }];

        let body = monthly_summary_view(Some(&entries), "€");

        assert_eq!(
            rows(&body),
            vec![MonthlyRow {
                month: "January 2024".to_string(),
                total: "€42.50".to_string(),
            }]
        );
    }
}
