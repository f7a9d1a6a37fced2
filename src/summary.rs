//! Aggregation over expense records and derived category shares.
//!
//! The remote backend computes monthly and category totals server-side; the
//! local backend reuses [`monthly_totals`] and [`category_totals`] so both
//! report the same shapes and ordering.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::model::{CategorySummary, Expense, MonthlySummary};

pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Totals per calendar month, oldest first, labelled like `January 2024`.
///
/// Records whose date is not `YYYY-MM-DD` are left out.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for expense in expenses {
        match NaiveDate::parse_from_str(&expense.date, "%Y-%m-%d") {
            Ok(date) => *months.entry((date.year(), date.month())).or_default() += expense.amount,
            Err(_) => tracing::debug!(id = expense.id, date = %expense.date, "skipping undated expense"),
        }
    }

    months
        .into_iter()
        .filter_map(|((year, month), total)| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some(MonthlySummary {
                month: first.format("%B %Y").to_string(),
                total: round_cents(total),
            })
        })
        .collect()
}

/// Count and total per category, largest total first.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategorySummary> {
    let mut categories: HashMap<&str, (u32, f64)> = HashMap::new();
    for expense in expenses {
        let entry = categories.entry(expense.category.as_str()).or_default();
        entry.0 += 1;
        entry.1 += expense.amount;
    }

    let mut summary = categories
        .into_iter()
        .map(|(category, (count, total))| CategorySummary {
            category: category.to_string(),
            count,
            total: round_cents(total),
        })
        .collect::<Vec<_>>();
    summary.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    summary
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub count: u32,
    pub total: f64,
    pub percentage: f64,
}

pub fn grand_total(entries: &[CategorySummary]) -> f64 {
    entries.iter().map(|entry| entry.total).sum()
}

/// Each category's share of the grand total, rounded to one decimal.
///
/// A zero grand total yields 0.0 for every entry.
pub fn category_shares(entries: &[CategorySummary]) -> Vec<CategoryShare> {
    let grand_total = grand_total(entries);
    entries
        .iter()
        .map(|entry| {
            let percentage = if grand_total == 0.0 {
                0.0
            } else {
                (entry.total / grand_total * 1000.0).round() / 10.0
            };
            CategoryShare {
                category: entry.category.clone(),
                count: entry.count,
                total: entry.total,
                percentage,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, date: &str, category: &str, amount: f64) -> Expense {
        Expense {
            id,
            date: date.to_string(),
            category: category.to_string(),
            description: String::new(),
            amount,
        }
    }

    fn category(name: &str, count: u32, total: f64) -> CategorySummary {
        CategorySummary {
            category: name.to_string(),
            count,
            total,
        }
    }

    #[test]
    fn total_is_sum_of_amounts() {
        let expenses = vec![
            expense(1, "2024-01-01", "Food", 10.0),
            expense(2, "2024-01-02", "Food", 5.25),
        ];
        assert_eq!(total_amount(&expenses), 15.25);
        assert_eq!(total_amount(&[]), 0.0);
    }

    #[test]
    fn monthly_totals_are_chronological() {
        let expenses = vec![
            expense(1, "2024-02-10", "Food", 4.0),
            expense(2, "2023-12-31", "Food", 1.111),
            expense(3, "2024-02-01", "Rent", 6.0),
            expense(4, "not a date", "Food", 100.0),
        ];

        let months = monthly_totals(&expenses);

        assert_eq!(
            months,
            vec![
                MonthlySummary {
                    month: "December 2023".to_string(),
                    total: 1.11,
                },
                MonthlySummary {
                    month: "February 2024".to_string(),
                    total: 10.0,
                },
            ]
        );
    }

    #[test]
    fn category_totals_are_largest_first() {
        let expenses = vec![
            expense(1, "2024-01-01", "Food", 12.5),
            expense(2, "2024-01-02", "Transport", 40.0),
            expense(3, "2024-01-03", "Food", 7.5),
        ];

        let categories = category_totals(&expenses);

        assert_eq!(
            categories,
            vec![category("Transport", 1, 40.0), category("Food", 2, 20.0)]
        );
    }

    #[test]
    fn shares_of_food_and_transport() {
        let entries = vec![category("Food", 1, 30.0), category("Transport", 2, 70.0)];

        let shares = category_shares(&entries);

        assert_eq!(grand_total(&entries), 100.0);
        assert_eq!(shares[0].percentage, 30.0);
        assert_eq!(shares[1].percentage, 70.0);
    }

    #[test]
    fn shares_sum_to_one_hundred_within_rounding() {
        let entries = vec![
            category("A", 1, 1.0),
            category("B", 1, 1.0),
            category("C", 1, 1.0),
            category("D", 3, 17.29),
            category("E", 2, 0.01),
        ];

        let shares = category_shares(&entries);
        let sum: f64 = shares.iter().map(|share| share.percentage).sum();

        assert!((sum - 100.0).abs() <= 0.1 * shares.len() as f64);
    }

    #[test]
    fn zero_grand_total_does_not_divide() {
        let shares = category_shares(&[category("Free", 1, 0.0)]);
        assert_eq!(shares[0].percentage, 0.0);
        assert!(category_shares(&[]).is_empty());
    }
}
