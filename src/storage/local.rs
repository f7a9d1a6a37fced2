use async_trait::async_trait;

use super::{ExpenseStore, KeyValueStore};
use crate::{
    error::{Result, StoreError},
    model::{CategorySummary, Expense, ExpenseDraft, MonthlySummary},
    summary,
};

/// Key holding the serialized list of expenses.
pub const EXPENSES_KEY: &str = "expenses";

/// Keeps all expenses as one JSON array, newest first.
pub struct LocalStore<S> {
    storage: S,
}

impl<S: KeyValueStore> LocalStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn load(&self) -> Vec<Expense> {
        let Some(raw) = self.storage.get_item(EXPENSES_KEY) else {
            return vec![];
        };
        match serde_json::from_str::<Vec<Expense>>(&raw) {
            Ok(expenses) => expenses,
            Err(err) => {
                tracing::warn!("stored expenses are unreadable, starting empty: {err}");
                vec![]
            }
        }
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        let raw = serde_json::to_string(expenses)
            .map_err(|err| StoreError::Storage(err.to_string()))?;
        self.storage.set_item(EXPENSES_KEY, &raw)
    }
}

/// Millisecond timestamp id, bumped past existing ids so it stays unique.
/// When the largest id is already `i64::MAX`, the smallest unused id is taken.
fn next_id(expenses: &[Expense], now_millis: i64) -> i64 {
    let highest = expenses.iter().map(|expense| expense.id).max();
    match highest {
        Some(highest) if highest >= now_millis => highest
            .checked_add(1)
            .unwrap_or_else(|| smallest_unused_id(expenses)),
        _ => now_millis,
    }
}

fn smallest_unused_id(expenses: &[Expense]) -> i64 {
    let mut ids = expenses.iter().map(|expense| expense.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    let mut candidate = 0;
    for id in ids {
        if id < candidate {
            continue;
        }
        if id > candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

#[async_trait(?Send)]
impl<S: KeyValueStore> ExpenseStore for LocalStore<S> {
    fn label(&self) -> &'static str {
        "Demo Mode"
    }

    async fn list(&self) -> Result<Vec<Expense>> {
        Ok(self.load())
    }

    async fn add(&self, draft: ExpenseDraft) -> Result<Option<Expense>> {
        let amount = draft
            .parsed_amount()
            .ok_or_else(|| StoreError::Invalid("Amount must be a number.".to_string()))?;

        let mut expenses = self.load();
        let expense = Expense {
            id: next_id(&expenses, chrono::Utc::now().timestamp_millis()),
            date: draft.date,
            category: draft.category,
            description: draft.description,
            amount,
        };
        expenses.insert(0, expense.clone());
        self.save(&expenses)?;

        tracing::debug!(id = expense.id, "stored expense locally");
        Ok(Some(expense))
    }

    async fn remove(&self, id: i64) -> Result<bool> {
        let mut expenses = self.load();
        let before = expenses.len();
        expenses.retain(|expense| expense.id != id);
        if expenses.len() == before {
            return Ok(false);
        }
        self.save(&expenses)?;

        tracing::debug!(id, "removed expense locally");
        Ok(true)
    }

    async fn monthly_summary(&self) -> Result<Vec<MonthlySummary>> {
        Ok(summary::monthly_totals(&self.load()))
    }

    async fn category_summary(&self) -> Result<Vec<CategorySummary>> {
        Ok(summary::category_totals(&self.load()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format::format_currency, storage::MemoryStorage, summary::total_amount, view};

    fn draft(category: &str, amount: &str) -> ExpenseDraft {
        ExpenseDraft {
            date: "2024-01-01".to_string(),
            category: category.to_string(),
            description: "Lunch".to_string(),
            amount: amount.to_string(),
        }
    }

    async fn store_with(amounts: &[&str]) -> (LocalStore<MemoryStorage>, Vec<Expense>) {
        let store = LocalStore::new(MemoryStorage::default());
        let mut added = vec![];
        for amount in amounts {
            added.push(store.add(draft("Food", amount)).await.unwrap().unwrap());
        }
        (store, added)
    }

    #[tokio::test]
    async fn missing_key_lists_empty() {
        let store = LocalStore::new(MemoryStorage::default());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn added_expense_is_listed() {
        let (store, _) = store_with(&["12.50"]).await;

        let expenses = store.list().await.unwrap();

        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, "Food");
        assert_eq!(expenses[0].amount, 12.5);
        assert_eq!(expenses[0].date, "2024-01-01");
    }

    #[tokio::test]
    async fn newest_expense_comes_first_with_unique_ids() {
        let (store, added) = store_with(&["10.00", "5.25", "1"]).await;

        let expenses = store.list().await.unwrap();
        let ids = expenses.iter().map(|expense| expense.id).collect::<Vec<_>>();

        assert_eq!(ids, vec![added[2].id, added[1].id, added[0].id]);
        assert!(added[0].id < added[1].id && added[1].id < added[2].id);
    }

    #[tokio::test]
    async fn remove_deletes_only_that_id() {
        let (store, added) = store_with(&["1", "2", "3"]).await;

        assert!(store.remove(added[1].id).await.unwrap());

        let expenses = store.list().await.unwrap();
        assert_eq!(expenses.len(), 2);
        assert!(expenses.contains(&added[0]));
        assert!(expenses.contains(&added[2]));
        assert!(!expenses.iter().any(|expense| expense.id == added[1].id));
    }

    #[tokio::test]
    async fn remove_unknown_id_is_a_no_op() {
        let (store, _) = store_with(&["1", "2", "3"]).await;
        let before = store.list().await.unwrap();

        assert!(!store.remove(-42).await.unwrap());

        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn unparsable_amount_is_rejected_without_writing() {
        let storage = MemoryStorage::default();
        let store = LocalStore::new(storage.clone());

        let err = store.add(draft("Food", "twelve")).await.unwrap_err();

        assert_eq!(err, StoreError::Invalid("Amount must be a number.".to_string()));
        assert_eq!(storage.get_item(EXPENSES_KEY), None);
    }

    #[tokio::test]
    async fn corrupt_data_reads_as_empty() {
        let storage = MemoryStorage::default();
        storage.set_item(EXPENSES_KEY, "{not json").unwrap();
        let store = LocalStore::new(storage);

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn summaries_are_computed_from_stored_records() {
        let store = LocalStore::new(MemoryStorage::default());
        store.add(draft("Food", "30")).await.unwrap();
        store.add(draft("Transport", "70")).await.unwrap();

        let categories = store.category_summary().await.unwrap();
        let months = store.monthly_summary().await.unwrap();

        assert_eq!(categories[0].category, "Transport");
        assert_eq!(categories[1].total, 30.0);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].month, "January 2024");
        assert_eq!(months[0].total, 100.0);
    }

    #[tokio::test]
    async fn added_expense_renders_in_table() {
        let (store, _) = store_with(&["12.50"]).await;

        let expenses = store.list().await.unwrap();
        let table = view::expense_table(Some(expenses.as_slice()), "$");

        let view::TableBody::Rows(rows) = &table.body else {
            panic!("expected rows, got {:?}", table.body);
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Food");
        assert_eq!(rows[0].amount, "$12.50");
        assert_eq!(table.total, "$12.50");
    }

    #[tokio::test]
    async fn rendered_total_tracks_every_added_amount() {
        let sequences: [&[&str]; 5] = [
            &["10.00", "5.25"],
            &["0.10", "0.20", "0.30"],
            &["999.99", "0.01", "1234.5"],
            &["7"],
            &["3.33", "3.33", "3.34", "100", "0.05"],
        ];

        for amounts in sequences {
            let (store, added) = store_with(amounts).await;
            let expected = amounts
                .iter()
                .map(|amount| amount.parse::<f64>().unwrap())
                .sum::<f64>();

            let expenses = store.list().await.unwrap();
            let table = view::expense_table(Some(expenses.as_slice()), "$");

            assert_eq!(expenses.len(), added.len());
            assert_eq!(table.total, format_currency(expected, "$"));
            assert_eq!(table.total, format_currency(total_amount(&added), "$"));
        }

        let (store, _) = store_with(&["10.00", "5.25"]).await;
        let expenses = store.list().await.unwrap();
        assert_eq!(view::expense_table(Some(expenses.as_slice()), "$").total, "$15.25");
    }

    fn with_id(id: i64) -> Expense {
        Expense {
            id,
            date: String::new(),
            category: String::new(),
            description: String::new(),
            amount: 0.0,
        }
    }

    #[test]
    fn next_id_stays_above_existing() {
        let existing = vec![with_id(500)];

        assert_eq!(next_id(&existing, 100), 501);
        assert_eq!(next_id(&existing, 900), 900);
        assert_eq!(next_id(&[], 7), 7);
    }

    #[test]
    fn next_id_at_max_reuses_smallest_free_id() {
        assert_eq!(next_id(&[with_id(i64::MAX)], 5), 0);
        assert_eq!(next_id(&[with_id(i64::MAX), with_id(0), with_id(1), with_id(-3)], 5), 2);
    }

    #[tokio::test]
    async fn add_after_max_id_stays_unique() {
        let storage = MemoryStorage::default();
        storage
            .set_item(
                EXPENSES_KEY,
                &serde_json::to_string(&[with_id(i64::MAX)]).unwrap(),
            )
            .unwrap();
        let store = LocalStore::new(storage);

        let expense = store.add(draft("Food", "1")).await.unwrap().unwrap();

        assert_ne!(expense.id, i64::MAX);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}
