use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Deserialize, Serialize,
};
use web_sys::RequestCredentials;

use super::ExpenseStore;
use crate::{
    error::{Result, StoreError},
    model::{CategorySummary, Expense, ExpenseDraft, MonthlySummary},
};

/// Talks to the expense HTTP API, one round trip per call.
pub struct RemoteStore {
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ExpenseList {
    expenses: Vec<Expense>,
}

#[derive(Debug, Deserialize)]
struct SummaryList<T> {
    summary: Vec<T>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Any 2xx from `POST /add-expense` means stored. The body may carry the
/// record (`{ "expense": {...} }` or bare), an id-less echo, or just a message.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Created {
    Wrapped { expense: Expense },
    Bare(Expense),
    Acknowledged(IgnoredAny),
}

impl Created {
    fn into_expense(self) -> Option<Expense> {
        match self {
            Created::Wrapped { expense } | Created::Bare(expense) => Some(expense),
            Created::Acknowledged(_) => None,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum AmountField<'a> {
    Number(f64),
    Raw(&'a str),
}

#[derive(Serialize)]
struct AddExpenseBody<'a> {
    date: &'a str,
    category: &'a str,
    description: &'a str,
    amount: AmountField<'a>,
}

impl<'a> AddExpenseBody<'a> {
    fn from_draft(draft: &'a ExpenseDraft) -> Self {
        let amount = match draft.parsed_amount() {
            Some(amount) => AmountField::Number(amount),
            None => AmountField::Raw(draft.amount.as_str()),
        };
        Self {
            date: &draft.date,
            category: &draft.category,
            description: &draft.description,
            amount,
        }
    }
}

fn server_failure(status: u16, body: &str) -> StoreError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|err| err.error)
        .unwrap_or_else(|_| format!("Request failed with status {}", status));
    StoreError::Server { status, message }
}

fn decode_body<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T> {
    if !ok {
        return Err(server_failure(status, body));
    }
    serde_json::from_str(body).map_err(|err| StoreError::Decode(err.to_string()))
}

fn decode_created(status: u16, ok: bool, body: &str) -> Result<Option<Expense>> {
    if ok && body.trim().is_empty() {
        return Ok(None);
    }
    let created: Created = decode_body(status, ok, body)?;
    Ok(created.into_expense())
}

fn network(err: gloo_net::Error) -> StoreError {
    StoreError::Network(err.to_string())
}

impl RemoteStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let ok = response.ok();
        let body = response.text().await.map_err(network)?;
        decode_body(status, ok, &body)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");
        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(network)?;
        Self::read(response).await
    }
}

#[async_trait(?Send)]
impl ExpenseStore for RemoteStore {
    fn label(&self) -> &'static str {
        "Server"
    }

    async fn list(&self) -> Result<Vec<Expense>> {
        let list: ExpenseList = self.get("/expenses").await?;
        Ok(list.expenses)
    }

    async fn add(&self, draft: ExpenseDraft) -> Result<Option<Expense>> {
        let url = self.endpoint("/add-expense");
        tracing::debug!(%url, "POST");
        let response = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(&AddExpenseBody::from_draft(&draft))
            .map_err(|err| StoreError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        let ok = response.ok();
        let body = response.text().await.map_err(network)?;
        let created = decode_created(status, ok, &body)?;
        if created.is_none() {
            tracing::debug!(status, "expense stored without an echoed record");
        }
        Ok(created)
    }

    async fn remove(&self, id: i64) -> Result<bool> {
        let url = self.endpoint(&format!("/delete-expense/{}", id));
        tracing::debug!(%url, "DELETE");
        let response = Request::delete(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(network)?;

        if response.ok() {
            return Ok(true);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_else(|err| {
            tracing::debug!(status, "could not read error body: {err}");
            String::new()
        });
        Err(server_failure(status, &body))
    }

    async fn monthly_summary(&self) -> Result<Vec<MonthlySummary>> {
        let list: SummaryList<MonthlySummary> = self.get("/monthly-summary").await?;
        Ok(list.summary)
    }

    async fn category_summary(&self) -> Result<Vec<CategorySummary>> {
        let list: SummaryList<CategorySummary> = self.get("/category-summary").await?;
        Ok(list.summary)
    }
}
