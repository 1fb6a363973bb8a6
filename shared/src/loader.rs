use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;

use crate::error::{DashboardError, Result};
use crate::format::LedgerFormatter;
use crate::models::{DashboardData, TransactionsResponse};

/// Path of the endpoint serving the transaction list and balance.
pub const TRANSACTIONS_PATH: &str = "/transactions";

/// Source of the dashboard payload.
///
/// `Ok(None)` means the server answered with an empty body, which the
/// dashboard ignores.
#[allow(async_fn_in_trait)]
pub trait TransactionRepository {
    async fn fetch_transactions(&self) -> Result<Option<TransactionsResponse>>;
}

/// Decode a `/transactions` body. Empty bodies and falsy JSON values
/// (`null`, `false`, `0`, `""`) decode to `None`.
pub fn decode_body(body: &str) -> Result<Option<TransactionsResponse>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body)?;
    if is_falsy(&value) {
        return Ok(None);
    }

    Ok(Some(serde_json::from_value(value)?))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Fetch once and normalize.
///
/// Returns `Ok(None)` when the repository had nothing to offer, in which case
/// the caller must leave its state untouched.
pub async fn load_dashboard<R>(repository: &R, formatter: &LedgerFormatter) -> Result<Option<DashboardData>>
where
    R: TransactionRepository,
{
    let Some(response) = repository.fetch_transactions().await? else {
        return Ok(None);
    };

    formatter.normalize_response(&response).map(Some)
}

/// Liveness flag shared between a mounted component and the fetch it
/// started. Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct MountGuard {
    alive: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Mark the owning component as gone. Cannot be undone.
    pub fn release(&self) {
        self.alive.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// What a mounted dashboard should do with its one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(DashboardData),
    /// Empty body; keep the initial state.
    Empty,
    /// The component went away while the fetch was in flight.
    Discarded,
    Failed(DashboardError),
}

/// [`load_dashboard`], with the result dropped if `guard` was released before
/// it resolved.
pub async fn load_while_mounted<R>(repository: &R, formatter: &LedgerFormatter, guard: &MountGuard) -> LoadOutcome
where
    R: TransactionRepository,
{
    let result = load_dashboard(repository, formatter).await;

    if !guard.is_alive() {
        return LoadOutcome::Discarded;
    }

    match result {
        Ok(Some(data)) => LoadOutcome::Loaded(data),
        Ok(None) => LoadOutcome::Empty,
        Err(e) => LoadOutcome::Failed(e),
    }
}
