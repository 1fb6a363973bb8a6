use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// A transaction as the API returns it.
///
/// Only the fields listed here are kept. Anything else on the wire, such as
/// `category_id` or `updated_at`, is dropped during decoding and does not
/// reach [`TransactionView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: Category,
    pub created_at: Timestamp,
}

/// Polarity of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl TransactionType {
    /// CSS class used for the value cell of a ledger row.
    pub fn css_class(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

/// Creation time of a transaction.
///
/// The API sends ISO-8601 strings; epoch milliseconds are accepted as well,
/// integral or fractional. Fractions of a millisecond are truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    EpochMillis(i64),
    FractionalMillis(f64),
    Text(String),
}

/// Beyond this many milliseconds from the epoch `chrono` has no date.
const MAX_EPOCH_MILLIS: f64 = 1e16;

impl Timestamp {
    /// Calendar date of the timestamp, in the offset it was written with.
    /// Epoch values and offset-less strings are read as UTC.
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        match self {
            Timestamp::EpochMillis(millis) => DateTime::from_timestamp_millis(*millis)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| DashboardError::InvalidTimestamp(millis.to_string())),
            Timestamp::FractionalMillis(millis) => {
                let whole = millis.trunc();
                if !whole.is_finite() || whole.abs() >= MAX_EPOCH_MILLIS {
                    return Err(DashboardError::InvalidTimestamp(millis.to_string()));
                }
                Timestamp::EpochMillis(whole as i64).calendar_date()
            }
            Timestamp::Text(text) => parse_date_text(text.trim())
                .ok_or_else(|| DashboardError::InvalidTimestamp(text.clone())),
        }
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// A balance figure. Some API versions send numbers, others numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Amount::Number(value) => Ok(*value),
            Amount::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| DashboardError::InvalidAmount(text.clone())),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Amount::Text(text.to_string())
    }
}

/// Aggregate totals as the API returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub income: Amount,
    pub outcome: Amount,
    pub total: Amount,
}

/// Body of `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub balance: Balance,
}

/// Display-ready transaction: the raw fields plus their formatted forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionView {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(rename = "formattedValue")]
    pub formatted_value: String,
    #[serde(rename = "formattedDate")]
    pub formatted_date: String,
}

/// Display-ready balance totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattedBalance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

/// Everything the dashboard renders once the fetch has been accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub transactions: Vec<TransactionView>,
    pub balance: FormattedBalance,
}
