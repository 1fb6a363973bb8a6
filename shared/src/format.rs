//! Currency and date formatting, and normalization of the raw API payload
//! into display-ready view models.
//!
//! The defaults follow the Brazilian Real conventions the dashboard is shown
//! in (`R$ 1.200,00`, `05/01/2020`). Both are configurable through
//! [`FormatConfig`].

use chrono::NaiveDate;

use crate::error::{DashboardError, Result};
use crate::models::{
    Balance, DashboardData, FormattedBalance, Transaction, TransactionView, TransactionsResponse,
};

/// Largest cent count an `f64` holds exactly (2^53).
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

/// Display conventions for money and dates.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    pub currency_symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    /// `chrono` strftime pattern.
    pub date_format: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

/// Turns raw transactions and balances into their view models.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerFormatter {
    config: FormatConfig,
}

impl LedgerFormatter {
    /// Create a formatter with the default (pt-BR) conventions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom conventions
    pub fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Format a monetary value, e.g. `1200.5` as `R$ 1.200,50`.
    ///
    /// Values are rounded half away from zero to cents. Negative values carry
    /// a leading `-` before the symbol. Values whose cent count is beyond
    /// what an `f64` represents exactly (about 90 trillion) are rejected.
    pub fn format_currency(&self, value: f64) -> Result<String> {
        let rounded = (value * 100.0).round();
        if !rounded.is_finite() || rounded.abs() > MAX_EXACT_CENTS {
            return Err(DashboardError::InvalidAmount(value.to_string()));
        }

        let cents = rounded as i64;
        let sign = if cents < 0 { "-" } else { "" };
        let abs_cents = cents.unsigned_abs();

        Ok(format!(
            "{}{} {}{}{:02}",
            sign,
            self.config.currency_symbol,
            group_thousands(abs_cents / 100, self.config.thousands_separator),
            self.config.decimal_separator,
            abs_cents % 100
        ))
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.config.date_format).to_string()
    }

    /// Build the view model for one transaction. Raw fields are kept as-is.
    pub fn normalize_transaction(&self, transaction: &Transaction) -> Result<TransactionView> {
        Ok(TransactionView {
            formatted_value: self.format_currency(transaction.value)?,
            formatted_date: self.format_date(transaction.created_at.calendar_date()?),
            transaction: transaction.clone(),
        })
    }

    /// Normalize every transaction, preserving input order.
    pub fn normalize_transactions(&self, transactions: &[Transaction]) -> Result<Vec<TransactionView>> {
        transactions
            .iter()
            .map(|tx| self.normalize_transaction(tx))
            .collect()
    }

    /// Coerce each total to a number and format it.
    pub fn normalize_balance(&self, balance: &Balance) -> Result<FormattedBalance> {
        Ok(FormattedBalance {
            income: self.format_currency(balance.income.to_f64()?)?,
            outcome: self.format_currency(balance.outcome.to_f64()?)?,
            total: self.format_currency(balance.total.to_f64()?)?,
        })
    }

    /// Normalize a whole response. Any failure rejects the response entirely.
    pub fn normalize_response(&self, response: &TransactionsResponse) -> Result<DashboardData> {
        Ok(DashboardData {
            transactions: self.normalize_transactions(&response.transactions)?,
            balance: self.normalize_balance(&response.balance)?,
        })
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, Timestamp, TransactionType};

    fn create_test_transaction(id: &str, value: f64, kind: TransactionType, created_at: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: format!("Transaction {}", id),
            value,
            transaction_type: kind,
            category: Category { title: "Misc".to_string() },
            created_at: Timestamp::Text(created_at.to_string()),
        }
    }

    #[test]
    fn test_format_currency() {
        let formatter = LedgerFormatter::new();

        assert_eq!(formatter.format_currency(0.0).unwrap(), "R$ 0,00");
        assert_eq!(formatter.format_currency(5.0).unwrap(), "R$ 5,00");
        assert_eq!(formatter.format_currency(999.99).unwrap(), "R$ 999,99");
        assert_eq!(formatter.format_currency(1200.0).unwrap(), "R$ 1.200,00");
        assert_eq!(formatter.format_currency(1200.5).unwrap(), "R$ 1.200,50");
        assert_eq!(formatter.format_currency(1234567.891).unwrap(), "R$ 1.234.567,89");
        assert_eq!(formatter.format_currency(-1200.0).unwrap(), "-R$ 1.200,00");
    }

    #[test]
    fn test_format_currency_rounds_to_cents() {
        let formatter = LedgerFormatter::new();

        assert_eq!(formatter.format_currency(0.125).unwrap(), "R$ 0,13");
        assert_eq!(formatter.format_currency(10.994).unwrap(), "R$ 10,99");
        assert_eq!(formatter.format_currency(999.999).unwrap(), "R$ 1.000,00");
    }

    #[test]
    fn test_format_currency_rejects_non_finite() {
        let formatter = LedgerFormatter::new();

        assert!(formatter.format_currency(f64::NAN).is_err());
        assert!(formatter.format_currency(f64::INFINITY).is_err());
    }

    #[test]
    fn test_format_currency_rejects_out_of_range() {
        let formatter = LedgerFormatter::new();

        assert_eq!(
            formatter.format_currency(1e20),
            Err(DashboardError::InvalidAmount(1e20_f64.to_string()))
        );
        assert!(formatter.format_currency(-1e20).is_err());
        assert!(formatter.format_currency(1e14).is_err());
        assert_eq!(
            formatter.format_currency(1e13).unwrap(),
            "R$ 10.000.000.000.000,00"
        );
        assert_eq!(
            formatter.format_currency(-1e13).unwrap(),
            "-R$ 10.000.000.000.000,00"
        );
    }

    #[test]
    fn test_custom_config() {
        let formatter = LedgerFormatter::with_config(FormatConfig {
            currency_symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
            date_format: "%m/%d/%Y".to_string(),
        });

        assert_eq!(formatter.format_currency(1200.5).unwrap(), "$ 1,200.50");
        assert_eq!(
            formatter.format_date(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()),
            "01/05/2020"
        );
    }

    #[test]
    fn test_format_date_zero_pads() {
        let formatter = LedgerFormatter::new();

        assert_eq!(formatter.format_date(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()), "05/01/2020");
        assert_eq!(formatter.format_date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()), "31/12/1999");
    }

    #[test]
    fn test_normalize_transaction_keeps_raw_fields() {
        let formatter = LedgerFormatter::new();
        let tx = create_test_transaction("t1", 1500.0, TransactionType::Outcome, "2020-01-05T14:00:00.000Z");

        let view = formatter.normalize_transaction(&tx).unwrap();

        assert_eq!(view.transaction, tx);
        assert_eq!(view.formatted_value, "R$ 1.500,00");
        assert_eq!(view.formatted_date, "05/01/2020");
    }

    #[test]
    fn test_normalize_transactions_preserves_order() {
        let formatter = LedgerFormatter::new();
        let transactions = vec![
            create_test_transaction("c", 3.0, TransactionType::Income, "2020-03-01"),
            create_test_transaction("a", 1.0, TransactionType::Outcome, "2020-01-01"),
            create_test_transaction("b", 2.0, TransactionType::Income, "2020-02-01"),
        ];

        let views = formatter.normalize_transactions(&transactions).unwrap();
        let ids: Vec<&str> = views.iter().map(|v| v.transaction.id.as_str()).collect();

        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_normalize_balance_string_and_number_agree() {
        let formatter = LedgerFormatter::new();
        let numeric = Balance {
            income: Amount::from(1200.5),
            outcome: Amount::from(200.0),
            total: Amount::from(1000.5),
        };
        let textual = Balance {
            income: Amount::from("1200.5"),
            outcome: Amount::from("200"),
            total: Amount::from("1000.50"),
        };

        let from_numbers = formatter.normalize_balance(&numeric).unwrap();
        let from_strings = formatter.normalize_balance(&textual).unwrap();

        assert_eq!(from_numbers, from_strings);
        assert_eq!(from_numbers.income, "R$ 1.200,50");
        assert_eq!(from_numbers.outcome, "R$ 200,00");
        assert_eq!(from_numbers.total, "R$ 1.000,50");
    }

    #[test]
    fn test_normalize_response_is_all_or_nothing() {
        let formatter = LedgerFormatter::new();
        let response = TransactionsResponse {
            transactions: vec![
                create_test_transaction("ok", 1.0, TransactionType::Income, "2020-01-01"),
                create_test_transaction("bad", 1.0, TransactionType::Income, "not a date"),
            ],
            balance: Balance {
                income: Amount::from(1.0),
                outcome: Amount::from(0.0),
                total: Amount::from(1.0),
            },
        };

        let result = formatter.normalize_response(&response);
        assert_eq!(result, Err(DashboardError::InvalidTimestamp("not a date".to_string())));
    }

    #[test]
    fn test_normalize_empty_response() {
        let formatter = LedgerFormatter::new();
        let response = TransactionsResponse {
            transactions: vec![],
            balance: Balance {
                income: Amount::from(0.0),
                outcome: Amount::from(0.0),
                total: Amount::from(0.0),
            },
        };

        let data = formatter.normalize_response(&response).unwrap();

        assert!(data.transactions.is_empty());
        assert_eq!(data.balance.income, "R$ 0,00");
        assert_eq!(data.balance.outcome, "R$ 0,00");
        assert_eq!(data.balance.total, "R$ 0,00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(100, '.'), "100");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(123456, '.'), "123.456");
        assert_eq!(group_thousands(1234567, '.'), "1.234.567");
    }
}
