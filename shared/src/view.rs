//! Render-ready rows and cards derived from normalized dashboard state.
//!
//! The frontend components are thin loops over these values, so everything
//! that decides what appears on screen lives here and is tested natively.

use std::collections::{HashMap, HashSet};

use crate::models::{FormattedBalance, TransactionType, TransactionView};

/// Ledger column headings, in display order.
pub const TABLE_HEADERS: [&str; 4] = ["Título", "Preço", "Categoria", "Data"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Income,
    Outcome,
    Total,
}

impl CardKind {
    pub fn label(&self) -> &'static str {
        match self {
            CardKind::Income => "Entradas",
            CardKind::Outcome => "Saídas",
            CardKind::Total => "Total",
        }
    }

    /// Value of the `data-testid` attribute carried by the card's amount.
    pub fn test_id(&self) -> &'static str {
        match self {
            CardKind::Income => "balance-income",
            CardKind::Outcome => "balance-outcome",
            CardKind::Total => "balance-total",
        }
    }

    pub fn icon_alt(&self) -> &'static str {
        match self {
            CardKind::Income => "Income",
            CardKind::Outcome => "Outcome",
            CardKind::Total => "Total",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub kind: CardKind,
    pub value: String,
}

impl SummaryCard {
    /// The total card is drawn highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.kind == CardKind::Total
    }
}

/// One table row of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    pub key: String,
    pub title: String,
    pub value_class: &'static str,
    pub display_value: String,
    pub category: String,
    pub date: String,
}

/// Income, outcome and total cards, in that order.
pub fn summary_cards(balance: &FormattedBalance) -> [SummaryCard; 3] {
    [
        SummaryCard { kind: CardKind::Income, value: balance.income.clone() },
        SummaryCard { kind: CardKind::Outcome, value: balance.outcome.clone() },
        SummaryCard { kind: CardKind::Total, value: balance.total.clone() },
    ]
}

/// The value as shown in the Preço column: outcomes are prefixed with `"- "`.
pub fn display_value(view: &TransactionView) -> String {
    match view.transaction.transaction_type {
        TransactionType::Income => view.formatted_value.clone(),
        TransactionType::Outcome => format!("- {}", view.formatted_value),
    }
}

/// One row per transaction, in input order.
///
/// Rows are keyed by transaction id. Should an id already be taken as a key,
/// the row gets the lowest free `id#n` instead, so keys stay unique within
/// the table.
pub fn ledger_rows(transactions: &[TransactionView]) -> Vec<LedgerRow> {
    let mut used: HashSet<String> = HashSet::new();
    let mut next_suffix: HashMap<&str, usize> = HashMap::new();

    transactions
        .iter()
        .map(|view| {
            let id = view.transaction.id.as_str();
            let key = if used.contains(id) {
                let suffix = next_suffix.entry(id).or_insert(1);
                while used.contains(&format!("{}#{}", id, suffix)) {
                    *suffix += 1;
                }
                let key = format!("{}#{}", id, suffix);
                *suffix += 1;
                key
            } else {
                id.to_string()
            };
            used.insert(key.clone());

            LedgerRow {
                key,
                title: view.transaction.title.clone(),
                value_class: view.transaction.transaction_type.css_class(),
                display_value: display_value(view),
                category: view.transaction.category.title.clone(),
                date: view.formatted_date.clone(),
            }
        })
        .collect()
}
