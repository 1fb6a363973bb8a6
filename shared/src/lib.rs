//! Shared data model and presentation logic for the finance dashboard.
//!
//! Everything in this crate is UI agnostic: the wasm frontend calls into it to
//! turn the `/transactions` API payload into display-ready view models, and the
//! same code runs natively under test.

pub mod error;
pub mod format;
pub mod loader;
pub mod models;
pub mod state;
pub mod view;

pub use error::{DashboardError, Result};
pub use format::{FormatConfig, LedgerFormatter};
pub use loader::{
    decode_body, load_dashboard, load_while_mounted, LoadOutcome, MountGuard, TransactionRepository,
    TRANSACTIONS_PATH,
};
pub use models::{
    Amount, Balance, Category, DashboardData, FormattedBalance, Timestamp, Transaction,
    TransactionType, TransactionView, TransactionsResponse,
};
pub use state::DashboardState;
pub use view::{display_value, ledger_rows, summary_cards, CardKind, LedgerRow, SummaryCard, TABLE_HEADERS};
