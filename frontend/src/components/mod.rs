pub mod dashboard;
pub mod header;
pub mod summary_cards;
pub mod transactions;

pub use dashboard::Dashboard;
pub use header::Header;
