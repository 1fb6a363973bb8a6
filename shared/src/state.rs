use crate::models::{DashboardData, FormattedBalance, TransactionView};

static UNLOADED_BALANCE: FormattedBalance = FormattedBalance {
    income: String::new(),
    outcome: String::new(),
    total: String::new(),
};

/// Dashboard lifecycle. `Unloaded` moves to `Loaded` at most once and never back.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    #[default]
    Unloaded,
    Loaded(DashboardData),
}

impl DashboardState {
    /// Apply the outcome of the initial fetch.
    ///
    /// `None` (an empty response) leaves the state untouched, as does any
    /// result arriving after the dashboard has already loaded.
    pub fn apply(self, data: Option<DashboardData>) -> Self {
        match (self, data) {
            (DashboardState::Unloaded, Some(data)) => DashboardState::Loaded(data),
            (state, _) => state,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DashboardState::Loaded(_))
    }

    pub fn transactions(&self) -> &[TransactionView] {
        match self {
            DashboardState::Unloaded => &[],
            DashboardState::Loaded(data) => &data.transactions,
        }
    }

    pub fn balance(&self) -> &FormattedBalance {
        match self {
            DashboardState::Unloaded => &UNLOADED_BALANCE,
            DashboardState::Loaded(data) => &data.balance,
        }
    }
}
