use shared::LedgerFormatter;
use yew::prelude::*;

use super::summary_cards::SummaryCards;
use super::transactions::TransactionTable;
use crate::hooks::use_dashboard;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api_client: ApiClient,
    #[prop_or_default]
    pub formatter: LedgerFormatter,
}

/// Balance cards above the transaction ledger.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let state = use_dashboard(&props.api_client, &props.formatter);

    html! {
        <main class="container">
            <SummaryCards balance={state.balance().clone()} />
            <TransactionTable transactions={state.transactions().to_vec()} />
        </main>
    }
}
