use shared::{load_while_mounted, DashboardState, LedgerFormatter, LoadOutcome, MountGuard, TransactionRepository};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "use-dashboard";

/// Loads the dashboard once per mount.
///
/// The fetch runs on first render only. Its result is dropped if the
/// component unmounts before it resolves, and an empty response leaves the
/// state unloaded.
#[hook]
pub fn use_dashboard<R>(repository: &R, formatter: &LedgerFormatter) -> DashboardState
where
    R: TransactionRepository + Clone + 'static,
{
    let state = use_state(DashboardState::default);

    {
        let state = state.clone();
        let repository = repository.clone();
        let formatter = formatter.clone();

        use_effect_with((), move |_| {
            let guard = MountGuard::new();

            {
                let guard = guard.clone();
                spawn_local(async move {
                    match load_while_mounted(&repository, &formatter, &guard).await {
                        LoadOutcome::Loaded(data) => {
                            Logger::info_with_component(
                                COMPONENT,
                                &format!("Loaded {} transactions", data.transactions.len()),
                            );
                            state.set((*state).clone().apply(Some(data)));
                        }
                        LoadOutcome::Empty => {
                            Logger::debug_with_component(COMPONENT, "Empty response body, keeping initial state");
                        }
                        LoadOutcome::Discarded => {
                            Logger::debug_with_component(COMPONENT, "Unmounted before transactions arrived, discarding result");
                        }
                        LoadOutcome::Failed(e) => {
                            Logger::error_with_component(COMPONENT, &format!("Failed to load transactions: {}", e));
                        }
                    }
                });
            }

            move || guard.release()
        });
    }

    (*state).clone()
}
