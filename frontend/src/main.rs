use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{Dashboard, Header};
use services::api::ApiClient;
use services::config::AppConfig;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });

    html! {
        <>
            <Header title="GoFinances" />
            <Dashboard api_client={(*api_client).clone()} />
        </>
    }
}

fn main() {
    let config = AppConfig::from_build_env();
    Logger::init(config.log_level);
    Logger::info_with_component("app", &format!("Starting dashboard against {}", config.api_base_url));

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
