use shared::{summary_cards, FormattedBalance, SummaryCard};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub balance: FormattedBalance,
}

#[function_component(SummaryCards)]
pub fn summary_cards_row(props: &SummaryCardsProps) -> Html {
    html! {
        <section class="card-container">
            {for summary_cards(&props.balance).into_iter().map(render_card)}
        </section>
    }
}

fn render_card(card: SummaryCard) -> Html {
    let class = classes!("card", card.is_highlighted().then_some("total"));
    let kind = card.kind;

    html! {
        <div {class}>
            <header>
                <p>{kind.label()}</p>
                <span class={classes!("card-icon", kind.icon_alt().to_lowercase())} title={kind.icon_alt()} />
            </header>
            <h1 data-testid={kind.test_id()}>{card.value}</h1>
        </div>
    }
}
