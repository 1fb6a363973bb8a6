use shared::{ledger_rows, TransactionView, TABLE_HEADERS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<TransactionView>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="table-container">
            <table>
                <thead>
                    <tr>
                        {for TABLE_HEADERS.iter().map(|header| html! { <th>{*header}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for ledger_rows(&props.transactions).into_iter().map(|row| {
                        html! {
                            <tr key={row.key}>
                                <td class="title">{row.title}</td>
                                <td class={row.value_class}>{row.display_value}</td>
                                <td>{row.category}</td>
                                <td>{row.date}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </section>
    }
}
