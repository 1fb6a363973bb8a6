use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{props.title.clone()}</h1>
                <nav>
                    <a href="/" class="active">{"Listagem"}</a>
                </nav>
            </div>
        </header>
    }
}
