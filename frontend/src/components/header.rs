use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <h1 class="title">{"cal2text"}</h1>
        </header>
    }
}
