use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeekNavigatorProps {
    pub range_label: String,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(WeekNavigator)]
pub fn week_navigator(props: &WeekNavigatorProps) -> Html {
    html! {
        <div class="week-navigator">
            <button class="week-nav-btn" onclick={props.on_previous.clone()} title="前の週">
                {"‹"}
            </button>
            <span class="week-range">{&props.range_label}</span>
            <button class="week-nav-btn" onclick={props.on_next.clone()} title="次の週">
                {"›"}
            </button>
        </div>
    }
}
