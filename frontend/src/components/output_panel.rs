use shared::{SelectionSet, INTRO_TEXT};
use yew::prelude::*;

use crate::hooks::use_clipboard::Notice;

#[derive(Properties, PartialEq)]
pub struct OutputPanelProps {
    pub selection: SelectionSet,
    pub notice: Option<Notice>,
    pub on_copy: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(OutputPanel)]
pub fn output_panel(props: &OutputPanelProps) -> Html {
    html! {
        <aside class="output-panel">
            <div class="intro">{INTRO_TEXT}</div>
            <div class="entries">
                {for props.selection.iter().map(|slot| html! {
                    <div key={slot.to_string()} class="entry">{slot.to_japanese()}</div>
                })}
            </div>
            <div class="actions">
                <button class="btn btn-primary" onclick={props.on_copy.clone()}>{"コピー"}</button>
                <button class="btn btn-secondary" onclick={props.on_reset.clone()}>{"リセット"}</button>
            </div>
            {if let Some(notice) = &props.notice {
                html! { <div class={notice.css_class()} role="status">{&notice.message}</div> }
            } else {
                html! {}
            }}
        </aside>
    }
}
