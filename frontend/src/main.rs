mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::header::Header;
use components::output_panel::OutputPanel;
use components::week_grid::WeekGrid;
use components::week_navigator::WeekNavigator;
use hooks::use_clipboard::use_clipboard;
use hooks::use_schedule::use_schedule;
use services::config::AppConfig;
use services::date_utils::format_week_range;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let schedule = use_schedule(&props.config.grid);
    let clipboard = use_clipboard(props.config.notice_timeout_ms);

    let on_copy = {
        let text = schedule.text.clone();
        let copy = clipboard.copy.clone();
        Callback::from(move |_: MouseEvent| copy.emit(text.clone()))
    };

    let range_label = match (*schedule.grid).as_ref() {
        Some(grid) => match (grid.columns.first(), grid.columns.last()) {
            (Some(first), Some(last)) => format_week_range(first.date, last.date),
            _ => String::new(),
        },
        None => String::new(),
    };

    html! {
        <div class="app">
            <Header />
            <main class="main">
                <section class="grid-section">
                    <WeekNavigator
                        range_label={range_label}
                        on_previous={schedule.actions.prev_week.clone()}
                        on_next={schedule.actions.next_week.clone()}
                    />
                    {match (*schedule.grid).as_ref() {
                        Some(grid) => html! {
                            <WeekGrid
                                grid={grid.clone()}
                                selection={schedule.schedule.selection().clone()}
                                on_toggle={schedule.actions.toggle.clone()}
                            />
                        },
                        None => html! {
                            <div class="grid-error">{"この週は表示できません"}</div>
                        },
                    }}
                </section>
                <OutputPanel
                    selection={schedule.schedule.selection().clone()}
                    notice={clipboard.notice.clone()}
                    on_copy={on_copy}
                    on_reset={schedule.actions.reset.clone()}
                />
            </main>
        </div>
    }
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    if let Err(e) = Logger::init(config.log_level_filter()) {
        gloo::console::error!(format!("Failed to install logger: {}", e));
    }
    if let Err(e) = &loaded {
        Logger::warn_with_component("main", &format!("Using default configuration: {}", e));
    }
    Logger::info_with_component(
        "main",
        &format!(
            "Starting with {} slots of {} minutes from {:02}:00",
            config.grid.slot_count, config.grid.slot_minutes, config.grid.first_hour
        ),
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
