use shared::{SelectionSet, SlotDateTime, SlotGrid};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeekGridProps {
    pub grid: SlotGrid,
    pub selection: SelectionSet,
    pub on_toggle: Callback<SlotDateTime>,
}

/// 7 date columns by one row per slot. Clicking a cell toggles it.
#[function_component(WeekGrid)]
pub fn week_grid(props: &WeekGridProps) -> Html {
    let grid = &props.grid;

    html! {
        <table class="week-grid">
            <thead>
                <tr>
                    <th class="time-header"></th>
                    {for grid.columns.iter().map(|column| html! {
                        <th key={column.date.to_string()} class="day-header">
                            <div class="day-label">{&column.label}</div>
                            <div class="day-weekday">{format!("({})", column.weekday)}</div>
                        </th>
                    })}
                </tr>
            </thead>
            <tbody>
                {for grid.rows.iter().map(|row| {
                    let time_label = if row.label_rowspan > 0 {
                        html! {
                            <td class="time-label" rowspan={row.label_rowspan.to_string()}>
                                {row.time.to_string()}
                            </td>
                        }
                    } else {
                        html! {}
                    };

                    html! {
                        <tr key={row.time.to_string()}>
                            {time_label}
                            {for grid.cells_in_row(row).map(|slot| {
                                let selected = props.selection.is_selected(&slot);
                                let onclick = {
                                    let on_toggle = props.on_toggle.clone();
                                    Callback::from(move |_: MouseEvent| on_toggle.emit(slot))
                                };
                                html! {
                                    <td
                                        key={slot.to_string()}
                                        class={classes!("slot-cell", selected.then_some("selected"))}
                                        {onclick}
                                    >
                                        {if selected { slot.time.to_string() } else { String::new() }}
                                    </td>
                                }
                            })}
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
