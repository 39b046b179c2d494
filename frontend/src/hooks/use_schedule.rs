use std::rc::Rc;

use shared::{GridConfig, Schedule, SlotDateTime, SlotGrid, WeekDirection};
use yew::prelude::*;

use crate::services::date_utils::today;
use crate::services::logging::Logger;

pub enum ScheduleAction {
    PreviousWeek,
    NextWeek,
    Toggle(SlotDateTime),
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    pub schedule: Schedule,
}

impl ScheduleState {
    pub fn starting_from(date: chrono::NaiveDate) -> Self {
        Self {
            schedule: Schedule::starting_from(date),
        }
    }
}

impl Reducible for ScheduleState {
    type Action = ScheduleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut schedule = self.schedule.clone();
        match action {
            ScheduleAction::PreviousWeek => {
                schedule.advance_week(WeekDirection::Previous);
            }
            ScheduleAction::NextWeek => {
                schedule.advance_week(WeekDirection::Next);
            }
            ScheduleAction::Toggle(slot) => {
                schedule.toggle(slot);
            }
            ScheduleAction::Reset => schedule.reset(),
        }
        Rc::new(Self { schedule })
    }
}

pub struct UseScheduleResult {
    pub schedule: Schedule,
    /// `None` when the grid cannot be built for the current anchor.
    pub grid: Rc<Option<SlotGrid>>,
    pub text: String,
    pub actions: UseScheduleActions,
}

#[derive(Clone, PartialEq)]
pub struct UseScheduleActions {
    pub prev_week: Callback<MouseEvent>,
    pub next_week: Callback<MouseEvent>,
    pub toggle: Callback<SlotDateTime>,
    pub reset: Callback<MouseEvent>,
}

#[hook]
pub fn use_schedule(config: &GridConfig) -> UseScheduleResult {
    let state = use_reducer(|| ScheduleState::starting_from(today()));
    let anchor = state.schedule.anchor();

    let grid = use_memo((anchor, config.clone()), |(anchor, config)| {
        match SlotGrid::for_anchor(*anchor, config) {
            Ok(grid) => Some(grid),
            Err(e) => {
                Logger::error_with_component("use_schedule", &format!("Failed to build grid: {}", e));
                None
            }
        }
    });

    let prev_week = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: MouseEvent, _| {
            Logger::debug_with_component("use_schedule", "Previous week clicked");
            dispatcher.dispatch(ScheduleAction::PreviousWeek);
        })
    };

    let next_week = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: MouseEvent, _| {
            Logger::debug_with_component("use_schedule", "Next week clicked");
            dispatcher.dispatch(ScheduleAction::NextWeek);
        })
    };

    let toggle = {
        let dispatcher = state.dispatcher();
        use_callback((), move |slot: SlotDateTime, _| {
            dispatcher.dispatch(ScheduleAction::Toggle(slot));
        })
    };

    let reset = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: MouseEvent, _| {
            Logger::info_with_component("use_schedule", "Selection reset");
            dispatcher.dispatch(ScheduleAction::Reset);
        })
    };

    UseScheduleResult {
        schedule: state.schedule.clone(),
        grid,
        text: state.schedule.formatted_text(),
        actions: UseScheduleActions {
            prev_week,
            next_week,
            toggle,
            reset,
        },
    }
}
