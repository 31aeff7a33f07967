use super::{Labeled, Projection, format};
use crate::ui::app::{Action, AppState, LocationAction};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingUpdatesViewAction {
    ToggleHeadingServices(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingUpdatesViewState {
    pub title: String,
    pub toggle_heading_services: Labeled<bool>,
    pub heading: Labeled<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingUpdatesSection;

impl Projection for HeadingUpdatesSection {
    type State = HeadingUpdatesViewState;
    type Action = HeadingUpdatesViewAction;

    fn state_map(&self, state: &AppState) -> HeadingUpdatesViewState {
        HeadingUpdatesViewState {
            title: "Heading Updates".into(),
            toggle_heading_services: Labeled::new("Heading updates", state.monitoring.heading),
            heading: Labeled::new(
                "Heading: ",
                format::heading(state.last_known.heading.as_ref()),
            ),
        }
    }

    fn action_map(&self, action: HeadingUpdatesViewAction) -> Option<Action> {
        match action {
            HeadingUpdatesViewAction::ToggleHeadingServices(enabled) => Some(Action::Location(
                LocationAction::ToggleHeadingUpdates(enabled),
            )),
        }
    }
}
