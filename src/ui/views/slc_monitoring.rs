use super::{Labeled, Projection};
use crate::ui::app::{Action, AppState, LocationAction};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlcMonitoringViewAction {
    ToggleSlcServices(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlcMonitoringViewState {
    pub title: String,
    pub toggle_slc_services: Labeled<bool>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SlcMonitoringSection;

impl Projection for SlcMonitoringSection {
    type State = SlcMonitoringViewState;
    type Action = SlcMonitoringViewAction;

    fn state_map(&self, state: &AppState) -> SlcMonitoringViewState {
        SlcMonitoringViewState {
            title: "SLC Monitoring".into(),
            toggle_slc_services: Labeled::new(
                "Significant location changes",
                state.monitoring.significant_location_change,
            ),
        }
    }

    fn action_map(&self, action: SlcMonitoringViewAction) -> Option<Action> {
        match action {
            SlcMonitoringViewAction::ToggleSlcServices(enabled) => Some(Action::Location(
                LocationAction::ToggleSignificantLocationChange(enabled),
            )),
        }
    }
}
