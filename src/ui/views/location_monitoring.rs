use super::{Labeled, Projection};
use crate::ui::app::{Action, AppState, LocationAction};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMonitoringViewAction {
    ToggleLocationMonitoring(bool),
    GetPositionTapped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationMonitoringViewState {
    pub title: String,
    pub toggle_location_services: Labeled<bool>,
    pub position_button: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationMonitoringSection;

impl Projection for LocationMonitoringSection {
    type State = LocationMonitoringViewState;
    type Action = LocationMonitoringViewAction;

    fn state_map(&self, state: &AppState) -> LocationMonitoringViewState {
        LocationMonitoringViewState {
            title: "Location Monitoring".into(),
            toggle_location_services: Labeled::new(
                "Location Services",
                state.monitoring.location,
            ),
            position_button: "Get position".into(),
        }
    }

    fn action_map(&self, action: LocationMonitoringViewAction) -> Option<Action> {
        let action = match action {
            LocationMonitoringViewAction::ToggleLocationMonitoring(enabled) => {
                LocationAction::ToggleLocationServices(enabled)
            }
            LocationMonitoringViewAction::GetPositionTapped => LocationAction::RequestPosition,
        };
        Some(Action::Location(action))
    }
}
