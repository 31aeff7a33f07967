use super::{Labeled, Projection, format};
use crate::domain::BeaconConstraint;
use crate::ui::app::{Action, AppState, LocationAction, Toggle};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconRangingViewAction {
    ToggleBeaconRanging(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeaconRangingViewState {
    pub title: String,
    pub toggle_beacon_ranging: Labeled<bool>,
    pub beacons: Labeled<String>,
    pub footnote: String,
}

#[derive(Debug, Clone, Copy)]
pub struct BeaconRangingSection {
    constraint: BeaconConstraint,
}

impl BeaconRangingSection {
    pub fn new(constraint: BeaconConstraint) -> Self {
        Self { constraint }
    }
}

impl Projection for BeaconRangingSection {
    type State = BeaconRangingViewState;
    type Action = BeaconRangingViewAction;

    fn state_map(&self, state: &AppState) -> BeaconRangingViewState {
        let constraint = state.monitoring.beacon_choice.unwrap_or(self.constraint);
        BeaconRangingViewState {
            title: "Beacon Ranging".into(),
            toggle_beacon_ranging: Labeled::new(
                "Beacon ranging",
                state.monitoring.beacon_ranging,
            ),
            beacons: Labeled::new("Beacons: ", format::beacons(&state.last_known.beacons)),
            footnote: format!("Using beacon with uuid: {}", constraint.id()),
        }
    }

    fn action_map(&self, action: BeaconRangingViewAction) -> Option<Action> {
        let toggle = match action {
            BeaconRangingViewAction::ToggleBeaconRanging(true) => Toggle::On(self.constraint),
            BeaconRangingViewAction::ToggleBeaconRanging(false) => Toggle::Off,
        };
        Some(Action::Location(LocationAction::ToggleBeaconRanging(toggle)))
    }
}
