use super::{Labeled, Projection, format};
use crate::domain::Region;
use crate::ui::app::{Action, AppState, LocationAction, Toggle};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionMonitoringViewAction {
    ToggleRegionMonitoring(bool),
    GetRegionStateTapped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionMonitoringViewState {
    pub title: String,
    pub toggle_region_monitoring: Labeled<bool>,
    pub region: Labeled<String>,
    pub footnote: String,
    pub region_state_button: String,
}

/// Region monitoring for the region this section was configured with.
#[derive(Debug, Clone)]
pub struct RegionMonitoringSection {
    region: Region,
}

impl RegionMonitoringSection {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }
}

impl Projection for RegionMonitoringSection {
    type State = RegionMonitoringViewState;
    type Action = RegionMonitoringViewAction;

    fn state_map(&self, state: &AppState) -> RegionMonitoringViewState {
        let region = state
            .monitoring
            .region_choice
            .as_ref()
            .unwrap_or(&self.region);
        RegionMonitoringViewState {
            title: "Region Monitoring".into(),
            toggle_region_monitoring: Labeled::new("Region monitoring", state.monitoring.region),
            region: Labeled::new(
                "Region: ",
                format::region_event(state.last_known.region_event.as_ref()),
            ),
            footnote: format!(
                "Using region with latitude: {}, longitude: {}",
                region.center.latitude, region.center.longitude
            ),
            region_state_button: "Get region state".into(),
        }
    }

    fn action_map(&self, action: RegionMonitoringViewAction) -> Option<Action> {
        let action = match action {
            RegionMonitoringViewAction::ToggleRegionMonitoring(true) => {
                LocationAction::ToggleRegionMonitoring(Toggle::On(self.region.clone()))
            }
            RegionMonitoringViewAction::ToggleRegionMonitoring(false) => {
                LocationAction::ToggleRegionMonitoring(Toggle::Off)
            }
            RegionMonitoringViewAction::GetRegionStateTapped => {
                LocationAction::RequestRegionState(self.region.clone())
            }
        };
        Some(Action::Location(action))
    }
}
