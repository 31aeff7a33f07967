use super::{Labeled, Projection, format};
use crate::ui::app::{Action, AppState};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCapabilitiesViewAction {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceCapabilitiesViewState {
    pub title: String,
    pub location_available: Labeled<String>,
    pub slc_capable: Labeled<String>,
    pub region_monitoring_capable: Labeled<String>,
    pub ranging_capable: Labeled<String>,
    pub heading_capable: Labeled<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceCapabilitiesSection;

impl Projection for DeviceCapabilitiesSection {
    type State = DeviceCapabilitiesViewState;
    type Action = DeviceCapabilitiesViewAction;

    fn state_map(&self, state: &AppState) -> DeviceCapabilitiesViewState {
        let caps = &state.capabilities;
        let item = |title: &str, value: bool| Labeled::new(title, format::yes_no(value).to_string());
        DeviceCapabilitiesViewState {
            title: "Device Capabilities".into(),
            location_available: item("Location services: ", caps.location_available),
            slc_capable: item("SLC capable: ", caps.significant_location_change),
            region_monitoring_capable: item("Region monitoring capable: ", caps.region_monitoring),
            ranging_capable: item("Ranging capable: ", caps.ranging),
            heading_capable: item("Heading capable: ", caps.heading),
        }
    }

    fn action_map(&self, action: DeviceCapabilitiesViewAction) -> Option<Action> {
        match action {}
    }
}
