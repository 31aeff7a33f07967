use crate::domain::AuthorizationType;
use crate::ui::app::state::AppState;
use crate::ui::app::store::action::{LocationAction, Toggle};

pub fn reduce(state: &mut AppState, action: &LocationAction) {
    match action {
        LocationAction::ToggleLocationServices(enabled) => {
            state.monitoring.location = *enabled;
        }
        LocationAction::ToggleSignificantLocationChange(enabled) => {
            state.monitoring.significant_location_change = *enabled;
        }
        LocationAction::ToggleHeadingUpdates(enabled) => {
            state.monitoring.heading = *enabled;
        }
        LocationAction::ToggleRegionMonitoring(toggle) => {
            state.monitoring.region = toggle.is_on();
            if let Toggle::On(region) = toggle {
                state.monitoring.region_choice = Some(region.clone());
            }
        }
        LocationAction::ToggleBeaconRanging(toggle) => {
            state.monitoring.beacon_ranging = toggle.is_on();
            if let Toggle::On(constraint) = toggle {
                state.monitoring.beacon_choice = Some(*constraint);
            }
        }
        LocationAction::ToggleVisitMonitoring(enabled) => {
            state.monitoring.visits = *enabled;
        }
        LocationAction::ToggleAuthorizationType(always) => {
            state.authorization.requested_type = AuthorizationType::from(*always);
        }

        // Only the middleware acts on requests.
        LocationAction::RequestPosition
        | LocationAction::RequestAuthorizationType
        | LocationAction::RequestDeviceCapabilities
        | LocationAction::RequestRegionState(_) => {}

        LocationAction::AuthorizationStatusChanged { status, accuracy } => {
            state.authorization.status = *status;
            state.authorization.accuracy = *accuracy;
        }
        LocationAction::PositionUpdated(position) => {
            state.last_known.position = Some(*position);
            state.error.clear();
        }
        LocationAction::HeadingUpdated(heading) => {
            state.last_known.heading = Some(*heading);
            state.error.clear();
        }
        LocationAction::RegionEventReceived(event) => {
            state.last_known.region_event = Some(event.clone());
            state.error.clear();
        }
        LocationAction::BeaconRangingUpdated(beacons) => {
            state.last_known.beacons = beacons.clone();
            state.error.clear();
        }
        LocationAction::VisitDetected(visit) => {
            state.last_known.visit = Some(*visit);
            state.error.clear();
        }
        LocationAction::DeviceCapabilitiesReported(capabilities) => {
            state.capabilities = *capabilities;
        }
        LocationAction::ErrorOccurred(message) => {
            state.error = message.clone();
            state.last_known.position = None;
        }
    }
}
