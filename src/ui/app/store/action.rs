use crate::domain::{
    AuthorizationAccuracy, AuthorizationStatus, BeaconConstraint, BeaconReading,
    DeviceCapabilities, Heading, Position, Region, RegionEvent, Visit,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Lifecycle(LifecycleAction),
    Location(LocationAction),
}

impl Action {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Lifecycle(action) => action.name(),
            Action::Location(action) => action.name(),
        }
    }
}

impl From<LifecycleAction> for Action {
    fn from(action: LifecycleAction) -> Self {
        Action::Lifecycle(action)
    }
}

impl From<LocationAction> for Action {
    fn from(action: LocationAction) -> Self {
        Action::Location(action)
    }
}

/// App foreground/background transitions as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    DidBecomeActive,
    WillResignActive,
    DidEnterBackground,
    WillEnterForeground,
    WillTerminate,
}

impl LifecycleAction {
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleAction::DidBecomeActive => "lifecycle/did_become_active",
            LifecycleAction::WillResignActive => "lifecycle/will_resign_active",
            LifecycleAction::DidEnterBackground => "lifecycle/did_enter_background",
            LifecycleAction::WillEnterForeground => "lifecycle/will_enter_foreground",
            LifecycleAction::WillTerminate => "lifecycle/will_terminate",
        }
    }
}

/// Switch for features that need a target when turned on.
#[derive(Debug, Clone, PartialEq)]
pub enum Toggle<T> {
    On(T),
    Off,
}

impl<T> Toggle<T> {
    pub fn is_on(&self) -> bool {
        matches!(self, Toggle::On(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationAction {
    // User intents
    ToggleLocationServices(bool),
    ToggleSignificantLocationChange(bool),
    ToggleHeadingUpdates(bool),
    ToggleRegionMonitoring(Toggle<Region>),
    ToggleBeaconRanging(Toggle<BeaconConstraint>),
    ToggleVisitMonitoring(bool),
    /// `true` asks for "always" authorization, `false` for "when in use".
    ToggleAuthorizationType(bool),
    RequestPosition,
    RequestAuthorizationType,
    RequestDeviceCapabilities,
    RequestRegionState(Region),

    // Reported by the location service
    AuthorizationStatusChanged {
        status: AuthorizationStatus,
        accuracy: AuthorizationAccuracy,
    },
    PositionUpdated(Position),
    HeadingUpdated(Heading),
    RegionEventReceived(RegionEvent),
    BeaconRangingUpdated(Vec<BeaconReading>),
    VisitDetected(Visit),
    DeviceCapabilitiesReported(DeviceCapabilities),
    ErrorOccurred(String),
}

impl LocationAction {
    pub fn name(&self) -> &'static str {
        match self {
            LocationAction::ToggleLocationServices(_) => "location/toggle_location_services",
            LocationAction::ToggleSignificantLocationChange(_) => {
                "location/toggle_significant_location_change"
            }
            LocationAction::ToggleHeadingUpdates(_) => "location/toggle_heading_updates",
            LocationAction::ToggleRegionMonitoring(_) => "location/toggle_region_monitoring",
            LocationAction::ToggleBeaconRanging(_) => "location/toggle_beacon_ranging",
            LocationAction::ToggleVisitMonitoring(_) => "location/toggle_visit_monitoring",
            LocationAction::ToggleAuthorizationType(_) => "location/toggle_authorization_type",
            LocationAction::RequestPosition => "location/request_position",
            LocationAction::RequestAuthorizationType => "location/request_authorization_type",
            LocationAction::RequestDeviceCapabilities => "location/request_device_capabilities",
            LocationAction::RequestRegionState(_) => "location/request_region_state",
            LocationAction::AuthorizationStatusChanged { .. } => {
                "location/authorization_status_changed"
            }
            LocationAction::PositionUpdated(_) => "location/position_updated",
            LocationAction::HeadingUpdated(_) => "location/heading_updated",
            LocationAction::RegionEventReceived(_) => "location/region_event",
            LocationAction::BeaconRangingUpdated(_) => "location/beacon_ranging_updated",
            LocationAction::VisitDetected(_) => "location/visit_detected",
            LocationAction::DeviceCapabilitiesReported(_) => {
                "location/device_capabilities_reported"
            }
            LocationAction::ErrorOccurred(_) => "location/error_occurred",
        }
    }
}
