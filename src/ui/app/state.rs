use crate::domain::{
    AuthorizationAccuracy, AuthorizationStatus, AuthorizationType, BeaconConstraint,
    BeaconReading, DeviceCapabilities, Heading, Position, Region, RegionEvent, Visit,
};

/// Where the app is in its foreground/background lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppLifecycle {
    #[default]
    BackgroundInactive,
    BackgroundActive,
    ForegroundInactive,
    ForegroundActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthorizationState {
    pub status: AuthorizationStatus,
    pub accuracy: AuthorizationAccuracy,
    /// Authorization asked for on the next request.
    pub requested_type: AuthorizationType,
}

/// Which location features the user switched on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonitoringState {
    pub location: bool,
    pub significant_location_change: bool,
    pub heading: bool,
    pub region: bool,
    /// Most recently switched-on region; kept after monitoring stops.
    pub region_choice: Option<Region>,
    pub beacon_ranging: bool,
    /// Most recently switched-on beacon constraint; kept after ranging stops.
    pub beacon_choice: Option<BeaconConstraint>,
    pub visits: bool,
}

/// Last values reported by the location service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LastKnown {
    /// `None` until the first fix, and again after an error.
    pub position: Option<Position>,
    pub heading: Option<Heading>,
    pub region_event: Option<RegionEvent>,
    pub beacons: Vec<BeaconReading>,
    pub visit: Option<Visit>,
}

/// All app state in one struct.
///
/// Only the reducer produces new values; everyone else reads snapshots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub lifecycle: AppLifecycle,
    pub authorization: AuthorizationState,
    pub capabilities: DeviceCapabilities,
    pub monitoring: MonitoringState,
    pub last_known: LastKnown,
    /// Last error reported by the location service, empty when there is none.
    pub error: String,
}

impl AppState {
    /// The state the store starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
