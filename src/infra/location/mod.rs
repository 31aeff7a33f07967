//! Boundary with the platform location service.
//!
//! The service is an opaque collaborator: it accepts start/stop/request calls and
//! reports everything that happens afterwards as [`LocationEvent`]s pushed into an
//! [`EventSink`]. A call returning `Ok` only means the request was accepted; its
//! outcome always arrives later as an event.

pub mod simulator;

use crate::domain::{
    AuthorizationAccuracy, AuthorizationStatus, AuthorizationType, BeaconConstraint,
    BeaconReading, Capability, DeviceCapabilities, Heading, LocationError, Position, Region,
    RegionEvent, Visit,
};
use async_trait::async_trait;
use tokio::sync::mpsc;

pub use simulator::SimulatedLocationService;

/// Events emitted asynchronously by the location service.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    AuthorizationStatus {
        status: AuthorizationStatus,
        accuracy: AuthorizationAccuracy,
    },
    Position(Position),
    Heading(Heading),
    Region(RegionEvent),
    BeaconRanging(Vec<BeaconReading>),
    Visit(Visit),
    DeviceCapabilities(DeviceCapabilities),
    Error(String),
}

/// What a monitoring session is started for.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitoringTarget {
    Location,
    SignificantLocationChange,
    Heading,
    Region(Region),
    Beacon(BeaconConstraint),
    Visits,
}

impl MonitoringTarget {
    pub fn capability(&self) -> Capability {
        match self {
            MonitoringTarget::Location => Capability::LocationMonitoring,
            MonitoringTarget::SignificantLocationChange => Capability::SignificantLocationChange,
            MonitoringTarget::Heading => Capability::HeadingUpdates,
            MonitoringTarget::Region(_) => Capability::RegionMonitoring,
            MonitoringTarget::Beacon(_) => Capability::BeaconRanging,
            MonitoringTarget::Visits => Capability::VisitMonitoring,
        }
    }
}

/// The slice of app state the service binding gets to see when handling a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocationContext {
    pub authorization_status: AuthorizationStatus,
    pub authorization_accuracy: AuthorizationAccuracy,
    pub authorization_type: AuthorizationType,
}

impl LocationContext {
    /// Whether the service should ask the user for full accuracy.
    pub fn needs_precision_upgrade(&self) -> bool {
        self.authorization_status.is_authorized()
            && self.authorization_accuracy == AuthorizationAccuracy::Reduced
    }
}

/// Cloneable handle the service uses to report events.
///
/// Sending never blocks; events sent after the receiving side is gone are dropped.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<LocationEvent>,
}

impl EventSink {
    pub fn new(tx: mpsc::UnboundedSender<LocationEvent>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<LocationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn send(&self, event: LocationEvent) {
        if self.tx.send(event).is_err() {
            log::debug!(target: "location", "event dropped, receiver closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Platform location service adapter.
///
/// Sessions are tracked by the service: stopping a capability ends whatever
/// session is active for it, so stop calls never need the original target.
#[async_trait]
pub trait LocationService: Send + Sync {
    fn id(&self) -> &str;

    async fn start_monitoring(
        &self,
        target: MonitoringTarget,
        context: LocationContext,
        events: EventSink,
    ) -> Result<(), LocationError>;

    async fn stop_monitoring(
        &self,
        capability: Capability,
        events: EventSink,
    ) -> Result<(), LocationError>;

    async fn request_position(
        &self,
        context: LocationContext,
        events: EventSink,
    ) -> Result<(), LocationError>;

    async fn request_authorization(
        &self,
        context: LocationContext,
        events: EventSink,
    ) -> Result<(), LocationError>;

    async fn request_device_capabilities(&self, events: EventSink) -> Result<(), LocationError>;

    async fn request_region_state(
        &self,
        region: Region,
        events: EventSink,
    ) -> Result<(), LocationError>;
}
