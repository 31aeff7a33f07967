//! In-process stand-in for the platform location service.
//!
//! Walks a simulated device away from a configured origin and reports whatever
//! running sessions would observe on every tick. Useful for the demo binary and
//! for exercising the store end to end without hardware.

use super::{EventSink, LocationContext, LocationEvent, LocationService, MonitoringTarget};
use crate::domain::{
    AuthorizationAccuracy, AuthorizationStatus, AuthorizationType, BeaconConstraint,
    BeaconReading, Capability, Coordinate, Heading, LocationError, Position, Region, RegionEvent,
    RegionState, Visit,
};
use crate::infra::app_config::SimulatorConfig;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const METERS_PER_DEGREE_LATITUDE: f64 = 111_320.0;
/// Significant location changes fire once every this many ticks of their session.
const SLC_TICK_DIVISOR: u64 = 5;

struct Device {
    position: Coordinate,
    authorization: AuthorizationStatus,
    accuracy: AuthorizationAccuracy,
}

impl Device {
    fn advance(&mut self, step_meters: f64) -> Coordinate {
        self.position.latitude += step_meters / METERS_PER_DEGREE_LATITUDE;
        self.position
    }
}

/// A running monitoring session. Sessions never move the device; the clock does,
/// once per tick, and then lets every session observe the new position.
struct Session {
    target: MonitoringTarget,
    events: EventSink,
    ticks: u64,
    last_region_state: Option<RegionState>,
}

impl Session {
    fn new(target: MonitoringTarget, events: EventSink) -> Self {
        Self {
            target,
            events,
            ticks: 0,
            last_region_state: None,
        }
    }

    /// Reports what this session sees at `position`. Returns `false` once the
    /// session has nothing more to report.
    fn tick(&mut self, position: Coordinate) -> bool {
        self.ticks = self.ticks.saturating_add(1);

        match &self.target {
            MonitoringTarget::Location => {
                self.events.send(LocationEvent::Position(fix(position)));
            }
            MonitoringTarget::SignificantLocationChange => {
                if self.ticks % SLC_TICK_DIVISOR == 0 {
                    self.events.send(LocationEvent::Position(fix(position)));
                }
            }
            MonitoringTarget::Heading => {
                self.events.send(LocationEvent::Heading(Heading {
                    direction: (self.ticks as f64 * 15.0) % 360.0,
                    accuracy: 5.0,
                }));
            }
            MonitoringTarget::Region(region) => {
                let state = region_state(region, &position);
                if self.last_region_state != Some(state) {
                    self.last_region_state = Some(state);
                    self.events.send(LocationEvent::Region(RegionEvent {
                        region_id: region.id.clone(),
                        state,
                    }));
                }
            }
            MonitoringTarget::Beacon(constraint) => {
                let readings = ranged_beacons(constraint, self.ticks);
                self.events.send(LocationEvent::BeaconRanging(readings));
            }
            MonitoringTarget::Visits => {
                // Visits are reported once per session, on arrival.
                self.events.send(LocationEvent::Visit(Visit {
                    arrival: Some(Utc::now()),
                    departure: None,
                    coordinate: position,
                }));
                return false;
            }
        }
        true
    }
}

type Sessions = Arc<Mutex<HashMap<Capability, Session>>>;

pub struct SimulatedLocationService {
    config: SimulatorConfig,
    device: Arc<Mutex<Device>>,
    sessions: Sessions,
    clock: Mutex<Option<JoinHandle<()>>>,
}

impl SimulatedLocationService {
    pub fn new(config: SimulatorConfig) -> Self {
        let device = Device {
            position: config.origin,
            authorization: AuthorizationStatus::NotDetermined,
            accuracy: AuthorizationAccuracy::None,
        };
        Self {
            config,
            device: Arc::new(Mutex::new(device)),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            clock: Mutex::new(None),
        }
    }

    /// Capabilities with a running session, in no particular order.
    pub fn active_sessions(&self) -> Vec<Capability> {
        self.sessions.lock().keys().copied().collect()
    }

    pub fn current_position(&self) -> Coordinate {
        self.device.lock().position
    }

    fn ensure_authorized(&self) -> Result<(), LocationError> {
        if self.device.lock().authorization.is_authorized() {
            Ok(())
        } else {
            Err(LocationError::NotAuthorized)
        }
    }

    /// Starts the device clock unless it is already ticking.
    fn ensure_clock(&self) {
        let mut clock = self.clock.lock();
        if clock.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }

        let device = self.device.clone();
        let sessions = self.sessions.clone();
        let period = Duration::from_millis(self.config.tick_interval_ms.max(1));
        let step_meters = self.config.step_meters;

        *clock = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                drive_sessions(&device, &sessions, step_meters);
            }
        }));
    }
}

/// One clock tick: the device walks one step, then each session observes it.
/// The device stands still while nothing is being monitored.
fn drive_sessions(
    device: &Mutex<Device>,
    sessions: &Mutex<HashMap<Capability, Session>>,
    step_meters: f64,
) {
    let mut sessions = sessions.lock();
    sessions.retain(|_, session| !session.events.is_closed());
    if sessions.is_empty() {
        return;
    }

    let position = device.lock().advance(step_meters);
    sessions.retain(|capability, session| {
        let running = session.tick(position);
        if !running {
            log::debug!(target: "location", "{capability} session finished");
        }
        running
    });
}

impl Drop for SimulatedLocationService {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.lock().take() {
            clock.abort();
        }
    }
}

fn fix(coordinate: Coordinate) -> Position {
    Position {
        coordinate,
        timestamp: Utc::now(),
    }
}

fn region_state(region: &Region, position: &Coordinate) -> RegionState {
    if region.contains(position) {
        RegionState::Inside
    } else {
        RegionState::Outside
    }
}

fn ranged_beacons(constraint: &BeaconConstraint, ticks: u64) -> Vec<BeaconReading> {
    let major = constraint.major.unwrap_or(1);
    let minors: Vec<u16> = match constraint.minor {
        Some(minor) => vec![minor],
        None => vec![1, 2],
    };
    minors
        .into_iter()
        .enumerate()
        .map(|(idx, minor)| BeaconReading {
            id: constraint.with_major(major).with_minor(minor).id(),
            rssi: -60 - ((ticks as i32 + idx as i32 * 7) % 20),
        })
        .collect()
}

#[async_trait]
impl LocationService for SimulatedLocationService {
    fn id(&self) -> &str {
        "simulator"
    }

    async fn start_monitoring(
        &self,
        target: MonitoringTarget,
        _context: LocationContext,
        events: EventSink,
    ) -> Result<(), LocationError> {
        let capability = target.capability();
        if !self.config.capabilities.supports(capability) {
            return Err(LocationError::Unavailable(capability));
        }
        self.ensure_authorized()?;

        let replaced = self
            .sessions
            .lock()
            .insert(capability, Session::new(target, events))
            .is_some();
        if replaced {
            log::debug!(target: "location", "replaced running {capability} session");
        }
        self.ensure_clock();
        log::info!(target: "location", "started {capability} session");
        Ok(())
    }

    async fn stop_monitoring(
        &self,
        capability: Capability,
        _events: EventSink,
    ) -> Result<(), LocationError> {
        if self.sessions.lock().remove(&capability).is_some() {
            log::info!(target: "location", "stopped {capability} session");
        } else {
            log::debug!(target: "location", "no running {capability} session to stop");
        }
        Ok(())
    }

    async fn request_position(
        &self,
        context: LocationContext,
        events: EventSink,
    ) -> Result<(), LocationError> {
        self.ensure_authorized()?;
        if context.needs_precision_upgrade() {
            log::info!(target: "location", "granting temporary full accuracy");
            let (status, accuracy) = {
                let mut device = self.device.lock();
                device.accuracy = AuthorizationAccuracy::Full;
                (device.authorization, device.accuracy)
            };
            events.send(LocationEvent::AuthorizationStatus { status, accuracy });
        }
        events.send(LocationEvent::Position(fix(self.current_position())));
        Ok(())
    }

    async fn request_authorization(
        &self,
        context: LocationContext,
        events: EventSink,
    ) -> Result<(), LocationError> {
        let (status, accuracy) = if self.config.authorization.is_authorized() {
            let status = match context.authorization_type {
                AuthorizationType::Always => AuthorizationStatus::AuthorizedAlways,
                AuthorizationType::WhenInUse => AuthorizationStatus::AuthorizedWhenInUse,
            };
            (status, self.config.accuracy)
        } else {
            (self.config.authorization, AuthorizationAccuracy::None)
        };

        {
            let mut device = self.device.lock();
            device.authorization = status;
            device.accuracy = accuracy;
        }
        events.send(LocationEvent::AuthorizationStatus { status, accuracy });
        Ok(())
    }

    async fn request_device_capabilities(&self, events: EventSink) -> Result<(), LocationError> {
        events.send(LocationEvent::DeviceCapabilities(self.config.capabilities));
        Ok(())
    }

    async fn request_region_state(
        &self,
        region: Region,
        events: EventSink,
    ) -> Result<(), LocationError> {
        if !self.config.capabilities.region_monitoring {
            return Err(LocationError::Unavailable(Capability::RegionMonitoring));
        }
        let state = region_state(&region, &self.current_position());
        events.send(LocationEvent::Region(RegionEvent {
            region_id: region.id,
            state,
        }));
        Ok(())
    }
}
