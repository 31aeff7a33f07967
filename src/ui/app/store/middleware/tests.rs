use super::*;
use crate::domain::{
    AuthorizationAccuracy, AuthorizationStatus, AuthorizationType, BeaconConstraint, Capability,
    Coordinate, DeviceCapabilities, LocationError, Position, Region,
};
use crate::infra::location::{
    EventSink, LocationContext, LocationEvent, LocationService, MonitoringTarget,
};
use crate::ui::app::store::action::{LifecycleAction, LocationAction, Toggle};
use crate::ui::app::store::command::LocationCommand;
use chrono::Utc;

fn region(id: &str) -> Region {
    Region::new(id, Coordinate::new(51.50998, -0.1337), 100.0)
}

#[test]
fn test_lift_input_maps_toggles_to_start_and_stop() {
    let cases = [
        (
            LocationAction::ToggleLocationServices(true),
            LocationCommand::StartMonitoring(MonitoringTarget::Location),
        ),
        (
            LocationAction::ToggleLocationServices(false),
            LocationCommand::StopMonitoring(Capability::LocationMonitoring),
        ),
        (
            LocationAction::ToggleSignificantLocationChange(true),
            LocationCommand::StartMonitoring(MonitoringTarget::SignificantLocationChange),
        ),
        (
            LocationAction::ToggleHeadingUpdates(false),
            LocationCommand::StopMonitoring(Capability::HeadingUpdates),
        ),
        (
            LocationAction::ToggleVisitMonitoring(true),
            LocationCommand::StartMonitoring(MonitoringTarget::Visits),
        ),
        (
            LocationAction::ToggleRegionMonitoring(Toggle::On(region("a"))),
            LocationCommand::StartMonitoring(MonitoringTarget::Region(region("a"))),
        ),
        (
            LocationAction::ToggleRegionMonitoring(Toggle::Off),
            LocationCommand::StopMonitoring(Capability::RegionMonitoring),
        ),
        (
            LocationAction::ToggleBeaconRanging(Toggle::Off),
            LocationCommand::StopMonitoring(Capability::BeaconRanging),
        ),
    ];
    for (action, expected) in cases {
        assert_eq!(lift_input(&Action::Location(action)), Some(expected));
    }

    let constraint = BeaconConstraint::new(uuid::Uuid::nil());
    assert_eq!(
        lift_input(&Action::Location(LocationAction::ToggleBeaconRanging(
            Toggle::On(constraint)
        ))),
        Some(LocationCommand::StartMonitoring(MonitoringTarget::Beacon(
            constraint
        )))
    );
}

#[test]
fn test_lift_input_maps_requests_to_one_shot_commands() {
    let cases = [
        (LocationAction::RequestPosition, LocationCommand::RequestPosition),
        (
            LocationAction::RequestAuthorizationType,
            LocationCommand::RequestAuthorization,
        ),
        (
            LocationAction::RequestDeviceCapabilities,
            LocationCommand::RequestDeviceCapabilities,
        ),
        (
            LocationAction::RequestRegionState(region("a")),
            LocationCommand::RequestRegionState(region("a")),
        ),
    ];
    for (action, expected) in cases {
        assert_eq!(lift_input(&Action::Location(action)), Some(expected));
    }
}

#[test]
fn test_lift_input_ignores_events_and_lifecycle() {
    let ignored = [
        Action::Lifecycle(LifecycleAction::DidBecomeActive),
        Action::Location(LocationAction::ToggleAuthorizationType(true)),
        Action::Location(LocationAction::ErrorOccurred("x".into())),
        Action::Location(LocationAction::PositionUpdated(Position::new(
            1.0,
            2.0,
            Utc::now(),
        ))),
    ];
    for action in ignored {
        assert_eq!(lift_input(&action), None, "{}", action.name());
    }
}

#[test]
fn test_lift_output_maps_events_to_location_actions() {
    let position = Position::new(51.5, -0.13, Utc::now());
    assert_eq!(
        lift_output(LocationEvent::Position(position)),
        Action::Location(LocationAction::PositionUpdated(position))
    );
    assert_eq!(
        lift_output(LocationEvent::AuthorizationStatus {
            status: AuthorizationStatus::Denied,
            accuracy: AuthorizationAccuracy::None,
        }),
        Action::Location(LocationAction::AuthorizationStatusChanged {
            status: AuthorizationStatus::Denied,
            accuracy: AuthorizationAccuracy::None,
        })
    );
    assert_eq!(
        lift_output(LocationEvent::Error("denied".into())),
        Action::Location(LocationAction::ErrorOccurred("denied".into()))
    );
    assert_eq!(
        lift_output(LocationEvent::DeviceCapabilities(DeviceCapabilities::all())),
        Action::Location(LocationAction::DeviceCapabilitiesReported(
            DeviceCapabilities::all()
        ))
    );
}

#[test]
fn test_lift_state_projects_authorization() {
    let mut state = AppState::empty();
    state.authorization.status = AuthorizationStatus::AuthorizedWhenInUse;
    state.authorization.accuracy = AuthorizationAccuracy::Reduced;
    state.authorization.requested_type = AuthorizationType::Always;
    state.monitoring.location = true;

    let context = lift_state(&state);
    assert_eq!(context.authorization_type, AuthorizationType::Always);
    assert!(context.needs_precision_upgrade());
}

#[test]
fn test_lifecycle_requests_capabilities_on_first_activation_only() {
    let (dispatcher, mut rx) = Dispatcher::channel();
    let mut middleware = LifecycleMiddleware::new();
    let state = AppState::empty();

    middleware.handle_action(
        &Action::Lifecycle(LifecycleAction::WillEnterForeground),
        &state,
        &dispatcher,
    );
    assert!(rx.try_recv().is_err());

    let active = Action::Lifecycle(LifecycleAction::DidBecomeActive);
    middleware.handle_action(&active, &state, &dispatcher);
    assert_eq!(
        rx.try_recv().unwrap(),
        Action::Location(LocationAction::RequestDeviceCapabilities)
    );

    middleware.handle_action(
        &Action::Lifecycle(LifecycleAction::DidEnterBackground),
        &state,
        &dispatcher,
    );
    middleware.handle_action(&active, &state, &dispatcher);
    assert!(rx.try_recv().is_err());
}

struct Recorder {
    name: &'static str,
    log: std::sync::Arc<parking_lot::Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl Middleware for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn handle_action(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) {
        self.log.lock().push(format!("{}:{}", self.name, action.name()));
    }

    fn after_reduce(&mut self, action: &Action, _previous: &AppState, _next: &AppState) {
        self.log
            .lock()
            .push(format!("{}:after:{}", self.name, action.name()));
    }

    async fn detach(&mut self) {
        self.log.lock().push(format!("{}:detach", self.name));
    }
}

#[test]
fn test_chain_runs_units_in_insertion_order() {
    let log = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let mut chain = MiddlewareChain::new()
        .with(Recorder {
            name: "first",
            log: log.clone(),
        })
        .with(Recorder {
            name: "second",
            log: log.clone(),
        });
    assert_eq!(chain.names(), vec!["first", "second"]);

    let (dispatcher, _rx) = Dispatcher::channel();
    let state = AppState::empty();
    let action = Action::Location(LocationAction::RequestPosition);
    chain.handle_action(&action, &state, &dispatcher);
    chain.after_reduce(&action, &state, &state);

    assert_eq!(
        *log.lock(),
        vec![
            "first:location/request_position",
            "second:location/request_position",
            "first:after:location/request_position",
            "second:after:location/request_position",
        ]
    );
}

#[tokio::test]
async fn test_chain_detaches_units_in_insertion_order() {
    let log = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let mut chain = MiddlewareChain::new()
        .with(Recorder {
            name: "first",
            log: log.clone(),
        })
        .with(LoggerMiddleware::new())
        .with(Recorder {
            name: "second",
            log: log.clone(),
        });

    chain.detach().await;
    assert_eq!(*log.lock(), vec!["first:detach", "second:detach"]);
}

#[tokio::test]
async fn test_location_middleware_finishes_queue_and_stops_sessions_on_detach() {
    let service = std::sync::Arc::new(CountingService::default());
    let mut middleware = LocationMiddleware::new(service.clone());
    let (dispatcher, _rx) = Dispatcher::channel();
    middleware.attach(&dispatcher);

    let state = AppState::empty();
    middleware.handle_action(
        &Action::Location(LocationAction::ToggleHeadingUpdates(true)),
        &state,
        &dispatcher,
    );
    middleware.detach().await;

    let calls = service.calls.lock().clone();
    assert_eq!(calls[0], "start:heading_updates");
    let stops: Vec<_> = Capability::ALL
        .iter()
        .map(|capability| format!("stop:{capability}"))
        .collect();
    assert_eq!(calls[1..], stops[..]);

    // Nothing is forwarded to the service once detached.
    middleware.handle_action(
        &Action::Location(LocationAction::RequestPosition),
        &state,
        &dispatcher,
    );
    assert_eq!(service.calls.lock().len(), 1 + Capability::ALL.len());
}

#[derive(Default)]
struct CountingService {
    calls: parking_lot::Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl LocationService for CountingService {
    fn id(&self) -> &str {
        "counting"
    }

    async fn start_monitoring(
        &self,
        target: MonitoringTarget,
        _context: LocationContext,
        _events: EventSink,
    ) -> Result<(), LocationError> {
        self.calls.lock().push(format!("start:{}", target.capability()));
        Ok(())
    }

    async fn stop_monitoring(
        &self,
        capability: Capability,
        _events: EventSink,
    ) -> Result<(), LocationError> {
        self.calls.lock().push(format!("stop:{capability}"));
        Ok(())
    }

    async fn request_position(
        &self,
        _context: LocationContext,
        _events: EventSink,
    ) -> Result<(), LocationError> {
        self.calls.lock().push("position".into());
        Ok(())
    }

    async fn request_authorization(
        &self,
        _context: LocationContext,
        _events: EventSink,
    ) -> Result<(), LocationError> {
        self.calls.lock().push("authorization".into());
        Ok(())
    }

    async fn request_device_capabilities(
        &self,
        _events: EventSink,
    ) -> Result<(), LocationError> {
        self.calls.lock().push("capabilities".into());
        Ok(())
    }

    async fn request_region_state(
        &self,
        region: Region,
        _events: EventSink,
    ) -> Result<(), LocationError> {
        self.calls.lock().push(format!("region_state:{}", region.id));
        Ok(())
    }
}
