use super::Middleware;
use crate::domain::Capability;
use crate::infra::location::{
    EventSink, LocationContext, LocationEvent, LocationService, MonitoringTarget,
};
use crate::ui::app::state::AppState;
use crate::ui::app::store::action::{Action, LocationAction, Toggle};
use crate::ui::app::store::command::LocationCommand;
use crate::ui::app::store::dispatcher::Dispatcher;
use crate::ui::app::store::runtime::{self, QueuedCommand};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Bridges location actions to a [`LocationService`] and its events back to actions.
///
/// Commands are executed one at a time, in the order their actions were dispatched.
pub struct LocationMiddleware {
    service: Arc<dyn LocationService>,
    commands: Option<mpsc::UnboundedSender<QueuedCommand>>,
    events: EventSink,
    pending: Option<PendingTasks>,
    running: Option<RunningTasks>,
}

/// Receivers waiting for the store to start.
struct PendingTasks {
    commands: mpsc::UnboundedReceiver<QueuedCommand>,
    events: mpsc::UnboundedReceiver<LocationEvent>,
}

struct RunningTasks {
    worker: JoinHandle<()>,
    forwarder: JoinHandle<()>,
}

impl LocationMiddleware {
    pub fn new(service: Arc<dyn LocationService>) -> Self {
        let (commands, commands_rx) = mpsc::unbounded_channel();
        let (events, events_rx) = EventSink::channel();
        Self {
            service,
            commands: Some(commands),
            events,
            pending: Some(PendingTasks {
                commands: commands_rx,
                events: events_rx,
            }),
            running: None,
        }
    }

    /// Lifts one service event into the store.
    pub fn handle_event(event: LocationEvent, dispatcher: &Dispatcher) {
        dispatcher.dispatch(lift_output(event));
    }
}

#[async_trait]
impl Middleware for LocationMiddleware {
    fn name(&self) -> &'static str {
        "location"
    }

    fn attach(&mut self, dispatcher: &Dispatcher) {
        let Some(pending) = self.pending.take() else {
            log::warn!(target: "location", "middleware attached twice, ignoring");
            return;
        };

        let worker = tokio::spawn(runtime::run_commands(
            self.service.clone(),
            pending.commands,
            self.events.clone(),
        ));

        let dispatcher = dispatcher.clone();
        let mut events = pending.events;
        let forwarder = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                Self::handle_event(event, &dispatcher);
            }
            log::debug!(target: "location", "event stream closed");
        });

        self.running = Some(RunningTasks { worker, forwarder });
    }

    fn handle_action(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) {
        let Some(command) = lift_input(action) else {
            return;
        };
        let queued = QueuedCommand {
            command,
            context: lift_state(state),
        };
        let sent = self
            .commands
            .as_ref()
            .is_some_and(|commands| commands.send(queued).is_ok());
        if !sent {
            log::warn!(target: "location", "command worker is gone, dropping {}", action.name());
        }
    }

    /// Finishes queued commands, then stops every session the service may still run.
    async fn detach(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };

        // Nothing can be dispatched any more; late events are dropped at the sink.
        running.forwarder.abort();

        self.commands = None;
        if let Err(err) = running.worker.await {
            log::error!(target: "location", "command worker panicked: {err}");
        }

        for capability in Capability::ALL {
            if let Err(err) = self
                .service
                .stop_monitoring(capability, self.events.clone())
                .await
            {
                log::warn!(target: "location", "failed to stop {capability}: {err}");
            }
        }
        log::debug!(target: "location", "detached from {}", self.service.id());
    }
}

/// Maps a store action to the service command it asks for, if any.
pub fn lift_input(action: &Action) -> Option<LocationCommand> {
    let Action::Location(action) = action else {
        return None;
    };

    let toggle = |enabled: bool, target: MonitoringTarget| {
        if enabled {
            LocationCommand::StartMonitoring(target)
        } else {
            LocationCommand::StopMonitoring(target.capability())
        }
    };

    let command = match action {
        LocationAction::ToggleLocationServices(enabled) => {
            toggle(*enabled, MonitoringTarget::Location)
        }
        LocationAction::ToggleSignificantLocationChange(enabled) => {
            toggle(*enabled, MonitoringTarget::SignificantLocationChange)
        }
        LocationAction::ToggleHeadingUpdates(enabled) => {
            toggle(*enabled, MonitoringTarget::Heading)
        }
        LocationAction::ToggleVisitMonitoring(enabled) => {
            toggle(*enabled, MonitoringTarget::Visits)
        }
        LocationAction::ToggleRegionMonitoring(Toggle::On(region)) => {
            LocationCommand::StartMonitoring(MonitoringTarget::Region(region.clone()))
        }
        LocationAction::ToggleRegionMonitoring(Toggle::Off) => {
            LocationCommand::StopMonitoring(Capability::RegionMonitoring)
        }
        LocationAction::ToggleBeaconRanging(Toggle::On(constraint)) => {
            LocationCommand::StartMonitoring(MonitoringTarget::Beacon(*constraint))
        }
        LocationAction::ToggleBeaconRanging(Toggle::Off) => {
            LocationCommand::StopMonitoring(Capability::BeaconRanging)
        }
        LocationAction::RequestPosition => LocationCommand::RequestPosition,
        LocationAction::RequestAuthorizationType => LocationCommand::RequestAuthorization,
        LocationAction::RequestDeviceCapabilities => LocationCommand::RequestDeviceCapabilities,
        LocationAction::RequestRegionState(region) => {
            LocationCommand::RequestRegionState(region.clone())
        }
        // The authorization type is read through `lift_state` when it is requested.
        LocationAction::ToggleAuthorizationType(_)
        | LocationAction::AuthorizationStatusChanged { .. }
        | LocationAction::PositionUpdated(_)
        | LocationAction::HeadingUpdated(_)
        | LocationAction::RegionEventReceived(_)
        | LocationAction::BeaconRangingUpdated(_)
        | LocationAction::VisitDetected(_)
        | LocationAction::DeviceCapabilitiesReported(_)
        | LocationAction::ErrorOccurred(_) => return None,
    };
    Some(command)
}

/// Maps a service event to the store action recording it.
pub fn lift_output(event: LocationEvent) -> Action {
    let action = match event {
        LocationEvent::AuthorizationStatus { status, accuracy } => {
            LocationAction::AuthorizationStatusChanged { status, accuracy }
        }
        LocationEvent::Position(position) => LocationAction::PositionUpdated(position),
        LocationEvent::Heading(heading) => LocationAction::HeadingUpdated(heading),
        LocationEvent::Region(event) => LocationAction::RegionEventReceived(event),
        LocationEvent::BeaconRanging(beacons) => LocationAction::BeaconRangingUpdated(beacons),
        LocationEvent::Visit(visit) => LocationAction::VisitDetected(visit),
        LocationEvent::DeviceCapabilities(capabilities) => {
            LocationAction::DeviceCapabilitiesReported(capabilities)
        }
        LocationEvent::Error(message) => LocationAction::ErrorOccurred(message),
    };
    Action::Location(action)
}

/// The part of the state the service binding needs to decide how to behave.
pub fn lift_state(state: &AppState) -> LocationContext {
    LocationContext {
        authorization_status: state.authorization.status,
        authorization_accuracy: state.authorization.accuracy,
        authorization_type: state.authorization.requested_type,
    }
}
