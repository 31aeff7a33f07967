//! Executes location commands against the service.


use super::command::LocationCommand;
use crate::domain::LocationError;
use crate::infra::location::{EventSink, LocationContext, LocationEvent, LocationService};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug)]
pub struct QueuedCommand {
    pub command: LocationCommand,
    pub context: LocationContext,
}

pub async fn run(
    service: &dyn LocationService,
    command: LocationCommand,
    context: LocationContext,
    events: EventSink,
) -> Result<(), LocationError> {
    match command {
        LocationCommand::StartMonitoring(target) => {
            service.start_monitoring(target, context, events).await
        }
        LocationCommand::StopMonitoring(capability) => {
            service.stop_monitoring(capability, events).await
        }
        LocationCommand::RequestPosition => service.request_position(context, events).await,
        LocationCommand::RequestAuthorization => {
            service.request_authorization(context, events).await
        }
        LocationCommand::RequestDeviceCapabilities => {
            service.request_device_capabilities(events).await
        }
        LocationCommand::RequestRegionState(region) => {
            service.request_region_state(region, events).await
        }
    }
}

/// Drains the command queue in order. Failures are reported back as error events.
pub async fn run_commands(
    service: Arc<dyn LocationService>,
    mut commands: mpsc::UnboundedReceiver<QueuedCommand>,
    events: EventSink,
) {
    while let Some(QueuedCommand { command, context }) = commands.recv().await {
        let name = command.name();
        log::debug!(target: "location", "{} -> {}", name, service.id());
        if let Err(err) = run(service.as_ref(), command, context, events.clone()).await {
            log::warn!(target: "location", "{name} failed: {err}");
            events.send(LocationEvent::Error(err.to_string()));
        }
    }
    log::debug!(target: "location", "command queue closed");
}
