use crate::domain::{Capability, Region};
use crate::infra::location::MonitoringTarget;

/// Calls the location middleware makes on the location service.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationCommand {
    StartMonitoring(MonitoringTarget),
    /// The service tracks the running session, so no target is needed.
    StopMonitoring(Capability),
    RequestPosition,
    /// Ask for the authorization type currently selected in the state.
    RequestAuthorization,
    RequestDeviceCapabilities,
    RequestRegionState(Region),
}

impl LocationCommand {
    pub fn name(&self) -> &'static str {
        match self {
            LocationCommand::StartMonitoring(_) => "start_monitoring",
            LocationCommand::StopMonitoring(_) => "stop_monitoring",
            LocationCommand::RequestPosition => "request_position",
            LocationCommand::RequestAuthorization => "request_authorization",
            LocationCommand::RequestDeviceCapabilities => "request_device_capabilities",
            LocationCommand::RequestRegionState(_) => "request_region_state",
        }
    }
}
