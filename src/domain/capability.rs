use serde::{Deserialize, Serialize};
use std::fmt;

/// A location-subsystem feature that can be started and stopped on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    LocationMonitoring,
    SignificantLocationChange,
    HeadingUpdates,
    RegionMonitoring,
    BeaconRanging,
    VisitMonitoring,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::LocationMonitoring,
        Capability::SignificantLocationChange,
        Capability::HeadingUpdates,
        Capability::RegionMonitoring,
        Capability::BeaconRanging,
        Capability::VisitMonitoring,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::LocationMonitoring => "location_monitoring",
            Capability::SignificantLocationChange => "significant_location_change",
            Capability::HeadingUpdates => "heading_updates",
            Capability::RegionMonitoring => "region_monitoring",
            Capability::BeaconRanging => "beacon_ranging",
            Capability::VisitMonitoring => "visit_monitoring",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the device reports it is able to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    #[serde(default)]
    pub location_available: bool,
    #[serde(default)]
    pub significant_location_change: bool,
    #[serde(default)]
    pub region_monitoring: bool,
    #[serde(default)]
    pub ranging: bool,
    #[serde(default)]
    pub heading: bool,
}

impl DeviceCapabilities {
    /// A device supporting every capability.
    pub fn all() -> Self {
        Self {
            location_available: true,
            significant_location_change: true,
            region_monitoring: true,
            ranging: true,
            heading: true,
        }
    }

    /// Whether `capability` can be started on this device.
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::LocationMonitoring | Capability::VisitMonitoring => self.location_available,
            Capability::SignificantLocationChange => self.significant_location_change,
            Capability::HeadingUpdates => self.heading,
            Capability::RegionMonitoring => self.region_monitoring,
            Capability::BeaconRanging => self.ranging,
        }
    }
}
