use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity constraint used to select which beacons to range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeaconConstraint {
    pub uuid: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<u16>,
}

impl BeaconConstraint {
    pub fn new(uuid: Uuid) -> Self {
        Self {
            uuid,
            major: None,
            minor: None,
        }
    }

    pub fn with_major(mut self, major: u16) -> Self {
        self.major = Some(major);
        self
    }

    pub fn with_minor(mut self, minor: u16) -> Self {
        self.minor = Some(minor);
        self
    }

    /// Stable identifier of the constraint, e.g. `UUID:major:minor`.
    pub fn id(&self) -> String {
        let mut id = self.uuid.to_string().to_uppercase();
        if let Some(major) = self.major {
            id.push_str(&format!(":{major}"));
            if let Some(minor) = self.minor {
                id.push_str(&format!(":{minor}"));
            }
        }
        id
    }
}

/// One ranged beacon and its received signal strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconReading {
    pub id: String,
    /// Received signal strength indicator, in dBm.
    pub rssi: i32,
}
