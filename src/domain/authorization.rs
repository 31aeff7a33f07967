use serde::{Deserialize, Serialize};

/// Authorization granted by the user for location services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    #[default]
    NotDetermined,
    Denied,
    Restricted,
    AuthorizedWhenInUse,
    AuthorizedAlways,
}

impl AuthorizationStatus {
    /// Whether any kind of location access has been granted.
    pub fn is_authorized(self) -> bool {
        matches!(
            self,
            AuthorizationStatus::AuthorizedWhenInUse | AuthorizationStatus::AuthorizedAlways
        )
    }
}

/// Precision of the location data the user agreed to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationAccuracy {
    Full,
    Reduced,
    #[default]
    None,
}

/// Which authorization the app asks for when prompting the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationType {
    #[default]
    WhenInUse,
    Always,
}

impl From<bool> for AuthorizationType {
    /// `true` maps to [`AuthorizationType::Always`].
    fn from(always: bool) -> Self {
        if always {
            AuthorizationType::Always
        } else {
            AuthorizationType::WhenInUse
        }
    }
}
