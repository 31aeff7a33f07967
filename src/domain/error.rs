//! Errors reported by the location subsystem.
//!
//! These never propagate as `Err` through the store: the adapter binding turns
//! them into an error event and their display text becomes the state's error
//! message.

use super::Capability;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("{0} is not available on this device")]
    Unavailable(Capability),

    #[error("location services are not authorized")]
    NotAuthorized,
}
