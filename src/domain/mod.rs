//! Value types of the location domain.
//! Plain data shared by the state, the actions and the location service boundary.

pub mod authorization;
pub mod beacon;
pub mod capability;
pub mod error;
pub mod geo;

pub use authorization::*;
pub use beacon::*;
pub use capability::*;
pub use error::*;
pub use geo::*;
