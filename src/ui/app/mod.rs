//! App state and the store that evolves it.

mod state;
mod store;

pub use state::{AppLifecycle, AppState, AuthorizationState, LastKnown, MonitoringState};
pub use store::{
    Action, Dispatcher, LifecycleAction, LifecycleMiddleware, LocationAction, LocationCommand,
    LocationMiddleware, LoggerMiddleware, Middleware, MiddlewareChain, Store, StoreHandle, Toggle,
    lift_input, lift_output, lift_state, reduce,
};
