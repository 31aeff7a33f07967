use super::Middleware;
use crate::ui::app::state::AppState;
use crate::ui::app::store::action::{Action, LifecycleAction, LocationAction};
use crate::ui::app::store::dispatcher::Dispatcher;

/// Asks for the device capabilities the first time the app becomes active.
#[derive(Debug, Default)]
pub struct LifecycleMiddleware {
    activated: bool,
}

impl LifecycleMiddleware {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Middleware for LifecycleMiddleware {
    fn name(&self) -> &'static str {
        "lifecycle"
    }

    fn handle_action(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) {
        if self.activated {
            return;
        }
        if let Action::Lifecycle(LifecycleAction::DidBecomeActive) = action {
            self.activated = true;
            dispatcher.dispatch(LocationAction::RequestDeviceCapabilities);
        }
    }
}
