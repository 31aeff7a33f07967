use super::Middleware;
use crate::ui::app::state::AppState;
use crate::ui::app::store::action::Action;
use crate::ui::app::store::dispatcher::Dispatcher;

const TARGET: &str = "store";

/// Logs every action and which parts of the state it changed.
#[derive(Debug, Default)]
pub struct LoggerMiddleware;

impl LoggerMiddleware {
    pub fn new() -> Self {
        Self
    }
}

fn changed_fields(previous: &AppState, next: &AppState) -> Vec<&'static str> {
    let mut changed = Vec::new();
    if previous.lifecycle != next.lifecycle {
        changed.push("lifecycle");
    }
    if previous.authorization != next.authorization {
        changed.push("authorization");
    }
    if previous.capabilities != next.capabilities {
        changed.push("capabilities");
    }
    if previous.monitoring != next.monitoring {
        changed.push("monitoring");
    }
    if previous.last_known != next.last_known {
        changed.push("last_known");
    }
    if previous.error != next.error {
        changed.push("error");
    }
    changed
}

impl Middleware for LoggerMiddleware {
    fn name(&self) -> &'static str {
        "logger"
    }

    fn handle_action(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) {
        log::debug!(target: TARGET, "action {}", action.name());
        log::trace!(target: TARGET, "{action:?}");
    }

    fn after_reduce(&mut self, action: &Action, previous: &AppState, next: &AppState) {
        let changed = changed_fields(previous, next);
        if changed.is_empty() {
            log::trace!(target: TARGET, "{} left the state unchanged", action.name());
        } else {
            log::debug!(
                target: TARGET,
                "{} changed {}",
                action.name(),
                changed.join(", ")
            );
        }
    }
}
