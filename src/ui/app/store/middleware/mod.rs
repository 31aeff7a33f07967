//! Middleware sees every action before the reducer and bridges to services the
//! reducer must not touch.
//!
//! Units run in insertion order. Anything a unit dispatches goes to the back of the
//! store's inbox and later enters the whole chain from the start.

mod lifecycle;
mod location;
mod logger;

#[cfg(test)]
mod tests;

pub use lifecycle::LifecycleMiddleware;
pub use location::{LocationMiddleware, lift_input, lift_output, lift_state};
pub use logger::LoggerMiddleware;

use super::action::Action;
use super::dispatcher::Dispatcher;
use crate::ui::app::state::AppState;
use async_trait::async_trait;

#[async_trait]
pub trait Middleware: Send {
    fn name(&self) -> &'static str;

    /// Called once when the store starts, before the first action.
    fn attach(&mut self, _dispatcher: &Dispatcher) {}

    /// Called for every action before it reaches the reducer.
    fn handle_action(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher);

    /// Called for every action once the reducer produced the next state.
    fn after_reduce(&mut self, _action: &Action, _previous: &AppState, _next: &AppState) {}

    /// Called once after the store drained its inbox for the last time. Background
    /// work started in `attach` must be finished or stopped when this returns.
    async fn detach(&mut self) {}
}

#[derive(Default)]
pub struct MiddlewareChain {
    units: Vec<Box<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, middleware: impl Middleware + 'static) -> Self {
        self.push(middleware);
        self
    }

    pub fn push(&mut self, middleware: impl Middleware + 'static) {
        self.units.push(Box::new(middleware));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.units.iter().map(|unit| unit.name()).collect()
    }

    pub fn attach(&mut self, dispatcher: &Dispatcher) {
        for unit in &mut self.units {
            log::debug!("attaching {} middleware", unit.name());
            unit.attach(dispatcher);
        }
    }

    pub fn handle_action(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) {
        for unit in &mut self.units {
            unit.handle_action(action, state, dispatcher);
        }
    }

    pub fn after_reduce(&mut self, action: &Action, previous: &AppState, next: &AppState) {
        for unit in &mut self.units {
            unit.after_reduce(action, previous, next);
        }
    }

    pub async fn detach(&mut self) {
        for unit in &mut self.units {
            log::debug!("detaching {} middleware", unit.name());
            unit.detach().await;
        }
    }
}
