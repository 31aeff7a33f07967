pub mod domain;
pub mod infra;
pub mod ui;

use std::sync::Arc;

use infra::app_config::AppConfig;
use infra::location::LocationService;
use ui::app::{
    AppState, LifecycleMiddleware, LocationMiddleware, LoggerMiddleware, MiddlewareChain, Store,
};

/// Builds the store with the standard middleware order: logger, lifecycle, location.
pub fn start_store(service: Arc<dyn LocationService>) -> Store {
    let chain = MiddlewareChain::new()
        .with(LoggerMiddleware::new())
        .with(LifecycleMiddleware::new())
        .with(LocationMiddleware::new(service));
    Store::start(AppState::empty(), chain)
}

/// Store backed by the simulated location service described by `config`.
pub fn start_simulated_store(config: &AppConfig) -> Store {
    let service = infra::location::SimulatedLocationService::new(config.simulator.clone());
    start_store(Arc::new(service))
}
