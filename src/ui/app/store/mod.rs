//! Reducer-style state updates + middleware bridging to the location service.
//!
//! A single task owns the state. Actions from views and from middleware all go
//! through one inbox, so they are reduced one at a time in arrival order.

mod action;
mod command;
mod dispatcher;
mod middleware;
mod reducer;
mod runtime;

pub use action::{Action, LifecycleAction, LocationAction, Toggle};
pub use command::LocationCommand;
pub use dispatcher::Dispatcher;
pub use middleware::{
    LifecycleMiddleware, LocationMiddleware, LoggerMiddleware, Middleware, MiddlewareChain,
    lift_input, lift_output, lift_state,
};
pub use reducer::reduce;

use super::state::AppState;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// How many published states a slow subscriber may fall behind before it lags.
const UPDATE_CAPACITY: usize = 256;

struct Shared {
    state: RwLock<Arc<AppState>>,
    updates: broadcast::Sender<Arc<AppState>>,
}

/// Owner of the state loop. Create one at startup and hand out [`StoreHandle`]s.
pub struct Store {
    handle: StoreHandle,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

/// Cloneable access to the store: read state, subscribe, dispatch.
#[derive(Clone)]
pub struct StoreHandle {
    dispatcher: Dispatcher,
    shared: Arc<Shared>,
}

impl Store {
    /// Attaches the middleware and spawns the state loop on the current tokio runtime.
    pub fn start(initial: AppState, mut chain: MiddlewareChain) -> Self {
        let (dispatcher, inbox) = Dispatcher::channel();
        let (updates, _) = broadcast::channel(UPDATE_CAPACITY);
        let shared = Arc::new(Shared {
            state: RwLock::new(Arc::new(initial)),
            updates,
        });

        log::debug!("store starting with middleware: {}", chain.names().join(", "));
        chain.attach(&dispatcher);

        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_loop(
            chain,
            inbox,
            dispatcher.clone(),
            shared.clone(),
            cancel.clone(),
        ));

        Self {
            handle: StoreHandle { dispatcher, shared },
            cancel,
            task: Some(task),
        }
    }

    pub fn handle(&self) -> StoreHandle {
        self.handle.clone()
    }

    /// Stops accepting actions, reduces whatever is already queued, detaches the
    /// middleware and waits for the loop.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take()
            && let Err(err) = task.await
        {
            log::error!("store loop panicked: {err}");
        }
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl StoreHandle {
    /// Queues an action. Never blocks; safe from any thread.
    pub fn dispatch(&self, action: impl Into<Action>) {
        self.dispatcher.dispatch(action);
    }

    /// Snapshot of the latest state.
    pub fn state(&self) -> Arc<AppState> {
        self.shared.state.read().clone()
    }

    /// Receives the state after every reduced action, changed or not.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<AppState>> {
        self.shared.updates.subscribe()
    }
}

async fn run_loop(
    mut chain: MiddlewareChain,
    mut inbox: mpsc::UnboundedReceiver<Action>,
    dispatcher: Dispatcher,
    shared: Arc<Shared>,
    cancel: CancellationToken,
) {
    loop {
        let action = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            action = inbox.recv() => match action {
                Some(action) => action,
                None => break,
            },
        };
        process(&mut chain, &dispatcher, &shared, action);
    }

    inbox.close();
    while let Some(action) = inbox.recv().await {
        process(&mut chain, &dispatcher, &shared, action);
    }
    chain.detach().await;
    log::debug!("store loop stopped");
}

fn process(chain: &mut MiddlewareChain, dispatcher: &Dispatcher, shared: &Shared, action: Action) {
    let current = shared.state.read().clone();
    chain.handle_action(&action, &current, dispatcher);

    let next = Arc::new(reduce(&current, &action));
    chain.after_reduce(&action, &current, &next);

    *shared.state.write() = next.clone();
    // Err only means nobody is subscribed right now.
    let _ = shared.updates.send(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    async fn next_state(rx: &mut broadcast::Receiver<Arc<AppState>>) -> Arc<AppState> {
        timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out waiting for state")
            .expect("store closed")
    }

    #[tokio::test]
    async fn test_dispatch_reduces_and_publishes() {
        let store = Store::start(AppState::empty(), MiddlewareChain::new());
        let handle = store.handle();
        let mut updates = handle.subscribe();

        handle.dispatch(LocationAction::ToggleHeadingUpdates(true));
        let state = next_state(&mut updates).await;
        assert!(state.monitoring.heading);
        assert!(handle.state().monitoring.heading);

        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_no_op_actions_are_still_published() {
        let store = Store::start(AppState::empty(), MiddlewareChain::new());
        let handle = store.handle();
        let mut updates = handle.subscribe();

        handle.dispatch(LocationAction::RequestPosition);
        let state = next_state(&mut updates).await;
        assert_eq!(*state, AppState::empty());

        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_actions_are_reduced_in_dispatch_order() {
        let store = Store::start(AppState::empty(), MiddlewareChain::new());
        let handle = store.handle();
        let mut updates = handle.subscribe();

        for always in [true, false, true] {
            handle.dispatch(LocationAction::ToggleAuthorizationType(always));
        }
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(next_state(&mut updates).await.authorization.requested_type);
        }
        use crate::domain::AuthorizationType::{Always, WhenInUse};
        assert_eq!(seen, vec![Always, WhenInUse, Always]);

        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_dispatch_from_other_threads_is_serialized() {
        let store = Store::start(AppState::empty(), MiddlewareChain::new());
        let handle = store.handle();
        let mut updates = handle.subscribe();

        let threads: Vec<_> = (0..4)
            .map(|_| {
                let handle = handle.clone();
                std::thread::spawn(move || {
                    handle.dispatch(LocationAction::ToggleVisitMonitoring(true));
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }

        for _ in 0..4 {
            assert!(next_state(&mut updates).await.monitoring.visits);
        }
        store.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_drains_queued_actions() {
        let store = Store::start(AppState::empty(), MiddlewareChain::new());
        let handle = store.handle();

        handle.dispatch(LocationAction::ToggleLocationServices(true));
        handle.dispatch(LocationAction::ToggleHeadingUpdates(true));
        store.shutdown().await;

        let state = handle.state();
        assert!(state.monitoring.location);
        assert!(state.monitoring.heading);

        // Dropped with a warning, state unchanged.
        handle.dispatch(LocationAction::ToggleLocationServices(false));
        assert!(handle.state().monitoring.location);
    }

    struct Journal(Arc<parking_lot::Mutex<Vec<String>>>);

    #[async_trait::async_trait]
    impl Middleware for Journal {
        fn name(&self) -> &'static str {
            "journal"
        }

        fn handle_action(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) {
            self.0.lock().push(action.name().to_string());
        }

        async fn detach(&mut self) {
            self.0.lock().push("detach".into());
        }
    }

    #[tokio::test]
    async fn test_shutdown_detaches_middleware_after_draining() {
        let journal = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let chain = MiddlewareChain::new().with(Journal(journal.clone()));
        let store = Store::start(AppState::empty(), chain);
        let handle = store.handle();

        handle.dispatch(LocationAction::RequestPosition);
        handle.dispatch(LocationAction::ToggleHeadingUpdates(true));
        store.shutdown().await;

        assert_eq!(
            *journal.lock(),
            vec![
                "location/request_position",
                "location/toggle_heading_updates",
                "detach",
            ]
        );
    }
}
