//! Per-section projections of the store.
//!
//! Each section sees a display-ready slice of the state and a narrow set of
//! actions it may send. Formatting lives here so the reducer never deals with
//! presentation.

pub mod authorization;
pub mod beacon_ranging;
pub mod device_capabilities;
pub mod format;
pub mod heading_updates;
pub mod information;
pub mod location_monitoring;
pub mod region_monitoring;
pub mod slc_monitoring;
pub mod visit_monitoring;

pub use authorization::AuthorizationSection;
pub use beacon_ranging::BeaconRangingSection;
pub use device_capabilities::DeviceCapabilitiesSection;
pub use heading_updates::HeadingUpdatesSection;
pub use information::InformationSection;
pub use location_monitoring::LocationMonitoringSection;
pub use region_monitoring::RegionMonitoringSection;
pub use slc_monitoring::SlcMonitoringSection;
pub use visit_monitoring::VisitMonitoringSection;

use crate::infra::app_config::AppConfig;
use crate::ui::app::{Action, AppState, StoreHandle};
use futures::Stream;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

/// A titled value, as shown next to its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labeled<T> {
    pub title: String,
    pub value: T,
}

impl<T> Labeled<T> {
    pub fn new(title: impl Into<String>, value: T) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

impl Labeled<String> {
    pub fn text(&self) -> String {
        format!("{}{}", self.title, self.value)
    }
}

pub trait Projection: Send + Sync {
    type State: Clone + PartialEq + Send + 'static;
    type Action;

    fn state_map(&self, state: &AppState) -> Self::State;

    /// `None` when the section action has no effect on the store.
    fn action_map(&self, action: Self::Action) -> Option<Action>;
}

/// A projection bound to a store.
pub struct SectionView<P> {
    projection: Arc<P>,
    store: StoreHandle,
}

impl<P> Clone for SectionView<P> {
    fn clone(&self) -> Self {
        Self {
            projection: self.projection.clone(),
            store: self.store.clone(),
        }
    }
}

impl<P: Projection + 'static> SectionView<P> {
    pub fn new(store: StoreHandle, projection: P) -> Self {
        Self {
            projection: Arc::new(projection),
            store,
        }
    }

    pub fn state(&self) -> P::State {
        self.projection.state_map(&self.store.state())
    }

    pub fn dispatch(&self, action: P::Action) {
        if let Some(action) = self.projection.action_map(action) {
            self.store.dispatch(action);
        }
    }

    /// Re-derived section state after every store update.
    ///
    /// A subscriber that falls behind skips ahead to the latest state. The stream
    /// ends once the store and every handle to it are dropped.
    pub fn updates(&self) -> impl Stream<Item = P::State> + Send + 'static {
        let receiver = self.store.subscribe();
        let projection = self.projection.clone();
        let store = self.store.clone();

        futures::stream::unfold(receiver, move |mut receiver| {
            let projection = projection.clone();
            let store = store.clone();
            async move {
                let state = match receiver.recv().await {
                    Ok(state) => state,
                    Err(RecvError::Lagged(skipped)) => {
                        log::debug!("section lagged behind by {skipped} updates");
                        store.state()
                    }
                    Err(RecvError::Closed) => return None,
                };
                Some((projection.state_map(&state), receiver))
            }
        })
    }
}

/// Every section of the app, bound to one store.
#[derive(Clone)]
pub struct Sections {
    pub authorization: SectionView<AuthorizationSection>,
    pub information: SectionView<InformationSection>,
    pub location_monitoring: SectionView<LocationMonitoringSection>,
    pub slc_monitoring: SectionView<SlcMonitoringSection>,
    pub heading_updates: SectionView<HeadingUpdatesSection>,
    pub region_monitoring: SectionView<RegionMonitoringSection>,
    pub beacon_ranging: SectionView<BeaconRangingSection>,
    pub visit_monitoring: SectionView<VisitMonitoringSection>,
    pub device_capabilities: SectionView<DeviceCapabilitiesSection>,
}

impl Sections {
    pub fn new(store: &StoreHandle, config: &AppConfig) -> Self {
        Self {
            authorization: SectionView::new(store.clone(), AuthorizationSection),
            information: SectionView::new(store.clone(), InformationSection),
            location_monitoring: SectionView::new(store.clone(), LocationMonitoringSection),
            slc_monitoring: SectionView::new(store.clone(), SlcMonitoringSection),
            heading_updates: SectionView::new(store.clone(), HeadingUpdatesSection),
            region_monitoring: SectionView::new(
                store.clone(),
                RegionMonitoringSection::new(config.region.clone()),
            ),
            beacon_ranging: SectionView::new(
                store.clone(),
                BeaconRangingSection::new(config.beacon),
            ),
            visit_monitoring: SectionView::new(store.clone(), VisitMonitoringSection),
            device_capabilities: SectionView::new(store.clone(), DeviceCapabilitiesSection),
        }
    }
}
