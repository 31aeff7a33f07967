//! UI-facing layer: the store and the per-section projections views bind to.

pub mod app;
pub mod views;
