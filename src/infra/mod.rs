//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-facing pieces: configuration on disk and the
//! location service boundary.

pub mod app_config;
pub mod location;
