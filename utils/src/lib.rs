//! Shared utilities for the florin economy.

pub mod ids;
pub mod logging;

pub use ids::random_event_id;
pub use logging::init_tracing;
