//! Core orchestration logic: state, controller, projections.

pub mod config;
pub mod controller;
pub mod format;
pub mod log;
pub mod model;
pub mod projection;
pub mod source;
pub mod state;

// Re-export main types for cleaner imports
pub use controller::DashboardController;
pub use source::{DashboardDataSource, FetchError, FetchResult};
pub use state::{LoadStatus, ViewState};
