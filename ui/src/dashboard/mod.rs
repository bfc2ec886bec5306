//! Reactive dashboard: filter state, chart rebuilds and the panels that show them.

pub mod controller;
mod view;

pub use controller::{ControllerState, DashboardController, FilterEvent};
pub use view::DashboardPanels;
