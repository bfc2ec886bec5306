//! Shared components: the localized navbar and the dashboard filter controls.

pub mod app_navbar;
mod filters;

pub use app_navbar::AppNavbar;
pub use filters::{FactorChecklist, IdeaPicker};
