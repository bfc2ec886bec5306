//! Server-facing crate for the FODA dashboard: the score dataset, its loader,
//! process configuration and the server functions the UI calls.

use dioxus::prelude::*;

pub mod config;
pub mod dataset;

pub use config::DashboardConfig;
pub use dataset::{Dataset, DatasetError, Factor, ScoreRecord};

#[cfg(feature = "server")]
mod server;

/// Fetch the score dataset. The server loads the CSV once and serves the cached copy.
#[server]
pub async fn fetch_dataset() -> Result<Dataset, ServerFnError> {
    let dataset = server::shared_dataset().map_err(ServerFnError::new)?;
    Ok(dataset.clone())
}
