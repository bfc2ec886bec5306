//! Shared UI crate for the FODA dashboard: aggregation, chart builders,
//! the filter controller and the Dioxus views that render them.

pub mod charts;
pub mod components;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

#[cfg(test)]
mod tests;
