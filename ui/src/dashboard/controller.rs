//! Filter-driven chart controller.
//!
//! The controller owns the filter state and the current [`ChartSet`]. Every
//! [`FilterEvent`] that changes the filters moves it from `Idle` to
//! `Rendering`, rebuilds all three charts from the injected dataset, notifies
//! subscribers and returns to `Idle`.

use std::fmt;
use std::sync::Arc;

use api::{Dataset, Factor};
use tracing::{debug, warn};

use crate::charts::{ChartLabels, ChartSet, RadarOptions};
use crate::core::filters::FilterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Rendering,
}

/// User interactions with the filter controls.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    ToggleFactor(Factor),
    ToggleIdea(String),
    SetFactors(Vec<Factor>),
    SetIdeas(Vec<String>),
    /// Back to "everything selected".
    Reset,
}

type Listener = Box<dyn FnMut(&ChartSet)>;

pub struct DashboardController {
    dataset: Arc<Dataset>,
    labels: ChartLabels,
    radar: RadarOptions,
    filters: FilterState,
    charts: ChartSet,
    state: ControllerState,
    listeners: Vec<Listener>,
}

impl fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardController")
            .field("filters", &self.filters)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl DashboardController {
    /// Build with explicit labels and radar options; charts for the initial
    /// "all selected" filters are ready on return.
    pub fn with_options(dataset: Arc<Dataset>, labels: ChartLabels, radar: RadarOptions) -> Self {
        let filters = FilterState::all_selected(&dataset);
        let charts = ChartSet::build(&dataset, &filters, &labels, &radar);
        Self {
            dataset,
            labels,
            radar,
            filters,
            charts,
            state: ControllerState::Idle,
            listeners: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Register an observer called with every rebuilt chart set.
    pub fn subscribe(&mut self, listener: impl FnMut(&ChartSet) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply a filter event. Returns true when the charts were rebuilt.
    pub fn handle(&mut self, event: FilterEvent) -> bool {
        if self.state == ControllerState::Rendering {
            warn!(?event, "filter event ignored while rendering");
            return false;
        }

        let before = self.filters.clone();
        match event {
            FilterEvent::ToggleFactor(factor) => self.filters.toggle_factor(factor),
            FilterEvent::ToggleIdea(idea) => self.filters.toggle_idea(&idea),
            FilterEvent::SetFactors(factors) => self.filters.set_factors(factors),
            FilterEvent::SetIdeas(ideas) => self.filters.set_ideas(ideas),
            FilterEvent::Reset => self.filters = FilterState::all_selected(&self.dataset),
        }

        if self.filters == before {
            return false;
        }
        self.render();
        true
    }

    fn render(&mut self) {
        self.state = ControllerState::Rendering;
        debug!(
            factors = self.filters.factors().len(),
            ideas = self.filters.ideas().len(),
            "rebuilding charts"
        );

        self.charts = ChartSet::build(&self.dataset, &self.filters, &self.labels, &self.radar);
        for listener in self.listeners.iter_mut() {
            listener(&self.charts);
        }

        self.state = ControllerState::Idle;
    }
}
