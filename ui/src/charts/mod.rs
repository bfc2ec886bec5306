//! Chart specifications and the builders that produce them.
//!
//! Builders are pure functions of (aggregator, selected factors, selected
//! ideas). A [`ChartSet`] is rebuilt from scratch on every filter change and is
//! never patched in place.

mod layout;
mod palette;
mod radar;
mod ranked;
mod stacked;
mod view;

pub use layout::{
    bar_geometry, nice_ticks, radar_geometry, BarGeometry, BarRect, CategoryTick, Frame,
    RadarGeometry, RadarShape, RadarSpoke, ValueTick,
};
pub use palette::{factor_color, palette_color, trace_color, RANK_PALETTE};
pub use radar::{build_radar, RadarOptions, RADAR_AXES};
pub use ranked::{build_ranked_bar, rank_ideas, RankedIdea};
pub use stacked::build_stacked_bar;
pub use view::{BarChartPanel, RadarChartPanel};

use api::{Dataset, Factor};

use crate::core::{aggregate::ScoreAggregator, filters::FilterState, format};

/// Display strings injected into the builders so they stay locale-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub stacked_title: String,
    pub radar_title: String,
    pub ranked_title: String,
    pub idea_axis: String,
    pub score_axis: String,
    /// Indexed by [`Factor::index`].
    pub factors: [String; 4],
}

impl ChartLabels {
    pub fn factor(&self, factor: Factor) -> &str {
        &self.factors[factor.index()]
    }
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            stacked_title: "FODA analysis: business idea comparison".into(),
            radar_title: "FODA analysis: business idea profiles".into(),
            ranked_title: "Best business idea".into(),
            idea_axis: "Business idea".into(),
            score_axis: "Score".into(),
            factors: [
                "Strengths".into(),
                "Weaknesses".into(),
                "Opportunities".into(),
                "Threats".into(),
            ],
        }
    }
}

/// An x-axis category: the idea key plus its display lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub key: String,
    pub lines: Vec<String>,
}

impl Category {
    pub fn new(idea: &str) -> Self {
        Self {
            key: idea.to_string(),
            lines: format::tick_lines(idea),
        }
    }
}

/// One bar trace. `categories[i]` carries `values[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

/// Bar chart whose series stack per category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub categories: Vec<Category>,
    pub series: Vec<BarSeries>,
    pub show_legend: bool,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() || self.categories.is_empty()
    }

    /// Sum of every series value per category, in category order.
    pub fn category_totals(&self) -> Vec<f64> {
        self.categories
            .iter()
            .map(|category| {
                self.series
                    .iter()
                    .flat_map(|series| series.categories.iter().zip(&series.values))
                    .filter(|(key, _)| **key == category.key)
                    .map(|(_, value)| *value)
                    .sum()
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    pub factor: Factor,
    pub value: f64,
}

/// A closed polygon: the last point repeats the first.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarPolygon {
    pub name: String,
    pub color: String,
    pub points: Vec<RadarPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxis {
    pub factor: Factor,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarChart {
    pub title: String,
    pub axes: Vec<RadarAxis>,
    pub radial_range: (f64, f64),
    pub clockwise: bool,
    pub polygons: Vec<RadarPolygon>,
    pub show_legend: bool,
}

impl RadarChart {
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// The three dashboard charts, built together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    pub stacked: BarChart,
    pub radar: RadarChart,
    pub ranked: BarChart,
}

impl ChartSet {
    /// All three charts empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stacked.is_empty() && self.radar.is_empty() && self.ranked.is_empty()
    }

    /// Build every chart for the current filters. No selected factors yields
    /// three empty charts.
    pub fn build(
        dataset: &Dataset,
        filters: &FilterState,
        labels: &ChartLabels,
        radar: &RadarOptions,
    ) -> Self {
        if filters.factors().is_empty() {
            return Self::empty();
        }

        let agg = ScoreAggregator::new(dataset);
        Self {
            stacked: build_stacked_bar(&agg, filters.factors(), filters.ideas(), labels),
            radar: build_radar(&agg, filters.factors(), filters.ideas(), labels, radar),
            ranked: build_ranked_bar(&agg, filters.ideas(), labels),
        }
    }
}
