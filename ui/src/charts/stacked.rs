use api::Factor;

use super::{factor_color, BarChart, BarSeries, Category, ChartLabels};
use crate::core::aggregate::{IdeaProfile, ScoreAggregator};

/// One series per selected factor, stacked across the selected ideas. Series
/// order (and so stacking order) follows `factors`.
pub fn build_stacked_bar(
    agg: &ScoreAggregator<'_>,
    factors: &[Factor],
    ideas: &[String],
    labels: &ChartLabels,
) -> BarChart {
    let profiles: Vec<IdeaProfile> = ideas.iter().map(|idea| agg.scores_for(idea)).collect();

    let series = factors
        .iter()
        .map(|&factor| BarSeries {
            name: labels.factor(factor).to_string(),
            color: factor_color(factor).to_string(),
            categories: ideas.to_vec(),
            values: profiles.iter().map(|profile| profile.get(factor)).collect(),
        })
        .collect();

    BarChart {
        title: labels.stacked_title.clone(),
        x_title: labels.idea_axis.clone(),
        y_title: labels.score_axis.clone(),
        categories: ideas.iter().map(|idea| Category::new(idea)).collect(),
        series,
        show_legend: true,
    }
}
