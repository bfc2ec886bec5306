use super::{palette_color, BarChart, BarSeries, Category, ChartLabels};
use crate::core::aggregate::ScoreAggregator;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedIdea {
    pub idea: String,
    pub score: f64,
}

/// Ideas by composite score, best first. Ties keep their input order.
///
/// The composite always uses all four factors; the factor checklist does not
/// apply here.
pub fn rank_ideas(agg: &ScoreAggregator<'_>, ideas: &[String]) -> Vec<RankedIdea> {
    let mut ranked: Vec<RankedIdea> = ideas
        .iter()
        .map(|idea| RankedIdea {
            idea: idea.clone(),
            score: agg.composite_score(idea),
        })
        .collect();
    // `sort_by` is stable.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// One single-bar series per idea, coloured by rank.
pub fn build_ranked_bar(
    agg: &ScoreAggregator<'_>,
    ideas: &[String],
    labels: &ChartLabels,
) -> BarChart {
    let ranked = rank_ideas(agg, ideas);

    let categories = ranked.iter().map(|entry| Category::new(&entry.idea)).collect();
    let series = ranked
        .into_iter()
        .enumerate()
        .map(|(rank, entry)| BarSeries {
            name: entry.idea.clone(),
            color: palette_color(rank).to_string(),
            categories: vec![entry.idea],
            values: vec![entry.score],
        })
        .collect();

    BarChart {
        title: labels.ranked_title.clone(),
        x_title: labels.idea_axis.clone(),
        y_title: labels.score_axis.clone(),
        categories,
        series,
        show_legend: false,
    }
}
