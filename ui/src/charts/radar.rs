use api::Factor;

use super::{trace_color, ChartLabels, RadarAxis, RadarChart, RadarPoint, RadarPolygon};
use crate::core::aggregate::ScoreAggregator;

/// Angular order of the radar axes. Differs from the aggregation order.
pub const RADAR_AXES: [Factor; 4] = [
    Factor::Strengths,
    Factor::Opportunities,
    Factor::Threats,
    Factor::Weaknesses,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarOptions {
    /// Fixed display bounds of the radial axis, not derived from the data.
    pub radial_range: (f64, f64),
    pub clockwise: bool,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            radial_range: (0.0, 3.0),
            clockwise: true,
        }
    }
}

/// One closed polygon per selected idea. Unselected factors stay as vertices
/// at zero so every polygon keeps all four corners.
pub fn build_radar(
    agg: &ScoreAggregator<'_>,
    factors: &[Factor],
    ideas: &[String],
    labels: &ChartLabels,
    options: &RadarOptions,
) -> RadarChart {
    let polygons = ideas
        .iter()
        .enumerate()
        .map(|(index, idea)| {
            let profile = agg.scores_for(idea);
            let mut points: Vec<RadarPoint> = RADAR_AXES
                .iter()
                .map(|&factor| RadarPoint {
                    factor,
                    value: if factors.contains(&factor) {
                        profile.get(factor)
                    } else {
                        0.0
                    },
                })
                .collect();
            points.push(points[0]);

            RadarPolygon {
                name: idea.clone(),
                color: trace_color(index).to_string(),
                points,
            }
        })
        .collect();

    RadarChart {
        title: labels.radar_title.clone(),
        axes: RADAR_AXES
            .iter()
            .map(|&factor| RadarAxis {
                factor,
                label: labels.factor(factor).to_string(),
            })
            .collect(),
        radial_range: options.radial_range,
        clockwise: options.clockwise,
        polygons,
        show_legend: true,
    }
}
