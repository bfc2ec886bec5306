//! Chart geometry.
//!
//! Turns chart specs into SVG-space coordinates so the components only have to
//! emit elements. Everything here is pure and unit-tested without a DOM.

use std::f64::consts::PI;

use super::{BarChart, RadarChart};
use crate::core::format;

/// SVG canvas size and the margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Frame {
    pub fn bar() -> Self {
        Self {
            width: 720.0,
            height: 420.0,
            margin_left: 64.0,
            margin_right: 24.0,
            margin_top: 56.0,
            margin_bottom: 84.0,
        }
    }

    pub fn radar() -> Self {
        Self {
            width: 640.0,
            height: 560.0,
            margin_left: 96.0,
            margin_right: 96.0,
            margin_top: 72.0,
            margin_bottom: 48.0,
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }
}

/// A gridline position (y for bars, radius for radar rings) with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTick {
    pub pos: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTick {
    pub x: f64,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub series: String,
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarGeometry {
    pub rects: Vec<BarRect>,
    pub value_ticks: Vec<ValueTick>,
    pub categories: Vec<CategoryTick>,
    /// y of the zero line.
    pub baseline: f64,
}

/// Lay out a bar chart. Positive values stack upwards from zero and negative
/// values stack downwards, each in series order.
pub fn bar_geometry(chart: &BarChart, frame: &Frame) -> BarGeometry {
    let count = chart.categories.len();
    if count == 0 {
        return BarGeometry::default();
    }

    let mut positive = vec![0.0_f64; count];
    let mut negative = vec![0.0_f64; count];
    let mut segments = Vec::new();

    for series in &chart.series {
        for (key, &value) in series.categories.iter().zip(&series.values) {
            let Some(idx) = chart.categories.iter().position(|c| &c.key == key) else {
                continue;
            };
            let (start, end) = if value >= 0.0 {
                let start = positive[idx];
                positive[idx] += value;
                (start, positive[idx])
            } else {
                let start = negative[idx];
                negative[idx] += value;
                (start, negative[idx])
            };
            segments.push((idx, start, end, series, value));
        }
    }

    let data_max = positive.iter().copied().fold(0.0, f64::max);
    let data_min = negative.iter().copied().fold(0.0, f64::min);
    let ticks = nice_ticks(data_min, data_max, 6);
    let domain_min = ticks.first().copied().unwrap_or(data_min).min(data_min);
    let domain_max = ticks.last().copied().unwrap_or(data_max).max(data_max);
    let span = (domain_max - domain_min).max(f64::EPSILON);

    let to_y = |value: f64| frame.plot_top() + (domain_max - value) / span * frame.plot_height();

    let slot = frame.plot_width() / count as f64;
    let bar_width = slot * 0.7;
    let center = |idx: usize| frame.plot_left() + slot * (idx as f64 + 0.5);

    let rects = segments
        .into_iter()
        .map(|(idx, start, end, series, value)| {
            let (y_a, y_b) = (to_y(start), to_y(end));
            BarRect {
                x: center(idx) - bar_width / 2.0,
                y: y_a.min(y_b),
                width: bar_width,
                height: (y_a - y_b).abs(),
                color: series.color.clone(),
                series: series.name.clone(),
                category: chart.categories[idx].key.clone(),
                value,
            }
        })
        .collect();

    BarGeometry {
        rects,
        value_ticks: ticks
            .iter()
            .map(|&tick| ValueTick {
                pos: to_y(tick),
                label: format::format_score(tick),
            })
            .collect(),
        categories: chart
            .categories
            .iter()
            .enumerate()
            .map(|(idx, category)| CategoryTick {
                x: center(idx),
                lines: category.lines.clone(),
            })
            .collect(),
        baseline: to_y(0.0),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSpoke {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    /// SVG `text-anchor` for the label.
    pub anchor: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarShape {
    pub name: String,
    pub color: String,
    pub vertices: Vec<(f64, f64)>,
}

impl RadarShape {
    /// Vertices in SVG `points` attribute syntax.
    pub fn points_attr(&self) -> String {
        self.vertices
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub spokes: Vec<RadarSpoke>,
    /// Ring radii with their value labels.
    pub rings: Vec<ValueTick>,
    pub shapes: Vec<RadarShape>,
}

/// Lay out a radar chart. The first axis points up; later axes follow the
/// chart's direction. Values are clamped to the radial range.
pub fn radar_geometry(chart: &RadarChart, frame: &Frame) -> RadarGeometry {
    let axes = chart.axes.len();
    let cx = frame.plot_left() + frame.plot_width() / 2.0;
    let cy = frame.plot_top() + frame.plot_height() / 2.0;
    let radius = frame.plot_width().min(frame.plot_height()) / 2.0;
    if axes == 0 {
        return RadarGeometry {
            cx,
            cy,
            radius,
            ..RadarGeometry::default()
        };
    }

    let direction = if chart.clockwise { 1.0 } else { -1.0 };
    let angle = |axis: usize| -PI / 2.0 + direction * axis as f64 * 2.0 * PI / axes as f64;
    let (low, high) = chart.radial_range;
    let span = high - low;
    let scale = |value: f64| {
        if span <= 0.0 {
            0.0
        } else {
            ((value - low) / span).clamp(0.0, 1.0) * radius
        }
    };
    let polar = |axis: usize, r: f64| {
        let theta = angle(axis);
        (cx + r * theta.cos(), cy + r * theta.sin())
    };

    let spokes = chart
        .axes
        .iter()
        .enumerate()
        .map(|(idx, axis)| {
            let (x, y) = polar(idx, radius);
            let (label_x, label_y) = polar(idx, radius + 18.0);
            let cos = angle(idx).cos();
            let anchor = if cos.abs() < 0.3 {
                "middle"
            } else if cos > 0.0 {
                "start"
            } else {
                "end"
            };
            RadarSpoke {
                x,
                y,
                label: axis.label.clone(),
                label_x,
                label_y,
                anchor,
            }
        })
        .collect();

    let rings = nice_ticks(low, high, 5)
        .into_iter()
        .filter(|&tick| tick > low && tick <= high)
        .map(|tick| ValueTick {
            pos: scale(tick),
            label: format::format_score(tick),
        })
        .collect();

    let shapes = chart
        .polygons
        .iter()
        .map(|polygon| RadarShape {
            name: polygon.name.clone(),
            color: polygon.color.clone(),
            vertices: polygon
                .points
                .iter()
                .enumerate()
                .map(|(idx, point)| {
                    let axis = chart
                        .axes
                        .iter()
                        .position(|a| a.factor == point.factor)
                        .unwrap_or(idx % axes);
                    polar(axis, scale(point.value))
                })
                .collect(),
        })
        .collect();

    RadarGeometry {
        cx,
        cy,
        radius,
        spokes,
        rings,
        shapes,
    }
}

/// Evenly spaced "round" tick values covering `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let (min, max) = if max > min { (min, max) } else { (min, min + 1.0) };
    let range = nice_number(max - min, false);
    let step = nice_number(range / target.saturating_sub(1).max(1) as f64, true);
    let low = (min / step).floor() * step;
    let high = (max / step).ceil() * step;
    let steps = ((high - low) / step).round() as usize;

    (0..=steps)
        .map(|k| {
            let value = low + k as f64 * step;
            if value.abs() < step * 1e-9 {
                0.0
            } else {
                value
            }
        })
        .collect()
}

fn nice_number(value: f64, round: bool) -> f64 {
    let exponent = value.log10().floor();
    let fraction = value / 10f64.powf(exponent);
    let nice = if round {
        match fraction {
            f if f < 1.5 => 1.0,
            f if f < 3.0 => 2.0,
            f if f < 7.0 => 5.0,
            _ => 10.0,
        }
    } else {
        match fraction {
            f if f <= 1.0 => 1.0,
            f if f <= 2.0 => 2.0,
            f if f <= 5.0 => 5.0,
            _ => 10.0,
        }
    };
    nice * 10f64.powf(exponent)
}
