use dioxus::prelude::*;

use super::layout::{bar_geometry, radar_geometry, Frame};
use super::{BarChart, RadarChart};

#[component]
pub fn BarChartPanel(chart: BarChart, empty_label: String) -> Element {
    let frame = Frame::bar();
    if chart.is_empty() {
        return rsx! { EmptyChart { frame, label: empty_label } };
    }

    let geometry = bar_geometry(&chart, &frame);
    let legend: Vec<(String, String)> = chart
        .series
        .iter()
        .map(|series| (series.name.clone(), series.color.clone()))
        .collect();
    let mid_x = frame.plot_left() + frame.plot_width() / 2.0;
    let mid_y = frame.plot_top() + frame.plot_height() / 2.0;
    let y_title_transform = format!("rotate(-90 16 {mid_y:.1})");

    rsx! {
        figure { class: "dashboard-chart dashboard-chart--bar",
            svg {
                class: "dashboard-chart__canvas",
                view_box: "0 0 {frame.width} {frame.height}",
                role: "img",
                "aria-label": "{chart.title}",

                text {
                    class: "dashboard-chart__title",
                    x: frame.width / 2.0,
                    y: 28.0,
                    text_anchor: "middle",
                    "{chart.title}"
                }

                for (idx, tick) in geometry.value_ticks.iter().enumerate() {
                    g { key: "tick-{idx}",
                        line {
                            class: "dashboard-chart__grid",
                            x1: frame.plot_left(),
                            x2: frame.plot_right(),
                            y1: tick.pos,
                            y2: tick.pos,
                        }
                        text {
                            class: "dashboard-chart__tick",
                            x: frame.plot_left() - 8.0,
                            y: tick.pos,
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{tick.label}"
                        }
                    }
                }

                for (idx, bar) in geometry.rects.iter().enumerate() {
                    rect {
                        key: "bar-{idx}",
                        class: "dashboard-chart__bar",
                        x: bar.x,
                        y: bar.y,
                        width: bar.width,
                        height: bar.height,
                        fill: "{bar.color}",
                        "data-series": "{bar.series}",
                        "data-category": "{bar.category}",
                    }
                }

                line {
                    class: "dashboard-chart__axis",
                    x1: frame.plot_left(),
                    x2: frame.plot_right(),
                    y1: geometry.baseline,
                    y2: geometry.baseline,
                }

                for (idx, category) in geometry.categories.iter().enumerate() {
                    text {
                        key: "cat-{idx}",
                        class: "dashboard-chart__tick dashboard-chart__tick--category",
                        x: category.x,
                        y: frame.plot_bottom() + 20.0,
                        text_anchor: "middle",
                        for (line_idx, line) in category.lines.iter().enumerate() {
                            tspan {
                                x: category.x,
                                dy: if line_idx == 0 { "0" } else { "1.15em" },
                                "{line}"
                            }
                        }
                    }
                }

                text {
                    class: "dashboard-chart__axis-title",
                    x: mid_x,
                    y: frame.height - 10.0,
                    text_anchor: "middle",
                    "{chart.x_title}"
                }
                text {
                    class: "dashboard-chart__axis-title",
                    x: 16.0,
                    y: mid_y,
                    text_anchor: "middle",
                    transform: "{y_title_transform}",
                    "{chart.y_title}"
                }
            }

            if chart.show_legend {
                ChartLegend { entries: legend }
            }
        }
    }
}

#[component]
pub fn RadarChartPanel(chart: RadarChart, empty_label: String) -> Element {
    let frame = Frame::radar();
    if chart.is_empty() {
        return rsx! { EmptyChart { frame, label: empty_label } };
    }

    let geometry = radar_geometry(&chart, &frame);
    let legend: Vec<(String, String)> = chart
        .polygons
        .iter()
        .map(|polygon| (polygon.name.clone(), polygon.color.clone()))
        .collect();

    rsx! {
        figure { class: "dashboard-chart dashboard-chart--radar",
            svg {
                class: "dashboard-chart__canvas",
                view_box: "0 0 {frame.width} {frame.height}",
                role: "img",
                "aria-label": "{chart.title}",

                text {
                    class: "dashboard-chart__title",
                    x: frame.width / 2.0,
                    y: 28.0,
                    text_anchor: "middle",
                    "{chart.title}"
                }

                for (idx, ring) in geometry.rings.iter().enumerate() {
                    g { key: "ring-{idx}",
                        circle {
                            class: "dashboard-chart__grid",
                            cx: geometry.cx,
                            cy: geometry.cy,
                            r: ring.pos,
                            fill: "none",
                        }
                        text {
                            class: "dashboard-chart__tick",
                            x: geometry.cx + 4.0,
                            y: geometry.cy - ring.pos,
                            dominant_baseline: "hanging",
                            "{ring.label}"
                        }
                    }
                }

                for (idx, spoke) in geometry.spokes.iter().enumerate() {
                    g { key: "spoke-{idx}",
                        line {
                            class: "dashboard-chart__axis",
                            x1: geometry.cx,
                            y1: geometry.cy,
                            x2: spoke.x,
                            y2: spoke.y,
                        }
                        text {
                            class: "dashboard-chart__tick dashboard-chart__tick--category",
                            x: spoke.label_x,
                            y: spoke.label_y,
                            text_anchor: spoke.anchor,
                            dominant_baseline: "middle",
                            "{spoke.label}"
                        }
                    }
                }

                for (idx, shape) in geometry.shapes.iter().enumerate() {
                    polygon {
                        key: "shape-{idx}",
                        class: "dashboard-chart__area",
                        points: shape.points_attr(),
                        fill: "{shape.color}",
                        fill_opacity: 0.25,
                        stroke: "{shape.color}",
                        stroke_width: 2.0,
                        "data-series": "{shape.name}",
                    }
                }
            }

            if chart.show_legend {
                ChartLegend { entries: legend }
            }
        }
    }
}

#[component]
fn ChartLegend(entries: Vec<(String, String)>) -> Element {
    rsx! {
        ul { class: "dashboard-chart__legend",
            for (name, color) in entries.into_iter() {
                li { key: "{name}", class: "dashboard-chart__legend-item",
                    span {
                        class: "dashboard-chart__legend-swatch",
                        style: "background: {color};",
                    }
                    span { "{name}" }
                }
            }
        }
    }
}

#[component]
fn EmptyChart(frame: Frame, label: String) -> Element {
    rsx! {
        figure { class: "dashboard-chart dashboard-chart--empty",
            svg {
                class: "dashboard-chart__canvas",
                view_box: "0 0 {frame.width} {frame.height}",
                role: "img",
            }
            p { class: "dashboard-chart__placeholder", "{label}" }
        }
    }
}
