#![cfg(test)]
/*!
Theme selector lint for the web build.

Every class the dashboard components emit must keep a rule in the shared
theme (`ui/assets/theme/main.css`). A substring check is enough to catch a
rename that would otherwise only show up as a silently unstyled chart.

When a component class is renamed, update REQUIRED_SELECTORS with it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Dashboard shell
    ".dashboard {",
    ".dashboard__filters",
    ".dashboard__charts",
    ".dashboard__ranked",
    ".dashboard__status",
    ".dashboard__error",
    ".dashboard__meta",
    // Filters
    ".filters {",
    ".filters__label",
    ".filters__check",
    ".filters__chip",
    ".filters__chip--active",
    ".filters__meta",
    // Charts
    ".dashboard-chart {",
    ".dashboard-chart__canvas",
    ".dashboard-chart__title",
    ".dashboard-chart__grid",
    ".dashboard-chart__axis",
    ".dashboard-chart__tick",
    ".dashboard-chart__legend",
    ".dashboard-chart__legend-swatch",
    ".dashboard-chart__placeholder",
    ".dashboard-chart--empty",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn chart_title_and_legend_pair_up() {
    let has_title = THEME_CSS.contains(".dashboard-chart__axis-title");
    let has_item = THEME_CSS.contains(".dashboard-chart__legend-item");
    assert!(
        has_title && has_item,
        "chart sub-selectors missing (axis-title: {has_title}, legend-item: {has_item})"
    );
}
