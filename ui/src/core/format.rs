//! Formatting helpers for chart labels and values.

/// Tick label for an idea: every `-` becomes a line break.
pub fn tick_label(idea: &str) -> String {
    idea.replace('-', "\n")
}

/// Tick label split into display lines.
pub fn tick_lines(idea: &str) -> Vec<String> {
    tick_label(idea).lines().map(str::to_string).collect()
}

/// Scores print without a trailing `.0` when they are whole numbers.
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
