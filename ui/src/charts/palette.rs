//! Chart colours.

use api::Factor;

/// Ranked-chart colours, assigned by rank position. Cycles past the end.
pub const RANK_PALETTE: [&str; 6] = ["blue", "green", "red", "purple", "orange", "pink"];

/// Default trace colourway for per-idea traces (radar polygons).
const COLORWAY: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

pub fn palette_color(rank: usize) -> &'static str {
    RANK_PALETTE[rank % RANK_PALETTE.len()]
}

pub fn trace_color(index: usize) -> &'static str {
    COLORWAY[index % COLORWAY.len()]
}

/// Stable colour per factor, independent of selection order.
pub fn factor_color(factor: Factor) -> &'static str {
    COLORWAY[factor.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_palette_cycles() {
        assert_eq!(palette_color(0), "blue");
        assert_eq!(palette_color(5), "pink");
        assert_eq!(palette_color(6), "blue");
        assert_eq!(palette_color(13), "green");
    }

    #[test]
    fn factor_colours_are_distinct() {
        let colours: std::collections::HashSet<_> =
            Factor::ALL.iter().map(|f| factor_color(*f)).collect();
        assert_eq!(colours.len(), 4);
    }
}
