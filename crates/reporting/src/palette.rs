//! Fixed chart palettes. Order matters: renderers depend on stable
//! color assignment by category index.

/// Bar chart palette
pub const BAR_COLORS: [&str; 5] = ["#83bd01", "#FFC846", "#E1553F", "#5899DA", "#8979FF"];

/// Stacked bar series palette
pub const STACKED_COLORS: [&str; 5] = ["#84BD00", "#FFC846", "#8979FF", "#E1553F", "#5899DA"];

/// Pie-with-total segment palette
pub const PIE_TOTAL_COLORS: [&str; 5] = ["#84BD00", "#E1553F", "#5899DA", "#FFC846", "#8979FF"];

/// Pie segment palette
pub const PIE_COLORS: [&str; 6] = [
    "#84BD00", "#E1553F", "#2D7FF9", "#FFA500", "#8E44AD", "#16A085",
];

/// Dual line chart pair (first/second series)
pub const DUAL_LINE_COLORS: [&str; 2] = ["#5899DA", "#FFC846"];

/// Color for a series/segment index, cycling through the palette.
pub fn color_at(palette: &[&str], index: usize) -> String {
    palette[index % palette.len()].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_cycle_by_index() {
        assert_eq!(color_at(&BAR_COLORS, 0), "#83bd01");
        assert_eq!(color_at(&BAR_COLORS, 5), "#83bd01");
        assert_eq!(color_at(&BAR_COLORS, 6), "#FFC846");
    }
}
