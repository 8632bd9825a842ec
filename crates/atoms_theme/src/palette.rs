//! Fallback categorical palette
//!
//! Used when a series has no party association: charts cycle through these
//! in order.

/// Default 11-colour categorical palette
pub const DEFAULT_PALETTE: [&str; 11] = [
    "#CC0A11", "#046DA1", "#f28e2c", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab", "#000000",
];

/// Colour for a 0-based series index, cycling past the palette's end
pub fn series_color(index: usize) -> &'static str {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_past_the_end() {
        assert_eq!(series_color(0), "#CC0A11");
        assert_eq!(series_color(10), "#000000");
        assert_eq!(series_color(11), "#CC0A11");
    }
}
