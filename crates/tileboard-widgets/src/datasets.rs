//! The fixed figures shown by the stock widgets.
//!
//! There is no data source behind the dashboard; these constants are all the
//! charts ever display.

use ratatui::style::Color;

/// Slice colors, cycled when a dataset has more slices than colors.
pub const PALETTE: [Color; 4] = [
    Color::Rgb(0x00, 0x88, 0xFE),
    Color::Rgb(0x00, 0xC4, 0x9F),
    Color::Rgb(0xFF, 0xBB, 0x28),
    Color::Rgb(0xFF, 0x80, 0x42),
];

/// Palette color for the slice at `index`.
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// One labelled count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Datum {
    pub label: &'static str,
    pub value: u64,
}

const fn datum(label: &'static str, value: u64) -> Datum {
    Datum { label, value }
}

/// Category counts drawn as a pie.
pub type PieData = &'static [Datum];

pub const CLIENT_ACCOUNTS: PieData = &[datum("Connected", 3), datum("Not Connected", 12)];

pub const RISK_ASSESSMENT: PieData = &[
    datum("Failure", 5839),
    datum("Warning", 584),
    datum("Passed", 7334),
];

/// A headline figure with a fill bar and a legend row beneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatData {
    pub total: u64,
    pub noun: &'static str,
    /// Fill of the bar, `0.0..=1.0`.
    pub ratio: f64,
    pub legend: &'static [Datum],
}

pub const REGISTRY_SCAN: StatData = StatData {
    total: 1470,
    noun: "Total vulnerabilities",
    ratio: 0.7,
    legend: &[datum("Critical", 4), datum("High", 382)],
};

pub const IMAGE_SECURITY: StatData = StatData {
    total: 2,
    noun: "Total Images",
    ratio: 0.5,
    legend: &[datum("Critical", 2), datum("High", 2)],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), palette_color(4));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn stat_ratios_are_fractions() {
        for stat in [REGISTRY_SCAN, IMAGE_SECURITY] {
            assert!((0.0..=1.0).contains(&stat.ratio));
        }
    }
}
