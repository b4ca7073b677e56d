//! Glyph and color mapping for field cells

use dropblox_types::{Cell, Color};

use crate::fb::Rgb;

pub const BORDER_GLYPH: &str = "⬛";
pub const EMPTY_GLYPH: &str = "⬜";

/// Emoji glyph of a cell
pub fn glyph(cell: Cell) -> &'static str {
    match cell {
        Some(Color::Y) => "🟨",
        Some(Color::G) => "🟩",
        Some(Color::B) => "🟦",
        Some(Color::R) => "🟥",
        Some(Color::P) => "🟪",
        Some(Color::O) => "🟧",
        Some(Color::W) => "⬜",
        None => EMPTY_GLYPH,
    }
}

/// Single-character rendering for terminals without emoji or color
pub fn plain_char(cell: Cell) -> char {
    match cell {
        Some(color) => color.code(),
        None => '.',
    }
}

pub const BORDER_RGB: Rgb = Rgb::new(10, 10, 10);
pub const EMPTY_RGB: Rgb = Rgb::new(40, 40, 40);

/// Background color used for a cell in ANSI mode
pub fn cell_rgb(cell: Cell) -> Rgb {
    match cell {
        Some(Color::Y) => Rgb::new(250, 220, 40),
        Some(Color::G) => Rgb::new(60, 180, 75),
        Some(Color::B) => Rgb::new(50, 110, 230),
        Some(Color::R) => Rgb::new(220, 50, 50),
        Some(Color::P) => Rgb::new(150, 70, 200),
        Some(Color::O) => Rgb::new(245, 140, 30),
        Some(Color::W) => Rgb::new(235, 235, 235),
        None => EMPTY_RGB,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_has_a_distinct_rgb() {
        let mut seen: Vec<Rgb> = Color::ALL.iter().map(|&c| cell_rgb(Some(c))).collect();
        seen.push(EMPTY_RGB);
        seen.push(BORDER_RGB);
        let total = seen.len();
        seen.sort_by_key(|rgb| (rgb.r, rgb.g, rgb.b));
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn plain_uses_codes() {
        assert_eq!(plain_char(Some(Color::O)), 'O');
        assert_eq!(plain_char(None), '.');
    }
}
