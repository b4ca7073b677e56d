//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! in any context (simulation, parsing, rendering).
//!
//! # Color Palette
//!
//! Blocks come from a fixed, closed palette. Every block is a single color and
//! every filled cell on the field carries the color of the block that put it there.
//!
//! | Code | Color  |
//! |------|--------|
//! | `Y`  | Yellow |
//! | `G`  | Green  |
//! | `B`  | Blue   |
//! | `R`  | Red    |
//! | `P`  | Purple |
//! | `O`  | Orange |
//! | `W`  | White  |
//!
//! Empty cells are represented explicitly as `None` (see [`Cell`]); the text
//! formats spell them as [`EMPTY_TOKEN`].
//!
//! # Coordinates
//!
//! Grids are stored bottom row first: row 0 is the floor of the field (or the
//! bottom row of a block's bounding box). `x` grows to the right, `y` grows upward.
//!
//! # Examples
//!
//! ```
//! use dropblox_types::{Cell, Color};
//!
//! let color = Color::from_code("R").unwrap();
//! assert_eq!(color, Color::R);
//! assert_eq!(color.code(), 'R');
//!
//! let cell: Cell = Some(color);
//! assert!(cell.is_some());
//!
//! // Codes are case-sensitive
//! assert_eq!(Color::from_code("r"), None);
//! ```

use std::fmt;

/// Token used by the text formats for an empty cell
pub const EMPTY_TOKEN: &str = "0";

/// Number of colors in the palette
pub const PALETTE_SIZE: usize = 7;

/// A single grid cell: `None` is empty, `Some(color)` is filled
pub type Cell = Option<Color>;

/// The closed color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Y,
    G,
    B,
    R,
    P,
    O,
    W,
}

impl Color {
    /// Every palette color in declaration order
    pub const ALL: [Color; PALETTE_SIZE] = [
        Color::Y,
        Color::G,
        Color::B,
        Color::R,
        Color::P,
        Color::O,
        Color::W,
    ];

    /// Parse a color from its single-letter code
    ///
    /// # Examples
    ///
    /// ```
    /// use dropblox_types::Color;
    ///
    /// assert_eq!(Color::from_code("Y"), Some(Color::Y));
    /// assert_eq!(Color::from_code("W"), Some(Color::W));
    /// assert_eq!(Color::from_code("0"), None);
    /// assert_eq!(Color::from_code("RR"), None);
    /// ```
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "Y" => Some(Color::Y),
            "G" => Some(Color::G),
            "B" => Some(Color::B),
            "R" => Some(Color::R),
            "P" => Some(Color::P),
            "O" => Some(Color::O),
            "W" => Some(Color::W),
            _ => None,
        }
    }

    /// Single-letter code of this color
    pub fn code(&self) -> char {
        match self {
            Color::Y => 'Y',
            Color::G => 'G',
            Color::B => 'B',
            Color::R => 'R',
            Color::P => 'P',
            Color::O => 'O',
            Color::W => 'W',
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Color::Y => "yellow",
            Color::G => "green",
            Color::B => "blue",
            Color::R => "red",
            Color::P => "purple",
            Color::O => "orange",
            Color::W => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parse a grid token from the text formats into a [`Cell`]
///
/// Returns `None` if the token is neither [`EMPTY_TOKEN`] nor a palette code.
///
/// ```
/// use dropblox_types::{parse_cell_token, Color};
///
/// assert_eq!(parse_cell_token("0"), Some(None));
/// assert_eq!(parse_cell_token("G"), Some(Some(Color::G)));
/// assert_eq!(parse_cell_token("X"), None);
/// ```
pub fn parse_cell_token(token: &str) -> Option<Cell> {
    if token == EMPTY_TOKEN {
        return Some(None);
    }
    Color::from_code(token).map(Some)
}
