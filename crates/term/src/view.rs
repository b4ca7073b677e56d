//! Field and block views
//!
//! Text views frame the field with a one-cell border and print the top row
//! first, so the floor is at the bottom of the output.

use anyhow::{Context, Result};

use dropblox_core::{Block, Field};
use dropblox_types::Cell;

use crate::fb::{FrameBuffer, StyledCell};
use crate::glyph::{cell_rgb, glyph, plain_char, BORDER_GLYPH, BORDER_RGB};

/// How cells are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colored square emoji
    #[default]
    Emoji,
    /// Two-column cells with ANSI background colors
    Ansi,
    /// Color code letters, `.` for empty and `#` for the border
    Plain,
}

impl ColorMode {
    /// Parse a mode name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "emoji" => Some(ColorMode::Emoji),
            "ansi" => Some(ColorMode::Ansi),
            "plain" => Some(ColorMode::Plain),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Emoji => "emoji",
            ColorMode::Ansi => "ansi",
            ColorMode::Plain => "plain",
        }
    }
}

fn push_cell(out: &mut String, cell: Cell, mode: ColorMode) {
    match mode {
        ColorMode::Plain => out.push(plain_char(cell)),
        ColorMode::Emoji | ColorMode::Ansi => out.push_str(glyph(cell)),
    }
}

fn framed_rows<'a>(width: usize, rows: impl Iterator<Item = &'a [Cell]>, mode: ColorMode) -> String {
    let border = match mode {
        ColorMode::Plain => "#",
        ColorMode::Emoji | ColorMode::Ansi => BORDER_GLYPH,
    };

    let mut out = border.repeat(width + 2);
    out.push('\n');
    for row in rows {
        out.push_str(border);
        for &cell in row {
            push_cell(&mut out, cell, mode);
        }
        out.push_str(border);
        out.push('\n');
    }
    out.push_str(&border.repeat(width + 2));
    out
}

/// Field framed by a border, top row first (no trailing newline)
///
/// ```
/// use dropblox_core::Field;
/// use dropblox_term::{render_field_text, ColorMode};
///
/// let field = Field::new(2, 1).unwrap();
/// assert_eq!(render_field_text(&field, ColorMode::Plain), "####\n#..#\n####");
/// ```
pub fn render_field_text(field: &Field, mode: ColorMode) -> String {
    let rows: Vec<&[Cell]> = field.rows().collect();
    framed_rows(field.width(), rows.into_iter().rev(), mode)
}

/// `Block:` header followed by the block rows, top row first
pub fn render_block_text(block: &Block, mode: ColorMode) -> String {
    let mut out = String::from("Block:\n");
    let rows: Vec<&[Cell]> = block.rows().collect();
    for row in rows.into_iter().rev() {
        for &cell in row {
            push_cell(&mut out, cell, mode);
        }
        out.push('\n');
    }
    out
}

/// Renders a field into a framebuffer, two terminal columns per cell
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldView;

impl FieldView {
    pub const CELL_COLUMNS: u16 = 2;

    /// Framebuffer size needed for a field, border included
    ///
    /// `None` when the field is too large for a `u16` framebuffer.
    pub fn size(field: &Field) -> Option<(u16, u16)> {
        let w = field
            .width()
            .checked_add(2)?
            .checked_mul(Self::CELL_COLUMNS as usize)?;
        let h = field.height().checked_add(2)?;
        Some((u16::try_from(w).ok()?, u16::try_from(h).ok()?))
    }

    pub fn render(&self, field: &Field) -> Result<FrameBuffer> {
        let (w, h) = Self::size(field).with_context(|| {
            format!(
                "field {}x{} is too large to draw in a terminal",
                field.width(),
                field.height()
            )
        })?;
        let mut fb = FrameBuffer::new(w, h);

        let border = StyledCell {
            bg: BORDER_RGB,
            ..StyledCell::default()
        };
        fb.fill_run(0, 0, w, border);
        fb.fill_run(0, h - 1, w, border);

        for (i, row) in field.rows().enumerate() {
            // Row 0 (floor) goes just above the bottom border.
            let y = h - 2 - i as u16;
            fb.fill_run(0, y, Self::CELL_COLUMNS, border);
            for (x, &cell) in row.iter().enumerate() {
                let cx = (x as u16 + 1) * Self::CELL_COLUMNS;
                fb.fill_run(
                    cx,
                    y,
                    Self::CELL_COLUMNS,
                    StyledCell {
                        bg: cell_rgb(cell),
                        ..StyledCell::default()
                    },
                );
            }
            fb.fill_run(w - Self::CELL_COLUMNS, y, Self::CELL_COLUMNS, border);
        }
        Ok(fb)
    }
}
