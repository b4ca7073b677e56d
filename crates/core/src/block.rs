//! Block module - immutable shape + color descriptor
//!
//! A block is a `width` x `height` bounding box of cells, stored row-major with
//! row 0 as the bottom row. Cells are either empty or the block's color, so holed
//! and irregular shapes are expressed with empty cells inside the box.
//!
//! Blocks can only be obtained through the validating constructors; a block with
//! cells that disagree with its declared dimensions is never observable.

use dropblox_types::{Cell, Color};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: usize,
    width: usize,
    height: usize,
    color: Color,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Block {
    /// Build a block from rows, bottom row first
    ///
    /// ```
    /// use dropblox_core::Block;
    /// use dropblox_types::Color;
    ///
    /// let r = Some(Color::R);
    /// // An L shape: bottom row full, top row only on the left
    /// let block = Block::new(0, 2, 2, Color::R, vec![vec![r, r], vec![r, None]]).unwrap();
    /// assert!(block.is_filled(1, 0));
    /// assert!(!block.is_filled(1, 1));
    ///
    /// // Row count disagrees with height
    /// assert!(Block::new(1, 2, 3, Color::R, vec![vec![r, r]]).is_err());
    /// ```
    pub fn new(id: usize, width: usize, height: usize, color: Color, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let mismatch = |detail: String| Error::ShapeMismatch {
            id,
            width,
            height,
            detail,
        };

        if rows.len() != height {
            return Err(mismatch(format!("{} rows", rows.len())));
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(mismatch(format!("row {} has {} cells", row, cells.len())));
        }

        Self::from_flat(id, width, height, color, rows.into_iter().flatten().collect())
    }

    /// Build a block from row-major cells, bottom row first
    pub fn from_flat(id: usize, width: usize, height: usize, color: Color, cells: Vec<Cell>) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(cells.len()) {
            return Err(Error::ShapeMismatch {
                id,
                width,
                height,
                detail: format!("{} cells", cells.len()),
            });
        }
        if let Some(found) = cells.iter().flatten().find(|&&c| c != color) {
            return Err(Error::ColorMismatch {
                id,
                expected: color,
                found: *found,
            });
        }

        Ok(Self {
            id,
            width,
            height,
            color,
            cells,
        })
    }

    /// A fully filled rectangular block
    pub fn solid(id: usize, width: usize, height: usize, color: Color) -> Result<Self> {
        let len = width.checked_mul(height).ok_or_else(|| Error::ShapeMismatch {
            id,
            width,
            height,
            detail: "cell count overflows".to_string(),
        })?;
        Self::from_flat(id, width, height, color, vec![Some(color); len])
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Cell at (col, row) of the bounding box, `None` when empty or out of the box
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[row * self.width + col]
    }

    #[inline]
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        self.cell(col, row).is_some()
    }

    /// One row of the bounding box, `row` 0 is the bottom
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Rows bottom to top
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Number of non-empty cells
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Cell = Some(Color::R);

    #[test]
    fn from_flat_is_row_major_bottom_first() {
        let block = Block::from_flat(4, 3, 2, Color::R, vec![R, R, R, None, R, None]).unwrap();

        assert_eq!(block.id(), 4);
        assert_eq!(block.row(0), &[R, R, R]);
        assert_eq!(block.row(1), &[None, R, None]);
        assert_eq!(block.filled_cells(), 4);
        assert_eq!(block.rows().count(), 2);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let err = Block::new(7, 2, 1, Color::R, vec![vec![R, R, R]]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { id: 7, width: 2, height: 1, .. }));

        assert!(Block::from_flat(0, 2, 2, Color::R, vec![R; 3]).is_err());
        assert!(Block::from_flat(0, 0, 0, Color::R, vec![]).is_err());
    }

    #[test]
    fn overflowing_shape_is_a_mismatch() {
        let width = usize::MAX / 2 + 1;
        let err = Block::from_flat(3, width, 2, Color::R, vec![R, R]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { id: 3, height: 2, .. }));
        assert!(Block::solid(4, usize::MAX, 2, Color::R).is_err());
    }

    #[test]
    fn foreign_color_is_rejected() {
        let err = Block::from_flat(1, 2, 1, Color::R, vec![R, Some(Color::B)]).unwrap_err();
        assert_eq!(
            err,
            Error::ColorMismatch {
                id: 1,
                expected: Color::R,
                found: Color::B
            }
        );
    }

    #[test]
    fn cell_outside_box_is_empty() {
        let block = Block::solid(0, 2, 2, Color::G).unwrap();
        assert_eq!(block.cell(1, 1), Some(Color::G));
        assert_eq!(block.cell(2, 0), None);
        assert_eq!(block.cell(0, 2), None);
    }
}
