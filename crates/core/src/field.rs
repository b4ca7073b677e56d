//! Field module - the playing grid blocks are dropped into
//!
//! The field is a `width` x `height` grid where each cell is empty or holds the
//! color of the block that filled it. Uses a flat vector in row-major order
//! (`y * width + x`) with row 0 as the floor.
//!
//! Alongside the grid the field keeps its drop history (block ids and x positions
//! in drop order), which is what gets written back out as a solution file.
//!
//! Coordinates passed in from solutions are signed: a negative or oversized `x`
//! is not a caller bug, it is a block that does not fit.

use std::collections::HashSet;

use log::{debug, trace};

use dropblox_types::Cell;

use crate::block::Block;
use crate::error::{Error, Result};
use crate::rewards::RewardTable;
use crate::solution::Solution;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    dropped_ids: Vec<usize>,
    dropped_positions: Vec<i64>,
    /// Membership index over `dropped_ids`
    dropped_lookup: HashSet<usize>,
}

impl Field {
    /// Create a new empty field
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![None; len],
            dropped_ids: Vec::new(),
            dropped_positions: Vec::new(),
            dropped_lookup: HashSet::new(),
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// One row of the grid, row 0 is the floor
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Rows bottom to top
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn dropped_ids(&self) -> &[usize] {
        &self.dropped_ids
    }

    pub fn dropped_positions(&self) -> &[i64] {
        &self.dropped_positions
    }

    pub fn is_dropped(&self, id: usize) -> bool {
        self.dropped_lookup.contains(&id)
    }

    /// Drop history as a replayable solution
    pub fn drop_history(&self) -> Solution {
        Solution::from_pairs(
            self.dropped_ids
                .iter()
                .map(|&id| id as i64)
                .zip(self.dropped_positions.iter().copied()),
        )
    }

    /// Drop history in solution text format (`"{id} {x}\n"` per drop)
    pub fn history_text(&self) -> String {
        self.drop_history().to_string()
    }

    /// Empty the grid and forget the drop history
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.dropped_ids.clear();
        self.dropped_positions.clear();
        self.dropped_lookup.clear();
    }

    /// Check if the block fits with the lower-left corner of its bounding box on (x, y)
    ///
    /// Only filled-over-filled collides; empty block cells may overlay filled
    /// field cells and vice versa.
    pub fn fit(&self, block: &Block, x: i64, y: i64) -> bool {
        // Widths are bounded by the cell count, so these casts are lossless.
        let (width, height) = (self.width as i64, self.height as i64);
        if x < 0
            || y < 0
            || x > width - block.width() as i64
            || y > height - block.height() as i64
        {
            return false;
        }

        let (x, y) = (x as usize, y as usize);
        for row in 0..block.height() {
            let field_row = self.row(y + row);
            for col in 0..block.width() {
                if block.is_filled(col, row) && field_row[x + col].is_some() {
                    return false;
                }
            }
        }
        true
    }

    /// Write the block's filled cells into the grid at (x, y)
    ///
    /// Empty block cells never overwrite existing field content. The caller must
    /// have checked [`Field::fit`] for this position; no bounds checking is done.
    pub fn update(&mut self, block: &Block, x: usize, y: usize) {
        debug_assert!(x + block.width() <= self.width && y + block.height() <= self.height);

        for row in 0..block.height() {
            let start = (y + row) * self.width + x;
            for (col, cell) in block.row(row).iter().enumerate() {
                if cell.is_some() {
                    self.cells[start + col] = *cell;
                }
            }
        }
    }

    /// Gravity search: where would the block come to rest when released at x
    ///
    /// Starts with the bounding box touching the top of the field and moves down
    /// while the block still fits. Fails with [`Error::DoesNotFit`] if the block
    /// does not fit even at the top.
    pub fn resting_y(&self, block: &Block, x: i64) -> Result<i64> {
        let mut y = self.height as i64 - block.height() as i64;
        let mut fits_somewhere = false;
        while self.fit(block, x, y) {
            fits_somewhere = true;
            y -= 1;
        }

        if !fits_somewhere {
            return Err(Error::DoesNotFit { id: block.id(), x });
        }
        Ok(y + 1)
    }

    /// Drop the block with its left edge at x and let it settle
    ///
    /// Returns the y of the bottom of the block's bounding box once it rests.
    pub fn drop_block(&mut self, block: &Block, x: i64) -> Result<usize> {
        if self.is_dropped(block.id()) {
            return Err(Error::AlreadyDropped { id: block.id() });
        }

        let y = self.resting_y(block, x)? as usize;
        self.update(block, x as usize, y);

        self.dropped_ids.push(block.id());
        self.dropped_positions.push(x);
        self.dropped_lookup.insert(block.id());

        debug!("dropped block {} at x={} resting at y={}", block.id(), x, y);
        Ok(y)
    }

    /// Replay a whole solution
    ///
    /// The solution is validated before anything is dropped. After that, the
    /// first failing drop aborts the replay and the drops already applied stay
    /// on the field.
    pub fn drop_blocks(&mut self, blocks: &[Block], solution: &Solution) -> Result<()> {
        let mut seen = HashSet::with_capacity(solution.len());
        if let Some(&id) = solution.block_ids().iter().find(|&&id| !seen.insert(id)) {
            return Err(Error::DuplicateBlockUse { id });
        }
        if let Some(&id) = solution
            .block_ids()
            .iter()
            .find(|&&id| id < 0 || id >= blocks.len() as i64)
        {
            return Err(Error::InvalidBlockId {
                id,
                available: blocks.len(),
            });
        }

        debug!("replaying {} drops", solution.len());
        for (step, (id, x)) in solution.iter().enumerate() {
            if let Err(e) = self.drop_block(&blocks[id as usize], x) {
                debug!("replay aborted at step {}: {}", step, e);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Rows the block would fall from the top of the field before coming to rest
    pub fn drop_distance(&self, block: &Block, x: i64) -> Result<usize> {
        let y = self.resting_y(block, x)?;
        Ok((self.height as i64 - y - block.height() as i64) as usize)
    }

    /// Whether [`Field::drop_block`] would succeed, without touching the field
    pub fn does_block_fit(&self, block: &Block, x: i64) -> bool {
        !self.is_dropped(block.id()) && self.resting_y(block, x).is_ok()
    }

    /// Score a single row
    ///
    /// An empty row scores 0. Otherwise filled cells add their color's points and
    /// empty cells subtract 1. A full row of one color is multiplied by that
    /// color's multiplier.
    ///
    /// Arithmetic is checked: a result outside the i64 range is
    /// [`Error::ScoreOverflow`].
    pub fn score_row(row: &[Cell], rewards: &RewardTable) -> Result<i64> {
        if row.iter().all(|cell| cell.is_none()) {
            return Ok(0);
        }

        let mut score: i64 = 0;
        for cell in row {
            let delta = match cell {
                Some(color) => rewards.points(*color)?,
                None => -1,
            };
            score = score.checked_add(delta).ok_or(Error::ScoreOverflow)?;
        }

        if let Some(first) = row[0] {
            if row.iter().all(|cell| *cell == Some(first)) {
                score = score
                    .checked_mul(rewards.multiplier(first)?)
                    .ok_or(Error::ScoreOverflow)?;
            }
        }
        Ok(score)
    }

    /// Total score over every stored row
    pub fn score(&self, rewards: &RewardTable) -> Result<i64> {
        let mut total: i64 = 0;
        for (y, row) in self.rows().enumerate() {
            let row_score = Self::score_row(row, rewards)?;
            trace!("row {} scores {}", y, row_score);
            total = total.checked_add(row_score).ok_or(Error::ScoreOverflow)?;
        }
        Ok(total)
    }

    /// Empty cells with a filled cell somewhere above them in the same column
    pub fn dead_cells(&self) -> usize {
        let mut dead = 0;
        for x in 0..self.width {
            let top = (0..self.height)
                .rev()
                .find(|&y| self.cells[y * self.width + x].is_some());
            if let Some(top) = top {
                dead += (0..top)
                    .filter(|&y| self.cells[y * self.width + x].is_none())
                    .count();
            }
        }
        dead
    }

    /// Count full rows inside the border frame
    ///
    /// The outermost rows and columns are left out; fields narrower or lower
    /// than 3 cells have no inner rows.
    pub fn num_filled_rows(&self) -> usize {
        if self.width < 3 || self.height < 3 {
            return 0;
        }
        (1..self.height - 1)
            .filter(|&y| self.row(y)[1..self.width - 1].iter().all(|c| c.is_some()))
            .count()
    }

    /// Create from rows (bottom row first) for testing
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        assert!(rows.iter().all(|row| row.len() == width));

        let mut field = Self::new(width, height).unwrap();
        field.cells = rows.into_iter().flatten().collect();
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropblox_types::Color;

    const R: Cell = Some(Color::R);
    const B: Cell = Some(Color::B);

    fn rewards() -> RewardTable {
        RewardTable::default()
            .with(Color::R, 8, 4)
            .with(Color::B, 100, 0)
            .with(Color::Y, 1, 3)
    }

    #[test]
    fn test_field_index_calculation() {
        let field = Field::new(4, 3).unwrap();
        assert_eq!(field.index(0, 0), Some(0));
        assert_eq!(field.index(3, 0), Some(3));
        assert_eq!(field.index(0, 1), Some(4));
        assert_eq!(field.index(3, 2), Some(11));
        assert_eq!(field.index(-1, 0), None);
        assert_eq!(field.index(4, 0), None);
        assert_eq!(field.index(0, 3), None);
    }

    #[test]
    fn test_zero_sized_field_rejected() {
        assert_eq!(
            Field::new(0, 3),
            Err(Error::InvalidDimensions { width: 0, height: 3 })
        );
        assert!(Field::new(3, 0).is_err());
    }

    #[test]
    fn test_oversized_field_rejected() {
        assert_eq!(
            Field::new(usize::MAX, 2),
            Err(Error::InvalidDimensions { width: usize::MAX, height: 2 })
        );
        // Fits in usize but not in an allocation
        assert!(Field::new(1 << 62, 4).is_err());
    }

    #[test]
    fn test_fit_bounds() {
        let field = Field::new(4, 3).unwrap();
        let block = Block::solid(0, 2, 2, Color::R).unwrap();

        assert!(field.fit(&block, 0, 0));
        assert!(field.fit(&block, 2, 1));
        assert!(!field.fit(&block, -1, 0));
        assert!(!field.fit(&block, 0, -1));
        assert!(!field.fit(&block, 3, 0));
        assert!(!field.fit(&block, 0, 2));
    }

    #[test]
    fn test_fit_extreme_coordinates() {
        let field = Field::new(4, 3).unwrap();
        let block = Block::solid(0, 2, 2, Color::R).unwrap();
        let wide = Block::solid(1, 5, 1, Color::R).unwrap();

        assert!(!field.fit(&block, i64::MAX, 0));
        assert!(!field.fit(&block, 0, i64::MAX));
        assert!(!field.fit(&block, i64::MIN, i64::MIN));
        assert!(!field.fit(&wide, 0, 0));
    }

    #[test]
    fn test_fit_only_filled_over_filled_collides() {
        // Bottom row: R . . .
        let field = Field::from_rows(vec![
            vec![R, None, None, None],
            vec![None, None, None, None],
        ]);
        // Hook shape whose empty bottom-left cell sits over the filled field cell
        let hook = Block::new(0, 2, 2, Color::B, vec![vec![None, B], vec![B, B]]).unwrap();
        let solid = Block::solid(1, 2, 2, Color::B).unwrap();

        assert!(field.fit(&hook, 0, 0));
        assert!(!field.fit(&solid, 0, 0));
        assert!(field.fit(&solid, 1, 0));
    }

    #[test]
    fn test_update_keeps_content_under_holes() {
        let mut field = Field::from_rows(vec![
            vec![R, None, None, None],
            vec![None, None, None, None],
        ]);
        let hook = Block::new(0, 2, 2, Color::B, vec![vec![None, B], vec![B, B]]).unwrap();

        field.update(&hook, 0, 0);
        assert_eq!(field.row(0), &[R, B, None, None]);
        assert_eq!(field.row(1), &[B, B, None, None]);
    }

    #[test]
    fn test_hole_lets_block_slide_over_stack() {
        // Column 0 has a single cell on the floor; an inverted U drops over it.
        let mut field = Field::from_rows(vec![
            vec![R, None, None],
            vec![None, None, None],
            vec![None, None, None],
        ]);
        let arch = Block::new(0, 2, 2, Color::B, vec![vec![None, B], vec![B, B]]).unwrap();

        assert_eq!(field.drop_block(&arch, 0), Ok(0));
        assert_eq!(field.row(0), &[R, B, None]);
    }

    #[test]
    fn test_drop_block_rejects_reuse() {
        let mut field = Field::new(4, 4).unwrap();
        let block = Block::solid(5, 1, 1, Color::Y).unwrap();

        field.drop_block(&block, 0).unwrap();
        assert_eq!(field.drop_block(&block, 3), Err(Error::AlreadyDropped { id: 5 }));
        assert_eq!(field.dropped_ids(), &[5]);
        assert_eq!(field.dropped_positions(), &[0]);
    }

    #[test]
    fn test_drop_block_into_full_column() {
        let mut field = Field::new(2, 2).unwrap();
        let tall = Block::solid(0, 1, 2, Color::R).unwrap();
        let dot = Block::solid(1, 1, 1, Color::R).unwrap();

        field.drop_block(&tall, 0).unwrap();
        assert_eq!(field.drop_block(&dot, 0), Err(Error::DoesNotFit { id: 1, x: 0 }));
        assert_eq!(field.drop_block(&dot, 2), Err(Error::DoesNotFit { id: 1, x: 2 }));
        assert_eq!(field.dropped_ids(), &[0]);
    }

    #[test]
    fn test_block_taller_than_field() {
        let field = Field::new(3, 2).unwrap();
        let tall = Block::solid(0, 1, 3, Color::R).unwrap();
        assert!(field.resting_y(&tall, 0).is_err());
        assert!(!field.does_block_fit(&tall, 0));
    }

    #[test]
    fn test_drop_distance_matches_rest_position() {
        let mut field = Field::new(3, 5).unwrap();
        let flat = Block::solid(0, 3, 1, Color::Y).unwrap();
        let square = Block::solid(1, 2, 2, Color::R).unwrap();

        assert_eq!(field.drop_distance(&flat, 0), Ok(4));
        field.drop_block(&flat, 0).unwrap();

        let predicted = field.drop_distance(&square, 1).unwrap();
        let y = field.drop_block(&square, 1).unwrap();
        assert_eq!(y, 1);
        assert_eq!(predicted, 2);
        assert_eq!(field.height() - y, predicted + square.height());
    }

    #[test]
    fn test_does_block_fit_is_pure() {
        let field = Field::new(4, 3).unwrap();
        let block = Block::solid(0, 2, 1, Color::R).unwrap();
        let before = field.clone();

        assert!(field.does_block_fit(&block, 2));
        assert!(!field.does_block_fit(&block, 3));
        assert_eq!(field, before);
    }

    #[test]
    fn test_score_row() {
        let rewards = rewards();
        assert_eq!(Field::score_row(&[None, None, None, None], &rewards), Ok(0));
        assert_eq!(Field::score_row(&[None, R, R, None], &rewards), Ok(14));
        // Full single color: (8 * 4) * 4
        assert_eq!(Field::score_row(&[R, R, R, R], &rewards), Ok(128));
        // Full but mixed: no multiplier
        assert_eq!(Field::score_row(&[R, B, R, R], &rewards), Ok(124));
        // Zero multiplier wipes the row
        assert_eq!(Field::score_row(&[B, B], &rewards), Ok(0));
    }

    #[test]
    fn test_score_row_unknown_color() {
        let rewards = RewardTable::default().with(Color::R, 8, 4);
        assert_eq!(
            Field::score_row(&[R, Some(Color::G)], &rewards),
            Err(Error::UnknownColor { color: Color::G })
        );
        // Multiplier lookup only happens for full single-color rows
        let points_only = RewardTable::new(
            [(Color::R, 8)].into_iter().collect(),
            Default::default(),
        );
        assert_eq!(Field::score_row(&[R, None], &points_only), Ok(7));
        assert!(Field::score_row(&[R, R], &points_only).is_err());
    }

    #[test]
    fn test_score_overflow_is_an_error() {
        let huge = RewardTable::default()
            .with(Color::R, i64::MAX, 2)
            .with(Color::B, i64::MIN, 1);

        assert_eq!(Field::score_row(&[R, None], &huge), Ok(i64::MAX - 1));
        // Overflow in the sum, in the multiplier, and below the minimum
        assert_eq!(Field::score_row(&[R, R], &huge), Err(Error::ScoreOverflow));
        assert_eq!(Field::score_row(&[R], &huge), Err(Error::ScoreOverflow));
        assert_eq!(Field::score_row(&[B, None], &huge), Err(Error::ScoreOverflow));

        // Each row fits on its own, the total does not
        let field = Field::from_rows(vec![vec![R, None], vec![None, R]]);
        assert_eq!(field.score(&huge), Err(Error::ScoreOverflow));
    }

    #[test]
    fn test_score_sums_all_rows() {
        let field = Field::from_rows(vec![
            vec![R, R, R],
            vec![None, B, None],
            vec![None, None, None],
        ]);
        assert_eq!(field.score(&rewards()), Ok(96 + 98));
    }

    #[test]
    fn test_dead_cells() {
        let field = Field::from_rows(vec![
            vec![None, R, None, None],
            vec![None, None, None, R],
            vec![R, R, None, None],
        ]);
        // Column 0: 2 below the top, column 1: 1, column 2: none filled, column 3: 1
        assert_eq!(field.dead_cells(), 4);
        assert_eq!(Field::new(3, 3).unwrap().dead_cells(), 0);
    }

    #[test]
    fn test_num_filled_rows_ignores_border() {
        let field = Field::from_rows(vec![
            vec![R, R, R, R],
            vec![None, R, R, None],
            vec![R, R, None, R],
            vec![None, R, R, None],
            vec![R, R, R, R],
        ]);
        // Rows 1 and 3 are full inside the border; rows 0 and 4 are the border.
        assert_eq!(field.num_filled_rows(), 2);

        let narrow = Field::from_rows(vec![vec![R, R], vec![R, R], vec![R, R]]);
        assert_eq!(narrow.num_filled_rows(), 0);
    }

    #[test]
    fn test_history_text_and_clear() {
        let mut field = Field::new(4, 3).unwrap();
        let a = Block::solid(1, 2, 1, Color::R).unwrap();
        let b = Block::solid(0, 1, 1, Color::Y).unwrap();
        field.drop_block(&a, 1).unwrap();
        field.drop_block(&b, 3).unwrap();

        assert_eq!(field.history_text(), "1 1\n0 3\n");

        field.clear();
        assert_eq!(field, Field::new(4, 3).unwrap());
        assert!(!field.is_dropped(1));
    }
}
