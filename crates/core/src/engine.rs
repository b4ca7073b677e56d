//! Engine entry points - orchestration over Field, Block, RewardTable and Solution
//!
//! These are thin wrappers that the CLI and integration tests call; all rules
//! live on [`Field`].

use log::info;

use crate::block::Block;
use crate::error::Result;
use crate::field::Field;
use crate::rewards::RewardTable;
use crate::solution::Solution;

/// Outcome of replaying a solution and scoring the resulting field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub score: i64,
    pub dead_cells: usize,
    pub filled_rows: usize,
    pub drops: usize,
}

/// Drop one block at x; returns the resting y
pub fn drop_block(field: &mut Field, block: &Block, x: i64) -> Result<usize> {
    field.drop_block(block, x)
}

/// Replay a solution onto the field
pub fn drop_blocks(field: &mut Field, blocks: &[Block], solution: &Solution) -> Result<()> {
    field.drop_blocks(blocks, solution)
}

/// Replay a solution and return the score of the resulting field
pub fn score_solution(
    field: &mut Field,
    blocks: &[Block],
    solution: &Solution,
    rewards: &RewardTable,
) -> Result<i64> {
    field.drop_blocks(blocks, solution)?;
    field.score(rewards)
}

/// Replay a solution and collect the score together with the derived metrics
pub fn evaluate(
    field: &mut Field,
    blocks: &[Block],
    solution: &Solution,
    rewards: &RewardTable,
) -> Result<Evaluation> {
    let score = score_solution(field, blocks, solution, rewards)?;
    let evaluation = Evaluation {
        score,
        dead_cells: field.dead_cells(),
        filled_rows: field.num_filled_rows(),
        drops: field.dropped_ids().len(),
    };
    info!(
        "evaluated {} drops: score {}, {} dead cells",
        evaluation.drops, evaluation.score, evaluation.dead_cells
    );
    Ok(evaluation)
}
