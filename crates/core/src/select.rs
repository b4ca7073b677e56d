//! Block selection helpers
//!
//! Point values and multipliers of the reference puzzles, for orientation:
//!
//! | Color | Points | Multiplier |
//! |-------|--------|------------|
//! | `B`   | 100    | 0          |
//! | `Y`   | 1      | 3          |
//! | `G`   | 3      | 1          |
//! | `P`   | 5      | 2          |
//! | `O`   | 5      | 3          |
//! | `R`   | 8      | 4          |

use dropblox_types::Color;

use crate::block::Block;
use crate::field::Field;
use crate::rng::SimpleRng;

/// Blocks of the given color, in their original order
pub fn blocks_of_color(blocks: &[Block], color: Color) -> Vec<&Block> {
    blocks.iter().filter(|block| block.color() == color).collect()
}

/// Pick a block uniformly at random, `None` for an empty list
pub fn random_block<'a>(blocks: &'a [Block], rng: &mut SimpleRng) -> Option<&'a Block> {
    rng.next_index(blocks.len()).map(|idx| &blocks[idx])
}

/// Blocks that have not been dropped on the field yet
pub fn unused_blocks<'a>(blocks: &'a [Block], field: &Field) -> Vec<&'a Block> {
    blocks
        .iter()
        .filter(|block| !field.is_dropped(block.id()))
        .collect()
}
