//! Field simulation engine - pure, deterministic, and testable
//!
//! Colored, possibly holed blocks are dropped one at a time into a rectangular
//! field with their left edge at a chosen x. Each block falls until the next
//! step down would collide or leave the field. Rows then score by color.
//!
//! The crate has no I/O: parsing and rendering live in sibling crates and only
//! produce or consume the types defined here.
//!
//! # Module Structure
//!
//! - [`block`]: immutable block shapes with validating constructors
//! - [`rewards`]: per-color points and full-row multipliers
//! - [`field`]: the grid, collision testing, gravity, scoring and field metrics
//! - [`solution`]: ordered `(block id, x)` drop instructions
//! - [`engine`]: entry points composing the above
//! - [`rng`], [`select`]: reproducible block selection helpers
//!
//! # Rules
//!
//! - **Fit**: only filled-over-filled collides, so holes in a block can pass
//!   around cells already on the field
//! - **Drop**: the block starts with its top at the top of the field and moves
//!   down while it fits; a block id can be dropped once
//! - **Score**: empty rows score 0; otherwise filled cells add their color's
//!   points, empty cells cost 1, and a full single-color row is multiplied by
//!   that color's multiplier
//!
//! # Example
//!
//! ```
//! use dropblox_core::{Block, Field, RewardTable};
//! use dropblox_types::Color;
//!
//! let mut field = Field::new(4, 3).unwrap();
//! let block = Block::solid(0, 2, 1, Color::R).unwrap();
//! let rewards = RewardTable::default().with(Color::R, 8, 4);
//!
//! assert_eq!(field.drop_block(&block, 1), Ok(0));
//! assert_eq!(field.score(&rewards), Ok(14));
//! assert_eq!(field.history_text(), "0 1\n");
//! ```

pub mod block;
pub mod engine;
pub mod error;
pub mod field;
pub mod rewards;
pub mod rng;
pub mod select;
pub mod solution;

pub use dropblox_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use engine::{drop_block, drop_blocks, evaluate, score_solution, Evaluation};
pub use error::{Error, Result};
pub use field::Field;
pub use rewards::RewardTable;
pub use rng::{BlockQueue, SimpleRng};
pub use select::{blocks_of_color, random_block, unused_blocks};
pub use solution::Solution;
