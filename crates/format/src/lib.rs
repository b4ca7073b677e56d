//! Text formats around the field engine
//!
//! - [`puzzle`]: puzzle files (field size, blocks, rewards)
//! - [`solution`]: solution files (`block_id x_position` per line)
//! - [`report`]: JSON score reports for tooling
//! - [`files`]: file wrappers returning `anyhow` errors with the path attached
//!
//! Parsers return [`ParseError`] with the 1-based line number of the problem.

pub mod error;
pub mod files;
pub mod puzzle;
pub mod report;
pub mod solution;

pub use dropblox_core as core;
pub use dropblox_types as types;

pub use error::{ParseError, ParseErrorKind};
pub use files::{read_puzzle_file, read_solution_file, write_solution_file};
pub use puzzle::{parse_puzzle, Puzzle};
pub use report::{FieldSize, ReportError, ScoreReport};
pub use solution::{parse_solution, write_solution};
