//! Error taxonomy for the field simulation
//!
//! Every failure is local and synchronous: it is returned to the immediate
//! caller and never retried. Batch replay stops at the first error and keeps
//! whatever drops were already applied.

use dropblox_types::Color;

/// Result alias used throughout the core crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Declared block dimensions disagree with the supplied cells
    #[error("block {id}: declared {width}x{height} does not match supplied cells ({detail})")]
    ShapeMismatch {
        id: usize,
        width: usize,
        height: usize,
        detail: String,
    },

    /// A filled block cell carries a color other than the block color
    #[error("block {id}: cell colored {found} in a block of color {expected}")]
    ColorMismatch {
        id: usize,
        expected: Color,
        found: Color,
    },

    /// Zero-sized, or too many cells to allocate
    #[error("invalid field dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("block {id} has already been dropped")]
    AlreadyDropped { id: usize },

    #[error("block {id} does not fit on x: {x}")]
    DoesNotFit { id: usize, x: i64 },

    #[error("block {id} is used more than once in the solution")]
    DuplicateBlockUse { id: i64 },

    #[error("block id {id} does not exist ({available} blocks available)")]
    InvalidBlockId { id: i64, available: usize },

    #[error("undefined color encountered: {color}")]
    UnknownColor { color: Color },

    /// Reward values pushed a row or total score past the i64 range
    #[error("score overflow")]
    ScoreOverflow,
}

impl Error {
    /// Stable machine-readable code for reports
    pub fn code(&self) -> &'static str {
        match self {
            Error::ShapeMismatch { .. } => "shape_mismatch",
            Error::ColorMismatch { .. } => "color_mismatch",
            Error::InvalidDimensions { .. } => "invalid_dimensions",
            Error::AlreadyDropped { .. } => "already_dropped",
            Error::DoesNotFit { .. } => "does_not_fit",
            Error::DuplicateBlockUse { .. } => "duplicate_block_use",
            Error::InvalidBlockId { .. } => "invalid_block_id",
            Error::UnknownColor { .. } => "unknown_color",
            Error::ScoreOverflow => "score_overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_block() {
        let err = Error::DoesNotFit { id: 3, x: -1 };
        assert_eq!(err.to_string(), "block 3 does not fit on x: -1");
        assert_eq!(err.code(), "does_not_fit");

        let err = Error::UnknownColor { color: Color::W };
        assert_eq!(err.to_string(), "undefined color encountered: W");
    }
}
