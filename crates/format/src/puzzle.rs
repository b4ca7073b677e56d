//! Puzzle text format
//!
//! ```text
//! width height
//! nr_blocks nr_rewards
//! width height color            (per block)
//! c c c ...                     (width*height cells, row-major, bottom row first)
//! color points multiplier       (per reward)
//! ```
//!
//! A cell token of `0` is empty; any other token must be a palette code matching
//! the block color. Block ids are assigned in parse order. Blank lines are skipped.

use std::str::FromStr;

use dropblox_core::{Block, Field, RewardTable};
use dropblox_types::{parse_cell_token, Cell, Color};

use crate::error::{ParseError, ParseErrorKind};

/// Everything a puzzle file describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub field: Field,
    pub blocks: Vec<Block>,
    pub rewards: RewardTable,
}

/// Cursor over non-blank lines that remembers line numbers
pub(crate) struct LineCursor<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    line: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            line: 0,
        }
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Next non-blank line split into tokens, `None` at end of input
    pub(crate) fn next_tokens(&mut self) -> Option<Vec<&'a str>> {
        for (idx, text) in self.lines.by_ref() {
            let tokens: Vec<&str> = text.split_whitespace().collect();
            if !tokens.is_empty() {
                self.line = idx + 1;
                return Some(tokens);
            }
        }
        None
    }

    /// Next line, which must hold exactly `count` tokens
    pub(crate) fn expect(&mut self, count: usize, expected: &'static str) -> Result<Vec<&'a str>, ParseError> {
        let tokens = self
            .next_tokens()
            .ok_or_else(|| self.error(ParseErrorKind::UnexpectedEof { expected }))?;
        if tokens.len() != count {
            return Err(self.error(ParseErrorKind::TokenCount {
                expected: count,
                found: tokens.len(),
            }));
        }
        Ok(tokens)
    }

    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.line, kind)
    }

    pub(crate) fn number<T: FromStr>(&self, token: &str) -> Result<T, ParseError> {
        token.parse::<T>().map_err(|_| {
            self.error(ParseErrorKind::InvalidInteger {
                token: token.to_string(),
            })
        })
    }

    fn color(&self, token: &str) -> Result<Color, ParseError> {
        Color::from_code(token).ok_or_else(|| {
            self.error(ParseErrorKind::InvalidColor {
                token: token.to_string(),
            })
        })
    }

    fn cell(&self, token: &str) -> Result<Cell, ParseError> {
        parse_cell_token(token).ok_or_else(|| {
            self.error(ParseErrorKind::InvalidColor {
                token: token.to_string(),
            })
        })
    }
}

/// Parse a puzzle into its field, blocks and reward table
pub fn parse_puzzle(input: &str) -> Result<Puzzle, ParseError> {
    let mut cursor = LineCursor::new(input);

    let header = cursor.expect(2, "field size")?;
    let field = Field::new(cursor.number(header[0])?, cursor.number(header[1])?)
        .map_err(|e| cursor.error(e.into()))?;

    let counts = cursor.expect(2, "block and reward counts")?;
    let nr_blocks: usize = cursor.number(counts[0])?;
    let nr_rewards: usize = cursor.number(counts[1])?;

    // Counts come from the input; grow as blocks are actually read.
    let mut blocks = Vec::new();
    for id in 0..nr_blocks {
        let shape = cursor.expect(3, "block header")?;
        let width: usize = cursor.number(shape[0])?;
        let height: usize = cursor.number(shape[1])?;
        let color = cursor.color(shape[2])?;

        let tokens = cursor
            .next_tokens()
            .ok_or_else(|| cursor.error(ParseErrorKind::UnexpectedEof { expected: "block cells" }))?;
        let cells = tokens
            .iter()
            .map(|token| cursor.cell(token))
            .collect::<Result<Vec<Cell>, _>>()?;

        let block = Block::from_flat(id, width, height, color, cells).map_err(|e| cursor.error(e.into()))?;
        blocks.push(block);
    }

    let mut rewards = RewardTable::default();
    for _ in 0..nr_rewards {
        let entry = cursor.expect(3, "reward")?;
        let color = cursor.color(entry[0])?;
        rewards = rewards.with(color, cursor.number(entry[1])?, cursor.number(entry[2])?);
    }

    Ok(Puzzle {
        field,
        blocks,
        rewards,
    })
}
