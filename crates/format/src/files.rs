//! File helpers with path context on every error

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use dropblox_core::Solution;

use crate::puzzle::{parse_puzzle, Puzzle};
use crate::solution::{parse_solution, write_solution};

pub fn read_puzzle_file(path: impl AsRef<Path>) -> Result<Puzzle> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading puzzle {}", path.display()))?;
    parse_puzzle(&text).with_context(|| format!("parsing puzzle {}", path.display()))
}

pub fn read_solution_file(path: impl AsRef<Path>) -> Result<Solution> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading solution {}", path.display()))?;
    parse_solution(&text).with_context(|| format!("parsing solution {}", path.display()))
}

pub fn write_solution_file(path: impl AsRef<Path>, solution: &Solution) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, write_solution(solution)).with_context(|| format!("writing solution {}", path.display()))
}
