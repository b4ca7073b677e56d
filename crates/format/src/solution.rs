//! Solution text format: one `block_id x_position` line per drop, in drop order

use dropblox_core::Solution;

use crate::error::ParseError;
use crate::puzzle::LineCursor;

/// Parse solution text
///
/// Negative ids and positions are accepted here; replay rejects them.
///
/// ```
/// use dropblox_format::parse_solution;
///
/// let solution = parse_solution("2 0\n0 5\n\n1 -1\n").unwrap();
/// assert_eq!(solution.iter().collect::<Vec<_>>(), vec![(2, 0), (0, 5), (1, -1)]);
/// ```
pub fn parse_solution(input: &str) -> Result<Solution, ParseError> {
    let mut cursor = LineCursor::new(input);
    let mut solution = Solution::new();

    while let Some(tokens) = cursor.next_tokens() {
        if tokens.len() != 2 {
            return Err(cursor.error(crate::error::ParseErrorKind::TokenCount {
                expected: 2,
                found: tokens.len(),
            }));
        }
        solution.push(cursor.number(tokens[0])?, cursor.number(tokens[1])?);
    }
    Ok(solution)
}

/// Write a solution in solution text format
pub fn write_solution(solution: &Solution) -> String {
    solution.to_string()
}
