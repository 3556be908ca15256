//! Text form of moves: parsing "A5"-style coordinates and formatting them
//! back for display.

use thiserror::Error;

use crate::geometry::{Dimension, Position};

/// Why a move string was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not a column letter followed by one or two row digits.
    #[error("invalid move format, expected letter + number (e.g. B7)")]
    InvalidFormat,
    /// Well-formed but outside the grid.
    #[error("move is outside the board")]
    OutOfBounds,
}

/// Parse a move like `A5` or `j10` against a grid of `dimension`.
///
/// Input is trimmed and upper-cased first; the accepted shape is one letter
/// `A`-`Z` for the column followed by one or two digits for the 1-based row.
pub fn parse_move(input: &str, dimension: Dimension) -> Result<Position, MoveParseError> {
    let input = input.trim().to_ascii_uppercase();
    let bytes = input.as_bytes();
    let (&column, digits) = bytes.split_first().ok_or(MoveParseError::InvalidFormat)?;
    if !column.is_ascii_uppercase()
        || digits.is_empty()
        || digits.len() > 2
        || !digits.iter().all(u8::is_ascii_digit)
    {
        return Err(MoveParseError::InvalidFormat);
    }
    // one or two digits, cannot overflow
    let row: i32 = input[1..].parse().map_err(|_| MoveParseError::InvalidFormat)?;
    let pos = Position::new(i32::from(column - b'A'), row - 1);
    if !dimension.contains(pos) {
        return Err(MoveParseError::OutOfBounds);
    }
    Ok(pos)
}

/// Render a position in the same letter + 1-based-row form, e.g. (0, 4)
/// becomes `A5`. Assumes the column fits the A-Z range.
pub fn format_move(pos: Position) -> String {
    format!("{}{}", (b'A' + pos.x as u8) as char, pos.y + 1)
}
