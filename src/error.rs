//! This module contains the error and result definitions used in this crate.
//!
//! All errors derive [thiserror::Error], so they carry human-readable
//! messages and compose with `Box<dyn Error>` in calling layers. Note that
//! the engine's result values (validation reports and solve outcomes) are
//! *not* errors; an unsolvable puzzle is a regular answer, not a failure.

use thiserror::Error;

/// Miscellaneous errors that can occur on engine operations outside of
/// parsing. See [LineParseError] for the errors of the line wire form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SudokuError {

    /// Indicates that the clues already present in a grid admit no completed
    /// grid, either because they duplicate a digit within a row, column, or
    /// box, or because every completion attempt runs into a dead end.
    #[error("the given clues admit no completed grid")]
    UnfillableGrid
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuGrid](crate::SudokuGrid) from its 81-character line form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum LineParseError {

    /// Indicates that the input does not consist of exactly 81 characters.
    /// Carries the number of characters found.
    #[error("expected 81 cells, found {0}")]
    WrongLength(usize),

    /// Indicates that a cell character is neither a digit from `0` to `9`
    /// nor the empty-cell marker `.`.
    #[error("cell {cell} holds invalid character {found:?}")]
    InvalidCharacter {

        /// The index of the offending cell in row-major order, from 0 for
        /// the top-left cell to 80 for the bottom-right one.
        cell: usize,

        /// The character found at that cell.
        found: char
    }
}

/// The error raised by [SudokuGrid::from_rows](crate::SudokuGrid::from_rows)
/// when a cell value lies outside the range `[0, 9]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("cell ({row}, {col}) holds {value}, expected a value in 0-9")]
pub struct InvalidCellError {

    /// The row of the offending cell.
    pub row: usize,

    /// The column of the offending cell.
    pub col: usize,

    /// The out-of-range value found there.
    pub value: u8
}

/// The error raised when parsing a
/// [Difficulty](crate::generator::Difficulty) from a string that names none
/// of the difficulty levels.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown difficulty {0:?}, expected \"easy\", \"medium\" or \"hard\"")]
pub struct ParseDifficultyError(pub String);

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let parse_error = LineParseError::InvalidCharacter {
            cell: 40,
            found: 'x'
        };

        assert_eq!("cell 40 holds invalid character 'x'",
            parse_error.to_string());

        let cell_error = InvalidCellError {
            row: 3,
            col: 7,
            value: 10
        };

        assert_eq!("cell (3, 7) holds 10, expected a value in 0-9",
            cell_error.to_string());

        assert_eq!(
            "unknown difficulty \"impossible\", expected \"easy\", \
             \"medium\" or \"hard\"",
            ParseDifficultyError(String::from("impossible")).to_string());
    }
}
