//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a cell. This is the case if
    /// it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) or group
    /// index lie outside the Sudoku grid in question. This is the case if
    /// they are greater than or equal to 9.
    OutOfBounds
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidNumber =>
                write!(f, "number must be in the range [1, 9]"),
            SudokuError::OutOfBounds =>
                write!(f, "coordinates must be in the range [0, 9[")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a [SudokuGrid]
/// from its 81-digit string representation.
///
/// [SudokuGrid]: ../struct.SudokuGrid.html
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the string does not contain exactly 81 characters.
    WrongLength,

    /// Indicates that the string contains a character which is not a digit
    /// between '0' and '9'.
    InvalidCharacter
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongLength =>
                write!(f, "a Sudoku code must contain exactly 81 characters"),
            SudokuParseError::InvalidCharacter =>
                write!(f, "a Sudoku code may only contain the digits '0' to \
                    '9'")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
