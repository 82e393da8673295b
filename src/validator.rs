//! This module contains the logic for checking a grid against the Sudoku
//! rules.
//!
//! [validate] scans a [SudokuGrid] and reports every rule violation it
//! finds: for each row, column, and 3×3 box, every digit that occurs more
//! than once yields one [Violation] listing all positions at which the digit
//! occurs. A grid with no violations is valid; note that an *empty* grid is
//! valid, since the rules only constrain digits that are present.
//!
//! Validation is pure and deterministic. Violations are reported in a fixed
//! order: all row scopes first, then columns, then boxes, scope indices
//! ascending, digits ascending within one scope.

use crate::{BOX_SIZE, GRID_SIZE, SudokuGrid};

use serde::{Deserialize, Serialize};

use std::array;

/// The kind of scope within which a digit was duplicated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {

    /// One of the nine rows of the grid.
    Row,

    /// One of the nine columns of the grid.
    Column,

    /// One of the nine 3×3 boxes of the grid, numbered row-major over the
    /// tiling (see [SudokuGrid::box_of]).
    Box
}

/// The position of one cell, identified by its row and column, both in the
/// range `[0, 9)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Position {

    /// The row of the cell, 0 being the topmost.
    pub row: usize,

    /// The column of the cell, 0 being the leftmost.
    pub col: usize
}

/// One rule violation: a digit occurring more than once within one scope
/// instance. Three occurrences of the same digit in one row yield a single
/// violation with three positions, not multiple pairs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Violation {

    /// The kind of scope in which the digit was duplicated.
    pub scope: Scope,

    /// The index of the scope instance, from 0 to 8.
    pub index: usize,

    /// The duplicated digit, from 1 to 9.
    pub digit: u8,

    /// Every position at which the digit occurs within the scope instance,
    /// in the scope's scan order. Always holds at least two entries.
    pub positions: Vec<Position>
}

/// The report produced by [validate].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {

    /// Whether the grid conforms to the rules, i.e. whether `violations` is
    /// empty.
    pub valid: bool,

    /// Every violation found, in the order described in the
    /// [module documentation](self).
    pub violations: Vec<Violation>
}

fn scan_scope(grid: &SudokuGrid, scope: Scope, index: usize,
        cells: impl Iterator<Item = Position>,
        violations: &mut Vec<Violation>) {
    let mut occurrences: [Vec<Position>; 10] = array::from_fn(|_| Vec::new());

    for position in cells {
        let digit = grid.get(position.row, position.col);

        if digit != 0 {
            occurrences[digit as usize].push(position);
        }
    }

    for (digit, positions) in occurrences.iter().enumerate().skip(1) {
        if positions.len() > 1 {
            violations.push(Violation {
                scope,
                index,
                digit: digit as u8,
                positions: positions.clone()
            });
        }
    }
}

/// Checks the given grid against the Sudoku rules and reports every
/// violation. See the [module documentation](self) for the exact semantics
/// and report order.
pub fn validate(grid: &SudokuGrid) -> ValidationResult {
    let mut violations = Vec::new();

    for index in 0..GRID_SIZE {
        scan_scope(grid, Scope::Row, index,
            (0..GRID_SIZE).map(|col| Position {
                row: index,
                col
            }),
            &mut violations);
    }

    for index in 0..GRID_SIZE {
        scan_scope(grid, Scope::Column, index,
            (0..GRID_SIZE).map(|row| Position {
                row,
                col: index
            }),
            &mut violations);
    }

    for index in 0..GRID_SIZE {
        let box_row = (index / BOX_SIZE) * BOX_SIZE;
        let box_col = (index % BOX_SIZE) * BOX_SIZE;
        scan_scope(grid, Scope::Box, index,
            (0..BOX_SIZE).flat_map(|r| (0..BOX_SIZE).map(move |c| Position {
                row: box_row + r,
                col: box_col + c
            })),
            &mut violations);
    }

    ValidationResult {
        valid: violations.is_empty(),
        violations
    }
}
