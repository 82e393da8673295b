// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a small, deterministic engine for classic 9×9
//! Sudoku. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Reporting every row, column, and box rule violation of a grid
//! * Solving Sudoku using a perfect backtracking algorithm
//! * Generating seeded, reproducible puzzles at three difficulties
//!
//! The engine performs no I/O. Every operation consumes a grid (and, for
//! generation, a difficulty and a seed) and produces a plain value; argument
//! parsing and output formatting are the business of whatever layer sits on
//! top.
//!
//! # Parsing and printing grids
//!
//! Grids travel as 81-character, row-major lines using the digits `0` to `9`,
//! where `0` (or, alternatively, `.`) marks an empty cell. See
//! [SudokuGrid::to_line_string] for the exact format. Parsed grids can be
//! pretty-printed for display:
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//!
//! let grid: SudokuGrid =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!     .parse().unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! [validate](validator::validate) scans a grid and reports every duplicated
//! digit in every row, column, and 3×3 box, together with all positions at
//! which it occurs:
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//! use sudoku_engine::validator::{self, Scope};
//!
//! // Two 1s in the top row.
//! let grid: SudokuGrid =
//!     "100001000000000000000000000000000000000000000000000000000000000000000000000000000"
//!     .parse().unwrap();
//! let report = validator::validate(&grid);
//!
//! assert!(!report.valid);
//! assert_eq!(Scope::Row, report.violations[0].scope);
//! ```
//!
//! # Solving
//!
//! [BacktrackingSolver](solver::BacktrackingSolver) implements the
//! [Solver](solver::Solver) trait and finds the first solution in
//! digit-ascending, position-ascending order:
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//! use sudoku_engine::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let puzzle: SudokuGrid =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!     .parse().unwrap();
//!
//! match BacktrackingSolver.solve(&puzzle) {
//!     Solution::Solved(solution) => assert!(solution.is_full()),
//!     _ => panic!("expected a solution")
//! }
//! ```
//!
//! # Generating
//!
//! [generate](generator::generate) builds a puzzle from a difficulty and a
//! seed. Identical inputs produce identical puzzles, on any machine:
//!
//! ```
//! use sudoku_engine::generator::{self, Difficulty};
//! use sudoku_engine::validator;
//!
//! let puzzle = generator::generate(Difficulty::Medium, 42);
//! let again = generator::generate(Difficulty::Medium, 42);
//!
//! assert_eq!(puzzle, again);
//! assert!(validator::validate(&puzzle).valid);
//! ```
//!
//! Generated puzzles are guaranteed to be rule-consistent and solvable, but
//! not to have a unique solution. See the [generator] module for details.

pub mod error;
pub mod generator;
pub mod rng;
pub mod solver;
pub mod validator;

use error::{InvalidCellError, LineParseError};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The number of rows (and columns) of a Sudoku grid.
pub const GRID_SIZE: usize = 9;

/// The number of rows (and columns) of one 3×3 box of a Sudoku grid.
pub const BOX_SIZE: usize = 3;

/// The total number of cells of a Sudoku grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A classic 9×9 Sudoku grid. Each cell holds a digit from 1 to 9 or is
/// empty, which is represented by 0. The grid is stored row-major and is
/// cheap to copy, so search algorithms work on private copies and leave
/// their input untouched.
///
/// A grid can be obtained from one of the external wire forms, an
/// 81-character line ([SudokuGrid::from_str]) or a 9×9 matrix
/// ([SudokuGrid::from_rows]), or created empty and filled by the
/// [generator](crate::generator). All
/// constructors uphold the invariant that every cell is in the range
/// `[0, 9]`.
///
/// `SudokuGrid` implements `Display`, rendering a box-drawing representation
/// of the grid with empty cells left blank.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SudokuGrid {
    cells: [u8; CELL_COUNT]
}

fn index(row: usize, col: usize) -> usize {
    row * GRID_SIZE + col
}

fn to_char(digit: u8) -> char {
    if digit == 0 {
        ' '
    }
    else {
        (b'0' + digit) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for col in 0..GRID_SIZE {
        if col == 0 {
            result.push(start);
        }
        else if col % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(col));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    line('║', '║', '│', |col| to_char(grid.get(row, col)), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for row in 0..GRID_SIZE {
            if row == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if row % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row().as_str())
    }
}

impl SudokuGrid {

    /// Creates a new grid with all 81 cells empty.
    pub fn empty() -> SudokuGrid {
        SudokuGrid {
            cells: [0; CELL_COUNT]
        }
    }

    /// Creates a grid from a 9×9 matrix of cell values, given as an array of
    /// rows. 0 denotes an empty cell.
    ///
    /// # Errors
    ///
    /// [InvalidCellError] if any entry is greater than 9. The error names the
    /// first offending cell in row-major order.
    pub fn from_rows(rows: [[u8; GRID_SIZE]; GRID_SIZE])
            -> Result<SudokuGrid, InvalidCellError> {
        let mut grid = SudokuGrid::empty();

        for (row, row_values) in rows.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                if value > 9 {
                    return Err(InvalidCellError {
                        row,
                        col,
                        value
                    });
                }

                grid.cells[index(row, col)] = value;
            }
        }

        Ok(grid)
    }

    /// Converts this grid into a 9×9 matrix of cell values, given as an
    /// array of rows. 0 denotes an empty cell.
    pub fn to_rows(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0u8; GRID_SIZE]; GRID_SIZE];

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                rows[row][col] = self.get(row, col);
            }
        }

        rows
    }

    /// Gets the digit in the cell at the specified position, where 0
    /// indicates an empty cell.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 9)`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < GRID_SIZE && col < GRID_SIZE,
            "cell ({}, {}) is outside the grid", row, col);

        self.cells[index(row, col)]
    }

    /// Sets the cell at the specified position to the given digit,
    /// overwriting any previous content.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 9)` or `digit` is not in
    /// the range `[1, 9]`.
    pub fn set(&mut self, row: usize, col: usize, digit: u8) {
        assert!(row < GRID_SIZE && col < GRID_SIZE,
            "cell ({}, {}) is outside the grid", row, col);
        assert!(digit >= 1 && digit <= 9, "invalid digit {}", digit);

        self.cells[index(row, col)] = digit;
    }

    /// Clears the cell at the specified position. Clearing an empty cell
    /// leaves it empty.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 9)`.
    pub fn clear(&mut self, row: usize, col: usize) {
        assert!(row < GRID_SIZE && col < GRID_SIZE,
            "cell ({}, {}) is outside the grid", row, col);

        self.cells[index(row, col)] = 0;
    }

    /// Gets the index of the 3×3 box containing the cell at the specified
    /// position. Boxes are numbered 0 to 8, row-major over the 3×3 tiling,
    /// so the top-left box is 0 and the bottom-right box is 8.
    pub fn box_of(row: usize, col: usize) -> usize {
        (row / BOX_SIZE) * BOX_SIZE + col / BOX_SIZE
    }

    /// Returns an iterator over all 81 `(row, col)` cell positions in
    /// row-major order.
    pub fn positions() -> impl Iterator<Item = (usize, usize)> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
    }

    /// Finds the first empty cell in row-major order, that is, the empty
    /// cell with the lowest row and, within that row, the lowest column.
    /// Returns `None` if the grid is full.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        SudokuGrid::positions().find(|&(row, col)| self.get(row, col) == 0)
    }

    /// Indicates whether the given digit may be placed in the cell at the
    /// specified position without breaking a rule, i.e. whether the digit is
    /// absent from the cell's row, column, and containing 3×3 box. The cell
    /// itself is ignored, so a digit is always allowed where it already
    /// stands.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 9)`.
    pub fn placement_allowed(&self, row: usize, col: usize, digit: u8)
            -> bool {
        for i in 0..GRID_SIZE {
            if i != col && self.get(row, i) == digit {
                return false;
            }

            if i != row && self.get(i, col) == digit {
                return false;
            }
        }

        let box_row = (row / BOX_SIZE) * BOX_SIZE;
        let box_col = (col / BOX_SIZE) * BOX_SIZE;

        for r in box_row..(box_row + BOX_SIZE) {
            for c in box_col..(box_col + BOX_SIZE) {
                if (r, c) != (row, col) && self.get(r, c) == digit {
                    return false;
                }
            }
        }

        true
    }

    /// Counts the number of clues in this grid, that is, the number of
    /// non-empty cells. While on average puzzles with fewer clues are
    /// harder, this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|&&digit| digit != 0).count()
    }

    /// Indicates whether this grid is full, i.e. every cell holds a digit.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&digit| digit != 0)
    }

    /// Indicates whether this grid is empty, i.e. no cell holds a digit.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&digit| digit == 0)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells holding a digit in this grid must hold the same
    /// digit in `other`.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(&self_digit, &other_digit)|
                self_digit == 0 || self_digit == other_digit)
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells holding a digit in `other` must hold the same
    /// digit in this grid.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the array which holds the cells, in row-major
    /// order. 0 denotes an empty cell.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Converts the grid into its 81-character, row-major line form, using
    /// `0` for empty cells. The output parses back to an equal grid:
    ///
    /// ```
    /// use sudoku_engine::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::empty();
    /// grid.set(0, 0, 5);
    /// grid.set(8, 8, 9);
    ///
    /// let reparsed: SudokuGrid = grid.to_line_string().parse().unwrap();
    /// assert_eq!(grid, reparsed);
    /// ```
    pub fn to_line_string(&self) -> String {
        self.cells.iter()
            .map(|&digit| (b'0' + digit) as char)
            .collect()
    }
}

impl FromStr for SudokuGrid {
    type Err = LineParseError;

    /// Parses a grid from its 81-character, row-major line form. Each
    /// character is a digit from `1` to `9`, or `0` or `.` for an empty
    /// cell. Rows are laid out left to right, top to bottom, with no
    /// separators.
    ///
    /// # Errors
    ///
    /// * [LineParseError::WrongLength] if the input does not consist of
    /// exactly 81 characters.
    /// * [LineParseError::InvalidCharacter] if any character is not a digit
    /// or `.`.
    fn from_str(line: &str) -> Result<SudokuGrid, LineParseError> {
        let chars: Vec<char> = line.chars().collect();

        if chars.len() != CELL_COUNT {
            return Err(LineParseError::WrongLength(chars.len()));
        }

        let mut grid = SudokuGrid::empty();

        for (cell, &c) in chars.iter().enumerate() {
            grid.cells[cell] = match c {
                '0' | '.' => 0,
                '1'..='9' => c as u8 - b'0',
                _ => return Err(LineParseError::InvalidCharacter {
                    cell,
                    found: c
                })
            };
        }

        Ok(grid)
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = LineParseError;

    fn try_from(line: String) -> Result<SudokuGrid, LineParseError> {
        line.parse()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_line_string()
    }
}
