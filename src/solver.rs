//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.
//! The backtracking solver performs a naive depth-first search with no
//! constraint propagation: it is exponential in the worst case, but typical
//! 9×9 puzzles resolve in well under a second because every placement is
//! pruned against the row, column, and box rules.

use crate::SudokuGrid;
use crate::validator;

/// An enumeration of the ways a solve attempt can end. Only one variant
/// carries a grid; the others name the reason no solution is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// The puzzle was solved; the completed grid is wrapped in this
    /// instance. The input grid's clues are contained in the solution
    /// unchanged.
    Solved(SudokuGrid),

    /// The input already breaks a rule, that is, some row, column, or box
    /// contains a duplicated digit, so no search was performed.
    Invalid,

    /// The search space was exhausted without finding any complete
    /// assignment.
    Unsolvable,

    /// The puzzle has more than one solution. [BacktrackingSolver] stops at
    /// the first solution it finds and therefore never returns this; the
    /// variant is the seam for solvers that verify uniqueness.
    MultipleSolutions
}

impl Solution {

    /// Indicates whether this is a [Solution::Solved] outcome.
    pub fn is_solved(&self) -> bool {
        matches!(self, Solution::Solved(_))
    }

    /// Extracts the solved grid, if there is one.
    pub fn solved_grid(self) -> Option<SudokuGrid> {
        match self {
            Solution::Solved(grid) => Some(grid),
            _ => None
        }
    }
}

/// A trait for structs which have the ability to solve Sudoku. Implementers
/// are free in how they search, but they must never mutate the input grid;
/// a solution is always returned as a new grid.
pub trait Solver {

    /// Solves, or attempts to solve, the provided grid. See [Solution] for
    /// the possible outcomes.
    fn solve(&self, grid: &SudokuGrid) -> Solution;
}

/// A perfect [Solver] which finds a solution by recursively testing all
/// legal digits for each empty cell, in digit-ascending order, always
/// working on the first empty cell in row-major order. It returns the
/// *first* solution found under that order and does not search for further
/// ones, so its output is deterministic for any given input.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(grid: &mut SudokuGrid) -> bool {
        let (row, col) = match grid.first_empty() {
            Some(position) => position,
            None => return true
        };

        for digit in 1..=9 {
            if grid.placement_allowed(row, col, digit) {
                grid.set(row, col, digit);

                if BacktrackingSolver::solve_rec(grid) {
                    return true;
                }

                grid.clear(row, col);
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        if !validator::validate(grid).valid {
            return Solution::Invalid;
        }

        let mut working = *grid;

        if BacktrackingSolver::solve_rec(&mut working) {
            Solution::Solved(working)
        }
        else {
            Solution::Unsolvable
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::validator::validate;

    fn test_solves_correctly(puzzle: &str, solution: &str) {
        let grid: SudokuGrid = puzzle.parse().unwrap();
        let found_solution = BacktrackingSolver.solve(&grid);

        if let Solution::Solved(found) = found_solution {
            let expected: SudokuGrid = solution.parse().unwrap();
            assert_eq!(expected, found, "Solver gave wrong grid.");
        }
        else {
            panic!("Solvable sudoku marked as invalid or unsolvable.");
        }
    }

    #[test]
    fn solves_classic_puzzle() {
        test_solves_correctly(
            "530070000600195000098000060800060003400803001700020006060000280\
             000419005000080079",
            "534678912672195348198342567859761423426853791713924856961537284\
             287419635345286179");
    }

    #[test]
    fn solves_empty_grid() {
        let solution = BacktrackingSolver.solve(&SudokuGrid::empty());

        if let Solution::Solved(grid) = solution {
            assert!(grid.is_full());
            assert!(validate(&grid).valid);
        }
        else {
            panic!("Empty grid marked as invalid or unsolvable.");
        }
    }

    #[test]
    fn empty_grid_solution_is_digit_ascending_first() {
        // With digits tried ascending at the first empty cell in row-major
        // order, the top row of the completed empty grid must be 1..9.
        let grid = BacktrackingSolver.solve(&SudokuGrid::empty())
            .solved_grid().unwrap();

        for col in 0..9 {
            assert_eq!(col as u8 + 1, grid.get(0, col));
        }
    }

    #[test]
    fn solution_preserves_clues_and_validates() {
        let puzzle: SudokuGrid =
            "530070000600195000098000060800060003400803001700020006060000280\
             000419005000080079"
            .parse().unwrap();
        let solution = BacktrackingSolver.solve(&puzzle)
            .solved_grid().unwrap();

        assert!(puzzle.is_subset(&solution));
        assert!(solution.is_full());
        assert!(validate(&solution).valid);
    }

    #[test]
    fn solve_does_not_mutate_its_input() {
        let puzzle: SudokuGrid =
            "530070000600195000098000060800060003400803001700020006060000280\
             000419005000080079"
            .parse().unwrap();
        let copy = puzzle;

        BacktrackingSolver.solve(&puzzle);

        assert_eq!(copy, puzzle);
    }

    #[test]
    fn idempotent_on_complete_valid_grid() {
        let full: SudokuGrid =
            "534678912672195348198342567859761423426853791713924856961537284\
             287419635345286179"
            .parse().unwrap();

        assert_eq!(Solution::Solved(full), BacktrackingSolver.solve(&full));
    }

    #[test]
    fn duplicate_in_row_rejected_without_search() {
        let mut grid = SudokuGrid::empty();
        grid.set(0, 0, 1);
        grid.set(0, 5, 1);

        assert_eq!(Solution::Invalid, BacktrackingSolver.solve(&grid));
    }

    #[test]
    fn complete_grid_with_duplicate_is_invalid_not_solved() {
        let mut full: SudokuGrid =
            "534678912672195348198342567859761423426853791713924856961537284\
             287419635345286179"
            .parse().unwrap();
        full.set(0, 0, 3);

        assert_eq!(Solution::Invalid, BacktrackingSolver.solve(&full));
    }

    #[test]
    fn contradictory_but_duplicate_free_grid_unsolvable() {
        // Cell (0, 0) is empty, but every digit 1-9 is blocked by its row,
        // column, or box, and no cell duplicates a digit within a scope.
        let mut grid = SudokuGrid::empty();
        grid.set(0, 1, 1);
        grid.set(0, 2, 2);
        grid.set(1, 0, 3);
        grid.set(1, 1, 4);
        grid.set(1, 2, 5);
        grid.set(0, 5, 6);
        grid.set(0, 7, 7);
        grid.set(3, 0, 8);
        grid.set(6, 0, 9);

        assert_eq!(Solution::Unsolvable, BacktrackingSolver.solve(&grid));
    }
}
