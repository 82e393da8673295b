//! This module contains the logic for generating random Sudoku puzzles.
//!
//! Generation is done in two steps: a [Generator] first fills an empty grid
//! with a complete, rule-conforming solution, then removes clues until a
//! difficulty-dependent target count remains. All randomness is drawn from a
//! single [PuzzleRng], so a `(difficulty, seed)` pair fully determines the
//! output; see [generate] for the one-shot entry point.
//!
//! The fill step runs the same backtracking search as the
//! [solver](crate::solver), except that at each empty cell the candidate
//! digits 1 to 9 are tried in a freshly shuffled order instead of ascending
//! order. Filling an empty grid always succeeds, but still requires
//! backtracking, because a randomized prefix can run into dead ends.
//!
//! The removal step does *not* verify that the reduced puzzle has a unique
//! solution. The output is rule-consistent and solvable, since it is derived
//! from a full solution, but callers that need uniqueness must check it
//! themselves.

use crate::{CELL_COUNT, SudokuGrid};
use crate::error::{ParseDifficultyError, SudokuError, SudokuResult};
use crate::rng::PuzzleRng;
use crate::validator;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The difficulty of a generated puzzle, which determines how many clues it
/// retains. Each level maps to a half-open target range of clue counts; the
/// ranges are ordered, so for any seed an easy puzzle keeps more clues than
/// a hard one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {

    /// 40 to 45 clues.
    Easy,

    /// 30 to 40 clues.
    Medium,

    /// 22 to 30 clues.
    Hard
}

impl Difficulty {

    /// Gets the half-open range `[min, max)` from which the clue-count
    /// target for this difficulty is drawn.
    pub fn clue_bounds(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (40, 46),
            Difficulty::Medium => (30, 41),
            Difficulty::Hard => (22, 31)
        }
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard"
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parses a difficulty from its lowercase name: `"easy"`, `"medium"`,
    /// or `"hard"`.
    fn from_str(name: &str) -> Result<Difficulty, ParseDifficultyError> {
        match name {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(String::from(name)))
        }
    }
}

fn shuffle<T>(rng: &mut PuzzleRng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..len.saturating_sub(1) {
        let j = rng.next_int(i, len);
        vec.swap(i, j);
    }

    vec
}

/// A generator builds random Sudoku: complete solutions via [Generator::fill]
/// and reduced puzzles via [Generator::generate]. It owns the [PuzzleRng]
/// that decides the content, so a generator created from a given seed always
/// produces the same results in the same order.
pub struct Generator {
    rng: PuzzleRng
}

impl Generator {

    /// Creates a new generator that draws from the given random source.
    pub fn new(rng: PuzzleRng) -> Generator {
        Generator {
            rng
        }
    }

    /// Creates a new generator whose random source is seeded with the given
    /// seed (see [PuzzleRng::new] for the seed handling).
    pub fn from_seed(seed: i64) -> Generator {
        Generator::new(PuzzleRng::new(seed))
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid) -> bool {
        let (row, col) = match grid.first_empty() {
            Some(position) => position,
            None => return true
        };

        for digit in shuffle(&mut self.rng, 1..=9u8) {
            if grid.placement_allowed(row, col, digit) {
                grid.set(row, col, digit);

                if self.fill_rec(grid) {
                    return true;
                }

                grid.clear(row, col);
            }
        }

        false
    }

    /// Fills the given grid with random digits that satisfy the Sudoku
    /// rules and keep all already present digits. If that is not possible,
    /// the grid remains unchanged and an error is returned.
    ///
    /// If no error is returned, the result is full and passes
    /// [validate](crate::validator::validate).
    ///
    /// # Errors
    ///
    /// * [SudokuError::UnfillableGrid] if the present digits already
    /// duplicate within a row, column, or box, or if no assignment of the
    /// empty cells completes the grid.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if !validator::validate(grid).valid {
            return Err(SudokuError::UnfillableGrid);
        }

        if self.fill_rec(grid) {
            Ok(())
        }
        else {
            Err(SudokuError::UnfillableGrid)
        }
    }

    /// Generates a new puzzle at the given difficulty. The random source is
    /// consumed in a fixed order (candidate shuffles during the fill, then
    /// one clue-count draw, then one shuffle of all 81 positions for
    /// removal), so the result is fully determined by the generator's seed
    /// and the difficulty.
    ///
    /// The output has exactly as many clues as the drawn target, lies
    /// within [Difficulty::clue_bounds], and is solvable. It is *not*
    /// guaranteed to have a unique solution.
    ///
    /// Note that generating advances the random source, so repeated calls
    /// on one generator yield different puzzles; use [generate] or a fresh
    /// generator per puzzle for reproducible output.
    pub fn generate(&mut self, difficulty: Difficulty) -> SudokuGrid {
        let mut grid = SudokuGrid::empty();
        let filled = self.fill_rec(&mut grid);
        debug_assert!(filled, "an empty grid always has a completion");

        let (min_clues, max_clues) = difficulty.clue_bounds();
        let target_clues = self.rng.next_int(min_clues, max_clues);
        let removals = CELL_COUNT.saturating_sub(target_clues);
        let positions = shuffle(&mut self.rng, SudokuGrid::positions());

        for &(row, col) in positions.iter().take(removals) {
            grid.clear(row, col);
        }

        grid
    }
}

/// Generates a puzzle at the given difficulty from the given seed, using a
/// fresh [Generator]. Identical `(difficulty, seed)` pairs produce identical
/// puzzles.
///
/// ```
/// use sudoku_engine::generator::{self, Difficulty};
///
/// let first = generator::generate(Difficulty::Hard, 7);
/// let second = generator::generate(Difficulty::Hard, 7);
///
/// assert_eq!(first, second);
/// ```
pub fn generate(difficulty: Difficulty, seed: i64) -> SudokuGrid {
    Generator::from_seed(seed).generate(difficulty)
}
