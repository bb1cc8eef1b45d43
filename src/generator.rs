//! This module contains logic for generating random Sudoku.
//!
//! Generation of a puzzle is done by randomly seeding an empty grid,
//! completing it with the [BacktrackingSolver](../solver/struct.BacktrackingSolver.html),
//! and then removing random cells until the requested number of clues
//! remains.

use crate::{CELL_COUNT, SIZE, SudokuGrid};
use crate::solver::{BacktrackingSolver, Solver};

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly generates Sudoku puzzles with a given number of
/// clues. It uses a random number generator to decide the content. For most
/// cases, sensible defaults are provided by [Generator::new_default]; for
/// reproducible output, inject a seeded RNG via [Generator::new].
///
/// [Generator::new_default]: #method.new_default
/// [Generator::new]: #method.new
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Picks a uniformly random cell index among the filled or, if `filled`
    /// is `false`, the empty cells of the grid. At least one such cell must
    /// exist.
    fn random_cell_index(&mut self, grid: &SudokuGrid, filled: bool)
            -> usize {
        let indices: Vec<usize> = grid.cells().iter()
            .enumerate()
            .filter(|(_, cell)| cell.number().is_some() == filled)
            .map(|(index, _)| index)
            .collect();
        indices[self.rng.gen_range(0..indices.len())]
    }

    /// Assigns the digits 1 to 9, in sequence, to nine distinct uniformly
    /// random cells of an empty grid.
    fn seed(&mut self) -> SudokuGrid {
        let mut grid = SudokuGrid::empty();

        for digit in 1..=SIZE {
            let index = self.random_cell_index(&grid, false);
            grid.cells[index].number = Some(digit);
        }

        grid
    }

    /// Generates a new random Sudoku puzzle with the given number of clues.
    /// The result is guaranteed to have at least one completion, which the
    /// [BacktrackingSolver](../solver/struct.BacktrackingSolver.html) can
    /// find; with few clues it is usually not unique.
    ///
    /// All clue cells of the returned grid are locked and all other cells
    /// are empty and unlocked, as if the grid had been freshly parsed from
    /// its digit string.
    ///
    /// # Arguments
    ///
    /// * `clue_count`: The number of cells of the returned puzzle that are
    /// filled. Out-of-range values are silently clamped into `[0, 81]`, so
    /// this method never fails.
    pub fn generate(&mut self, clue_count: i32) -> SudokuGrid {
        let clue_count = clue_count.clamp(0, CELL_COUNT as i32) as usize;

        // A seeding can place digits so that no completion exists; in that
        // rare case the solve result is not solved and a fresh seed is
        // drawn.
        let mut solved = loop {
            let result = BacktrackingSolver.solve(&self.seed());

            if result.is_solved() {
                break result;
            }
        };

        for _ in 0..(CELL_COUNT - clue_count) {
            let index = self.random_cell_index(&solved, true);
            solved.cells[index].number = None;
        }

        // Rebuilding from the digit string locks exactly the final clue
        // pattern, not the cells filled during generation.
        SudokuGrid::parse(solved.to_digits().as_str()).unwrap()
    }
}
