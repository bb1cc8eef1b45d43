//! This module contains the candidate computation, which determines the
//! legal digits for every empty cell of a grid.
//!
//! The computation is a pure function of the current cell numbers: display
//! flags are ignored and nothing is cached, since any change to a cell can
//! invalidate the candidates of all its row, column, and block peers.

use crate::{CELL_COUNT, SIZE, SudokuGrid};
use crate::util::DigitSet;

/// The candidate result for a single cell, as computed by
/// [grid_candidates](fn.grid_candidates.html).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CellCandidates {

    /// The cell already contains the wrapped digit.
    Fixed(usize),

    /// The cell is empty and any of the contained digits can be entered
    /// without conflicting with a row, column, or block peer.
    ///
    /// An *empty* set signals an unsatisfiable grid: the cell has no legal
    /// digit left, so no completion of the current state exists.
    Options(DigitSet)
}

impl CellCandidates {

    /// Returns the option set of this result, or `None` if the cell is
    /// fixed.
    pub fn options(&self) -> Option<DigitSet> {
        match self {
            CellCandidates::Fixed(_) => None,
            CellCandidates::Options(set) => Some(*set)
        }
    }
}

/// Computes the [CellCandidates](enum.CellCandidates.html) of all 81 cells
/// of the given grid, in row-major order. For an empty cell, the candidates
/// are the digits 1 to 9 minus all digits already present in its row,
/// column, and block.
///
/// ```
/// use sudoku_classic::SudokuGrid;
/// use sudoku_classic::candidate::{CellCandidates, grid_candidates};
///
/// let mut grid = SudokuGrid::empty();
/// grid.set_cell(0, 0, 4).unwrap();
///
/// let candidates = grid_candidates(&grid);
///
/// assert_eq!(CellCandidates::Fixed(4), candidates[0]);
///
/// // (1, 0) shares a row and block with the 4
/// if let CellCandidates::Options(set) = &candidates[1] {
///     assert!(!set.contains(4));
///     assert_eq!(8, set.len());
/// }
/// ```
pub fn grid_candidates(grid: &SudokuGrid) -> Vec<CellCandidates> {
    let mut row_digits = [DigitSet::empty(); SIZE];
    let mut column_digits = [DigitSet::empty(); SIZE];
    let mut block_digits = [DigitSet::empty(); SIZE];

    for cell in grid.cells() {
        if let Some(number) = cell.number() {
            row_digits[cell.row()].insert(number);
            column_digits[cell.column()].insert(number);
            block_digits[cell.block()].insert(number);
        }
    }

    let mut candidates = Vec::with_capacity(CELL_COUNT);

    for cell in grid.cells() {
        let result = match cell.number() {
            Some(number) => CellCandidates::Fixed(number),
            None => {
                let taken = row_digits[cell.row()]
                    | column_digits[cell.column()]
                    | block_digits[cell.block()];
                CellCandidates::Options(DigitSet::all() - taken)
            }
        };
        candidates.push(result);
    }

    candidates
}

#[cfg(test)]
mod tests {

    use super::*;

    const PUZZLE: &str = "\
        000081000002007800053000170\
        370000000600000003000000024\
        069000230005900400000650000";

    fn options_of(candidates: &[CellCandidates], column: usize, row: usize)
            -> DigitSet {
        candidates[row * SIZE + column].options()
            .expect("expected an empty cell")
    }

    #[test]
    fn full_grid_has_only_fixed_cells() {
        let grid = SudokuGrid::parse("\
            746281359912537846853496172\
            374125698628749513591368724\
            169874235285913467437652981").unwrap();
        let candidates = grid_candidates(&grid);

        assert_eq!(CELL_COUNT, candidates.len());
        assert_eq!(CellCandidates::Fixed(7), candidates[0]);
        assert!(candidates.iter()
            .all(|c| matches!(c, CellCandidates::Fixed(_))));
    }

    #[test]
    fn empty_grid_has_all_options() {
        let candidates = grid_candidates(&SudokuGrid::empty());

        assert!(candidates.iter()
            .all(|c| c.options() == Some(DigitSet::all())));
    }

    #[test]
    fn options_exclude_row_column_and_block_digits() {
        let grid = SudokuGrid::parse(PUZZLE).unwrap();
        let candidates = grid_candidates(&grid);

        // Row 0 contains { 8, 1 }, column 0 contains { 3, 6 }, and the
        // top-left block contains { 2, 5, 3 }.
        let expected: DigitSet = vec![4, 7, 9].into_iter().collect();

        assert_eq!(expected, options_of(&candidates, 0, 0));
    }

    #[test]
    fn blocked_cell_has_empty_options() {
        let mut grid = SudokuGrid::empty();

        for column in 1..SIZE {
            grid.set_cell(column, 0, column).unwrap();
        }

        grid.set_cell(0, 5, 9).unwrap();

        let candidates = grid_candidates(&grid);

        assert!(options_of(&candidates, 0, 0).is_empty());
    }

    #[test]
    fn display_flags_do_not_affect_candidates() {
        let mut grid = SudokuGrid::parse(PUZZLE).unwrap();
        let before = grid_candidates(&grid);

        for cell in grid.cells.iter_mut() {
            cell.flags.selected = true;
            cell.flags.error = true;
            cell.flags.important = true;
            cell.flags.supported = true;
        }

        assert_eq!(before, grid_candidates(&grid));
    }
}
