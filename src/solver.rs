//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally
//! usable implementation.

use crate::{SIZE, SudokuGrid};
use crate::candidate::{CellCandidates, grid_candidates};

/// A trait for structs which have the ability to solve Sudoku. Not all
/// implementers must be able to complete every solveable grid, some solvers
/// may be less powerful, similar to a less experienced human solver.
///
/// There is deliberately no dedicated "unsolvable" signal: a solver returns
/// the most complete grid it reached, and callers decide by checking
/// [SudokuGrid::is_solved](../struct.SudokuGrid.html#method.is_solved) on
/// the result.
pub trait Solver {

    /// Solves, or attempts to solve, the provided grid. The input is never
    /// mutated; all work happens on an internal copy. If no completion
    /// exists in the explored branch, the returned grid is a
    /// maximally-deduced dead end for which `is_solved()` is `false`.
    fn solve(&self, grid: &SudokuGrid) -> SudokuGrid;
}

/// A [Solver](trait.Solver.html) which combines single-candidate propagation
/// with guided backtracking. Solving proceeds in two phases:
///
/// 1. *Propagation*: the candidates of all 81 cells are computed in bulk and
/// every cell with exactly one candidate is fixed to it. This is repeated
/// until a full pass makes no change, since one deduction can unlock others.
/// 2. *Branching*: once propagation stalls, candidates are recomputed once
/// and the first cell (in row-major order) with the smallest number of
/// candidates is selected. Each of its candidates is tried in ascending
/// order on a fresh copy of the grid, recursing into the same procedure.
/// The first branch that reaches a solved grid wins.
///
/// If every candidate of the selected cell fails, the search gives up
/// immediately and returns the propagated grid unsolved; it does not move on
/// to cells with more candidates, since those assignments were already
/// exhausted transitively.
///
/// Branching always selects the first cell found at the smallest candidate
/// count, not the "best" such cell by any deeper measure. This tie-break is
/// part of the observable behavior (it decides which of several completions
/// of an ambiguous grid is returned) and must not be changed.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Repeatedly fixes all single-candidate cells until a full pass makes
    /// no change. Returns `false` if a cell without any candidate was
    /// encountered, which means the grid cannot be completed.
    fn propagate(grid: &mut SudokuGrid) -> bool {
        loop {
            let candidates = grid_candidates(grid);
            let mut changed = false;

            for (index, candidate) in candidates.iter().enumerate() {
                if let CellCandidates::Options(options) = candidate {
                    if options.is_empty() {
                        return false;
                    }

                    if options.len() == 1 {
                        grid.cells[index].number = options.min();
                        changed = true;
                    }
                }
            }

            if !changed {
                return true;
            }
        }
    }

    fn solve_grid(grid: &SudokuGrid) -> SudokuGrid {
        let mut copy = grid.clone();

        if !BacktrackingSolver::propagate(&mut copy) {
            return copy;
        }

        if copy.is_solved() {
            return copy;
        }

        let candidates = grid_candidates(&copy);

        for power in 2..=SIZE {
            for (index, candidate) in candidates.iter().enumerate() {
                if let CellCandidates::Options(options) = candidate {
                    if options.len() != power {
                        continue;
                    }

                    for digit in options.iter() {
                        let mut branch = copy.clone();
                        branch.cells[index].number = Some(digit);
                        let result =
                            BacktrackingSolver::solve_grid(&branch);

                        if result.is_solved() {
                            return result;
                        }
                    }

                    return copy;
                }
            }
        }

        copy
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &SudokuGrid) -> SudokuGrid {
        BacktrackingSolver::solve_grid(grid)
    }
}
