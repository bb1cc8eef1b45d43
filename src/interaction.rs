//! This module contains the interaction surface, the collaborator through
//! which an interactive front end mutates a grid one cell at a time and
//! maintains the transient display flags of its cells.
//!
//! The surface never stores any handle to a visual element. Instead, a
//! [ViewListener](trait.ViewListener.html) is notified after every handled
//! input so the front end can re-render from the current cell state. The
//! flags managed here are purely cosmetic; candidate computation and solving
//! ignore them entirely.

use crate::{CellFlags, SIZE, SudokuGrid, index};
use crate::error::{SudokuError, SudokuResult};

/// A descriptor of a player input that targets a single cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyInput {

    /// A digit key from 1 to 9 was pressed.
    Digit(usize),

    /// A key that erases the cell content was pressed (typically Backspace
    /// or Delete).
    Erase
}

/// A listener that is notified whenever the interaction surface has changed
/// cell state or display flags, so that the front end can refresh its view.
///
/// The unit type `()` implements this trait as a no-op listener for
/// non-interactive use.
pub trait ViewListener {

    /// Called after every handled input with the grid in its new state.
    fn view_updated(&mut self, grid: &SudokuGrid);
}

impl ViewListener for () {
    fn view_updated(&mut self, _: &SudokuGrid) { }
}

/// Handles player input on a [SudokuGrid](../struct.SudokuGrid.html) and
/// reconciles the display flags of its cells.
///
/// All methods silently ignore mutations of locked cells: a clue can never
/// be overwritten or erased by player input, and this is not reported as an
/// error.
pub struct InteractionSurface<V: ViewListener> {
    view: V
}

impl InteractionSurface<()> {

    /// Creates a new interaction surface without a view, for use in
    /// non-interactive contexts such as tests.
    pub fn new_silent() -> InteractionSurface<()> {
        InteractionSurface::new(())
    }
}

fn check_bounds(column: usize, row: usize) -> SudokuResult<usize> {
    if column >= SIZE || row >= SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else {
        Ok(index(column, row))
    }
}

/// Marks the edited cell and every row, column, or block peer holding the
/// same digit as being in error.
fn mark_conflicts(grid: &mut SudokuGrid, cell_index: usize) {
    let edited = &grid.cells[cell_index];
    let column = edited.column();
    let row = edited.row();
    let block = edited.block();
    let number = edited.number;
    let mut conflict = false;

    for (index, cell) in grid.cells.iter_mut().enumerate() {
        if index == cell_index {
            continue;
        }

        let peer = cell.row() == row || cell.column() == column ||
            cell.block() == block;

        if peer && cell.number == number {
            cell.flags.error = true;
            conflict = true;
        }
    }

    if conflict {
        grid.cells[cell_index].flags.error = true;
    }
}

/// Recomputes the `important` flag: all cells holding the same digit as the
/// edited cell are marked, or no cell if it is empty.
fn mark_important(grid: &mut SudokuGrid, number: Option<usize>) {
    for cell in grid.cells.iter_mut() {
        cell.flags.important = number.is_some() && cell.number == number;
    }
}

impl<V: ViewListener> InteractionSurface<V> {

    /// Creates a new interaction surface that notifies the given view
    /// listener after every handled input.
    pub fn new(view: V) -> InteractionSurface<V> {
        InteractionSurface {
            view
        }
    }

    /// Gets a reference to the view listener of this interaction surface.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handles a key press that targets the cell at the given position.
    ///
    /// If the cell is locked, nothing changes (but the view is still
    /// notified). Otherwise, a [KeyInput::Digit] assigns the digit and
    /// reconciles conflicts: if the edited cell was previously in error, all
    /// error flags are reset first, then the cell and every row, column, or
    /// block peer holding the same digit are flagged. A [KeyInput::Erase]
    /// clears the cell. In both cases, the `important` flag is recomputed
    /// for the whole grid afterwards.
    ///
    /// [KeyInput::Digit]: enum.KeyInput.html#variant.Digit
    /// [KeyInput::Erase]: enum.KeyInput.html#variant.Erase
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid receiving the input.
    /// * `column`: The column (x-coordinate) of the targeted cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the targeted cell. Must be in the
    /// range `[0, 9[`.
    /// * `input`: The [KeyInput](enum.KeyInput.html) describing the pressed
    /// key.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If the input is a
    /// [KeyInput::Digit](enum.KeyInput.html#variant.Digit) whose digit is
    /// not in the range `[1, 9]`.
    pub fn key_down(&mut self, grid: &mut SudokuGrid, column: usize,
            row: usize, input: KeyInput) -> SudokuResult<()> {
        let cell_index = check_bounds(column, row)?;

        if let KeyInput::Digit(digit) = input {
            if digit == 0 || digit > SIZE {
                return Err(SudokuError::InvalidNumber);
            }
        }

        if !grid.cells[cell_index].is_locked() {
            match input {
                KeyInput::Digit(digit) => {
                    grid.cells[cell_index].number = Some(digit);

                    if grid.cells[cell_index].flags.error {
                        for cell in grid.cells.iter_mut() {
                            cell.flags.error = false;
                        }
                    }

                    mark_conflicts(grid, cell_index);
                },
                KeyInput::Erase => {
                    grid.cells[cell_index].number = None;
                }
            }

            let number = grid.cells[cell_index].number;
            mark_important(grid, number);
        }

        self.view.view_updated(grid);
        Ok(())
    }

    /// Handles the cell at the given position gaining input focus. The cell
    /// is marked as selected, every cell sharing its row or column is marked
    /// as supported, and every cell holding the same digit is marked as
    /// important.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn focus(&mut self, grid: &mut SudokuGrid, column: usize,
            row: usize) -> SudokuResult<()> {
        let cell_index = check_bounds(column, row)?;
        grid.cells[cell_index].flags.selected = true;

        for cell in grid.cells.iter_mut() {
            if cell.row() == row || cell.column() == column {
                cell.flags.supported = true;
            }
        }

        if let Some(number) = grid.cells[cell_index].number {
            for cell in grid.cells.iter_mut() {
                if cell.number == Some(number) {
                    cell.flags.important = true;
                }
            }
        }

        self.view.view_updated(grid);
        Ok(())
    }

    /// Handles the cell at the given position losing input focus. The cell
    /// is deselected and, if it is flagged as being in error and is not a
    /// locked clue, its value is cleared. Afterwards, all transient flags
    /// (supported, important, error) are reset across the whole grid.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn blur(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> SudokuResult<()> {
        let cell_index = check_bounds(column, row)?;
        grid.cells[cell_index].flags.selected = false;

        if grid.cells[cell_index].flags.error
                && !grid.cells[cell_index].is_locked() {
            grid.cells[cell_index].number = None;
        }

        for cell in grid.cells.iter_mut() {
            let selected = cell.flags.selected;
            cell.flags = CellFlags {
                selected,
                ..CellFlags::default()
            };
        }

        self.view.view_updated(grid);
        Ok(())
    }
}
