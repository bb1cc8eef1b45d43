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

//! This crate implements an easy-to-understand engine for classic 9x9
//! Sudoku. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking the solved state of a grid according to standard rules
//! * Computing the candidate digits of every empty cell
//! * Solving Sudoku using single-candidate propagation combined with guided
//! backtracking
//! * Generating random Sudoku with a configurable number of clues
//! * Reconciling display flags (selection, highlighting, conflicts) for an
//! interactive front end
//!
//! # Parsing and printing Sudoku
//!
//! Grids are exchanged as 81-digit strings in row-major order, where `'0'`
//! denotes an empty cell. See [SudokuGrid::parse] for details. Parsed
//! non-empty cells are marked as locked clues, which interactive front ends
//! must not overwrite.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     000081000002007800053000170\
//!     370000000600000003000000024\
//!     069000230005900400000650000").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking the solved state
//!
//! A grid is solved if every cell contains a digit and every row, column,
//! and block contains each digit from 1 to 9 exactly once.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     746281359912537846853496172\
//!     374125698628749513591368724\
//!     169874235285913467437652981").unwrap();
//! assert!(grid.is_solved());
//! ```
//!
//! # Solving Sudoku
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! totally or partially solve Sudoku. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which
//! repeatedly fixes cells with a single candidate and branches on the cell
//! with the fewest candidates when deduction stalls.
//!
//! Note that the solver never raises an error for unsolvable input. Instead,
//! it returns the most complete grid it could reach, so callers must check
//! [SudokuGrid::is_solved] on the result.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::solver::{BacktrackingSolver, Solver};
//!
//! let puzzle = SudokuGrid::parse("\
//!     000081000002007800053000170\
//!     370000000600000003000000024\
//!     069000230005900400000650000").unwrap();
//! let result = BacktrackingSolver.solve(&puzzle);
//!
//! assert!(result.is_solved());
//! ```
//!
//! # Generating Sudoku
//!
//! A [Generator](generator::Generator) seeds an empty grid with random
//! digits, solves it completely, and then removes cells until the requested
//! number of clues remains. The random number generator is injectable via
//! the `Rng` trait from the
//! [rand](https://rust-random.github.io/rand/rand/index.html) crate, which
//! allows for reproducible generation in tests.
//!
//! ```
//! use sudoku_classic::generator::Generator;
//! use sudoku_classic::solver::{BacktrackingSolver, Solver};
//!
//! // new_default yields a generator with rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate(30);
//!
//! assert_eq!(30, puzzle.count_clues());
//! assert!(BacktrackingSolver.solve(&puzzle).is_solved());
//! ```

pub mod candidate;
pub mod error;
pub mod generator;
pub mod interaction;
pub mod solver;
pub mod util;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The width and height of the grid, i.e. the number of cells in each row,
/// column, and block.
pub const SIZE: usize = 9;

/// The width and height of one block, i.e. one of the nine 3x3 sub-grids.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in a grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Transient display flags of a [Cell](struct.Cell.html), owned by the
/// interactive front end (see the [interaction] module). They are purely
/// cosmetic: candidate computation, solving, and generation never read them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CellFlags {

    /// The cell currently has input focus.
    pub selected: bool,

    /// The cell shares a row or column with the selected cell.
    pub supported: bool,

    /// The cell holds the same digit as the selected cell.
    pub important: bool,

    /// The cell conflicts with another cell in its row, column, or block.
    pub error: bool
}

/// A single cell of a [SudokuGrid](struct.SudokuGrid.html). Its coordinates
/// are fixed at construction time and never change afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    column: usize,
    row: usize,
    block: usize,
    pub(crate) number: Option<usize>,
    locked: bool,
    pub(crate) flags: CellFlags
}

impl Cell {

    /// The column (x-coordinate) of this cell, in the range `[0, 9[`.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The row (y-coordinate) of this cell, in the range `[0, 9[`.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The index of the 3x3 block containing this cell, in the range
    /// `[0, 9[`. Blocks are numbered left-to-right, top-to-bottom, so this is
    /// `(row / 3) * 3 + column / 3`.
    pub fn block(&self) -> usize {
        self.block
    }

    /// The digit contained in this cell, or `None` if it is empty.
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    /// Indicates whether this cell is a clue, i.e. was filled at grid
    /// construction time. Locked cells are never changed by the interaction
    /// surface.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The transient display flags of this cell.
    pub fn flags(&self) -> CellFlags {
        self.flags
    }
}

/// A classic Sudoku grid composed of 81 [Cell](struct.Cell.html)s organized
/// in 9 rows, 9 columns, and 9 3x3 blocks.
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║              ...                  ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// A grid is a value: cloning it produces a fully independent copy whose
/// cells share no state with the original. The solver relies on this to
/// explore many branches from a shared ancestor state.
///
/// `SudokuGrid` implements `Display` with a box-drawing pretty print, and
/// serializes (via serde) as its 81-digit string representation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    pub(crate) cells: Vec<Cell>
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

fn to_char(cell: &Cell) -> char {
    if let Some(n) = cell.number {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
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

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(&grid.cells[index(x, y)]), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn from_values(values: &[usize]) -> SudokuGrid {
    let mut cells = Vec::with_capacity(CELL_COUNT);

    for (index, &value) in values.iter().enumerate() {
        let column = index % SIZE;
        let row = index / SIZE;

        cells.push(Cell {
            column,
            row,
            block: (row / BLOCK_SIZE) * BLOCK_SIZE + column / BLOCK_SIZE,
            number: if value == 0 { None } else { Some(value) },
            locked: value != 0,
            flags: CellFlags::default()
        });
    }

    SudokuGrid {
        cells
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid. All cells are empty and unlocked.
    pub fn empty() -> SudokuGrid {
        from_values(&[0; CELL_COUNT])
    }

    /// Parses a code encoding a Sudoku grid. The code must consist of
    /// exactly 81 digit characters which are assigned to the cells
    /// left-to-right, top-to-bottom, where each row is completed before the
    /// next one is started. `'0'` denotes an empty cell.
    ///
    /// Every cell that receives a non-zero digit is locked, i.e. marked as a
    /// clue (see [Cell::is_locked](struct.Cell.html#method.is_locked)).
    ///
    /// For a lenient variant that accepts malformed input, see
    /// [SudokuGrid::parse_lenient](#method.parse_lenient).
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::WrongLength` If the code does not contain
    /// exactly 81 characters.
    /// * `SudokuParseError::InvalidCharacter` If the code contains a
    /// character other than the digits '0' to '9'.
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        if code.chars().count() != CELL_COUNT {
            return Err(SudokuParseError::WrongLength);
        }

        let mut values = Vec::with_capacity(CELL_COUNT);

        for c in code.chars() {
            let digit = c.to_digit(10)
                .ok_or(SudokuParseError::InvalidCharacter)?;
            values.push(digit as usize);
        }

        Ok(from_values(&values))
    }

    /// Parses a code encoding a Sudoku grid, tolerating malformed input.
    /// All characters which are not digits are dropped first. If fewer than
    /// 81 digits remain, the missing cells at the end are left empty; excess
    /// digits are ignored.
    ///
    /// Note that dropped characters shift the positions of all digits after
    /// them, so this method can silently produce a sparser or different
    /// board than intended. Prefer [SudokuGrid::parse](#method.parse), which
    /// rejects such input.
    pub fn parse_lenient(code: &str) -> SudokuGrid {
        let mut values: Vec<usize> = code.chars()
            .filter_map(|c| c.to_digit(10))
            .map(|digit| digit as usize)
            .take(CELL_COUNT)
            .collect();
        values.resize(CELL_COUNT, 0);
        from_values(&values)
    }

    /// Converts the grid into its 81-digit string representation. Cells are
    /// listed in row-major order and empty cells are written as `'0'`.
    ///
    /// The digit string round-trips with [SudokuGrid::parse](#method.parse).
    /// Note that this covers only the cell contents: parsing locks every
    /// non-empty cell, so a grid filled via
    /// [SudokuGrid::set_cell](#method.set_cell) is not equal to the reparse
    /// of its own code.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::empty();
    /// grid.set_cell(3, 0, 5).unwrap();
    ///
    /// let code = grid.to_digits();
    /// assert!(code.starts_with("000500000"));
    /// assert_eq!(code, SudokuGrid::parse(code.as_str()).unwrap().to_digits());
    /// ```
    pub fn to_digits(&self) -> String {
        self.cells.iter()
            .map(|cell| match cell.number {
                Some(n) => (b'0' + n as u8) as char,
                None => '0'
            })
            .collect()
    }

    /// Gets a reference to the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn cell(&self, column: usize, row: usize) -> SudokuResult<&Cell> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(&self.cells[index(column, row)])
        }
    }

    /// Gets the digit in the cell at the specified position, or `None` if
    /// that cell is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_number(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        Ok(self.cell(column, row)?.number)
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// Note that the `locked` flag is *not* checked here; enforcing it for
    /// player input is the responsibility of the
    /// [InteractionSurface](interaction/struct.InteractionSurface.html).
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)].number = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)].number = None;
        Ok(())
    }

    /// Gets the cells of the `n`-th row, in left-to-right order.
    ///
    /// # Errors
    ///
    /// If `n` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn row(&self, n: usize) -> SudokuResult<Vec<&Cell>> {
        if n >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        Ok((0..SIZE).map(|i| &self.cells[index(i, n)]).collect())
    }

    /// Gets the cells of the `n`-th column, in top-to-bottom order.
    ///
    /// # Errors
    ///
    /// If `n` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn column(&self, n: usize) -> SudokuResult<Vec<&Cell>> {
        if n >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        Ok((0..SIZE).map(|i| &self.cells[index(n, i)]).collect())
    }

    /// Gets the cells of the `n`-th block, in left-to-right, top-to-bottom
    /// order. Blocks are numbered left-to-right, top-to-bottom as well, so
    /// block 0 is in the top-left corner and block 8 in the bottom-right
    /// one.
    ///
    /// # Errors
    ///
    /// If `n` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn block(&self, n: usize) -> SudokuResult<Vec<&Cell>> {
        if n >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        let start_column = (n % BLOCK_SIZE) * BLOCK_SIZE;
        let start_row = (n / BLOCK_SIZE) * BLOCK_SIZE;
        let mut block = Vec::with_capacity(SIZE);

        for dy in 0..BLOCK_SIZE {
            for dx in 0..BLOCK_SIZE {
                block.push(
                    &self.cells[index(start_column + dx, start_row + dy)]);
            }
        }

        Ok(block)
    }

    /// Gets a slice of all 81 cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indicates whether this grid is solved, i.e. every cell contains a
    /// digit and every row, column, and block contains each digit from 1 to
    /// 9 exactly once.
    pub fn is_solved(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        for n in 0..SIZE {
            let groups = [
                self.row(n).unwrap(),
                self.column(n).unwrap(),
                self.block(n).unwrap()
            ];

            for group in groups.iter() {
                let digits: DigitSet = group.iter()
                    .filter_map(|cell| cell.number)
                    .collect();

                if digits != DigitSet::all() {
                    return false;
                }
            }
        }

        true
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.number.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues](#method.count_clues)
    /// returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.number.is_some())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues](#method.count_clues)
    /// returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.number.is_none())
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_digits()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const SOLVED: &str = "\
        746281359912537846853496172\
        374125698628749513591368724\
        169874235285913467437652981";

    #[test]
    fn parse_ok() {
        let mut code = String::from("100000000");
        code.push_str("020000000");
        code.push_str(&"0".repeat(62));
        code.push('9');
        let grid = SudokuGrid::parse(code.as_str()).unwrap();

        assert_eq!(Some(1), grid.get_number(0, 0).unwrap());
        assert_eq!(None, grid.get_number(1, 0).unwrap());
        assert_eq!(Some(2), grid.get_number(1, 1).unwrap());
        assert_eq!(Some(9), grid.get_number(8, 8).unwrap());
        assert_eq!(None, grid.get_number(4, 4).unwrap());
    }

    #[test]
    fn parse_assigns_coordinates_and_locks() {
        let grid = SudokuGrid::parse(SOLVED).unwrap();
        let cell = grid.cell(7, 4).unwrap();

        assert_eq!(7, cell.column());
        assert_eq!(4, cell.row());
        assert_eq!(5, cell.block());
        assert!(cell.is_locked());

        let mut partial_code = String::from("5");
        partial_code.push_str(&"0".repeat(80));
        let partial = SudokuGrid::parse(partial_code.as_str()).unwrap();

        assert!(partial.cell(0, 0).unwrap().is_locked());
        assert!(!partial.cell(1, 0).unwrap().is_locked());
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(Err(SudokuParseError::WrongLength),
            SudokuGrid::parse("123"));
        assert_eq!(Err(SudokuParseError::WrongLength),
            SudokuGrid::parse(&"0".repeat(82)));
        assert_eq!(Err(SudokuParseError::WrongLength), SudokuGrid::parse(""));
    }

    #[test]
    fn parse_invalid_character() {
        let mut code = "0".repeat(80);
        code.push('x');

        assert_eq!(Err(SudokuParseError::InvalidCharacter),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn lenient_parse_filters_and_pads() {
        let grid = SudokuGrid::parse_lenient("1a2 3,4\n5");

        assert_eq!(Some(1), grid.get_number(0, 0).unwrap());
        assert_eq!(Some(2), grid.get_number(1, 0).unwrap());
        assert_eq!(Some(3), grid.get_number(2, 0).unwrap());
        assert_eq!(Some(4), grid.get_number(3, 0).unwrap());
        assert_eq!(Some(5), grid.get_number(4, 0).unwrap());
        assert_eq!(76, grid.cells().iter()
            .filter(|cell| cell.number().is_none())
            .count());
    }

    #[test]
    fn lenient_parse_truncates_excess() {
        let mut code = SOLVED.to_owned();
        code.push_str("12345");
        let grid = SudokuGrid::parse_lenient(code.as_str());

        assert_eq!(SudokuGrid::parse(SOLVED).unwrap(), grid);
    }

    #[test]
    fn digit_string_round_trip() {
        let grid = SudokuGrid::parse(SOLVED).unwrap();

        assert_eq!(SOLVED, grid.to_digits().as_str());

        let empty = SudokuGrid::empty();

        assert_eq!("0".repeat(81), empty.to_digits());
    }

    #[test]
    fn reparse_preserves_digits_but_locks_filled_cells() {
        let mut grid = SudokuGrid::empty();
        grid.set_cell(3, 0, 5).unwrap();

        let reparsed = SudokuGrid::parse(grid.to_digits().as_str()).unwrap();

        assert_eq!(grid.to_digits(), reparsed.to_digits());
        assert!(!grid.cell(3, 0).unwrap().is_locked());
        assert!(reparsed.cell(3, 0).unwrap().is_locked());
        assert_ne!(grid, reparsed);
    }

    #[test]
    fn row_lookup() {
        let grid = SudokuGrid::parse(SOLVED).unwrap();
        let numbers: Vec<usize> = grid.row(2).unwrap().iter()
            .filter_map(|cell| cell.number())
            .collect();

        assert_eq!(vec![8, 5, 3, 4, 9, 6, 1, 7, 2], numbers);
    }

    #[test]
    fn column_lookup() {
        let grid = SudokuGrid::parse(SOLVED).unwrap();
        let numbers: Vec<usize> = grid.column(0).unwrap().iter()
            .filter_map(|cell| cell.number())
            .collect();

        assert_eq!(vec![7, 9, 8, 3, 6, 5, 1, 2, 4], numbers);
    }

    #[test]
    fn block_lookup() {
        let grid = SudokuGrid::parse(SOLVED).unwrap();
        let numbers: Vec<usize> = grid.block(4).unwrap().iter()
            .filter_map(|cell| cell.number())
            .collect();

        assert_eq!(vec![1, 2, 5, 7, 4, 9, 3, 6, 8], numbers);
    }

    #[test]
    fn group_lookup_out_of_bounds() {
        let grid = SudokuGrid::empty();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.row(9).map(|_| ()));
        assert_eq!(Err(SudokuError::OutOfBounds),
            grid.column(9).map(|_| ()));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.block(9).map(|_| ()));
    }

    #[test]
    fn cell_mutation() {
        let mut grid = SudokuGrid::empty();

        grid.set_cell(2, 5, 8).unwrap();
        assert_eq!(Some(8), grid.get_number(2, 5).unwrap());

        grid.set_cell(2, 5, 3).unwrap();
        assert_eq!(Some(3), grid.get_number(2, 5).unwrap());

        grid.clear_cell(2, 5).unwrap();
        assert_eq!(None, grid.get_number(2, 5).unwrap());
    }

    #[test]
    fn cell_mutation_errors() {
        let mut grid = SudokuGrid::empty();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(9, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 9, 1));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 10));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(9, 9));
    }

    #[test]
    fn solved_grid_is_solved() {
        assert!(SudokuGrid::parse(SOLVED).unwrap().is_solved());
    }

    /// Relabeling all digits with a permutation preserves the solved state.
    #[test]
    fn permuted_solved_grid_is_solved() {
        let permutation = [0usize, 4, 9, 1, 7, 3, 8, 2, 6, 5];
        let code: String = SOLVED.chars()
            .map(|c| {
                let digit = c.to_digit(10).unwrap() as usize;
                (b'0' + permutation[digit] as u8) as char
            })
            .collect();

        assert!(SudokuGrid::parse(code.as_str()).unwrap().is_solved());
    }

    #[test]
    fn grid_with_hole_is_not_solved() {
        let mut grid = SudokuGrid::parse(SOLVED).unwrap();
        grid.clear_cell(4, 6).unwrap();

        assert!(!grid.is_solved());
    }

    #[test]
    fn grid_with_duplicate_is_not_solved() {
        let mut grid = SudokuGrid::parse(SOLVED).unwrap();

        // (0, 0) holds 7; copying it onto (1, 0) duplicates it in row 0,
        // column 1, and block 0.
        grid.set_cell(1, 0, 7).unwrap();

        assert!(!grid.is_solved());
    }

    #[test]
    fn empty_grid_is_not_solved() {
        assert!(!SudokuGrid::empty().is_solved());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::empty();
        let mut partial = SudokuGrid::empty();
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(8, 8, 2).unwrap();
        let full = SudokuGrid::parse(SOLVED).unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(2, partial.count_clues());
        assert_eq!(81, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn copies_are_independent() {
        let original = SudokuGrid::parse(SOLVED).unwrap();
        let mut copy = original.clone();

        copy.clear_cell(0, 0).unwrap();
        copy.set_cell(1, 0, 9).unwrap();

        assert_eq!(Some(7), original.get_number(0, 0).unwrap());
        assert_eq!(Some(4), original.get_number(1, 0).unwrap());
        assert!(original.is_solved());
        assert!(!copy.is_solved());
    }

    #[test]
    fn serde_round_trip() {
        let grid = SudokuGrid::parse(SOLVED).unwrap();
        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!(format!("\"{}\"", SOLVED), json);

        let deserialized: SudokuGrid =
            serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(grid, deserialized);
    }

    #[test]
    fn serde_rejects_malformed_code() {
        let result: Result<SudokuGrid, _> =
            serde_json::from_str("\"12345\"");

        assert!(result.is_err());
    }
}
