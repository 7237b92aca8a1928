//! Grid data model for rectangular mazes.
//!
//! This module contains the passive data structures the rest of the crate works on: the
//! [`Dimensions`] of a maze, the [`Coord`] of a cell, the four [`Direction`]s a player or the
//! carver can take, and the [`Grid`] itself, which owns the wall flags of every [`Cell`].

use thiserror::Error;

/// Smallest number of cells allowed on either axis.
pub const MIN_SIDE: usize = 5;

/// Largest number of cells allowed on either axis.
pub const MAX_SIDE: usize = 100;

/// Error raised when maze dimensions fall outside the supported range.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DimensionError {
    /// The requested number of columns is outside `[MIN_SIDE, MAX_SIDE]`.
    #[error("maze width of {0} columns is outside the supported range of {MIN_SIDE} to {MAX_SIDE}")]
    Columns(usize),
    /// The requested number of rows is outside `[MIN_SIDE, MAX_SIDE]`.
    #[error("maze height of {0} rows is outside the supported range of {MIN_SIDE} to {MAX_SIDE}")]
    Rows(usize),
}

/// Validated size of a maze.
///
/// A value of this type always holds a width and a height within `[MIN_SIDE, MAX_SIDE]`, which is
/// why [`Grid::new`] takes one instead of raw integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns in the maze.
    cols: usize,
    /// Number of rows in the maze.
    rows: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { cols: 15, rows: 15 }
    }
}

impl Dimensions {
    /// Builds dimensions from a width and a height, rejecting values out of range.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`] naming the first axis that falls outside
    /// `[MIN_SIDE, MAX_SIDE]`.
    pub const fn new(cols: usize, rows: usize) -> Result<Self, DimensionError> {
        if cols < MIN_SIDE || cols > MAX_SIDE {
            return Err(DimensionError::Columns(cols));
        }
        if rows < MIN_SIDE || rows > MAX_SIDE {
            return Err(DimensionError::Rows(rows));
        }

        Ok(Self { cols, rows })
    }

    /// Builds dimensions from arbitrary integers by clamping both into `[MIN_SIDE, MAX_SIDE]`.
    ///
    /// This is the boundary behaviour for user input: out-of-range values are never an error.
    #[must_use]
    pub fn clamped(cols: i64, rows: i64) -> Self {
        Self {
            cols: clamp_side(cols),
            rows: clamp_side(rows),
        }
    }

    /// Returns these dimensions grown (or shrunk, for negative steps) and clamped again.
    #[must_use]
    pub fn grown(self, cols: i64, rows: i64) -> Self {
        Self::clamped(
            signed(self.cols).saturating_add(cols),
            signed(self.rows).saturating_add(rows),
        )
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.cols * self.rows
    }
}

/// Converts an in-range side length to a signed value.
fn signed(side: usize) -> i64 {
    i64::try_from(side).unwrap_or(i64::MAX)
}

/// Clamps a single side length into the supported range.
fn clamp_side(side: i64) -> usize {
    usize::try_from(side).map_or(MIN_SIDE, |side| side.clamp(MIN_SIDE, MAX_SIDE))
}

/// Position of a cell as a column and a row, with `(0, 0)` in the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Zero-based column index.
    pub col: usize,
    /// Zero-based row index.
    pub row: usize,
}

impl Coord {
    /// Builds a coordinate from a column and a row.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// One of the four moves available inside the maze.
///
/// The order of [`Direction::ALL`] (up, right, down, left) is the neighbour enumeration order
/// shared by the carver, the solver and the player movement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last column.
    Right,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the unit `(column, row)` delta of the direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Returns the name of the wall this direction crosses.
    #[must_use]
    pub const fn wall_name(self) -> &'static str {
        match self {
            Self::Up => "top",
            Self::Right => "right",
            Self::Down => "bottom",
            Self::Left => "left",
        }
    }

    /// Bit used for this direction's wall inside [`Walls`].
    const fn bit(self) -> u8 {
        match self {
            Self::Up => 0b0001,
            Self::Right => 0b0010,
            Self::Down => 0b0100,
            Self::Left => 0b1000,
        }
    }
}

/// The four wall flags of a cell. A set flag blocks movement in that direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walls(u8);

impl Default for Walls {
    fn default() -> Self {
        Self::ALL
    }
}

impl Walls {
    /// Every wall present.
    pub const ALL: Self = Self(0b1111);

    /// Returns whether the wall crossed by `direction` is present.
    #[must_use]
    pub const fn has(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Removes the wall crossed by `direction`.
    const fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }

    /// Returns how many walls are still standing.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

/// A single maze cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Wall flags of the cell.
    walls: Walls,
    /// Carver bookkeeping. Always `false` outside of generation.
    visited: bool,
}

impl Cell {
    /// Returns the wall flags of the cell.
    #[must_use]
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Returns whether the carver has marked the cell.
    #[must_use]
    pub const fn visited(&self) -> bool {
        self.visited
    }
}

/// Rectangular collection of cells addressed by [`Coord`].
///
/// Cells are stored row-major. The shape is fixed at construction; the only mutations are the
/// wall-pair removal and visited bookkeeping performed by the carver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Width and height of the grid.
    dimensions: Dimensions,
    /// Row-major cell storage.
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a grid with every wall present and no cell visited.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Cell::default(); dimensions.area()],
        }
    }

    /// Returns the dimensions of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.dimensions.cols
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.dimensions.rows
    }

    /// Returns whether `coord` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.col < self.dimensions.cols && coord.row < self.dimensions.rows
    }

    /// Returns the row-major index of `coord`, if it is in bounds.
    #[must_use]
    pub const fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.dimensions.cols + coord.col)
        } else {
            None
        }
    }

    /// Returns the cell at `coord`, if it is in bounds.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).and_then(|idx| self.cells.get(idx))
    }

    /// Returns the in-bounds neighbour of `coord` in `direction`.
    #[must_use]
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dc, dr) = direction.delta();
        let next = Coord::new(
            coord.col.checked_add_signed(dc)?,
            coord.row.checked_add_signed(dr)?,
        );

        self.contains(next).then_some(next)
    }

    /// Returns whether the cell at `coord` has no wall in `direction`.
    ///
    /// Out-of-bounds coordinates are never open.
    #[must_use]
    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.cell(coord)
            .is_some_and(|cell| !cell.walls.has(direction))
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.dimensions.rows)
            .flat_map(move |row| (0..self.dimensions.cols).map(move |col| Coord::new(col, row)))
    }

    /// Removes the wall between `coord` and its neighbour in `direction`, on both cells.
    ///
    /// Returns the neighbour, or `None` (leaving the grid untouched) when it is out of bounds.
    pub(crate) fn carve(&mut self, coord: Coord, direction: Direction) -> Option<Coord> {
        let next = self.neighbor(coord, direction)?;
        let here = self.index(coord)?;
        let there = self.index(next)?;

        self.cells.get_mut(here)?.walls.remove(direction);
        self.cells.get_mut(there)?.walls.remove(direction.opposite());

        Some(next)
    }

    /// Sets the carver's visited flag on the cell at `coord`.
    pub(crate) fn mark_visited(&mut self, coord: Coord) {
        if let Some(cell) = self.index(coord).and_then(|idx| self.cells.get_mut(idx)) {
            cell.visited = true;
        }
    }

    /// Clears every visited flag.
    pub(crate) fn clear_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the smallest supported grid.
    fn small_grid() -> Grid {
        Grid::new(Dimensions::new(5, 5).expect("5x5 is a valid size"))
    }

    #[test]
    fn test_dimensions_new_accepts_bounds() {
        assert!(Dimensions::new(MIN_SIDE, MAX_SIDE).is_ok());
        assert!(Dimensions::new(MAX_SIDE, MIN_SIDE).is_ok());
    }

    #[test]
    fn test_dimensions_new_rejects_out_of_range() {
        assert_eq!(Dimensions::new(4, 10), Err(DimensionError::Columns(4)));
        assert_eq!(Dimensions::new(10, 101), Err(DimensionError::Rows(101)));
        assert_eq!(Dimensions::new(0, 0), Err(DimensionError::Columns(0)));
    }

    #[test]
    fn test_dimensions_clamped() {
        assert_eq!(Dimensions::clamped(-3, 250), Dimensions { cols: 5, rows: 100 });
        assert_eq!(Dimensions::clamped(42, 7), Dimensions { cols: 42, rows: 7 });
        assert_eq!(Dimensions::clamped(i64::MAX, i64::MIN).area(), 500);
    }

    #[test]
    fn test_dimensions_grown() {
        let dimensions = Dimensions::clamped(10, 98);

        assert_eq!(dimensions.grown(5, 5), Dimensions { cols: 15, rows: 100 });
        assert_eq!(dimensions.grown(-20, 0), Dimensions { cols: 5, rows: 98 });
        assert_eq!(dimensions.grown(0, 0), dimensions);
    }

    #[test]
    fn test_dimension_error_message() {
        let message = DimensionError::Rows(200).to_string();
        assert!(message.contains("200 rows"), "unexpected message: {message}");
    }

    #[test]
    fn test_new_grid_is_fully_walled() {
        let grid = small_grid();

        assert_eq!(grid.coords().count(), 25);
        for coord in grid.coords() {
            let cell = grid.cell(coord).expect("coordinate comes from the grid");
            assert_eq!(cell.walls(), Walls::ALL);
            assert_eq!(cell.walls().count(), 4);
            assert!(!cell.visited());
        }
    }

    #[test]
    fn test_neighbor_respects_bounds() {
        let grid = small_grid();

        assert_eq!(grid.neighbor(Coord::new(0, 0), Direction::Up), None);
        assert_eq!(grid.neighbor(Coord::new(0, 0), Direction::Left), None);
        assert_eq!(
            grid.neighbor(Coord::new(0, 0), Direction::Right),
            Some(Coord::new(1, 0))
        );
        assert_eq!(grid.neighbor(Coord::new(4, 4), Direction::Down), None);
        assert_eq!(grid.neighbor(Coord::new(4, 4), Direction::Right), None);
    }

    #[test]
    fn test_carve_removes_wall_pair() {
        let mut grid = small_grid();

        let next = grid.carve(Coord::new(2, 2), Direction::Down);

        assert_eq!(next, Some(Coord::new(2, 3)));
        assert!(grid.is_open(Coord::new(2, 2), Direction::Down));
        assert!(grid.is_open(Coord::new(2, 3), Direction::Up));
        assert!(!grid.is_open(Coord::new(2, 2), Direction::Up));
        for coord in [Coord::new(2, 2), Coord::new(2, 3)] {
            let cell = grid.cell(coord).expect("coordinate is inside the grid");
            assert_eq!(cell.walls().count(), 3);
        }
    }

    #[test]
    fn test_carve_out_of_bounds_is_noop() {
        let mut grid = small_grid();
        let before = grid.clone();

        assert_eq!(grid.carve(Coord::new(4, 0), Direction::Right), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_visited_bookkeeping() {
        let mut grid = small_grid();

        grid.mark_visited(Coord::new(1, 3));
        assert!(grid.cell(Coord::new(1, 3)).is_some_and(Cell::visited));

        grid.clear_visited();
        assert!(grid.coords().all(|coord| grid.cell(coord).is_some_and(|cell| !cell.visited())));
    }

    #[test]
    fn test_direction_tables_agree() {
        for direction in Direction::ALL {
            let (dc, dr) = direction.delta();
            let (oc, or) = direction.opposite().delta();
            assert_eq!((dc + oc, dr + or), (0, 0));
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::Up.wall_name(), "top");
        assert_eq!(Direction::Down.wall_name(), "bottom");
    }
}
