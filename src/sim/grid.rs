//! Square cell grid
//!
//! The grid is the single owner of per-cell state. Everything else reads and
//! writes cells through it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// State of a single cell. Exactly one variant holds per coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Tree,
    Burning,
    Firefighter,
}

/// Grid coordinate (row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (chessboard) distance
    #[inline]
    pub fn chebyshev(self, other: Coord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

/// Orthogonal neighbour offsets in fixed order: up, down, left, right
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Fixed-size N x N grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-empty grid of `size` x `size` cells
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Cells per side
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.size && at.col < self.size
    }

    #[inline]
    fn index(&self, at: Coord) -> usize {
        assert!(
            self.contains(at),
            "cell ({}, {}) outside {}x{} grid",
            at.row,
            at.col,
            self.size,
            self.size
        );
        at.row * self.size + at.col
    }

    #[inline]
    pub fn get(&self, at: Coord) -> CellState {
        self.cells[self.index(at)]
    }

    #[inline]
    pub fn set(&mut self, at: Coord, state: CellState) {
        let idx = self.index(at);
        self.cells[idx] = state;
    }

    /// Clear to a fresh all-empty grid of the given dimension
    pub fn reset(&mut self, size: usize) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size * size, CellState::Empty);
    }

    /// In-bounds orthogonal neighbours in order up, down, left, right
    pub fn neighbors4(&self, at: Coord) -> SmallVec<[Coord; 4]> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = at.row.checked_add_signed(dr)?;
                let col = at.col.checked_add_signed(dc)?;
                let n = Coord::new(row, col);
                self.contains(n).then_some(n)
            })
            .collect()
    }

    /// Iterate all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Coord::new(i / size, i % size), state))
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.count(CellState::Empty), 16);
        assert_eq!(grid.get(Coord::new(3, 3)), CellState::Empty);
    }

    #[test]
    fn test_set_get() {
        let mut grid = Grid::new(3);
        grid.set(Coord::new(1, 2), CellState::Tree);
        assert_eq!(grid.get(Coord::new(1, 2)), CellState::Tree);
        assert_eq!(grid.get(Coord::new(2, 1)), CellState::Empty);
        assert_eq!(grid.count(CellState::Tree), 1);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_column_panics() {
        let grid = Grid::new(3);
        // Would alias (1, 0) without the bounds check
        let _ = grid.get(Coord::new(0, 3));
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let grid = Grid::new(3);
        let center: Vec<_> = grid.neighbors4(Coord::new(1, 1)).into_iter().collect();
        assert_eq!(
            center,
            vec![
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2)
            ]
        );

        let corner: Vec<_> = grid.neighbors4(Coord::new(0, 0)).into_iter().collect();
        assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        let far_corner: Vec<_> = grid.neighbors4(Coord::new(2, 2)).into_iter().collect();
        assert_eq!(far_corner, vec![Coord::new(1, 2), Coord::new(2, 1)]);
    }

    #[test]
    fn test_reset_resizes_and_clears() {
        let mut grid = Grid::new(2);
        grid.set(Coord::new(0, 0), CellState::Burning);
        grid.reset(5);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.count(CellState::Empty), 25);
    }

    #[test]
    fn test_chebyshev() {
        let a = Coord::new(2, 2);
        assert_eq!(a.chebyshev(Coord::new(2, 2)), 0);
        assert_eq!(a.chebyshev(Coord::new(3, 3)), 1);
        assert_eq!(a.chebyshev(Coord::new(0, 3)), 2);
    }

    #[test]
    fn test_iter_row_major() {
        let mut grid = Grid::new(2);
        grid.set(Coord::new(1, 0), CellState::Tree);
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[2], (Coord::new(1, 0), CellState::Tree));
    }
}
