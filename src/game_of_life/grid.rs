//! Grid representation and utilities for Game of Life

use super::EngineError;
use anyhow::Result;
use itertools::iproduct;

/// Offsets of the eight Moore neighbors, clockwise from north-west.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size, row-major grid of cell states. Cells outside the grid are dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead.
    ///
    /// The buffer is reserved up front so an allocation failure comes back as
    /// [`EngineError::Allocation`] instead of aborting the process.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }

        let len = rows
            .checked_mul(cols)
            .ok_or(EngineError::Allocation { rows, cols })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| EngineError::Allocation { rows, cols })?;
        cells.resize(len, false);

        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from a 2D boolean array
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let height = rows.len();
        let width = rows[0].len();

        if width == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let mut grid = Self::new(height, width)?;
        for (dst, src) in grid.cells.iter_mut().zip(rows.into_iter().flatten()) {
            *dst = src;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Flat index of `(row, col)`, or `OutOfRange` when outside the grid.
    pub fn checked_index(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(EngineError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell value at coordinates; out of bounds cells read as dead
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[self.index(row, col)]
    }

    /// Bounds-checked read
    pub fn cell(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), EngineError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living neighbors of a cell. Neighbors past an edge are skipped, so
    /// edge cells have five candidates and corner cells three.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < self.rows && c < self.cols).then(|| self.cells[self.index(r, c)])
            })
            .filter(|&alive| alive)
            .count() as u8
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(row, col)| self.get(row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(EngineError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_overflowing_size_is_allocation_error() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(EngineError::Allocation {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn test_grid_from_rows() {
        let rows = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.living_count(), 5);
        assert_eq!(grid.living_cells(), vec![(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![true, false], vec![true]];
        assert!(Grid::from_rows(rows).is_err());
        assert!(Grid::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_set_out_of_range() {
        let mut grid = Grid::new(2, 3).unwrap();
        assert_eq!(
            grid.set(2, 0, true),
            Err(EngineError::OutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(grid.set(1, 3, true).is_err());
        assert!(grid.is_empty());
        assert!(!grid.get(7, 7));
        assert!(grid.cell(0, 3).is_err());
    }

    #[test]
    fn test_neighbor_counting() {
        let rows = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_rows(rows).unwrap();

        assert_eq!(grid.count_neighbors(1, 1), 8);
        // corner: two ring cells, center is dead
        assert_eq!(grid.count_neighbors(0, 0), 2);
        // edge: four ring cells, center is dead
        assert_eq!(grid.count_neighbors(0, 1), 4);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let mut grid = Grid::new(4, 4).unwrap();
        for (row, col) in [(0, 3), (3, 0), (3, 3)] {
            grid.set(row, col, true).unwrap();
        }
        // every live cell sits on the far side of a wrapped neighborhood
        assert_eq!(grid.count_neighbors(0, 0), 0);

        let full = Grid::from_rows(vec![vec![true; 4]; 4]).unwrap();
        assert_eq!(full.count_neighbors(0, 0), 3);
        assert_eq!(full.count_neighbors(3, 3), 3);
        assert_eq!(full.count_neighbors(0, 3), 3);
        assert_eq!(full.count_neighbors(3, 1), 5);
        assert_eq!(full.count_neighbors(1, 3), 5);
        assert_eq!(full.count_neighbors(2, 2), 8);
    }
}
