//! Game of Life rules implementation

use super::Grid;
use rayon::prelude::*;

/// Game of Life rules engine (B3/S23)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    #[inline]
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Overwrite every cell of `next` with the successor of `previous`.
    ///
    /// Reads come only from `previous` and writes go only to `next`, so the
    /// row-parallel pass is equivalent to the sequential one.
    pub(crate) fn evolve_into(previous: &Grid, next: &mut Grid, parallel: bool) {
        assert_eq!(
            (previous.rows(), previous.cols()),
            (next.rows(), next.cols()),
            "generation buffers must share dimensions"
        );

        let cols = previous.cols();
        let update_row = |(row, out): (usize, &mut [bool])| {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = Self::should_be_alive(
                    previous.get(row, col),
                    previous.count_neighbors(row, col),
                );
            }
        };

        if parallel {
            next.cells_mut()
                .par_chunks_mut(cols)
                .enumerate()
                .for_each(update_row);
        } else {
            next.cells_mut()
                .chunks_mut(cols)
                .enumerate()
                .for_each(update_row);
        }
    }
}
