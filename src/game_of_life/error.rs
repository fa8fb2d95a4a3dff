//! Error types for the generation engine

use super::engine::Phase;
use thiserror::Error;

/// Errors produced by grid and engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The cell buffers could not be reserved, or `rows * cols` overflowed.
    #[error("failed to allocate cell buffers for a {rows}x{cols} grid")]
    Allocation { rows: usize, cols: usize },

    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {rows}x{cols}: rows and columns must be non-zero")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Cells must be at least one pixel wide to tile a viewport.
    #[error("invalid cell size 0 for a {width}x{height} viewport")]
    InvalidCellSize { width: u32, height: u32 },

    /// A seed or query addressed a cell outside the grid.
    #[error("cell ({row}, {col}) out of range for {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The operation is not permitted in the engine's current phase.
    #[error("cannot {operation} while the engine is {phase}")]
    InvalidPhase { operation: &'static str, phase: Phase },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_includes_coordinates_and_dimensions() {
        let err = EngineError::OutOfRange {
            row: 12,
            col: 40,
            rows: 5,
            cols: 7,
        };
        let msg = format!("{err}");
        assert!(msg.contains("(12, 40)"), "missing coordinates in: {msg}");
        assert!(msg.contains("5x7"), "missing dimensions in: {msg}");
    }

    #[test]
    fn invalid_phase_names_operation_and_phase() {
        let err = EngineError::InvalidPhase {
            operation: "seed",
            phase: Phase::Running,
        };
        assert_eq!(format!("{err}"), "cannot seed while the engine is running");
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }
}
