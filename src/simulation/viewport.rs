//! Mapping between screen pixels and grid cells

use crate::config::ViewportConfig;
use crate::game_of_life::EngineError;

/// A pixel viewport tiled with square cells.
///
/// The grid gets one extra row and column beyond what fits exactly, and the
/// leftover pixels (`width % cell_size`, `height % cell_size`) are split
/// evenly on both sides when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
    cell_size: u32,
}

/// Screen rectangle of one cell, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self, EngineError> {
        if cell_size == 0 {
            return Err(EngineError::InvalidCellSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    pub fn from_config(config: &ViewportConfig) -> Result<Self, EngineError> {
        Self::new(config.width, config.height, config.cell_size)
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize + 1
    }

    pub fn cols(&self) -> usize {
        (self.width / self.cell_size) as usize + 1
    }

    /// Leftover pixels `(x, y)` after tiling whole cells
    pub fn offset(&self) -> (u32, u32) {
        (self.width % self.cell_size, self.height % self.cell_size)
    }

    /// Translate a pointer position to the `(row, col)` under it, clamped into
    /// the grid so the result is always a valid seed coordinate.
    pub fn cell_at(&self, x: f32, y: f32) -> (usize, usize) {
        let clamp = |pixel: f32, cells: usize| {
            let index = (pixel.max(0.0) / self.cell_size as f32) as usize;
            index.min(cells - 1)
        };
        (clamp(y, self.rows()), clamp(x, self.cols()))
    }

    /// Where the renderer draws the cell at `(row, col)`
    pub fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        let (offset_x, offset_y) = self.offset();
        CellRect {
            x: self.cell_size * col as u32 + offset_x / 2,
            y: self.cell_size * row as u32 + offset_y / 2,
            size: self.cell_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_dimensions() {
        let viewport = Viewport::new(800, 450, 25).unwrap();
        assert_eq!(viewport.cols(), 33);
        assert_eq!(viewport.rows(), 19);
        assert_eq!(viewport.offset(), (0, 0));
    }

    #[test]
    fn test_uneven_viewport_offsets() {
        let viewport = Viewport::new(800, 450, 30).unwrap();
        assert_eq!(viewport.cols(), 27);
        assert_eq!(viewport.rows(), 16);
        assert_eq!(viewport.offset(), (20, 0));
        assert_eq!(viewport.cell_rect(0, 0), CellRect { x: 10, y: 0, size: 30 });
        assert_eq!(viewport.cell_rect(2, 3), CellRect { x: 100, y: 60, size: 30 });
    }

    #[test]
    fn test_pointer_translation() {
        let viewport = Viewport::new(800, 450, 25).unwrap();
        assert_eq!(viewport.cell_at(0.0, 0.0), (0, 0));
        assert_eq!(viewport.cell_at(24.9, 25.0), (1, 0));
        assert_eq!(viewport.cell_at(130.0, 60.0), (2, 5));
    }

    #[test]
    fn test_pointer_translation_clamps() {
        let viewport = Viewport::new(800, 450, 25).unwrap();
        assert_eq!(viewport.cell_at(-40.0, -1.0), (0, 0));
        assert_eq!(viewport.cell_at(10_000.0, 10_000.0), (18, 32));
        assert_eq!(viewport.cell_at(f32::NAN, 30.0), (1, 0));
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        assert_eq!(
            Viewport::new(800, 450, 0),
            Err(EngineError::InvalidCellSize {
                width: 800,
                height: 450
            })
        );
    }
}
