//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::Grid;
use crate::simulation::SessionStats;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded generation, as written to reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub generation: u64,
    pub living_cells: usize,
    /// One string per grid row, '1' alive and '0' dead
    pub rows: Vec<String>,
}

impl GenerationSnapshot {
    pub fn capture(generation: u64, grid: &Grid) -> Self {
        Self {
            generation,
            living_cells: grid.living_count(),
            rows: grid
                .iter_rows()
                .map(|row| row.iter().map(|&cell| if cell { '1' } else { '0' }).collect())
                .collect(),
        }
    }
}

/// Format grids and session summaries for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.cols() + 1) * 3);
        for row in grid.iter_rows() {
            output.extend(row.iter().map(|&cell| if cell { '█' } else { '·' }));
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..grid.cols() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (y, row) in grid.iter_rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for &cell in row {
                output.push_str(if cell { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    pub fn format_stats(stats: &SessionStats) -> String {
        format!(
            "Phase: {}\nFrames: {}\nGeneration: {}\nLiving cells: {}\n",
            stats.phase, stats.frames, stats.generation, stats.living_cells
        )
    }

    /// Save snapshots to `output_dir` in the requested format
    pub fn save_snapshots<P: AsRef<Path>>(
        snapshots: &[GenerationSnapshot],
        output_dir: P,
        format: OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                for snapshot in snapshots {
                    let filename = format!("generation_{:05}.txt", snapshot.generation);
                    let mut content = snapshot.rows.join("\n");
                    content.push('\n');
                    std::fs::write(output_dir.join(&filename), content)
                        .with_context(|| format!("Failed to write {}", filename))?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(snapshots)
                    .context("Failed to serialize snapshots")?;
                std::fs::write(output_dir.join("generations.json"), json)
                    .context("Failed to write generations.json")?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Phase;
    use tempfile::tempdir;

    fn cross() -> Grid {
        Grid::from_rows(vec![
            vec![false, true, false],
            vec![true, true, true],
            vec![false, true, false],
        ])
        .unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let grid = cross();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "·█·\n███\n·█·\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ██████"));
    }

    #[test]
    fn test_snapshot_capture() {
        let snapshot = GenerationSnapshot::capture(7, &cross());
        assert_eq!(snapshot.generation, 7);
        assert_eq!(snapshot.living_cells, 5);
        assert_eq!(snapshot.rows, vec!["010", "111", "010"]);
    }

    #[test]
    fn test_save_snapshots_text_and_json() {
        let temp_dir = tempdir().unwrap();
        let snapshots = vec![
            GenerationSnapshot::capture(0, &cross()),
            GenerationSnapshot::capture(1, &cross()),
        ];

        GridFormatter::save_snapshots(&snapshots, temp_dir.path(), OutputFormat::Text).unwrap();
        let first = std::fs::read_to_string(temp_dir.path().join("generation_00000.txt")).unwrap();
        assert_eq!(first, "010\n111\n010\n");
        assert!(temp_dir.path().join("generation_00001.txt").exists());

        GridFormatter::save_snapshots(&snapshots, temp_dir.path(), OutputFormat::Json).unwrap();
        let json = std::fs::read_to_string(temp_dir.path().join("generations.json")).unwrap();
        let loaded: Vec<GenerationSnapshot> = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, snapshots);
    }

    #[test]
    fn test_stats_formatting() {
        let stats = SessionStats {
            frames: 120,
            generation: 8,
            living_cells: 3,
            phase: Phase::Stopped,
        };
        let text = GridFormatter::format_stats(&stats);
        assert!(text.contains("Phase: stopped"));
        assert!(text.contains("Generation: 8"));
    }

    #[test]
    fn test_color_output() {
        assert!(ColorOutput::colored("test", Color::Blue).contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
        assert!(ColorOutput::warning("missing").contains("missing"));
    }
}
