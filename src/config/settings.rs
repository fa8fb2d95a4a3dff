//! Configuration settings for the simulation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub viewport: ViewportConfig,
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Screen area the grid is laid over, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Frame ticks per second
    pub frame_rate: u32,
    /// One generation is stepped every this many frame ticks
    pub ticks_per_generation: u32,
    #[serde(default)]
    pub max_generations: Option<u64>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub seed_pattern: Option<PathBuf>,
    /// Grid cell (row, col) the pattern's top-left corner is placed on
    #[serde(default)]
    pub pattern_origin: (usize, usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_generations: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig {
                width: 800,
                height: 450,
                cell_size: 25,
            },
            simulation: SimulationConfig {
                frame_rate: 60,
                ticks_per_generation: 15,
                max_generations: None,
                parallel: false,
            },
            input: InputConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
                show_generations: false,
                output_directory: PathBuf::from("output/generations"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            anyhow::bail!("Viewport width and height must be positive");
        }

        if self.viewport.cell_size == 0 {
            anyhow::bail!("Cell size must be positive");
        }

        if self.simulation.frame_rate == 0 {
            anyhow::bail!("Frame rate must be positive");
        }

        if self.simulation.ticks_per_generation == 0 {
            anyhow::bail!("Ticks per generation must be positive");
        }

        if let Some(ref pattern) = self.input.seed_pattern {
            if !pattern.exists() {
                anyhow::bail!("Seed pattern file does not exist: {}", pattern.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(cell_size) = cli_overrides.cell_size {
            self.viewport.cell_size = cell_size;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(max_generations);
        }
        if let Some(parallel) = cli_overrides.parallel {
            self.simulation.parallel = parallel;
        }
        if let Some(ref pattern) = cli_overrides.seed_pattern {
            self.input.seed_pattern = Some(pattern.clone());
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub cell_size: Option<u32>,
    pub max_generations: Option<u64>,
    pub parallel: Option<bool>,
    pub seed_pattern: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}
