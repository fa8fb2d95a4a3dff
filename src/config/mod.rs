//! Configuration management for the simulation

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
    ViewportConfig,
};
