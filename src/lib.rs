//! Conway's Game of Life generation engine
//!
//! A double-buffered, bounded-grid engine with seed/step/query operations, plus a
//! headless session that reproduces the screen loop's tick cadence and input handling.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{EngineError, GenerationEngine, Grid, Phase};
pub use simulation::{InputEvent, Session};
