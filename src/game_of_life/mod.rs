//! Game of Life core functionality

pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod rules;

pub use engine::{GenerationEngine, Phase};
pub use error::EngineError;
pub use grid::Grid;
pub use rules::GameOfLifeRules;
pub use io::{create_example_patterns, load_grid_from_file, save_grid_to_file};
