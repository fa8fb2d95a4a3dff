//! Double-buffered generation engine

use super::{EngineError, GameOfLifeRules, Grid};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulation phase. The owner drives the transitions; the engine only gates
/// which operations each phase permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Accepting seeds, not stepping.
    Seeding,
    /// Stepping on each scheduled tick, seeds rejected.
    Running,
    /// Terminal. The last generation stays readable.
    Stopped,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Seeding => "seeding",
            Phase::Running => "running",
            Phase::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Owns the current and previous generation and advances between them.
///
/// `buffers[active]` is the current generation; the other buffer is scratch
/// that only `step` reads. Stepping flips `active` and overwrites the new
/// current buffer in full, so nothing is reallocated after construction.
#[derive(Debug)]
pub struct GenerationEngine {
    buffers: [Grid; 2],
    active: usize,
    phase: Phase,
    generation: u64,
    parallel: bool,
}

impl GenerationEngine {
    /// Allocate both buffers with every cell dead. Either both allocations
    /// succeed or no engine is returned.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        let current = Grid::new(rows, cols)?;
        let previous = Grid::new(rows, cols)?;

        log::debug!("allocated {}x{} generation engine", rows, cols);

        Ok(Self {
            buffers: [current, previous],
            active: 0,
            phase: Phase::Seeding,
            generation: 0,
            parallel: false,
        })
    }

    /// Split each step's row pass across the rayon pool.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn rows(&self) -> usize {
        self.current().rows()
    }

    pub fn cols(&self) -> usize {
        self.current().cols()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The authoritative generation, as shown to the renderer.
    pub fn current(&self) -> &Grid {
        &self.buffers[self.active]
    }

    fn require(&self, phase: Phase, operation: &'static str) -> Result<(), EngineError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(EngineError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Mark a cell of the current generation alive. Seeding an already live
    /// cell is a no-op.
    pub fn seed(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        self.require(Phase::Seeding, "seed")?;
        self.buffers[self.active].set(row, col, true)
    }

    /// Read a cell of the current generation.
    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        self.current().cell(row, col)
    }

    /// `Seeding -> Running`
    pub fn start(&mut self) -> Result<(), EngineError> {
        self.require(Phase::Seeding, "start")?;
        self.phase = Phase::Running;
        log::debug!(
            "engine running with {} live cells",
            self.current().living_count()
        );
        Ok(())
    }

    /// `Running -> Stopped`
    pub fn stop(&mut self) -> Result<(), EngineError> {
        self.require(Phase::Running, "stop")?;
        self.phase = Phase::Stopped;
        log::debug!("engine stopped at generation {}", self.generation);
        Ok(())
    }

    /// Advance exactly one generation. The phase is checked before the buffers
    /// swap, so a rejected step leaves the current generation untouched.
    pub fn step(&mut self) -> Result<(), EngineError> {
        self.require(Phase::Running, "step")?;

        let parallel = self.parallel;
        self.active = 1 - self.active;
        let (current, previous) = self.split_buffers();
        GameOfLifeRules::evolve_into(previous, current, parallel);
        self.generation += 1;

        log::trace!(
            "generation {}: {} live cells",
            self.generation,
            self.current().living_count()
        );
        Ok(())
    }

    /// Mutable current buffer alongside the read-only previous one.
    fn split_buffers(&mut self) -> (&mut Grid, &Grid) {
        let [first, second] = &mut self.buffers;
        if self.active == 0 {
            (first, &*second)
        } else {
            (second, &*first)
        }
    }

    /// Tear the engine down, releasing the scratch buffer and handing back the
    /// final generation for a last render.
    pub fn into_grid(self) -> Grid {
        let [first, second] = self.buffers;
        if self.active == 0 {
            first
        } else {
            second
        }
    }
}
