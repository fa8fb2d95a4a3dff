//! Caller-side control loop around a generation engine

use super::{CellRect, TickScheduler, Viewport};
use crate::config::Settings;
use crate::game_of_life::{EngineError, GenerationEngine, Grid, Phase};

/// Input the session reacts to, already decoded from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer click at a pixel position
    Click { x: f32, y: f32 },
    /// The start/stop key
    ToggleRun,
}

/// Counters describing a session so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub generation: u64,
    pub living_cells: usize,
    pub phase: Phase,
}

/// Owns one engine and drives it from frame ticks and input events.
pub struct Session {
    engine: GenerationEngine,
    viewport: Viewport,
    scheduler: TickScheduler,
    max_generations: Option<u64>,
    frames: u64,
}

impl Session {
    /// Size the engine from the configured viewport.
    pub fn new(settings: &Settings) -> Result<Self, EngineError> {
        let viewport = Viewport::from_config(&settings.viewport)?;
        let engine = GenerationEngine::new(viewport.rows(), viewport.cols())?
            .with_parallelism(settings.simulation.parallel);

        log::info!(
            "session grid {}x{} ({}px cells)",
            viewport.rows(),
            viewport.cols(),
            viewport.cell_size()
        );

        Ok(Self {
            engine,
            viewport,
            scheduler: TickScheduler::new(settings.simulation.ticks_per_generation),
            max_generations: settings.simulation.max_generations,
            frames: 0,
        })
    }

    pub fn engine(&self) -> &GenerationEngine {
        &self.engine
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            frames: self.frames,
            generation: self.engine.generation(),
            living_cells: self.engine.current().living_count(),
            phase: self.engine.phase(),
        }
    }

    /// Apply one input event. Clicks outside the seeding phase and toggles
    /// after stopping are ignored.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), EngineError> {
        match (event, self.engine.phase()) {
            (InputEvent::Click { x, y }, Phase::Seeding) => {
                let (row, col) = self.viewport.cell_at(x, y);
                self.engine.seed(row, col)
            }
            (InputEvent::ToggleRun, Phase::Seeding) => {
                self.scheduler.reset();
                self.engine.start()
            }
            (InputEvent::ToggleRun, Phase::Running) => self.engine.stop(),
            (event, phase) => {
                log::debug!("ignoring {:?} while {}", event, phase);
                Ok(())
            }
        }
    }

    /// Place a pattern with its top-left corner at `origin`. Fails without
    /// seeding anything if any live pattern cell would fall off the grid.
    pub fn seed_pattern(&mut self, pattern: &Grid, origin: (usize, usize)) -> Result<(), EngineError> {
        let (origin_row, origin_col) = origin;
        let cells: Vec<(usize, usize)> = pattern
            .living_cells()
            .into_iter()
            .map(|(row, col)| (origin_row.saturating_add(row), origin_col.saturating_add(col)))
            .collect();

        let current = self.engine.current();
        if let Some(&(row, col)) = cells
            .iter()
            .find(|&&(row, col)| current.checked_index(row, col).is_err())
        {
            return Err(EngineError::OutOfRange {
                row,
                col,
                rows: current.rows(),
                cols: current.cols(),
            });
        }

        for (row, col) in cells {
            self.engine.seed(row, col)?;
        }
        Ok(())
    }

    /// Advance one frame. Returns true if a generation was stepped.
    pub fn tick(&mut self) -> Result<bool, EngineError> {
        self.frames += 1;
        if self.engine.phase() != Phase::Running || !self.scheduler.tick() {
            return Ok(false);
        }

        if self.limit_reached() {
            log::info!("reached generation limit {}", self.engine.generation());
            self.engine.stop()?;
            return Ok(false);
        }

        self.engine.step()?;

        if self.limit_reached() {
            log::info!("reached generation limit {}", self.engine.generation());
            self.engine.stop()?;
        }
        Ok(true)
    }

    fn limit_reached(&self) -> bool {
        self.max_generations
            .is_some_and(|max| self.engine.generation() >= max)
    }

    /// Rectangles of every live cell, in row-major order, for the renderer
    pub fn live_cell_rects(&self) -> Vec<CellRect> {
        self.engine
            .current()
            .living_cells()
            .into_iter()
            .map(|(row, col)| self.viewport.cell_rect(row, col))
            .collect()
    }

    /// End the session and keep only the final generation.
    pub fn finish(self) -> Grid {
        log::info!(
            "session finished after {} frames, {} generations",
            self.frames,
            self.engine.generation()
        );
        self.engine.into_grid()
    }
}
