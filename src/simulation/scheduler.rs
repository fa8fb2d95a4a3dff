//! Frame tick cadence

use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Fires once every `ticks_per_generation` frame ticks.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    ticks_per_generation: u32,
    counter: u32,
}

impl TickScheduler {
    pub fn new(ticks_per_generation: u32) -> Self {
        Self {
            ticks_per_generation: ticks_per_generation.max(1),
            counter: 0,
        }
    }

    /// Count one frame tick. Returns true when a generation is due.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.ticks_per_generation {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    /// Drop any partially counted interval.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

/// Sleeps out the remainder of each frame to hold a target frame rate.
pub struct FrameLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
}

impl FrameLimiter {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / frame_rate.max(1) as f64),
            frame_timer: Instant::now(),
        }
    }

    pub fn delay(&mut self) {
        let elapsed = self.frame_timer.elapsed();
        if self.target_frametime > elapsed {
            sleep(self.target_frametime - elapsed);
        }
        self.frame_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_nth_tick() {
        let mut scheduler = TickScheduler::new(15);
        let fired: Vec<usize> = (1..=60).filter(|_| scheduler.tick()).collect();
        assert_eq!(fired, vec![15, 30, 45, 60]);
    }

    #[test]
    fn test_single_tick_interval() {
        let mut scheduler = TickScheduler::new(1);
        assert!((0..5).all(|_| scheduler.tick()));
    }

    #[test]
    fn test_reset_restarts_interval() {
        let mut scheduler = TickScheduler::new(3);
        assert!(!scheduler.tick());
        assert!(!scheduler.tick());
        scheduler.reset();
        assert!(!scheduler.tick());
        assert!(!scheduler.tick());
        assert!(scheduler.tick());
    }

    #[test]
    fn test_frame_limiter_holds_rate() {
        let mut limiter = FrameLimiter::new(200);
        let start = Instant::now();
        for _ in 0..4 {
            limiter.delay();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
