//! Headless stand-in for the screen loop: viewport mapping, tick cadence and
//! input handling around a generation engine

pub mod scheduler;
pub mod session;
pub mod viewport;

pub use scheduler::{FrameLimiter, TickScheduler};
pub use session::{InputEvent, Session, SessionStats};
pub use viewport::{CellRect, Viewport};
