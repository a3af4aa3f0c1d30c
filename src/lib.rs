//! Fresh Catch — catch the fresh produce, dodge the spoiled.
//!
//! Core modules:
//! - `entities`: pure data (basket, falling items, phases, outcomes)
//! - `config`: tunable constants, JSON loading and validation
//! - `clock`: monotonic time source and tick continuation tickets
//! - `spawn`: time-driven produce spawning
//! - `compute`: basket movement, item motion and catch detection
//! - `score`: score and win/lose outcome machine
//! - `session`: run/pause/restart orchestration and the per-tick sequence

pub mod clock;
pub mod compute;
pub mod config;
pub mod entities;
pub mod score;
pub mod session;
pub mod spawn;

pub use clock::{Clock, ManualClock, MonotonicClock, TickTicket};
pub use config::{ConfigError, GameConfig};
pub use session::{ControlsView, Effect, InputSnapshot, Session};
