//! Domain Services
//!
//! Timer-driven state machines for the portfolio page. None of them read a
//! clock or touch the terminal: callers pass the elapsed time explicitly.

mod stage_controller;
mod starfield;
pub mod timers;
mod visibility_tracker;

pub use stage_controller::{StageController, StageTiming};
pub use starfield::{Star, Starfield, StarfieldSettings};
pub use timers::{TimerId, TimerQueue};
pub use visibility_tracker::VisibilityTracker;

pub(crate) use stage_controller::millis;
