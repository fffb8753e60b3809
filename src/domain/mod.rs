//! Domain Layer
//!
//! The portfolio core: stage sequencing, scroll-reveal and the starfield,
//! plus the built-in content they operate on.
//!
//! ## Structure
//!
//! - `entities/` - Portfolio content and the contact form
//! - `value_objects/` - Stage, loading progress, section ids, thresholds
//! - `services/` - StageController, VisibilityTracker, Starfield, TimerQueue
//! - `ports/` - Event sink, viewport and link opener interfaces
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Time arrives as a `Duration` since mount
//! 2. **Ports & Adapters** - Rendering, scrolling and mail go through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
