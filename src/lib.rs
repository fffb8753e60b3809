//! Folio - terminal portfolio
//!
//! A staged splash (loading, welcome gate, main page), scroll-reveal of page
//! sections and a starfield backdrop, driven by explicit timers so any host
//! can render it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Frame, Session, SessionOptions};
pub use config::Config;
pub use domain::entities::{ContactForm, Portfolio};
pub use domain::ports::{LinkOpener, PortfolioEvent, PortfolioEventSink, Viewport};
pub use domain::services::{StageController, StageTiming, VisibilityTracker};
pub use domain::value_objects::{LoadingProgress, SectionId, Stage, VisibilityThreshold};
pub use error::{FolioError, FolioResult};
