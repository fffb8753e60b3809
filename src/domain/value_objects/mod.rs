//! Domain Value Objects
//!
//! Small immutable types shared by the stage controller, the visibility
//! tracker and the hosts that render them.

mod progress;
mod section_id;
mod stage;
mod threshold;

pub use progress::{LoadingProgress, PROGRESS_COMPLETE};
pub use section_id::SectionId;
pub use stage::Stage;
pub use threshold::VisibilityThreshold;
