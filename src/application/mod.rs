//! Application Layer
//!
//! Hosts drive a [`Session`]: it wires the domain services together for one
//! page view and owns their teardown.

mod session;

pub use session::{Frame, Session, SessionOptions};
