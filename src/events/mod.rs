//! Structured game events and the sinks that receive them.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: One observable step of play
//! - [`EventSink`]: Receiver the engine emits into
//! - [`EventLog`]: Recording sink for tests and harnesses
//! - [`TracingSink`]: Forwards events to `tracing`

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink, NullSink, TracingSink};
