//! Sink adapters layered over the core event stream.

mod tracing_sink;

pub use tracing_sink::TracingSink;
