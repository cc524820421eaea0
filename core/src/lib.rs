//! Benchmark harness for the yaso runtime library.
//!
//! A [`Registry`] holds categorized benchmark entries in registration order,
//! [`timer`] times a single action against the monotonic clock, and a
//! [`Sink`] receives the human-readable progress lines.

pub mod registry;
pub mod sink;
pub mod timer;


pub use registry::{Action, BenchmarkEntry, Registry};
pub use sink::{ConsoleSink, MemorySink, Sink};
pub use timer::{measure, try_measure};
