//! Integration layer
//!
//! Wires the Elm core to the outside world:
//! - Runtime with message and command queues
//! - AppRunner driving the terminal event loop
//! - Render/resize coalescing

pub mod app_runner;
pub mod coalescer;
pub mod runtime;
