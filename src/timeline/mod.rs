//! Execution timeline over the text buffer
//!
//! - [`execution`]: [`ExecutionTimeline`], live and step replay, autoplay and
//!   element write-back
//! - [`timer`]: the cancelable debounce and autoplay timers it polls
//!
//! # Rules
//!
//! - Switching mode resets the step cursor, clears history back to the
//!   empty snapshot, stops autoplay and cancels pending timers.
//! - Any text change in step mode restarts step mode from the beginning, so
//!   history never refers to statements that no longer exist.
//! - Manual stepping and reset stop autoplay.
//! - Stepping past either end is a no-op.

pub mod execution;
pub mod timer;

pub use execution::{ExecutionTimeline, Mode, TimelineEvents};
