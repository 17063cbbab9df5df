//! Statement replay engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: folds statements into an [`ArrayEnvironment`]
//! - [`errors`]: diagnostic kinds and severities
//! - [`diagnostics`]: sinks and the coalescing notifier
//! - [`constants`]: timing defaults
//!
//! # Execution Model
//!
//! Statements run strictly in order; statement *i* sees the environment left
//! by statements `0..i`. Nothing is fatal: a statement that cannot be fully
//! honored raises a diagnostic and is skipped or trimmed, and the replay
//! moves on.
//!
//! [`ArrayEnvironment`]: crate::memory::ArrayEnvironment

pub mod constants;
pub mod diagnostics;
pub mod engine;
pub mod errors;
