//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`source`]: Editor with syntax highlighting, cursor and step indicators
//! - [`chart`]: Bar chart of the current array with a selectable bar
//! - [`arrays`]: Every array of the displayed environment
//! - [`notifications`]: Coalesced diagnostics
//! - [`status`]: Status bar with keybindings and execution state
//! - [`help`]: Toggleable help overlay
//!
//! # Architecture
//!
//! Each pane module exports:
//! - A primary `render_*_pane()` function
//! - Associated state types (e.g., `ScrollState`, `RenderData`)
//! - Helper functions specific to that pane

pub mod arrays;
pub mod chart;
pub mod help;
pub mod notifications;
pub mod source;
pub mod status;

// Re-export render functions for convenience
pub use arrays::{render_arrays_pane, ArraysRenderData};
pub use chart::{render_chart_pane, ChartRenderData};
pub use help::render_help_pane;
pub use notifications::render_notifications_pane;
pub use source::{render_source_pane, SourceRenderData, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
