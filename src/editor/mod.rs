//! Text editing surface
//!
//! - [`buffer`]: the editable text buffer backing the editor pane
//! - [`writeback`]: turns element edits from the chart into update statements

pub mod buffer;
pub mod writeback;

pub use buffer::{Cursor, TextBuffer};
pub use writeback::write_element;
