//! # Introduction
//!
//! arraytty replays a small C-like array notation typed into an editor and
//! charts the resulting arrays in the terminal. The text buffer is the only
//! durable state: every view is re-derived from it, either all at once (live
//! mode) or one statement at a time with forward/back stepping (step mode).
//! The front end is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Text → Recognizer → Statements → Replay engine → Environment → Timeline → TUI
//!                                                                     ↑         │
//!                                                                     └─ write-back
//! ```
//!
//! 1. [`parser`]: splits the text into lines and recognizes each statement.
//! 2. [`interpreter`]: replays statements into named arrays, raising
//!    [`interpreter::errors::Diagnostic`]s for statements it cannot honor.
//! 3. [`memory`]: [`memory::TypedArray`] and [`memory::ArrayEnvironment`].
//! 4. [`snapshot`]: the step-mode history stack.
//! 5. [`timeline`]: live/step modes, autoplay, debounced validation.
//! 6. [`editor`]: text buffer and element write-back.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported notation
//!
//! ```text
//! int    a[3] = {1, 2, 3};
//! double d[]  = {1.5, 2.7};
//! char   w[4] = "byte";
//! a[1] = 9;
//! a.insert(0, 4);
//! a.remove(2);      // or a.delete(2);
//! ```

pub mod config;
pub mod editor;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod snapshot;
pub mod timeline;
pub mod ui;
