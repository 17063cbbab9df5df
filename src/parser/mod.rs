//! Array notation parser
//!
//! This module turns a text buffer into an ordered list of statements:
//! - [`ast`]: statement and literal definitions
//! - [`scanner`]: character cursor for one line
//! - [`recognizer`]: classifies one line into a [`ast::Statement`]
//! - [`parse`]: splits a buffer into lines and recognizes each
//!
//! # Supported notation
//!
//! Declarations of `int`, `double` and `char` arrays, element updates,
//! `.insert(...)`, `.remove(...)` / `.delete(...)` and `//` line comments.
//! There are no expressions, control flow or scopes; anything else on a line
//! is left unparsed.
//!
//! # Parser Implementation
//!
//! Hand-written line scanner. No regular expressions or parser generators.

pub mod ast;
pub mod parse;
pub mod recognizer;
pub mod scanner;
