//! Array model for the replay engine
//!
//! This module provides the data the engine produces:
//! - [`value`]: [`value::Element`] variants (Int, Double, Char) and coercion
//! - [`array`]: [`array::TypedArray`], a fixed-kind element sequence with
//!   bounds-checked update, insert and remove
//! - [`environment`]: [`environment::ArrayEnvironment`], the named arrays
//!   that exist after a replay
//!
//! # Kind Invariant
//!
//! An array's element kind is chosen by its declaration and never changes.
//! Every write goes through [`value::Element::coerce`], so an `int` array
//! written with `'a'` stores `97` and a `char` array written with `106`
//! stores `'j'`.

pub mod array;
pub mod environment;
pub mod value;

pub use array::{IndexError, TypedArray};
pub use environment::ArrayEnvironment;
pub use value::Element;
