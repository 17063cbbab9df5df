//! Array element representation
//!
//! This module defines the [`Element`] enum. Every element of a
//! [`TypedArray`](super::array::TypedArray) holds the same variant: the array's
//! [`ElementKind`] is fixed at declaration and literals are coerced into it.
//!
//! # Coercion
//!
//! | literal  | `int`            | `double`          | `char`               |
//! |----------|------------------|-------------------|----------------------|
//! | `5`      | `5`              | `5.0`             | code point 5         |
//! | `2.7`    | `2` (truncated)  | `2.7`             | code point 2         |
//! | `'a'`    | `97`             | `97.0`            | `'a'`                |
//!
//! Code points that are not valid `char`s become U+FFFD.

use crate::parser::ast::{ElementKind, Literal};
use std::fmt;

/// One array element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Int(i64),
    Double(f64),
    Char(char),
}

impl Element {
    /// Coerce a source literal into an element of `kind`
    pub fn coerce(literal: Literal, kind: ElementKind) -> Element {
        match (kind, literal) {
            (ElementKind::Int, Literal::Int(n)) => Element::Int(n),
            (ElementKind::Int, Literal::Double(x)) => Element::Int(x as i64),
            (ElementKind::Int, Literal::Char(c)) => Element::Int(c as i64),

            (ElementKind::Double, Literal::Int(n)) => Element::Double(n as f64),
            (ElementKind::Double, Literal::Double(x)) => Element::Double(x),
            (ElementKind::Double, Literal::Char(c)) => Element::Double(c as u32 as f64),

            (ElementKind::Char, Literal::Int(n)) => Element::Char(char_from_code(n)),
            (ElementKind::Char, Literal::Double(x)) => Element::Char(char_from_code(x as i64)),
            (ElementKind::Char, Literal::Char(c)) => Element::Char(c),
        }
    }

    /// Numeric view used for charting; chars chart as their code point
    pub fn as_f64(&self) -> f64 {
        match self {
            Element::Int(n) => *n as f64,
            Element::Double(x) => *x,
            Element::Char(c) => *c as u32 as f64,
        }
    }

    /// The literal that writes this element back into source text
    pub fn to_literal(self) -> Literal {
        match self {
            Element::Int(n) => Literal::Int(n),
            Element::Double(x) => Literal::Double(x),
            Element::Char(c) => Literal::Char(c),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_literal())
    }
}

fn char_from_code(code: i64) -> char {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Approximate in-memory size of one element of `kind`
pub fn sizeof_kind(kind: ElementKind) -> usize {
    match kind {
        ElementKind::Int => std::mem::size_of::<i64>(),
        ElementKind::Double => std::mem::size_of::<f64>(),
        ElementKind::Char => std::mem::size_of::<char>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_into_int() {
        assert_eq!(Element::coerce(Literal::Double(2.7), ElementKind::Int), Element::Int(2));
        assert_eq!(Element::coerce(Literal::Char('a'), ElementKind::Int), Element::Int(97));
    }

    #[test]
    fn test_coerce_into_double() {
        assert_eq!(Element::coerce(Literal::Int(5), ElementKind::Double), Element::Double(5.0));
    }

    #[test]
    fn test_coerce_into_char() {
        assert_eq!(Element::coerce(Literal::Int(106), ElementKind::Char), Element::Char('j'));
        assert_eq!(
            Element::coerce(Literal::Int(-1), ElementKind::Char),
            Element::Char(char::REPLACEMENT_CHARACTER)
        );
    }

    #[test]
    fn test_display_round_trips_as_literal() {
        assert_eq!(Element::Double(4.0).to_string(), "4.0");
        assert_eq!(Element::Double(4.25).to_string(), "4.25");
        assert_eq!(Element::Char('j').to_string(), "'j'");
        assert_eq!(Element::Int(-3).to_string(), "-3");
    }
}
