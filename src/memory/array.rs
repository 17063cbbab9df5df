//! Fixed-kind arrays

use super::value::{sizeof_kind, Element};
use crate::parser::ast::{ElementKind, Literal};

/// Index rejected by a bounds check: `index` was outside `0..=max` where
/// `max` is `len - 1` (update/delete) or `len` (insert)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub index: i64,
    pub len: usize,
}

/// An ordered sequence of elements that all share one [`ElementKind`]
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray {
    kind: ElementKind,
    elements: Vec<Element>,
}

impl TypedArray {
    pub fn new(kind: ElementKind) -> Self {
        TypedArray {
            kind,
            elements: Vec::new(),
        }
    }

    /// Build an array from literals, coercing each to `kind`
    pub fn from_literals(kind: ElementKind, literals: &[Literal]) -> Self {
        TypedArray {
            kind,
            elements: literals
                .iter()
                .map(|lit| Element::coerce(*lit, kind))
                .collect(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Element> {
        self.elements.get(index).copied()
    }

    /// Replace the element at `index` (valid range `0..len`)
    pub fn set(&mut self, index: i64, value: Literal) -> Result<(), IndexError> {
        let slot = self.checked_index(index, self.len())?;
        self.elements[slot] = Element::coerce(value, self.kind);
        Ok(())
    }

    /// Insert before `index` (valid range `0..=len`), shifting the tail right
    pub fn insert(&mut self, index: i64, value: Literal) -> Result<(), IndexError> {
        let slot = self.checked_index(index, self.len() + 1)?;
        self.elements.insert(slot, Element::coerce(value, self.kind));
        Ok(())
    }

    /// Remove the element at `index` (valid range `0..len`), shifting the tail left
    pub fn remove(&mut self, index: i64) -> Result<Element, IndexError> {
        let slot = self.checked_index(index, self.len())?;
        Ok(self.elements.remove(slot))
    }

    /// Estimate the memory usage of this array in bytes
    pub fn estimated_size(&self) -> usize {
        self.elements.len() * sizeof_kind(self.kind)
    }

    fn checked_index(&self, index: i64, bound: usize) -> Result<usize, IndexError> {
        usize::try_from(index)
            .ok()
            .filter(|&slot| slot < bound)
            .ok_or(IndexError {
                index,
                len: self.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> TypedArray {
        let literals: Vec<Literal> = values.iter().map(|&n| Literal::Int(n)).collect();
        TypedArray::from_literals(ElementKind::Int, &literals)
    }

    #[test]
    fn test_set_in_range() {
        let mut arr = ints(&[1, 2, 3]);
        arr.set(1, Literal::Int(9)).unwrap();
        assert_eq!(arr, ints(&[1, 9, 3]));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut arr = ints(&[1, 2, 3]);
        assert_eq!(
            arr.set(3, Literal::Int(9)),
            Err(IndexError { index: 3, len: 3 })
        );
        assert!(arr.set(-1, Literal::Int(9)).is_err());
        assert_eq!(arr, ints(&[1, 2, 3]));
    }

    #[test]
    fn test_insert_bounds() {
        let mut arr = ints(&[1, 2]);
        arr.insert(2, Literal::Int(3)).unwrap();
        arr.insert(0, Literal::Int(0)).unwrap();
        assert_eq!(arr, ints(&[0, 1, 2, 3]));
        assert!(arr.insert(5, Literal::Int(9)).is_err());
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut arr = ints(&[1, 2, 3]);
        assert_eq!(arr.remove(0), Ok(Element::Int(1)));
        assert_eq!(arr, ints(&[2, 3]));
        assert!(arr.remove(2).is_err());
    }

    #[test]
    fn test_set_coerces_to_kind() {
        let mut arr = TypedArray::from_literals(ElementKind::Double, &[Literal::Int(1)]);
        arr.set(0, Literal::Int(4)).unwrap();
        assert_eq!(arr.get(0), Some(Element::Double(4.0)));
    }
}
