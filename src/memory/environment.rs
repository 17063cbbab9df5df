//! Named arrays produced by a replay

use super::array::TypedArray;
use rustc_hash::FxHashMap;

/// Mapping from array name to its current contents.
///
/// Names keep the order of their first declaration; re-declaring a name
/// replaces the array but not its position. The first name is the default
/// "current" array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayEnvironment {
    arrays: FxHashMap<String, TypedArray>,
    order: Vec<String>,
}

impl ArrayEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the array called `name`
    pub fn declare(&mut self, name: &str, array: TypedArray) {
        if self.arrays.insert(name.to_string(), array).is_none() {
            self.order.push(name.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&TypedArray> {
        self.arrays.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TypedArray> {
        self.arrays.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.arrays.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Array names in first-declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(name, array)` pairs in first-declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedArray)> {
        self.order
            .iter()
            .filter_map(|name| self.arrays.get(name).map(|arr| (name.as_str(), arr)))
    }

    /// The array to display: `preferred` when it exists here, otherwise
    /// the first declared array
    pub fn current<'a>(&'a self, preferred: Option<&str>) -> Option<(&'a str, &'a TypedArray)> {
        let name = preferred
            .and_then(|p| self.order.iter().find(|name| name.as_str() == p))
            .or_else(|| self.order.first())?;
        self.arrays.get(name).map(|arr| (name.as_str(), arr))
    }

    /// Estimate the memory usage of this environment in bytes
    pub fn estimated_size(&self) -> usize {
        self.iter()
            .map(|(name, arr)| name.len() + arr.estimated_size())
            .sum()
    }
}
