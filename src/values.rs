use std::hash::Hash;

use indexmap::IndexSet;

/// A value that may stand for "no constraint" on its dimension.
pub trait Sentinel {
    fn is_all(&self) -> bool {
        false
    }
}

impl Sentinel for String {}
impl Sentinel for u64 {}

/// An insertion-ordered, duplicate-free list dimension of a search query.
///
/// Adding a batch that contains the dimension's `All` sentinel clears the whole
/// dimension and drops the rest of that batch. The sentinel is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSet<T: Hash + Eq>(IndexSet<T>);

impl<T: Hash + Eq> Default for ValueSet<T> {
    fn default() -> Self {
        Self(IndexSet::new())
    }
}

impl<T: Hash + Eq + Sentinel> ValueSet<T> {
    pub fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            if value.is_all() {
                self.0.clear();
                return;
            }
            self.0.insert(value);
        }
    }
}

impl<T: Hash + Eq> ValueSet<T> {
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.iter().cloned().collect()
    }

    /// Joins the rendered values, or `None` when the dimension is unset.
    pub fn join_with<F>(&self, separator: &str, render: F) -> Option<String>
    where
        F: FnMut(&T) -> String,
    {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.iter().map(render).collect::<Vec<_>>().join(separator))
    }
}
