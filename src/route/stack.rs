//! LIFO sequence adapter

use super::EmptyError;
use serde::{Deserialize, Serialize};

/// A last-in, first-out sequence
///
/// Unbounded, caller-owned, single-threaded. Accessors on an empty stack
/// fail with [`EmptyError`] rather than returning a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push an item on top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the most recently pushed item
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.items.pop().ok_or(EmptyError)
    }

    /// The most recently pushed item, without removing it
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.items.last().ok_or(EmptyError)
    }

    /// Overwrite the most recently pushed item in place
    pub fn replace_top(&mut self, item: T) -> Result<(), EmptyError> {
        match self.items.last_mut() {
            Some(top) => {
                *top = item;
                Ok(())
            }
            None => Err(EmptyError),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.items.iter().map(ToString::to_string).collect();
        write!(f, "Stack: {}", rendered.join(", "))
    }
}
