//! FIFO sequence adapter

use super::EmptyError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A first-in, first-out sequence
///
/// Unbounded, caller-owned, single-threaded. This is the consumption surface
/// for solved routes: the presentation layer dequeues one vertex per step.
/// Accessors on an empty queue fail with [`EmptyError`] rather than
/// returning a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item at the back
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the earliest-enqueued item
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        self.items.pop_front().ok_or(EmptyError)
    }

    /// The earliest-enqueued item, without removing it
    pub fn front(&self) -> Result<&T, EmptyError> {
        self.items.front().ok_or(EmptyError)
    }

    /// Overwrite the earliest-enqueued item in place
    pub fn replace_front(&mut self, item: T) -> Result<(), EmptyError> {
        match self.items.front_mut() {
            Some(front) => {
                *front = item;
                Ok(())
            }
            None => Err(EmptyError),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.items.iter().map(ToString::to_string).collect();
        write!(f, "Queue: {}", rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_on_empty_queue_fails() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(queue.dequeue(), Err(EmptyError));
        assert_eq!(queue.front(), Err(EmptyError));
        assert_eq!(queue.replace_front(1), Err(EmptyError));
    }

    #[test]
    fn test_items_come_back_in_insertion_order() {
        let mut queue = Queue::new();
        for n in 1..=4 {
            queue.enqueue(n);
        }

        assert_eq!(queue.len(), 4);
        for expected in 1..=4 {
            assert_eq!(queue.dequeue().unwrap(), expected);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_front_does_not_remove() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");

        assert_eq!(queue.front().unwrap(), &"a");
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_replace_front_changes_only_the_front() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        queue.replace_front(10).unwrap();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue().unwrap(), 10);
        assert_eq!(queue.dequeue().unwrap(), 2);
        assert_eq!(queue.dequeue().unwrap(), 3);
    }

    #[test]
    fn test_display() {
        let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(queue.to_string(), "Queue: 1, 2, 3");
    }
}
