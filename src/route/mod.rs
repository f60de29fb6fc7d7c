//! Sequence containers for accumulating and consuming routes

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;

use thiserror::Error;

/// Error returned when accessing an empty container
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("container is empty")]
pub struct EmptyError;

/// A solved path materialized for front-to-back consumption
pub type Route = Queue<String>;
