//! LIFO and FIFO containers used by the validator.
//!
//! Both are thin wrappers over index-based std buffers. Removal and inspection
//! of an empty container is reported as [`EmptyContainer`] instead of panicking,
//! so callers must check the result before use.

use std::collections::VecDeque;
use thiserror::Error;

/// Returned when popping, dequeuing or peeking an empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("container is empty")]
pub struct EmptyContainer;

/// A last-in-first-out stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.items.pop().ok_or(EmptyContainer)
    }

    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.items.last().ok_or(EmptyContainer)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }

    /// 1-based distance from the top of the first element satisfying `pred`.
    pub fn search_by(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(pred).map(|depth| depth + 1)
    }
}

impl<T: PartialEq> Stack<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn search(&self, item: &T) -> Option<usize> {
        self.search_by(|candidate| candidate == item)
    }
}

/// A first-in-first-out queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        self.items.pop_front().ok_or(EmptyContainer)
    }

    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.items.front().ok_or(EmptyContainer)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the head of the queue to the tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Removes every element, head first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..)
    }
}

impl<T: PartialEq> Queue<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// 1-based distance from the head.
    pub fn search(&self, item: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|candidate| candidate == item)
            .map(|idx| idx + 1)
    }
}
