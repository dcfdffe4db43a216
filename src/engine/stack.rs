//! Append/remove-from-end history of visited nodes.

use crate::error::{NavError, NavResult};
use crate::types::VisitedNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack<T = VisitedNode> {
    items: Vec<T>,
}

impl<T> NavStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the top element. Popping an empty stack is a caller bug.
    pub fn pop(&mut self) -> NavResult<T> {
        self.items.pop().ok_or(NavError::EmptyStack)
    }

    pub fn peek(&self) -> NavResult<&T> {
        self.items.last().ok_or(NavError::EmptyStack)
    }

    /// Bottom-to-top view of the whole stack
    pub fn to_sequence(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.items.len() > 1
    }
}

impl<T> Default for NavStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
