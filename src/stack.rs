use std::fmt::{self, Display};

use crate::debug;
use crate::error::{Result, StackError};

/// A LIFO stack that refuses to grow past a fixed `limit`.
///
/// The top of the stack is the end of `items`. Pushing onto a full stack or
/// popping/peeking an empty one returns a [`StackError`] and leaves the stack
/// as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    limit: usize,
}

impl<T> BoundedStack<T> {
    pub const DEFAULT_LIMIT: usize = 10;

    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() >= self.limit {
            log::trace!("push rejected: {} of {} slots used", self.len(), self.limit);
            return Err(StackError::Overflow { limit: self.limit });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or_else(|| {
            log::trace!("pop on empty stack (limit {})", self.limit);
            StackError::Underflow
        })
    }

    /// The item the next `pop` would return.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or_else(|| {
            log::trace!("peek on empty stack (limit {})", self.limit);
            StackError::Underflow
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Also true for an empty stack with a limit of 0.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.limit
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }
}

impl<T: PartialEq> BoundedStack<T> {
    /// Searches the whole stack, not just the top.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

/// `true` iff the stack holds at least one item.
impl<T> From<&BoundedStack<T>> for bool {
    fn from(stack: &BoundedStack<T>) -> Self {
        !stack.is_empty()
    }
}

/// Bottom to top, e.g. `[0,1,2]`.
///
/// Items are written with their own `Display` and no quoting, so the output is
/// only unambiguous for atomic values such as integers: `"a b"` and `"x,y"`
/// render as `[a b,x,y]`.
impl<T: Display> Display for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug::write_compact_list(f, &self.items)
    }
}
