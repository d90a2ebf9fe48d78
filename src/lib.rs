//! A fixed-capacity LIFO stack.

mod debug;
mod error;
mod stack;

pub mod shell;

pub use error::{Result, StackError};
pub use stack::BoundedStack;
