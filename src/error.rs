use thiserror::Error;

pub type Result<T, E = StackError> = std::result::Result<T, E>;

/// Why a stack operation was rejected. The stack is left untouched either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// Push on a stack that already holds `limit` items.
    #[error("stack overflow: limit of {limit} reached")]
    Overflow { limit: usize },
    /// Pop or peek on an empty stack.
    #[error("stack underflow: stack is empty")]
    Underflow,
}
