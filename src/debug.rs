//! Helpers for Display/Debug impls.

use std::fmt::{self, Display};

/// Write items as a literal list with no padding: `[a,b,c]`.
pub(crate) fn write_compact_list<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i != 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
