use thiserror::Error;

/// Errors reported by [`OrderedSymbolTable`](crate::OrderedSymbolTable)
/// operations.
///
/// Every operation is synchronous and in-memory; an operation that fails
/// leaves the table unmodified.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A rank outside `[0, len)` was passed to
    /// [`select`](crate::OrderedSymbolTable::select).
    #[error("invalid argument: rank {rank} is out of range for a table of {len} keys")]
    InvalidArgument {
        /// The rank that was requested.
        rank: usize,
        /// The number of keys in the table at the time of the call.
        len: usize,
    },

    /// [`min`](crate::OrderedSymbolTable::min),
    /// [`max`](crate::OrderedSymbolTable::max),
    /// [`delete_min`](crate::OrderedSymbolTable::delete_min), or
    /// [`delete_max`](crate::OrderedSymbolTable::delete_max) was called on an
    /// empty table.
    #[error("symbol table underflow: the table is empty")]
    EmptyContainer,
}
