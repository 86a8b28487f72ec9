use core::fmt;

use thiserror::Error;

use crate::input::IStrError;

/// Errors raised while building or solving an elevation map.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed input")]
    MalformedInput(#[from] IStrError),
    #[error("elevation map is empty")]
    EmptyGrid,
    #[error("internal invariant violated: {0}")]
    InternalInvariant(Invariant),
}

/// A solver invariant which was found to be broken.
///
/// These indicate bugs, not bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    /// A cell was entered while it was still being computed.
    Reentered { cell: usize },
    /// A finalized cell was about to be written again.
    Refinalized { cell: usize },
    /// A cell was never computed.
    Unvisited { cell: usize },
    /// A cell index does not fit the traversal bitset.
    BitRange { cell: usize },
    /// A descending neighbour was read before it was finalized.
    Unfinished { cell: usize, neighbor: usize },
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invariant::Reentered { cell } => write!(f, "cell {cell} re-entered while in progress"),
            Invariant::Unvisited { cell } => write!(f, "cell {cell} never computed"),
            Invariant::Refinalized { cell } => write!(f, "cell {cell} finalized twice"),
            Invariant::BitRange { cell } => write!(f, "cell {cell} out of bitset range"),
            Invariant::Unfinished { cell, neighbor } => {
                write!(f, "cell {cell} read unfinished neighbor {neighbor}")
            }
        }
    }
}
