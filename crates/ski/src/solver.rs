//! Longest descending path with the deepest drop.
//!
//! Moving from a cell to a strictly lower 4-connected neighbor forms a DAG
//! over the map. Every cell gets a [Slope]: the number of cells on the longest
//! descending path starting there, and the greatest drop along any path of
//! that length. Cells are only ever computed from neighbors which have
//! already been finalized.

mod sorted;
mod stack;
#[cfg(test)]
mod tests;

use std::time::Instant;

use crate::error::{Error, Invariant};
use crate::grid::{ElevationMap, Grid};

/// The longest descending path from a cell and its greatest drop.
///
/// The derived ordering compares `length` first and `drop` second, so the
/// greater of two slopes is the longer one, or the deeper one if they are
/// equally long.
///
/// # Examples
///
/// ```
/// use ski::Slope;
///
/// let a = Slope { length: 3, drop: 2 };
/// let b = Slope { length: 2, drop: 9 };
/// let c = Slope { length: 3, drop: 5 };
///
/// assert_eq!(a.max(b), a);
/// assert_eq!(a.max(c), c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slope {
    /// Number of cells on the path, including both ends.
    pub length: u64,
    /// Elevation of the first cell minus elevation of the last.
    pub drop: u64,
}

impl Slope {
    /// The slope of a local minimum.
    pub const FLAT: Self = Self { length: 1, drop: 0 };

    /// Extend the slope by one cell which is `height` above its start.
    #[inline]
    #[must_use]
    pub fn ascend(self, height: u64) -> Self {
        Self {
            length: self.length + 1,
            drop: self.drop + height,
        }
    }
}

/// How the descending DAG is traversed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Strategy {
    /// Visit cells by ascending elevation, so that all lower neighbors are
    /// finalized by the time a cell is computed.
    #[default]
    Sorted,
    /// Depth-first post-order traversal using an explicit work stack.
    Stack,
}

/// Solver for elevation maps.
#[derive(Debug, Default, Clone, Copy)]
pub struct Solver {
    strategy: Strategy,
}

impl Solver {
    /// Construct a solver using the given traversal strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Compute the slope of every cell in `map`.
    pub fn profile(&self, map: &ElevationMap) -> Result<Profile, Error> {
        if map.is_empty() {
            return Err(Error::EmptyGrid);
        }

        log::debug!(
            "profiling {}x{} map using {:?}",
            map.columns_len(),
            map.rows_len(),
            self.strategy
        );

        let start = Instant::now();

        let cells = match self.strategy {
            Strategy::Sorted => sorted::profile(map)?,
            Strategy::Stack => stack::profile(map)?,
        };

        let slopes = cells
            .into_iter()
            .enumerate()
            .map(|(cell, slope)| {
                slope.ok_or(Error::InternalInvariant(Invariant::Unvisited { cell }))
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("profiled {} cells in {:?}", slopes.len(), start.elapsed());
        Ok(Profile { slopes })
    }

    /// Find the longest descending path in `map` and its greatest drop.
    #[inline]
    pub fn solve(&self, map: &ElevationMap) -> Result<Slope, Error> {
        Ok(self.profile(map)?.best())
    }
}

/// Find the longest descending path in `map` and its greatest drop.
///
/// # Examples
///
/// ```
/// use ski::grid::ElevationMap;
///
/// let map = ElevationMap::parse(b"4 4  4 8 7 3  2 5 9 3  6 3 2 5  4 4 1 6")?;
/// let best = ski::solve(&map)?;
/// assert_eq!((best.length, best.drop), (5, 8));
/// # Ok::<_, ski::Error>(())
/// ```
pub fn solve(map: &ElevationMap) -> Result<Slope, Error> {
    Solver::default().solve(map)
}

/// The slope of every cell in a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    slopes: Vec<Slope>,
}

impl Profile {
    /// Slopes indexed by cell.
    #[inline]
    pub fn slopes(&self) -> &[Slope] {
        &self.slopes
    }

    /// Get the slope of the given cell.
    #[inline]
    pub fn get(&self, cell: usize) -> Option<Slope> {
        self.slopes.get(cell).copied()
    }

    /// The longest slope in the profile, picking the deepest one on ties.
    pub fn best(&self) -> Slope {
        self.slopes.iter().copied().max().unwrap_or(Slope::FLAT)
    }
}

/// Compute the slope of `cell` from its finalized descending neighbors.
fn descend(map: &ElevationMap, slopes: &[Option<Slope>], cell: usize) -> Result<Slope, Error> {
    let elevation = map.elevation(cell);
    let mut best = Slope::FLAT;

    for neighbor in map.descending_neighbors(cell) {
        let Some(slope) = slopes[neighbor] else {
            return Err(Error::InternalInvariant(Invariant::Unfinished { cell, neighbor }));
        };

        let height = u64::from(elevation - map.elevation(neighbor));
        best = best.max(slope.ascend(height));
    }

    Ok(best)
}

/// Store the final slope of `cell`.
fn finalize(slopes: &mut [Option<Slope>], cell: usize, slope: Slope) -> Result<(), Error> {
    let current = &mut slopes[cell];

    if current.is_some() {
        return Err(Error::InternalInvariant(Invariant::Refinalized { cell }));
    }

    *current = Some(slope);
    Ok(())
}
