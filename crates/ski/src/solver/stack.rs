use bittle::{Bits, BitsMut};

use crate::error::{Error, Invariant};
use crate::grid::{ElevationMap, Neighbors};
use crate::solver::{descend, finalize, Slope};

/// A cell whose descending neighbors are still being walked.
struct Frame {
    cell: usize,
    neighbors: Neighbors,
}

impl Frame {
    #[inline]
    fn new(map: &ElevationMap, cell: usize) -> Self {
        Self {
            cell,
            neighbors: map.descending_neighbors(cell),
        }
    }
}

/// Compute slopes with a depth-first post-order walk over an explicit stack.
///
/// A cell is unvisited until it's entered, in progress while it has a frame
/// on the stack, and final once its slope is stored. Running into a cell
/// which is in progress means the descending relation has a cycle.
pub(super) fn profile(map: &ElevationMap) -> Result<Vec<Option<Slope>>, Error> {
    let mut slopes = vec![None; map.len()];
    let mut entered = vec![0u64; map.len().div_ceil(64)];
    let mut stack = Vec::new();

    for root in 0..map.len() {
        let root_bit = bit(root)?;

        if entered.test_bit(root_bit) {
            continue;
        }

        entered.set_bit(root_bit);
        stack.push(Frame::new(map, root));

        while let Some(frame) = stack.last_mut() {
            if let Some(next) = frame.neighbors.next() {
                if slopes[next].is_some() {
                    continue;
                }

                let next_bit = bit(next)?;

                if entered.test_bit(next_bit) {
                    return Err(Error::InternalInvariant(Invariant::Reentered { cell: next }));
                }

                entered.set_bit(next_bit);
                stack.push(Frame::new(map, next));
                continue;
            }

            let cell = frame.cell;
            stack.pop();

            let slope = descend(map, &slopes, cell)?;
            finalize(&mut slopes, cell, slope)?;
        }
    }

    Ok(slopes)
}

/// Translate a cell into a bitset index.
#[inline]
pub(super) fn bit(cell: usize) -> Result<u32, Error> {
    u32::try_from(cell).map_err(|_| Error::InternalInvariant(Invariant::BitRange { cell }))
}
