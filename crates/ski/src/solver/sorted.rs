use crate::error::Error;
use crate::grid::ElevationMap;
use crate::solver::{descend, finalize, Slope};

/// Compute slopes by visiting cells in ascending order of elevation.
///
/// Descending neighbors are strictly lower, so they always come earlier in
/// the order and are final by the time they're read.
pub(super) fn profile(map: &ElevationMap) -> Result<Vec<Option<Slope>>, Error> {
    let mut order = (0..map.len()).collect::<Vec<_>>();
    order.sort_unstable_by_key(|&cell| map.elevation(cell));

    let mut slopes = vec![None; map.len()];

    for cell in order {
        let slope = descend(map, &slopes, cell)?;
        finalize(&mut slopes, cell, slope)?;
    }

    Ok(slopes)
}
