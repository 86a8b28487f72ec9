//! Find the longest and steepest ski run on an elevation map.
//!
//! A run moves between 4-connected cells and must always go strictly
//! downhill. The best run is the longest one, and among the longest the one
//! with the greatest drop in elevation.
//!
//! ```
//! use ski::prelude::*;
//!
//! let map = ElevationMap::parse(b"4 1\n1 2 3 4\n")?;
//! assert_eq!(ski::solve(&map)?, Slope { length: 4, drop: 3 });
//! # Ok::<_, ski::Error>(())
//! ```

pub mod cli;
mod error;
pub mod grid;
pub mod input;
mod solver;

pub use self::error::{Error, Invariant};
pub use self::solver::{solve, Profile, Slope, Solver, Strategy};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{ElevationMap, Grid};
    pub use crate::solver::{Profile, Slope, Solver, Strategy};
}
