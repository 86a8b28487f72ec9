use crate::error::{Error, Invariant};
use crate::grid::ElevationMap;
use crate::solver::{descend, finalize, stack, Slope, Solver, Strategy};

const STRATEGIES: [Strategy; 2] = [Strategy::Sorted, Strategy::Stack];

fn solve(columns: usize, rows: usize, elevations: &[u32]) -> Slope {
    let map = ElevationMap::new(columns, rows, elevations.to_vec()).unwrap();
    let sorted = Solver::new(Strategy::Sorted).solve(&map).unwrap();
    let stack = Solver::new(Strategy::Stack).solve(&map).unwrap();
    assert_eq!(sorted, stack, "strategies disagree on {map}");
    sorted
}

fn slope(length: u64, drop: u64) -> Slope {
    Slope { length, drop }
}

/// A map which descends one step at a time along a snake through every row.
fn serpentine(columns: usize, rows: usize) -> ElevationMap {
    let n = columns * rows;
    let mut elevations = vec![0; n];

    for k in 0..n {
        let row = k / columns;
        let mut column = k % columns;

        if row % 2 == 1 {
            column = columns - 1 - column;
        }

        elevations[row * columns + column] = (n - k) as u32;
    }

    ElevationMap::new(columns, rows, elevations).unwrap()
}

#[test]
fn test_single_cell() {
    assert_eq!(solve(1, 1, &[5]), slope(1, 0));
}

#[test]
fn test_plateau() {
    assert_eq!(solve(2, 2, &[3, 3, 3, 3]), slope(1, 0));
}

#[test]
fn test_monotone_row() {
    assert_eq!(solve(4, 1, &[1, 2, 3, 4]), slope(4, 3));
    assert_eq!(solve(1, 4, &[1, 2, 3, 4]), slope(4, 3));
}

#[test]
fn test_rows_joined_through_column() {
    // 10  5  0
    // 10  9  0
    //
    // The 9 reaches the 5 above it, so the second row feeds the first.
    assert_eq!(solve(3, 2, &[10, 5, 0, 10, 9, 0]), slope(4, 10));
    assert_eq!(solve(3, 2, &[10, 5, 4, 10, 9, 0]), slope(5, 10));
}

#[test]
fn test_tie_on_length_picks_deeper_drop() {
    // 10  5  1 50
    //  0  0  0  0
    // 12  9  2  0
    //
    // Two runs of length 4 dropping 10 and 12, and a shorter one dropping 50.
    let elevations = [10, 5, 1, 50, 0, 0, 0, 0, 12, 9, 2, 0];
    assert_eq!(solve(4, 3, &elevations), slope(4, 12));
}

#[test]
fn test_longer_path_beats_deeper_drop() {
    assert_eq!(solve(4, 1, &[2, 1, 0, 1000]), slope(3, 2));
    assert_eq!(solve(1, 5, &[1000, 0, 3, 2, 1]), slope(3, 2));
}

#[test]
fn test_branching_peak() {
    assert_eq!(solve(3, 3, &[1, 2, 1, 2, 9, 2, 1, 2, 1]), slope(3, 8));
}

#[test]
fn test_redmart_example() {
    let elevations = [4, 8, 7, 3, 2, 5, 9, 3, 6, 3, 2, 5, 4, 4, 1, 6];
    assert_eq!(solve(4, 4, &elevations), slope(5, 8));
}

#[test]
fn test_profile_cells() {
    let map = ElevationMap::parse(b"4 4  4 8 7 3  2 5 9 3  6 3 2 5  4 4 1 6").unwrap();

    for strategy in STRATEGIES {
        let profile = Solver::new(strategy).profile(&map).unwrap();

        // 9 5 3 2 1
        assert_eq!(profile.get(6), Some(slope(5, 8)));
        // 5 3 2 1
        assert_eq!(profile.get(5), Some(slope(4, 4)));
        // 8 5 3 2 1
        assert_eq!(profile.get(1), Some(slope(5, 7)));
        // Local minima.
        assert_eq!(profile.get(4), Some(Slope::FLAT));
        assert_eq!(profile.get(14), Some(Slope::FLAT));
        assert_eq!(profile.get(16), None);

        assert_eq!(profile.best(), slope(5, 8));
    }
}

#[test]
fn test_empty_grid() {
    for strategy in STRATEGIES {
        let map = ElevationMap::new(0, 3, Vec::new()).unwrap();
        let error = Solver::new(strategy).solve(&map).unwrap_err();
        assert!(matches!(error, Error::EmptyGrid));

        let map = ElevationMap::parse(b"0 0").unwrap();
        let error = Solver::new(strategy).solve(&map).unwrap_err();
        assert!(matches!(error, Error::EmptyGrid));
    }
}

#[test]
fn test_serpentine_is_stack_safe() {
    let map = serpentine(100, 101);

    for strategy in STRATEGIES {
        let best = Solver::new(strategy).solve(&map).unwrap();
        assert_eq!(best, slope(10_100, 10_099));
    }
}

#[test]
fn test_long_single_column() {
    let elevations = (0..20_000).collect::<Vec<u32>>();
    let map = ElevationMap::new(1, 20_000, elevations).unwrap();

    for strategy in STRATEGIES {
        let best = Solver::new(strategy).solve(&map).unwrap();
        assert_eq!(best, slope(20_000, 19_999));
    }
}

#[test]
fn test_drop_uses_wide_accumulator() {
    let map = ElevationMap::new(2, 1, vec![i32::MAX as u32, 0]).unwrap();
    let best = Solver::default().solve(&map).unwrap();
    assert_eq!(best, slope(2, i32::MAX as u64));
}

#[test]
fn test_unfinished_neighbor_is_invariant_error() {
    let map = ElevationMap::new(2, 1, vec![2, 1]).unwrap();
    let slopes = vec![None; 2];

    let error = descend(&map, &slopes, 0).unwrap_err();

    assert!(matches!(
        error,
        Error::InternalInvariant(Invariant::Unfinished {
            cell: 0,
            neighbor: 1
        })
    ));
}

#[test]
fn test_refinalize_is_invariant_error() {
    let mut slopes = vec![None; 1];
    finalize(&mut slopes, 0, Slope::FLAT).unwrap();

    let error = finalize(&mut slopes, 0, Slope::FLAT).unwrap_err();
    assert!(matches!(
        error,
        Error::InternalInvariant(Invariant::Refinalized { cell: 0 })
    ));
}

#[test]
fn test_bit_index_range() {
    assert_eq!(stack::bit(0).unwrap(), 0);
    assert_eq!(stack::bit(u32::MAX as usize).unwrap(), u32::MAX);

    #[cfg(target_pointer_width = "64")]
    {
        let cell = u32::MAX as usize + 1;
        let error = stack::bit(cell).unwrap_err();

        assert!(matches!(
            error,
            Error::InternalInvariant(Invariant::BitRange { cell: c }) if c == cell
        ));
    }
}
