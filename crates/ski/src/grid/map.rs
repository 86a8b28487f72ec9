use core::fmt;
use core::ops::Range;
use core::slice;

use arrayvec::ArrayVec;

use crate::error::Error;
use crate::grid::Grid;
use crate::input::{ErrorKind, FromInput, IStr, IStrError, Size, W};

/// The largest number of cells a map may contain, so that every cell index
/// fits in a `u32`.
pub const MAX_AREA: usize = u32::MAX as usize;

/// The largest elevation accepted.
pub const MAX_ELEVATION: u32 = i32::MAX as u32;

/// Upper bound on how many elevations are preallocated before they're read.
const PREALLOCATE: usize = 1 << 20;

/// Iterator over the descending neighbors of a cell.
///
/// See [ElevationMap::descending_neighbors].
pub type Neighbors = arrayvec::IntoIter<usize, 4>;

/// A rectangular map of elevations.
///
/// Cells are addressed by a linear index `row * columns + column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationMap {
    columns: usize,
    rows: usize,
    elevations: Vec<u32>,
}

impl ElevationMap {
    /// Construct a new elevation map with the given shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use ski::grid::ElevationMap;
    ///
    /// let map = ElevationMap::new(2, 1, vec![7, 3])?;
    /// assert_eq!(map.elevation(1), 3);
    ///
    /// assert!(ElevationMap::new(2, 2, vec![7, 3]).is_err());
    /// # Ok::<_, ski::Error>(())
    /// ```
    pub fn new(columns: usize, rows: usize, elevations: Vec<u32>) -> Result<Self, Error> {
        let expected = area(columns, rows).map_err(IStrError::detached)?;

        if elevations.len() != expected {
            return Err(IStrError::detached(ErrorKind::ShapeMismatch {
                expected,
                actual: elevations.len(),
            })
            .into());
        }

        if let Some(&e) = elevations.iter().find(|&&e| e > MAX_ELEVATION) {
            return Err(IStrError::detached(ErrorKind::ElevationRange(e.into())).into());
        }

        Ok(Self {
            columns,
            rows,
            elevations,
        })
    }

    /// Parse an elevation map from its textual form.
    ///
    /// The input is a whitespace-separated sequence of the number of columns,
    /// the number of rows and then every elevation in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ski::grid::{ElevationMap, Grid};
    ///
    /// let map = ElevationMap::parse(b"3 2\n1 2 3\n4 5 6\n")?;
    /// assert_eq!((map.columns_len(), map.rows_len()), (3, 2));
    /// assert_eq!(map.elevation(4), 5);
    ///
    /// assert!(ElevationMap::parse(b"3 2\n1 2 3\n4 5\n").is_err());
    /// assert!(ElevationMap::parse(b"1 1 1 1").is_err());
    /// # Ok::<_, ski::Error>(())
    /// ```
    pub fn parse(data: &[u8]) -> Result<Self, Error> {
        let mut input = IStr::new(data);
        let map = input.next::<ElevationMap>()?;

        if let Some((span, W(word))) = input.try_next_spanned::<W>()? {
            return Err(IStrError::new(span, ErrorKind::TrailingInput(word.into())).into());
        }

        Ok(map)
    }

    /// Number of cells in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    /// Test if the map has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }

    /// All elevations in row-major order.
    #[inline]
    pub fn elevations(&self) -> &[u32] {
        &self.elevations
    }

    /// Elevation of the cell at `index`.
    #[inline]
    #[track_caller]
    pub fn elevation(&self, index: usize) -> u32 {
        self.elevations[index]
    }

    /// Convert a linear index into a `(row, column)` pair.
    #[inline]
    #[track_caller]
    pub fn position(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.len(), "index `{index}` out of bounds");
        (index / self.columns, index % self.columns)
    }

    /// Convert a `(row, column)` pair into a linear index.
    #[inline]
    pub fn index(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows && column < self.columns);
        row * self.columns + column
    }

    /// Construct an iterator over the 4-connected neighbors of `index` which
    /// are strictly lower.
    ///
    /// Neighbors are produced in the order left, right, up, down.
    ///
    /// # Examples
    ///
    /// ```
    /// use ski::grid::ElevationMap;
    ///
    /// let map = ElevationMap::parse(b"3 3  1 2 1  2 9 2  1 9 1")?;
    /// assert!(map.descending_neighbors(4).eq([3, 5, 1]));
    /// assert!(map.descending_neighbors(7).eq([6, 8]));
    /// assert_eq!(map.descending_neighbors(0).count(), 0);
    /// # Ok::<_, ski::Error>(())
    /// ```
    #[inline]
    pub fn descending_neighbors(&self, index: usize) -> Neighbors {
        let (row, column) = self.position(index);
        let elevation = self.elevations[index];

        let mut out = ArrayVec::<_, 4>::new();
        out.extend(column.checked_sub(1).map(|c| (row, c)));
        out.extend(column.checked_add(1).filter(|&c| c < self.columns).map(|c| (row, c)));
        out.extend(row.checked_sub(1).map(|r| (r, column)));
        out.extend(row.checked_add(1).filter(|&r| r < self.rows).map(|r| (r, column)));

        let mut lower = ArrayVec::<usize, 4>::new();

        for (r, c) in out {
            let n = self.index(r, c);

            if self.elevations[n] < elevation {
                lower.push(n);
            }
        }

        lower.into_iter()
    }
}

impl Grid<u32> for ElevationMap {
    type Rows<'a> = slice::Chunks<'a, u32>;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        self.elevations.chunks(self.columns.max(1))
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[u32]> {
        if row >= self.rows {
            return None;
        }

        let start = row.checked_mul(self.columns)?;
        self.elevations.get(start..start.checked_add(self.columns)?)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        self.rows
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.columns
    }
}

impl<'a> FromInput<'a> for ElevationMap {
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>, IStrError> {
        let Some((span, columns)) = p.try_next_spanned::<i64>()? else {
            return Ok(None);
        };

        let columns = dimension(span, columns)?;

        let Some((span, rows)) = p.try_next_spanned::<i64>()? else {
            return Err(IStrError::new(p.index()..p.index(), ErrorKind::UnexpectedEof));
        };

        let rows = dimension(span.clone(), rows)?;
        let expected = area(columns, rows).map_err(|kind| IStrError::new(span, kind))?;

        let mut elevations = Vec::with_capacity(expected.min(PREALLOCATE));

        while elevations.len() < expected {
            let Some((span, e)) = p.try_next_spanned::<i64>()? else {
                let kind = ErrorKind::ShapeMismatch {
                    expected,
                    actual: elevations.len(),
                };

                return Err(IStrError::new(p.index()..p.index(), kind));
            };

            let Some(e) = u32::try_from(e).ok().filter(|&e| e <= MAX_ELEVATION) else {
                return Err(IStrError::new(span, ErrorKind::ElevationRange(e)));
            };

            elevations.push(e);
        }

        Ok(Some(Self {
            columns,
            rows,
            elevations,
        }))
    }
}

impl fmt::Display for ElevationMap {
    /// Format the map in the same form as it's parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.columns, self.rows)?;

        for row in self.rows() {
            let mut it = row.iter();

            if let Some(first) = it.next() {
                write!(f, "{first}")?;
            }

            for e in it {
                write!(f, " {e}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

/// Validate a parsed dimension.
fn dimension(span: Range<Size>, n: i64) -> Result<usize, IStrError> {
    if n < 0 {
        return Err(IStrError::new(span, ErrorKind::NegativeDimension(n)));
    }

    usize::try_from(n).map_err(|_| IStrError::new(span, ErrorKind::DimensionRange(n)))
}

/// Compute the area of a map, making sure it fits the supported range.
fn area(columns: usize, rows: usize) -> Result<usize, ErrorKind> {
    match columns.checked_mul(rows) {
        Some(n) if n <= MAX_AREA => Ok(n),
        _ => Err(ErrorKind::AreaOverflow { columns, rows }),
    }
}
