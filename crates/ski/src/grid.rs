//! Grid model.

mod map;

pub use self::map::{ElevationMap, Neighbors};

/// A rectangular grid of values stored in row-major order.
pub trait Grid<T> {
    /// Construct an iterator over rows in the grid.
    type Rows<'a>: Iterator<Item = &'a [T]>
    where
        Self: 'a,
        T: 'a;

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ski::grid::{ElevationMap, Grid};
    ///
    /// let map = ElevationMap::new(3, 2, vec![1, 2, 3, 4, 5, 6])?;
    /// assert!(map.rows().flatten().copied().eq([1, 2, 3, 4, 5, 6]));
    /// assert_eq!(map.rows().nth(1), Some(&[4, 5, 6][..]));
    /// # Ok::<_, ski::Error>(())
    /// ```
    fn rows(&self) -> Self::Rows<'_>;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<&[T]>;

    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Get number of columns in the grid.
    fn columns_len(&self) -> usize;

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    fn get(&self, row: usize, column: usize) -> &T {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use ski::grid::{ElevationMap, Grid};
    ///
    /// let map = ElevationMap::new(2, 2, vec![1, 2, 3, 4])?;
    /// assert_eq!(map.try_get(1, 0), Some(&3));
    /// assert_eq!(map.try_get(0, 2), None);
    /// assert_eq!(map.try_get(2, 0), None);
    /// # Ok::<_, ski::Error>(())
    /// ```
    #[inline]
    fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        self.row(row)?.get(column)
    }
}

impl<G, T> Grid<T> for &G
where
    G: Grid<T>,
{
    type Rows<'a> = G::Rows<'a>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        (**self).rows()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        (**self).row(row)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        (**self).rows_len()
    }

    #[inline]
    fn columns_len(&self) -> usize {
        (**self).columns_len()
    }
}
