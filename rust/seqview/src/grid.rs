//! Row-major pair-index arithmetic.
//!
//! [`Grid`] converts between a flat linear index `k` and a 2-D coordinate
//! `(row, col)` over a `rows x stride` index space:
//!
//! ```text
//! flatten(row, col) = stride * row + col
//! unflatten(k)      = (k / stride, k % stride)
//! ```
//!
//! Enumeration advances the column first and carries into the row when the
//! column wraps past `stride`, which reproduces row-major order
//! `(0, 0), (0, 1), ..., (0, stride - 1), (1, 0), ...`.
//!
//! The end sentinel is `(rows, 0)`: one past the last row, column reset to
//! the row start. Its flat index equals [`Grid::len`], so the sentinel is
//! reached by forward stepping from every valid coordinate and sorts after
//! all of them. An empty grid (either dimension zero) has only the sentinel.

/// A 2-D coordinate `(row, col)`.
pub type Coord = (usize, usize);

/// Dimensions of a row-major index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    stride: usize,
    len: usize,
}

impl Grid {
    /// Creates a grid with `rows` rows of `stride` columns each.
    ///
    /// # Panics
    ///
    /// Panics if `rows * stride` overflows `usize`.
    pub fn new(rows: usize, stride: usize) -> Grid {
        let len = rows.checked_mul(stride).unwrap_or_else(|| {
            panic!("Arithmetic overflow: a {rows}x{stride} pair grid exceeds usize")
        });
        Grid { rows, stride, len }
    }

    /// Creates an `n x n` grid.
    pub fn square(n: usize) -> Grid {
        Grid::new(n, n)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in each row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Total number of coordinates, `rows * stride`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first coordinate, or the end sentinel if the grid is empty.
    pub fn begin(&self) -> Coord {
        if self.is_empty() { self.end() } else { (0, 0) }
    }

    /// The end sentinel `(rows, 0)`.
    pub fn end(&self) -> Coord {
        (self.rows, 0)
    }

    /// Returns `true` if `coord` addresses an element (not the sentinel).
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.stride
    }

    /// Linear index of `(row, col)`.
    #[inline]
    pub fn flatten(&self, (row, col): Coord) -> usize {
        self.stride * row + col
    }

    /// Coordinate of linear index `k`.
    ///
    /// `k == len()` maps to the end sentinel; anything larger is `None`.
    #[inline]
    pub fn unflatten(&self, k: usize) -> Option<Coord> {
        match k.cmp(&self.len) {
            std::cmp::Ordering::Less => Some((k / self.stride, k % self.stride)),
            std::cmp::Ordering::Equal => Some(self.end()),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// The coordinate following `coord`, or `None` if `coord` is the sentinel.
    pub fn step_forward(&self, (row, col): Coord) -> Option<Coord> {
        if (row, col) == self.end() {
            return None;
        }
        let col = col + 1;
        if col == self.stride {
            Some((row + 1, 0))
        } else {
            Some((row, col))
        }
    }

    /// The coordinate preceding `coord`, or `None` if `coord` is the first one.
    pub fn step_backward(&self, (row, col): Coord) -> Option<Coord> {
        if self.flatten((row, col)) == 0 {
            return None;
        }
        if col == 0 {
            Some((row - 1, self.stride - 1))
        } else {
            Some((row, col - 1))
        }
    }

    /// Moves `coord` by `delta` linear positions; `None` if the result falls
    /// outside `0..=len()`.
    pub fn offset(&self, coord: Coord, delta: isize) -> Option<Coord> {
        let k = self.flatten(coord).checked_add_signed(delta)?;
        self.unflatten(k)
    }

    /// `flatten(lhs) - flatten(rhs)`, computed per axis as
    /// `stride * (row_lhs - row_rhs) + (col_lhs - col_rhs)`.
    pub fn distance(&self, lhs: Coord, rhs: Coord) -> isize {
        let rows = lhs.0 as isize - rhs.0 as isize;
        let cols = lhs.1 as isize - rhs.1 as isize;
        self.stride as isize * rows + cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_unflatten() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.len(), 12);
        for row in 0..3 {
            for col in 0..4 {
                let k = grid.flatten((row, col));
                assert_eq!(k, 4 * row + col);
                assert_eq!(grid.unflatten(k), Some((row, col)));
            }
        }
        assert_eq!(grid.unflatten(12), Some((3, 0)));
        assert_eq!(grid.unflatten(13), None);
    }

    #[test]
    fn test_uses_stride_not_rows() {
        // 2 rows of 5: a modulus of 2 would put index 7 at (3, 1).
        let grid = Grid::new(2, 5);
        assert_eq!(grid.unflatten(7), Some((1, 2)));
        assert_eq!(grid.offset((0, 4), 3), Some((1, 2)));
    }

    #[test]
    fn test_stepping_is_row_major() {
        let grid = Grid::new(2, 3);
        let mut coord = grid.begin();
        let mut seen = vec![];
        while coord != grid.end() {
            seen.push(coord);
            coord = grid.step_forward(coord).unwrap();
        }
        assert_eq!(seen, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(grid.step_forward(grid.end()), None);

        let mut back = vec![];
        let mut coord = grid.end();
        while let Some(prev) = grid.step_backward(coord) {
            back.push(prev);
            coord = prev;
        }
        back.reverse();
        assert_eq!(back, seen);
    }

    #[test]
    fn test_distance() {
        let grid = Grid::square(4);
        assert_eq!(grid.distance(grid.end(), grid.begin()), 16);
        assert_eq!(grid.distance((1, 0), (0, 3)), 1);
        assert_eq!(grid.distance((0, 3), (2, 1)), -6);
        assert_eq!(grid.offset((0, 0), -1), None);
        assert_eq!(grid.offset((3, 3), 1), Some(grid.end()));
        assert_eq!(grid.offset((3, 3), 2), None);
    }

    #[test]
    fn test_empty_grids() {
        for grid in [Grid::new(0, 3), Grid::new(3, 0), Grid::square(0)] {
            assert!(grid.is_empty());
            assert_eq!(grid.begin(), grid.end());
            assert_eq!(grid.unflatten(0), Some(grid.end()));
            assert_eq!(grid.step_backward(grid.begin()), None);
            assert_eq!(grid.distance(grid.end(), grid.begin()), 0);
        }
    }

    #[test]
    #[should_panic(expected = "Arithmetic overflow")]
    fn test_overflow() {
        let _ = Grid::square(usize::MAX);
    }
}
