//! Cartesian product of two sequences.

use std::{fmt, ops::Range};

use seqview_common::Result;

use crate::{
    cursor::{Cursor, CursorIter},
    grid::Grid,
    pair_cursor::PairCursor,
    sequence::{RandomAccess, SequenceView},
};

/// View of the `N1 x N2` pairs `(a, b)` with `a` from the first sequence and
/// `b` from the second, in row-major order with `N2` as the row stride.
///
/// The pair at index `k` is `(first[k / N2], second[k % N2])`; the end
/// sentinel sits at coordinate `(N1, 0)`.
pub struct ProductView<'a, 'b, A: ?Sized, B: ?Sized> {
    rows: SequenceView<'a, A>,
    cols: SequenceView<'b, B>,
    grid: Grid,
}

impl<A: ?Sized, B: ?Sized> Clone for ProductView<'_, '_, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized, B: ?Sized> Copy for ProductView<'_, '_, A, B> {}

impl<A: ?Sized, B: ?Sized> fmt::Debug for ProductView<'_, '_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductView")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("grid", &self.grid)
            .finish()
    }
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> ProductView<'a, 'b, A, B> {
    /// Creates the product of `rows` and `cols`.
    ///
    /// # Panics
    ///
    /// Panics if `rows.len() * cols.len()` overflows `usize`.
    pub fn new(rows: SequenceView<'a, A>, cols: SequenceView<'b, B>) -> Self {
        let grid = Grid::new(rows.len(), cols.len());
        ProductView { rows, cols, grid }
    }

    /// The view supplying the first pair component.
    pub fn rows(&self) -> SequenceView<'a, A> {
        self.rows
    }

    /// The view supplying the second pair component.
    pub fn cols(&self) -> SequenceView<'b, B> {
        self.cols
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Number of pairs, `N1 * N2`.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Returns the pair at linear index `k`.
    pub fn get(&self, k: usize) -> Option<(A::Item<'a>, B::Item<'b>)> {
        let coord = self.grid.unflatten(k)?;
        PairCursor::new(self.rows, self.cols, self.grid, coord).get()
    }

    pub fn begin(&self) -> PairCursor<'a, 'b, A, B> {
        PairCursor::new(self.rows, self.cols, self.grid, self.grid.begin())
    }

    /// The end sentinel, at coordinate `(N1, 0)`.
    pub fn end(&self) -> PairCursor<'a, 'b, A, B> {
        PairCursor::new(self.rows, self.cols, self.grid, self.grid.end())
    }

    pub fn iter(&self) -> CursorIter<PairCursor<'a, 'b, A, B>> {
        CursorIter::new(self.begin(), self.end())
    }
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> RandomAccess
    for ProductView<'a, 'b, A, B>
{
    type Item<'v>
        = (A::Item<'a>, B::Item<'b>)
    where
        Self: 'v;

    fn len(&self) -> usize {
        ProductView::len(self)
    }

    fn get(&self, index: usize) -> Option<Self::Item<'_>> {
        ProductView::get(self, index)
    }
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> IntoIterator
    for &ProductView<'a, 'b, A, B>
{
    type Item = (A::Item<'a>, B::Item<'b>);
    type IntoIter = CursorIter<PairCursor<'a, 'b, A, B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the cartesian product of `first` and `second`.
#[doc(alias = "cproduct")]
pub fn product<'a, 'b, A, B>(first: &'a A, second: &'b B) -> ProductView<'a, 'b, A, B>
where
    A: RandomAccess + ?Sized,
    B: RandomAccess + ?Sized,
{
    ProductView::new(SequenceView::new(first), SequenceView::new(second))
}

/// Returns the cartesian product of `first[first_bounds]` and
/// `second[second_bounds]`.
///
/// # Errors
///
/// `InvalidArgument` if either range is not a valid sub-range of its sequence.
pub fn product_in<'a, 'b, A, B>(
    first: &'a A,
    first_bounds: Range<usize>,
    second: &'b B,
    second_bounds: Range<usize>,
) -> Result<ProductView<'a, 'b, A, B>>
where
    A: RandomAccess + ?Sized,
    B: RandomAccess + ?Sized,
{
    Ok(ProductView::new(
        SequenceView::with_bounds(first, first_bounds)?,
        SequenceView::with_bounds(second, second_bounds)?,
    ))
}
