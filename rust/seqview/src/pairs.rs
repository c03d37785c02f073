//! All ordered pairs drawn from one sequence.

use std::{fmt, ops::Range};

use seqview_common::Result;

use crate::{
    cursor::{Cursor, CursorIter},
    grid::Grid,
    pair_cursor::PairCursor,
    sequence::{RandomAccess, SequenceView},
};

/// View of the `N x N` ordered pairs `(x, y)` of a sequence of length `N`,
/// in row-major order.
///
/// Self-pairs `(x, x)` are included: this is the cartesian square, not
/// combinations without repetition. The pair at index `k` is
/// `(seq[k / N], seq[k % N])`.
///
/// The size is computed once at construction.
pub struct PairsView<'s, S: ?Sized> {
    axis: SequenceView<'s, S>,
    grid: Grid,
}

impl<S: ?Sized> Clone for PairsView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for PairsView<'_, S> {}

impl<S: ?Sized> fmt::Debug for PairsView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairsView")
            .field("axis", &self.axis)
            .field("grid", &self.grid)
            .finish()
    }
}

impl<'s, S: RandomAccess + ?Sized> PairsView<'s, S> {
    /// Creates the pairs view of `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis.len()` squared overflows `usize`.
    pub fn new(axis: SequenceView<'s, S>) -> Self {
        let grid = Grid::square(axis.len());
        PairsView { axis, grid }
    }

    /// The sequence view both pair components are drawn from.
    pub fn axis(&self) -> SequenceView<'s, S> {
        self.axis
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Number of pairs, `N * N`.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Returns the pair at linear index `k`.
    pub fn get(&self, k: usize) -> Option<(S::Item<'s>, S::Item<'s>)> {
        if k < self.len() {
            self.cursor_at(k).get()
        } else {
            None
        }
    }

    pub fn begin(&self) -> PairCursor<'s, 's, S, S> {
        PairCursor::new(self.axis, self.axis, self.grid, self.grid.begin())
    }

    /// The end sentinel, at coordinate `(N, 0)`.
    pub fn end(&self) -> PairCursor<'s, 's, S, S> {
        PairCursor::new(self.axis, self.axis, self.grid, self.grid.end())
    }

    pub fn iter(&self) -> CursorIter<PairCursor<'s, 's, S, S>> {
        CursorIter::new(self.begin(), self.end())
    }

    fn cursor_at(&self, k: usize) -> PairCursor<'s, 's, S, S> {
        let coord = self.grid.unflatten(k).unwrap_or_else(|| self.grid.end());
        PairCursor::new(self.axis, self.axis, self.grid, coord)
    }
}

impl<'s, S: RandomAccess + ?Sized> RandomAccess for PairsView<'s, S> {
    type Item<'a>
        = (S::Item<'s>, S::Item<'s>)
    where
        Self: 'a;

    fn len(&self) -> usize {
        PairsView::len(self)
    }

    fn get(&self, index: usize) -> Option<Self::Item<'_>> {
        PairsView::get(self, index)
    }
}

impl<'s, S: RandomAccess + ?Sized> IntoIterator for &PairsView<'s, S> {
    type Item = (S::Item<'s>, S::Item<'s>);
    type IntoIter = CursorIter<PairCursor<'s, 's, S, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the view of all ordered pairs of `seq`, self-pairs included.
#[doc(alias = "cpairs")]
pub fn pairs<S: RandomAccess + ?Sized>(seq: &S) -> PairsView<'_, S> {
    PairsView::new(SequenceView::new(seq))
}

/// Returns the view of all ordered pairs of `seq[bounds]`.
///
/// # Errors
///
/// `InvalidArgument` if `bounds` is not a valid sub-range of `seq`.
pub fn pairs_in<S: RandomAccess + ?Sized>(
    seq: &S,
    bounds: Range<usize>,
) -> Result<PairsView<'_, S>> {
    Ok(PairsView::new(SequenceView::with_bounds(seq, bounds)?))
}
