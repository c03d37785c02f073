//! Cursor over a row-major grid of pairs drawn from two sequence views.
//!
//! Shared by [`PairsView`](crate::pairs::PairsView), where both axes are the
//! same view, and [`ProductView`](crate::product::ProductView), where the
//! axes are independent.

use std::{cmp::Ordering, fmt};

use seqview_common::{Result, error::Error};

use crate::{
    cursor::Cursor,
    grid::{Coord, Grid},
    sequence::{RandomAccess, SequenceView},
};

/// A cursor at coordinate `(row, col)` of a pair grid.
///
/// Dereferencing yields `(rows[row], cols[col])`. Two cursors are equal when
/// they sit at the same coordinate; ordering follows the flattened index.
pub struct PairCursor<'a, 'b, A: ?Sized, B: ?Sized> {
    rows: SequenceView<'a, A>,
    cols: SequenceView<'b, B>,
    grid: Grid,
    coord: Coord,
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> PairCursor<'a, 'b, A, B> {
    pub(crate) fn new(
        rows: SequenceView<'a, A>,
        cols: SequenceView<'b, B>,
        grid: Grid,
        coord: Coord,
    ) -> Self {
        debug_assert_eq!(grid.rows(), rows.len());
        debug_assert_eq!(grid.stride(), cols.len());
        PairCursor {
            rows,
            cols,
            grid,
            coord,
        }
    }

    /// The current `(row, col)` coordinate.
    pub fn coordinates(&self) -> Coord {
        self.coord
    }

    /// The first component of the current pair.
    pub fn first(&self) -> Option<A::Item<'a>> {
        if self.grid.contains(self.coord) {
            self.rows.get(self.coord.0)
        } else {
            None
        }
    }

    /// The second component of the current pair.
    pub fn second(&self) -> Option<B::Item<'b>> {
        if self.grid.contains(self.coord) {
            self.cols.get(self.coord.1)
        } else {
            None
        }
    }
}

impl<A: ?Sized, B: ?Sized> Clone for PairCursor<'_, '_, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized, B: ?Sized> Copy for PairCursor<'_, '_, A, B> {}

impl<A: ?Sized, B: ?Sized> fmt::Debug for PairCursor<'_, '_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairCursor")
            .field("grid", &self.grid)
            .field("coord", &self.coord)
            .finish()
    }
}

impl<A: ?Sized, B: ?Sized> PartialEq for PairCursor<'_, '_, A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl<A: ?Sized, B: ?Sized> Eq for PairCursor<'_, '_, A, B> {}

impl<A: ?Sized, B: ?Sized> PartialOrd for PairCursor<'_, '_, A, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: ?Sized, B: ?Sized> Ord for PairCursor<'_, '_, A, B> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lexicographic on (row, col) is the flattened order.
        self.coord.cmp(&other.coord)
    }
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> Cursor
    for PairCursor<'a, 'b, A, B>
{
    type Item = (A::Item<'a>, B::Item<'b>);

    fn get(&self) -> Option<Self::Item> {
        Some((self.first()?, self.second()?))
    }

    fn step_forward(&mut self) -> Result<()> {
        self.coord = self
            .grid
            .step_forward(self.coord)
            .ok_or_else(Error::past_end)?;
        Ok(())
    }

    fn step_backward(&mut self) -> Result<()> {
        self.coord = self
            .grid
            .step_backward(self.coord)
            .ok_or_else(Error::before_begin)?;
        Ok(())
    }

    fn seek(&mut self, offset: isize) -> Result<()> {
        let target = (self.index() as isize).saturating_add(offset);
        self.coord = self
            .grid
            .offset(self.coord, offset)
            .ok_or_else(|| Error::out_of_range(target, self.grid.len()))?;
        Ok(())
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.grid.distance(self.coord, origin.coord)
    }

    fn index(&self) -> usize {
        self.grid.flatten(self.coord)
    }
}
