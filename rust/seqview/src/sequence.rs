//! The random-access substrate every adaptor wraps.
//!
//! [`RandomAccess`] is the collaborator contract: constant-time length and
//! indexed access. It is implemented for slices, vectors, arrays, shared
//! references to any implementor, and for every view in this crate, so that
//! views compose (e.g. `pairs` over a `filter`).
//!
//! [`SequenceView`] is a half-open window `[start, end)` over a borrowed
//! sequence. It holds positions only and is `Copy`; the borrow ties its
//! lifetime to the underlying sequence, which cannot be resized or moved
//! while any view over it is alive.

use std::{cmp::Ordering, fmt, ops::Range};

use seqview_common::{Result, error::Error, verify_arg};

use crate::cursor::{Cursor, CursorIter};

/// A sequence with constant-time length and indexed element access.
pub trait RandomAccess {
    /// The element type produced by [`RandomAccess::get`].
    ///
    /// Plain sequences yield references into their storage; views yield
    /// whatever element they derive on demand (e.g. a pair of references).
    type Item<'a>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<Self::Item<'_>>;
}

impl<T> RandomAccess for [T] {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<R: RandomAccess + ?Sized> RandomAccess for &R {
    type Item<'a>
        = R::Item<'a>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        R::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item<'_>> {
        R::get(self, index)
    }
}

/// A half-open window `[start, end)` over a borrowed random-access sequence.
///
/// Positions are absolute indices into the underlying sequence; the
/// view-relative index of a position is `position - start`.
pub struct SequenceView<'s, S: ?Sized> {
    seq: &'s S,
    start: usize,
    end: usize,
}

impl<S: ?Sized> Clone for SequenceView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for SequenceView<'_, S> {}

impl<S: ?Sized> fmt::Debug for SequenceView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceView")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<'s, S: RandomAccess + ?Sized> SequenceView<'s, S> {
    /// Creates a view over the whole sequence.
    pub fn new(seq: &'s S) -> Self {
        SequenceView {
            seq,
            start: 0,
            end: seq.len(),
        }
    }

    /// Creates a view over `bounds` of the sequence.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `bounds.start > bounds.end` or `bounds.end`
    /// exceeds the sequence length.
    pub fn with_bounds(seq: &'s S, bounds: Range<usize>) -> Result<Self> {
        verify_arg!(bounds, bounds.start <= bounds.end);
        verify_arg!(bounds, bounds.end <= seq.len());
        Ok(SequenceView {
            seq,
            start: bounds.start,
            end: bounds.end,
        })
    }

    /// The underlying sequence.
    pub fn sequence(&self) -> &'s S {
        self.seq
    }

    /// The absolute bounds of the view within the underlying sequence.
    pub fn bounds(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the element at view-relative `index`.
    pub fn get(&self, index: usize) -> Option<S::Item<'s>> {
        if index < self.len() {
            S::get(self.seq, self.start + index)
        } else {
            None
        }
    }

    /// Returns the element at absolute `position`, if it lies inside the view.
    pub(crate) fn get_at_position(&self, position: usize) -> Option<S::Item<'s>> {
        if (self.start..self.end).contains(&position) {
            S::get(self.seq, position)
        } else {
            None
        }
    }

    pub fn begin(&self) -> SequenceCursor<'s, S> {
        SequenceCursor {
            view: *self,
            pos: self.start,
        }
    }

    pub fn end(&self) -> SequenceCursor<'s, S> {
        SequenceCursor {
            view: *self,
            pos: self.end,
        }
    }

    pub fn iter(&self) -> CursorIter<SequenceCursor<'s, S>> {
        CursorIter::new(self.begin(), self.end())
    }
}

impl<'s, S: RandomAccess + ?Sized> RandomAccess for SequenceView<'s, S> {
    type Item<'a>
        = S::Item<'s>
    where
        Self: 'a;

    fn len(&self) -> usize {
        SequenceView::len(self)
    }

    fn get(&self, index: usize) -> Option<S::Item<'s>> {
        SequenceView::get(self, index)
    }
}

impl<'s, S: RandomAccess + ?Sized> IntoIterator for &SequenceView<'s, S> {
    type Item = S::Item<'s>;
    type IntoIter = CursorIter<SequenceCursor<'s, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`SequenceView`].
pub struct SequenceCursor<'s, S: ?Sized> {
    view: SequenceView<'s, S>,
    pos: usize,
}

impl<S: ?Sized> Clone for SequenceCursor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for SequenceCursor<'_, S> {}

impl<S: ?Sized> fmt::Debug for SequenceCursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceCursor")
            .field("pos", &self.pos)
            .finish()
    }
}

impl<S: ?Sized> PartialEq for SequenceCursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<S: ?Sized> Eq for SequenceCursor<'_, S> {}

impl<S: ?Sized> PartialOrd for SequenceCursor<'_, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: ?Sized> Ord for SequenceCursor<'_, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl<S: ?Sized> SequenceCursor<'_, S> {
    /// The absolute position of the cursor in the underlying sequence.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'s, S: RandomAccess + ?Sized> Cursor for SequenceCursor<'s, S> {
    type Item = S::Item<'s>;

    fn get(&self) -> Option<Self::Item> {
        self.view.get_at_position(self.pos)
    }

    fn step_forward(&mut self) -> Result<()> {
        if self.pos == self.view.end {
            return Err(Error::past_end());
        }
        self.pos += 1;
        Ok(())
    }

    fn step_backward(&mut self) -> Result<()> {
        if self.pos == self.view.start {
            return Err(Error::before_begin());
        }
        self.pos -= 1;
        Ok(())
    }

    fn seek(&mut self, offset: isize) -> Result<()> {
        let target = (self.index() as isize).saturating_add(offset);
        let len = self.view.len();
        if target < 0 || target as usize > len {
            return Err(Error::out_of_range(target, len));
        }
        self.pos = self.view.start + target as usize;
        Ok(())
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.pos as isize - origin.pos as isize
    }

    fn index(&self) -> usize {
        self.pos - self.view.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_sequence_view() {
        let values = vec![10, 20, 30];
        let view = SequenceView::new(&values);
        assert_eq!(view.len(), 3);
        assert_eq!(view.bounds(), 0..3);
        assert_eq!(view.get(1), Some(&20));
        assert_eq!(view.get(3), None);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), values);
        assert_eq!(view.iter().rev().copied().collect::<Vec<_>>(), vec![30, 20, 10]);
    }

    #[test]
    fn test_bounded_view() {
        let values = [1, 2, 3, 4, 5, 6];
        let view = SequenceView::with_bounds(&values, 2..5).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.get(0), Some(&3));
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);

        let begin = view.begin();
        assert_eq!(begin.position(), 2);
        assert_eq!(begin.index(), 0);
        assert_eq!(view.end().distance_from(&begin), 3);
    }

    #[test]
    fn test_invalid_bounds() {
        let values = [1, 2, 3];
        assert!(SequenceView::with_bounds(&values[..], 2..1).is_err());
        assert!(SequenceView::with_bounds(&values[..], 0..4).is_err());
        assert!(SequenceView::with_bounds(&values[..], 3..3).unwrap().is_empty());
    }

    #[test]
    fn test_cursor_boundaries() {
        let values = [7, 8];
        let view = SequenceView::new(&values);
        let mut cursor = view.begin();
        assert!(cursor.step_backward().is_err());
        assert_eq!(cursor, view.begin());

        cursor.step_forward().unwrap();
        cursor.step_forward().unwrap();
        assert_eq!(cursor, view.end());
        assert_eq!(cursor.get(), None);
        assert!(cursor.step_forward().is_err());

        cursor.step_backward().unwrap();
        assert_eq!(cursor.get(), Some(&8));
    }

    #[test]
    fn test_cursor_seek() {
        let values: Vec<u32> = (0..10).collect();
        let view = SequenceView::with_bounds(&values, 2..8).unwrap();
        let mut cursor = view.begin();
        cursor.seek(4).unwrap();
        assert_eq!(cursor.get(), Some(&6));
        cursor.seek(-3).unwrap();
        assert_eq!(cursor.get(), Some(&3));
        assert!(cursor.seek(-2).is_err());
        assert_eq!(cursor.get(), Some(&3));
        assert_eq!(cursor.offset(5).unwrap(), view.end());
        assert!(cursor.offset(6).is_err());
        assert_eq!(cursor.at(2).unwrap(), Some(&5));
    }

    #[test]
    fn test_reference_impls() {
        let values = vec![1, 2, 3];
        let by_ref = &values;
        assert_eq!(RandomAccess::len(&by_ref), 3);
        assert_eq!(RandomAccess::get(&by_ref, 2), Some(&3));
        let array = [4u8; 5];
        assert_eq!(RandomAccess::len(&array), 5);
        assert!(RandomAccess::get(&array, 5).is_none());
    }

    #[test]
    fn test_nth_uses_seek() {
        let values: Vec<u32> = (0..100).collect();
        let view = SequenceView::new(&values);
        let mut iter = view.iter();
        assert_eq!(iter.nth(42), Some(&42));
        assert_eq!(iter.len(), 57);
        assert_eq!(iter.nth(100), None);
        assert_eq!(iter.next(), None);
    }
}
