//! Positional pairing of two sequences, truncated to the shorter one.

use std::{cmp::Ordering, fmt};

use seqview_common::{Result, error::Error};

use crate::{
    cursor::{Cursor, CursorIter},
    sequence::{RandomAccess, SequenceView},
};

/// View of `(first[k], second[k])` for `k` in `0..min(N1, N2)`.
///
/// Mismatched lengths are not an error: the excess of the longer sequence
/// is silently excluded, and both end positions sit at
/// `start + min(N1, N2)` of their respective views.
pub struct ZipView<'a, 'b, A: ?Sized, B: ?Sized> {
    first: SequenceView<'a, A>,
    second: SequenceView<'b, B>,
    len: usize,
}

impl<A: ?Sized, B: ?Sized> Clone for ZipView<'_, '_, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized, B: ?Sized> Copy for ZipView<'_, '_, A, B> {}

impl<A: ?Sized, B: ?Sized> fmt::Debug for ZipView<'_, '_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipView")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> ZipView<'a, 'b, A, B> {
    pub fn new(first: SequenceView<'a, A>, second: SequenceView<'b, B>) -> Self {
        let len = first.len().min(second.len());
        ZipView { first, second, len }
    }

    /// Number of pairs, `min(N1, N2)`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the two sequences differ in length, i.e. some
    /// elements of the longer one are not part of the view.
    pub fn is_truncated(&self) -> bool {
        self.first.len() != self.second.len()
    }

    pub fn get(&self, k: usize) -> Option<(A::Item<'a>, B::Item<'b>)> {
        if k < self.len {
            Some((self.first.get(k)?, self.second.get(k)?))
        } else {
            None
        }
    }

    pub fn begin(&self) -> ZipCursor<'a, 'b, A, B> {
        ZipCursor {
            view: *self,
            offset: 0,
        }
    }

    pub fn end(&self) -> ZipCursor<'a, 'b, A, B> {
        ZipCursor {
            view: *self,
            offset: self.len,
        }
    }

    pub fn iter(&self) -> CursorIter<ZipCursor<'a, 'b, A, B>> {
        CursorIter::new(self.begin(), self.end())
    }
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> RandomAccess
    for ZipView<'a, 'b, A, B>
{
    type Item<'v>
        = (A::Item<'a>, B::Item<'b>)
    where
        Self: 'v;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<Self::Item<'_>> {
        ZipView::get(self, index)
    }
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> IntoIterator
    for &ZipView<'a, 'b, A, B>
{
    type Item = (A::Item<'a>, B::Item<'b>);
    type IntoIter = CursorIter<ZipCursor<'a, 'b, A, B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`ZipView`].
///
/// Both axes always move in lockstep, so a single view-relative offset
/// describes the position on each of them.
pub struct ZipCursor<'a, 'b, A: ?Sized, B: ?Sized> {
    view: ZipView<'a, 'b, A, B>,
    offset: usize,
}

impl<A: ?Sized, B: ?Sized> Clone for ZipCursor<'_, '_, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized, B: ?Sized> Copy for ZipCursor<'_, '_, A, B> {}

impl<A: ?Sized, B: ?Sized> fmt::Debug for ZipCursor<'_, '_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipCursor")
            .field("offset", &self.offset)
            .finish()
    }
}

impl<A: ?Sized, B: ?Sized> PartialEq for ZipCursor<'_, '_, A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl<A: ?Sized, B: ?Sized> Eq for ZipCursor<'_, '_, A, B> {}

impl<A: ?Sized, B: ?Sized> PartialOrd for ZipCursor<'_, '_, A, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: ?Sized, B: ?Sized> Ord for ZipCursor<'_, '_, A, B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> ZipCursor<'a, 'b, A, B> {
    /// The first component of the current pair.
    pub fn first(&self) -> Option<A::Item<'a>> {
        if self.offset < self.view.len {
            self.view.first.get(self.offset)
        } else {
            None
        }
    }

    /// The second component of the current pair.
    pub fn second(&self) -> Option<B::Item<'b>> {
        if self.offset < self.view.len {
            self.view.second.get(self.offset)
        } else {
            None
        }
    }

    /// Absolute positions of the cursor in the two underlying sequences.
    pub fn positions(&self) -> (usize, usize) {
        (
            self.view.first.bounds().start + self.offset,
            self.view.second.bounds().start + self.offset,
        )
    }
}

impl<'a, 'b, A: RandomAccess + ?Sized, B: RandomAccess + ?Sized> Cursor
    for ZipCursor<'a, 'b, A, B>
{
    type Item = (A::Item<'a>, B::Item<'b>);

    fn get(&self) -> Option<Self::Item> {
        self.view.get(self.offset)
    }

    fn step_forward(&mut self) -> Result<()> {
        if self.offset == self.view.len {
            return Err(Error::past_end());
        }
        self.offset += 1;
        Ok(())
    }

    fn step_backward(&mut self) -> Result<()> {
        if self.offset == 0 {
            return Err(Error::before_begin());
        }
        self.offset -= 1;
        Ok(())
    }

    fn seek(&mut self, offset: isize) -> Result<()> {
        let target = (self.offset as isize).saturating_add(offset);
        if target < 0 || target as usize > self.view.len {
            return Err(Error::out_of_range(target, self.view.len));
        }
        self.offset = target as usize;
        Ok(())
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.offset as isize - origin.offset as isize
    }

    fn index(&self) -> usize {
        self.offset
    }
}

/// Returns the positional pairing of `first` and `second`, truncated to the
/// shorter of the two.
#[doc(alias = "czip")]
pub fn zip<'a, 'b, A, B>(first: &'a A, second: &'b B) -> ZipView<'a, 'b, A, B>
where
    A: RandomAccess + ?Sized,
    B: RandomAccess + ?Sized,
{
    ZipView::new(SequenceView::new(first), SequenceView::new(second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_truncates() {
        let a = [1, 2, 3];
        let b = [9, 8];
        let view = zip(&a, &b);
        assert_eq!(view.len(), 2);
        assert!(view.is_truncated());
        let items: Vec<(i32, i32)> = view.iter().map(|(x, y)| (*x, *y)).collect();
        assert_eq!(items, vec![(1, 9), (2, 8)]);
        assert_eq!(view.end().positions(), (2, 2));
        assert_eq!(view.get(2), None);
    }

    #[test]
    fn test_zip_equal_lengths() {
        let a = vec!['a', 'b', 'c'];
        let b = vec![1u8, 2, 3];
        let view = zip(&a, &b);
        assert!(!view.is_truncated());
        assert_eq!(view.iter().last(), Some((&'c', &3)));
        assert_eq!(
            view.iter().rev().map(|(c, _)| *c).collect::<String>(),
            "cba"
        );
    }

    #[test]
    fn test_zip_cursor() {
        let a = [10, 20, 30, 40];
        let b = ["w", "x", "y", "z", "extra"];
        let view = zip(&a, &b);
        let mut cursor = view.begin();
        cursor.seek(3).unwrap();
        assert_eq!(cursor.first(), Some(&40));
        assert_eq!(cursor.second(), Some(&"z"));
        cursor.step_forward().unwrap();
        assert_eq!(cursor, view.end());
        assert_eq!(cursor.first(), None);
        assert!(cursor.step_forward().is_err());
        assert!(cursor.seek(-5).is_err());
        assert_eq!(cursor.distance_from(&view.begin()), 4);
    }

    #[test]
    fn test_zip_with_empty() {
        let a = [1, 2];
        let b: [i32; 0] = [];
        let view = zip(&a, &b);
        assert!(view.is_empty());
        assert_eq!(view.begin(), view.end());
        assert_eq!(view.iter().count(), 0);
    }
}
