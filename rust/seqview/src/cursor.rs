//! The cursor contract shared by every view, and the iterator that walks a
//! pair of cursors.
//!
//! A cursor is a position-like handle into a view. It can be dereferenced,
//! stepped in either direction, moved by an arbitrary offset, and compared
//! with other cursors of the same view. Unlike raw positions, cursors never
//! leave their view: every movement that would cross the `begin()` or `end()`
//! boundary is rejected with an error and leaves the cursor unchanged.

use std::iter::FusedIterator;

use seqview_common::Result;

/// A random-access position within a view.
///
/// Equality and ordering compare positions only. Comparing cursors that
/// belong to different views is meaningless (but memory-safe).
pub trait Cursor: Clone + Eq + Ord {
    /// The element produced when the cursor is dereferenced.
    type Item;

    /// Returns the element at the cursor, or `None` at the end sentinel.
    fn get(&self) -> Option<Self::Item>;

    /// Moves to the next element.
    ///
    /// # Errors
    ///
    /// `PastEnd` if the cursor is already at the end sentinel.
    fn step_forward(&mut self) -> Result<()>;

    /// Moves to the previous element.
    ///
    /// # Errors
    ///
    /// `BeforeBegin` if the cursor is at the first element of the view.
    fn step_backward(&mut self) -> Result<()>;

    /// Moves the cursor by `offset` elements (negative moves backward).
    ///
    /// The landing index must lie within `0..=len`, where `len` addresses the
    /// end sentinel.
    fn seek(&mut self, offset: isize) -> Result<()>;

    /// The signed number of elements between `origin` and `self`,
    /// i.e. `self - origin`.
    fn distance_from(&self, origin: &Self) -> isize;

    /// The number of elements between the beginning of the view and the cursor.
    fn index(&self) -> usize;

    /// Returns a copy of the cursor moved by `offset`.
    fn offset(&self, offset: isize) -> Result<Self> {
        let mut cursor = self.clone();
        cursor.seek(offset)?;
        Ok(cursor)
    }

    /// Returns the element `offset` positions away from the cursor.
    ///
    /// `Ok(None)` means the offset lands exactly on the end sentinel.
    fn at(&self, offset: isize) -> Result<Option<Self::Item>> {
        Ok(self.offset(offset)?.get())
    }
}

/// Double-ended iterator over the half-open cursor range `[front, back)`.
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    front: C,
    back: C,
}

impl<C: Cursor> CursorIter<C> {
    /// Creates an iterator over `[front, back)`.
    ///
    /// `front` must not be positioned after `back`.
    pub fn new(front: C, back: C) -> Self {
        debug_assert!(front <= back);
        CursorIter { front, back }
    }

    /// Returns the cursor of the next element produced from the front.
    pub fn front(&self) -> &C {
        &self.front
    }

    /// Returns the cursor just past the next element produced from the back.
    pub fn back(&self) -> &C {
        &self.back
    }

    fn remaining(&self) -> usize {
        self.back.distance_from(&self.front).max(0) as usize
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.step_forward().ok()?;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }

    /// Skips `n` elements with a single seek rather than `n` steps.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining() {
            self.front = self.back.clone();
            return None;
        }
        self.front.seek(n as isize).ok()?;
        self.next()
    }
}

impl<C: Cursor> DoubleEndedIterator for CursorIter<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_backward().ok()?;
        self.back.get()
    }
}

impl<C: Cursor> ExactSizeIterator for CursorIter<C> {}

impl<C: Cursor> FusedIterator for CursorIter<C> {}
