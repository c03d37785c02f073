//! Lazily filtered views.
//!
//! A [`FilterView`] presents the elements of a sequence view that satisfy a
//! predicate, in their original order, without copying them. Construction
//! trims the range so that both of its endpoints satisfy the predicate:
//!
//! - scan forward from the start until the predicate holds (or the end is
//!   reached, leaving the view empty);
//! - scan backward from the last position until the predicate holds.
//!
//! An empty input range is detected up front and never calls the predicate.
//!
//! Stepping scans element by element and always lands on a matching
//! position or on the end sentinel. Random access (`seek`, `distance_from`,
//! `len`, `get`) follows the [`FilterIndexing`] strategy of the view's
//! [`FilterConfig`]; neither strategy ever lands on a non-matching position.
//!
//! The predicate must be pure: depending on the traversal pattern it is
//! invoked a variable number of times on the same element (the construction
//! scan, every step that inspects a position, and the one-time index build).

use std::{cmp::Ordering, fmt, iter::FusedIterator, ops::Range, sync::OnceLock};

use seqview_common::{Result, error::Error};

use crate::{
    config::{FilterConfig, FilterIndexing},
    cursor::Cursor,
    sequence::{RandomAccess, SequenceView},
};

/// View of the elements of `base` that satisfy `predicate`.
pub struct FilterView<'s, S: ?Sized, F> {
    base: SequenceView<'s, S>,
    predicate: F,
    /// Absolute position of the first matching element (or `last` if none).
    first: usize,
    /// One past the absolute position of the last matching element.
    last: usize,
    config: FilterConfig,
    indexing: FilterIndexing,
    positions: OnceLock<Vec<usize>>,
}

impl<'s, S, F> FilterView<'s, S, F>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    /// Creates a filtered view with the default configuration.
    pub fn new(base: SequenceView<'s, S>, predicate: F) -> Self {
        Self::build(base, predicate, FilterConfig::default())
    }

    /// Creates a filtered view with an explicit configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `config` fails validation.
    pub fn with_config(
        base: SequenceView<'s, S>,
        predicate: F,
        config: FilterConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(base, predicate, config))
    }

    fn build(base: SequenceView<'s, S>, predicate: F, config: FilterConfig) -> Self {
        let bounds = base.bounds();
        let mut first = bounds.start;
        let mut last = bounds.end;
        if first != last {
            while first != last && !satisfies(&base, &predicate, first) {
                first += 1;
            }
            if first != last {
                // `first` matches, so the backward scan stops there at the latest.
                while !satisfies(&base, &predicate, last - 1) {
                    last -= 1;
                }
            }
        }
        let indexing = config.resolve(last - first);
        if indexing != config.indexing {
            log::debug!(
                "filter: refined span {} exceeds index threshold {:?}, using {:?}",
                last - first,
                config.index_threshold,
                indexing
            );
        }
        log::trace!("filter: refined {:?} to {:?}", bounds, first..last);
        FilterView {
            base,
            predicate,
            first,
            last,
            config,
            indexing,
            positions: OnceLock::new(),
        }
    }

    /// The unfiltered view this filter reads from.
    pub fn base(&self) -> SequenceView<'s, S> {
        self.base
    }

    /// The refined absolute bounds: from the first to one past the last
    /// matching position. Empty if nothing matches.
    pub fn bounds(&self) -> Range<usize> {
        self.first..self.last
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// The random-access strategy in effect, after applying the index
    /// threshold of the configuration.
    pub fn indexing(&self) -> FilterIndexing {
        self.indexing
    }

    /// Number of matching elements.
    ///
    /// Builds the position index on first use under
    /// [`FilterIndexing::PositionIndex`]; scans the refined range under
    /// [`FilterIndexing::Rescan`].
    pub fn len(&self) -> usize {
        match self.indexing {
            FilterIndexing::PositionIndex => self.positions().len(),
            FilterIndexing::Rescan => self.count_matches(self.first..self.last),
        }
    }

    /// Returns `true` if no element matches. Never calls the predicate.
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Returns the `k`-th matching element.
    pub fn get(&self, k: usize) -> Option<S::Item<'s>> {
        let position = match self.indexing {
            FilterIndexing::PositionIndex => self.positions().get(k).copied(),
            FilterIndexing::Rescan => self.matching_positions().nth(k),
        }?;
        self.base.get_at_position(position)
    }

    /// Cursor at the first matching element (equal to `end()` if none).
    pub fn begin(&self) -> FilterCursor<'_, 's, S, F> {
        FilterCursor {
            view: self,
            pos: self.first,
        }
    }

    /// The end sentinel, one past the last matching element.
    pub fn end(&self) -> FilterCursor<'_, 's, S, F> {
        FilterCursor {
            view: self,
            pos: self.last,
        }
    }

    pub fn iter(&self) -> FilterIter<'_, 's, S, F> {
        FilterIter {
            front: self.begin(),
            back: self.end(),
        }
    }

    #[inline]
    fn matches(&self, position: usize) -> bool {
        satisfies(&self.base, &self.predicate, position)
    }

    fn matching_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (self.first..self.last).filter(|&pos| self.matches(pos))
    }

    fn count_matches(&self, range: Range<usize>) -> usize {
        range.filter(|&pos| self.matches(pos)).count()
    }

    /// Sorted matching positions of the refined range, built on first use.
    fn positions(&self) -> &[usize] {
        self.positions.get_or_init(|| {
            let positions: Vec<usize> = self.matching_positions().collect();
            log::debug!(
                "filter: indexed {} matching positions out of {}",
                positions.len(),
                self.last - self.first
            );
            positions
        })
    }

    /// Number of matching positions in `[from, to)`, both being positions a
    /// cursor of this view can occupy.
    fn count_between(&self, from: usize, to: usize) -> usize {
        match self.indexing {
            FilterIndexing::PositionIndex => {
                let positions = self.positions();
                let rank = |pos: usize| positions.partition_point(|&p| p < pos);
                rank(to) - rank(from)
            }
            FilterIndexing::Rescan => self.count_matches(from..to),
        }
    }
}

#[inline]
fn satisfies<'s, S, F>(base: &SequenceView<'s, S>, predicate: &F, position: usize) -> bool
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    base.get_at_position(position)
        .is_some_and(|item| predicate(&item))
}

impl<S: ?Sized, F: Clone> Clone for FilterView<'_, S, F> {
    fn clone(&self) -> Self {
        FilterView {
            base: self.base,
            predicate: self.predicate.clone(),
            first: self.first,
            last: self.last,
            config: self.config.clone(),
            indexing: self.indexing,
            positions: self.positions.clone(),
        }
    }
}

impl<S: ?Sized, F> fmt::Debug for FilterView<'_, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterView")
            .field("base", &self.base)
            .field("bounds", &(self.first..self.last))
            .field("indexing", &self.indexing)
            .field("indexed", &self.positions.get().map(Vec::len))
            .finish()
    }
}

impl<'s, S, F> RandomAccess for FilterView<'s, S, F>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    type Item<'a>
        = S::Item<'s>
    where
        Self: 'a;

    fn len(&self) -> usize {
        FilterView::len(self)
    }

    fn is_empty(&self) -> bool {
        FilterView::is_empty(self)
    }

    fn get(&self, index: usize) -> Option<Self::Item<'_>> {
        FilterView::get(self, index)
    }
}

impl<'v, 's, S, F> IntoIterator for &'v FilterView<'s, S, F>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    type Item = S::Item<'s>;
    type IntoIter = FilterIter<'v, 's, S, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`FilterView`].
///
/// Always positioned on a matching element or on the end sentinel.
/// Cursors compare by position only.
pub struct FilterCursor<'v, 's, S: ?Sized, F> {
    view: &'v FilterView<'s, S, F>,
    pos: usize,
}

impl<S: ?Sized, F> Clone for FilterCursor<'_, '_, S, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, F> Copy for FilterCursor<'_, '_, S, F> {}

impl<S: ?Sized, F> fmt::Debug for FilterCursor<'_, '_, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCursor")
            .field("pos", &self.pos)
            .finish()
    }
}

impl<S: ?Sized, F> PartialEq for FilterCursor<'_, '_, S, F> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<S: ?Sized, F> Eq for FilterCursor<'_, '_, S, F> {}

impl<S: ?Sized, F> PartialOrd for FilterCursor<'_, '_, S, F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: ?Sized, F> Ord for FilterCursor<'_, '_, S, F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl<S: ?Sized, F> FilterCursor<'_, '_, S, F> {
    /// The absolute position of the cursor in the underlying sequence.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'s, S, F> FilterCursor<'_, 's, S, F>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    fn seek_indexed(&mut self, offset: isize) -> Result<()> {
        let positions = self.view.positions();
        let rank = positions.partition_point(|&p| p < self.pos);
        let target = (rank as isize).saturating_add(offset);
        if target < 0 || target as usize > positions.len() {
            return Err(Error::out_of_range(target, positions.len()));
        }
        self.pos = positions
            .get(target as usize)
            .copied()
            .unwrap_or(self.view.last);
        Ok(())
    }

    fn seek_rescan(&mut self, offset: isize) -> Result<()> {
        let mut cursor = *self;
        let stepped = if offset >= 0 {
            (0..offset).try_for_each(|_| cursor.step_forward())
        } else {
            (0..offset.unsigned_abs()).try_for_each(|_| cursor.step_backward())
        };
        match stepped {
            Ok(()) => {
                *self = cursor;
                Ok(())
            }
            Err(_) => Err(Error::out_of_range(
                (self.index() as isize).saturating_add(offset),
                self.view.len(),
            )),
        }
    }
}

impl<'s, S, F> Cursor for FilterCursor<'_, 's, S, F>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    type Item = S::Item<'s>;

    fn get(&self) -> Option<Self::Item> {
        if self.pos < self.view.last {
            self.view.base.get_at_position(self.pos)
        } else {
            None
        }
    }

    fn step_forward(&mut self) -> Result<()> {
        let last = self.view.last;
        if self.pos == last {
            return Err(Error::past_end());
        }
        let mut pos = self.pos + 1;
        while pos != last && !self.view.matches(pos) {
            pos += 1;
        }
        self.pos = pos;
        Ok(())
    }

    fn step_backward(&mut self) -> Result<()> {
        if self.pos <= self.view.first {
            return Err(Error::before_begin());
        }
        let mut pos = self.pos - 1;
        // `first` matches, so the scan cannot run past it.
        while !self.view.matches(pos) {
            pos -= 1;
        }
        self.pos = pos;
        Ok(())
    }

    fn seek(&mut self, offset: isize) -> Result<()> {
        match self.view.indexing {
            FilterIndexing::PositionIndex => self.seek_indexed(offset),
            FilterIndexing::Rescan => self.seek_rescan(offset),
        }
    }

    fn distance_from(&self, origin: &Self) -> isize {
        match self.pos.cmp(&origin.pos) {
            Ordering::Equal => 0,
            Ordering::Greater => self.view.count_between(origin.pos, self.pos) as isize,
            Ordering::Less => -(self.view.count_between(self.pos, origin.pos) as isize),
        }
    }

    fn index(&self) -> usize {
        self.view.count_between(self.view.first, self.pos)
    }
}

/// Double-ended iterator over a [`FilterView`].
///
/// Unlike the other views' iterators this one is not `ExactSizeIterator`:
/// knowing the remaining count requires evaluating the predicate.
pub struct FilterIter<'v, 's, S: ?Sized, F> {
    front: FilterCursor<'v, 's, S, F>,
    back: FilterCursor<'v, 's, S, F>,
}

impl<S: ?Sized, F> Clone for FilterIter<'_, '_, S, F> {
    fn clone(&self) -> Self {
        FilterIter {
            front: self.front,
            back: self.back,
        }
    }
}

impl<'s, S, F> Iterator for FilterIter<'_, 's, S, F>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    type Item = S::Item<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.step_forward().ok()?;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let span = self.back.pos - self.front.pos;
        (usize::from(span > 0), Some(span))
    }

    /// Under [`FilterIndexing::PositionIndex`] skips with a single seek
    /// through the index; under [`FilterIndexing::Rescan`] steps `n` times.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match self.front.view.indexing {
            FilterIndexing::PositionIndex => {
                let remaining = self.back.distance_from(&self.front).max(0) as usize;
                if n >= remaining {
                    self.front = self.back;
                    return None;
                }
                self.front.seek(n as isize).ok()?;
                self.next()
            }
            FilterIndexing::Rescan => {
                for _ in 0..n {
                    self.next()?;
                }
                self.next()
            }
        }
    }
}

impl<'s, S, F> DoubleEndedIterator for FilterIter<'_, 's, S, F>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_backward().ok()?;
        self.back.get()
    }
}

impl<'s, S, F> FusedIterator for FilterIter<'_, 's, S, F>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
}

/// Returns the view of the elements of `seq` satisfying `predicate`.
#[doc(alias = "cfilter")]
pub fn filter<'s, S, F>(seq: &'s S, predicate: F) -> FilterView<'s, S, F>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    FilterView::new(SequenceView::new(seq), predicate)
}

/// Returns the view of the elements of `seq[bounds]` satisfying `predicate`.
///
/// # Errors
///
/// `InvalidArgument` if `bounds` is not a valid sub-range of `seq`.
pub fn filter_in<'s, S, F>(
    seq: &'s S,
    bounds: Range<usize>,
    predicate: F,
) -> Result<FilterView<'s, S, F>>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    Ok(FilterView::new(
        SequenceView::with_bounds(seq, bounds)?,
        predicate,
    ))
}

/// Returns a filtered view of `seq` using an explicit configuration.
///
/// # Errors
///
/// `InvalidConfig` if `config` fails validation.
pub fn filter_with_config<'s, S, F>(
    seq: &'s S,
    predicate: F,
    config: FilterConfig,
) -> Result<FilterView<'s, S, F>>
where
    S: RandomAccess + ?Sized,
    F: Fn(&S::Item<'s>) -> bool,
{
    FilterView::with_config(SequenceView::new(seq), predicate, config)
}
