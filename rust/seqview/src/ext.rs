//! Extension trait for building views with method syntax.

use crate::{
    filter::FilterView,
    pairs::PairsView,
    product::ProductView,
    sequence::{RandomAccess, SequenceView},
    zip::ZipView,
};

/// Extension trait for more idiomatic construction of views.
///
/// Implemented for every [`RandomAccess`] type, including the views
/// themselves, so adaptors can be stacked:
///
/// ```
/// use seqview::ViewExt;
///
/// let values = vec![1, 2, 3, 4, 5];
/// let odd = values.filtered(|x| **x % 2 == 1);
/// let pairs = odd.pairs();
/// assert_eq!(pairs.len(), 9);
/// assert_eq!(pairs.get(5), Some((&3, &5)));
/// ```
pub trait ViewExt: RandomAccess {
    /// A view over the whole sequence.
    fn view(&self) -> SequenceView<'_, Self> {
        SequenceView::new(self)
    }

    /// The elements satisfying `predicate`.
    fn filtered<'s, F>(&'s self, predicate: F) -> FilterView<'s, Self, F>
    where
        F: Fn(&Self::Item<'s>) -> bool,
    {
        FilterView::new(SequenceView::new(self), predicate)
    }

    /// All ordered pairs of elements, self-pairs included.
    fn pairs(&self) -> PairsView<'_, Self> {
        PairsView::new(SequenceView::new(self))
    }

    /// The cartesian product with `other`.
    fn product_with<'a, 'b, B>(&'a self, other: &'b B) -> ProductView<'a, 'b, Self, B>
    where
        B: RandomAccess + ?Sized,
    {
        ProductView::new(SequenceView::new(self), SequenceView::new(other))
    }

    /// Positional pairs with `other`, truncated to the shorter sequence.
    fn zip_with<'a, 'b, B>(&'a self, other: &'b B) -> ZipView<'a, 'b, Self, B>
    where
        B: RandomAccess + ?Sized,
    {
        ZipView::new(SequenceView::new(self), SequenceView::new(other))
    }
}

impl<R: RandomAccess + ?Sized> ViewExt for R {}
