//! Lazy, non-owning views over random-access sequences.
//!
//! This crate provides adaptors that present a derived sequence without
//! materializing it:
//!
//! - [`FilterView`] - the elements satisfying a predicate
//! - [`PairsView`] - all ordered pairs of one sequence, self-pairs included
//! - [`ProductView`] - the cartesian product of two sequences
//! - [`ZipView`] - positional pairs, truncated to the shorter sequence
//!
//! and the terminal folds [`reduce`], [`reduce_or_default`] and
//! [`reduce_with_seed`].
//!
//! Every view borrows its input, holds positions only, and is itself
//! [`RandomAccess`], so views can be nested. Each view hands out
//! [`Cursor`]s supporting stepping, seeking, distance and ordering; moving
//! a cursor outside of its view is an error, never undefined behavior.
//!
//! ```
//! use seqview::{Cursor, filter, pairs};
//!
//! let values = [1, 2, 3, 4];
//! let even = filter(&values, |x| **x % 2 == 0);
//! let squared = pairs(&even);
//! let items: Vec<(i32, i32)> = squared.iter().map(|(a, b)| (*a, *b)).collect();
//! assert_eq!(items, vec![(2, 2), (2, 4), (4, 2), (4, 4)]);
//! assert_eq!(squared.end().distance_from(&squared.begin()), 4);
//! ```

pub mod config;
pub mod cursor;
pub mod ext;
pub mod filter;
pub mod grid;
pub mod pair_cursor;
pub mod pairs;
pub mod product;
pub mod reduce;
pub mod sequence;
pub mod zip;

#[cfg(test)]
mod tests;

pub use config::{FilterConfig, FilterIndexing};
pub use cursor::{Cursor, CursorIter};
pub use ext::ViewExt;
pub use filter::{FilterCursor, FilterIter, FilterView, filter, filter_in, filter_with_config};
pub use grid::{Coord, Grid};
pub use pair_cursor::PairCursor;
pub use pairs::{PairsView, pairs, pairs_in};
pub use product::{ProductView, product, product_in};
pub use reduce::{reduce, reduce_or_default, reduce_with_seed};
pub use sequence::{RandomAccess, SequenceCursor, SequenceView};
pub use zip::{ZipCursor, ZipView, zip};

pub use seqview_common::{
    Result,
    error::{Error, ErrorKind},
};
