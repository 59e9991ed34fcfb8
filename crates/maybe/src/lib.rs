//! maybe: an optional-value container replacing null/undefined sentinels.
//!
//! `Maybe<T>` is a closed two-variant type (`Nothing` | `Just(T)`) with a
//! single case-analysis primitive, `reduce`, from which every other
//! combinator is derived. All operations are pure, synchronous and total.

pub mod maybe;

pub use maybe::{Just, Maybe, Nothing};
