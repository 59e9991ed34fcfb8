//! The `Maybe<T>` container and its reduce-based combinators.

/// An optional value: either `Just(value)` or `Nothing`.
///
/// Stands in for null/undefined sentinels at boundaries. The enum is closed,
/// so "absent but carrying a payload" is unrepresentable. Instances are
/// immutable: every combinator consumes the receiver (or a borrowed
/// projection of it) and returns a fresh value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Maybe<T> {
    /// The value is absent.
    Nothing,
    /// The value is present.
    Just(T),
}

pub use Maybe::{Just, Nothing};

impl<T> Maybe<T> {
    // ——— Case analysis ———

    /// Reduces the container to a single result by invoking exactly one of
    /// the two handlers: `on_nothing` for `Nothing`, `on_just` for `Just`.
    ///
    /// This is the sole case-analysis primitive over an owned receiver;
    /// every other combinator is a composition over it. Handlers run
    /// synchronously and at most once.
    #[inline]
    pub fn reduce<R>(self, on_nothing: impl FnOnce() -> R, on_just: impl FnOnce(T) -> R) -> R {
        match self {
            Nothing => on_nothing(),
            Just(v) => on_just(v),
        }
    }

    /// Borrowed projection: `Maybe<T>` to `Maybe<&T>`.
    ///
    /// Lets predicates reduce without consuming the receiver.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Nothing => Nothing,
            Just(v) => Just(v),
        }
    }

    // ——— Predicates ———

    /// `true` iff the receiver is `Just`.
    #[inline]
    pub fn is_just(&self) -> bool {
        self.as_ref().reduce(|| false, |_| true)
    }

    /// `true` iff the receiver is `Nothing`. Always `!is_just()`.
    #[inline]
    pub fn is_nothing(&self) -> bool {
        self.as_ref().reduce(|| true, |_| false)
    }

    // ——— Combinators ———

    /// Applies `f` to the boxed value; `Nothing` stays `Nothing`.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        self.reduce(|| Nothing, |v| Just(f(v)))
    }

    /// Unwraps `Just(v)` to `v`, or returns `default` for `Nothing`.
    #[inline]
    pub fn with_default(self, default: T) -> T {
        self.reduce(move || default, |v| v)
    }

    /// Monadic bind: chains a computation that itself may produce nothing.
    /// `Nothing` short-circuits; `Just(v)` becomes `f(v)` without nesting.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        self.reduce(|| Nothing, f)
    }

    /// Recovers from absence: `Nothing` becomes `f()`, evaluated only then;
    /// `Just(v)` passes through untouched and `f` is never called.
    #[inline]
    pub fn or_else(self, f: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
        self.reduce(f, Just)
    }

    // ——— Boundary conversions ———

    /// Wraps an `Option` produced by sentinel-style code.
    #[inline]
    pub fn from_option(opt: Option<T>) -> Maybe<T> {
        opt.map_or(Nothing, Just)
    }

    /// Hands the value back to `Option`-based call sites.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.reduce(|| None, Some)
    }
}

impl<T> Default for Maybe<T> {
    // No `T: Default` bound; the absent case needs no payload.
    #[inline]
    fn default() -> Self {
        Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(opt: Option<T>) -> Self {
        Maybe::from_option(opt)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(m: Maybe<T>) -> Self {
        m.into_option()
    }
}
