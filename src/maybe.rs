//! Presence/absence container.
//!
//! This module provides [`Maybe<T>`], a discriminated container that is
//! either `Some(T)` or `None`, with the combinator algebra mirroring
//! [`Outcome`](crate::outcome::Outcome) (the Some/None split replaces
//! Success/Failure), and the [`MaybeIteratorExt`] sequence helpers.
//!
//! `Maybe` carries a total order: `None` orders before every `Some`, and
//! `Some(a)` versus `Some(b)` orders by content. Comparing values of
//! incompatible shapes is rejected at compile time.
//!
//! # Examples
//!
//! ```rust
//! use combinar::maybe::Maybe;
//!
//! let doubled = Maybe::some(10).bind(|n| Maybe::some(n.to_string()));
//! assert_eq!(doubled, Maybe::some("10".to_string()));
//!
//! let absent: Maybe<String> = Maybe::<i32>::none().bind(|n| Maybe::some(n.to_string()));
//! assert_eq!(absent, Maybe::none());
//!
//! assert!(Maybe::none() < Maybe::some(i32::MIN));
//! ```

use std::fmt;

use crate::error::ErrorInfo;
use crate::outcome::Outcome;

/// A discriminated presence/absence container.
///
/// `None` is declared first so the derived total order places `None` before
/// every `Some`; two `Some` values order by content.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use combinar::maybe::Maybe;
///
/// let present = Maybe::some(5);
/// assert!(present.is_some());
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert!(absent.is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The absent variant.
    None,
    /// The present variant carrying the content.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Factories
    // =========================================================================

    /// Wraps a value as a present `Maybe`.
    #[inline]
    pub const fn some(content: T) -> Self {
        Self::Some(content)
    }

    /// Creates an absent `Maybe`.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    // =========================================================================
    // State Checks
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option` of the content, consuming the `Maybe`.
    #[inline]
    pub fn content(self) -> Option<T> {
        match self {
            Self::Some(content) => Some(content),
            Self::None => None,
        }
    }

    /// Returns a reference to the content if present.
    #[inline]
    pub const fn content_ref(&self) -> Option<&T> {
        match self {
            Self::Some(content) => Some(content),
            Self::None => None,
        }
    }

    /// Returns the content, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `None` value.
    #[inline]
    pub fn unwrap_some(self) -> T {
        match self {
            Self::Some(content) => content,
            Self::None => panic!("called `Maybe::unwrap_some()` on a `None` value"),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Chains an absence-aware transform over the content.
    ///
    /// On `Some`, applies `transform` and returns its result unmodified
    /// (flattened). On `None`, returns `None` without invoking `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::maybe::Maybe;
    ///
    /// let halved = Maybe::some(10).bind(|n| {
    ///     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
    /// });
    /// assert_eq!(halved, Maybe::some(5));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(content) => transform(content),
            Self::None => Maybe::None,
        }
    }

    /// Applies a total transform to the content.
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|content| Maybe::Some(transform(content)))
    }

    /// Collapses the `Maybe` by case analysis: exactly one branch runs.
    ///
    /// Both branches are required. A panic inside a branch propagates to
    /// the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::maybe::Maybe;
    ///
    /// let described = Maybe::some(5).fold(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(described, "got 5");
    /// ```
    #[inline]
    pub fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(content) => on_some(content),
            Self::None => on_none(),
        }
    }

    /// Collapses to a plain value, substituting a literal when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(5).reduce(0), 5);
    /// assert_eq!(Maybe::<i32>::none().reduce(0), 0);
    /// ```
    #[inline]
    pub fn reduce(self, substitute: T) -> T {
        self.reduce_with(move || substitute)
    }

    /// Collapses to a plain value, producing the substitute lazily.
    ///
    /// The substitute function is evaluated only when the `Maybe` is `None`.
    #[inline]
    pub fn reduce_with<F>(self, substitute: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(content) => content,
            Self::None => substitute(),
        }
    }

    /// Keeps the content only when the predicate holds.
    ///
    /// `None` stays `None` and the predicate is never evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).filter(|n| n % 2 == 0), Maybe::some(4));
    /// assert_eq!(Maybe::some(5).filter(|n| n % 2 == 0), Maybe::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(content) => {
                if predicate(&content) {
                    Self::Some(content)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Tests the content against a predicate; `false` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::maybe::Maybe;
    ///
    /// assert!(Maybe::some(4).holds(|n| n % 2 == 0));
    /// assert!(!Maybe::<i32>::none().holds(|n| n % 2 == 0));
    /// ```
    #[inline]
    pub fn holds<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(content) => predicate(content),
            Self::None => false,
        }
    }

    /// Runs a side-effecting action on the content, returning the `Maybe`
    /// unchanged. No-op when absent.
    #[inline]
    pub fn tap_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(content) = &self {
            action(content);
        }
        self
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into an [`Outcome`], substituting the given error for the
    /// absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    /// use combinar::maybe::Maybe;
    /// use combinar::outcome::Outcome;
    ///
    /// assert_eq!(Maybe::some(5).to_outcome(ErrorInfo::new("missing")), Outcome::success(5));
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert!(absent.to_outcome(ErrorInfo::new("missing")).is_failure());
    /// ```
    #[inline]
    pub fn to_outcome(self, error_if_none: ErrorInfo) -> Outcome<T> {
        match self {
            Self::Some(content) => Outcome::Success(content),
            Self::None => Outcome::Failure(error_if_none),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(content) => formatter.debug_tuple("Some").field(content).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts a standard `Option`: `Some` stays present, `None` absent.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(content) => Self::Some(content),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts into a standard `Option`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.content()
    }
}

// Containers are immutable and freely shareable across concurrent contexts.
static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone);

// =============================================================================
// Sequence Helpers
// =============================================================================

/// Sequence helpers over iterators of [`Maybe`] values.
///
/// Blanket-implemented for every `Iterator<Item = Maybe<T>>`.
///
/// # Examples
///
/// ```rust
/// use combinar::maybe::{Maybe, MaybeIteratorExt};
///
/// let entries = vec![Maybe::some(1), Maybe::none(), Maybe::some(2)];
/// let flattened: Vec<i32> = entries.into_iter().flatten_maybes().collect();
/// assert_eq!(flattened, vec![1, 2]);
/// ```
pub trait MaybeIteratorExt<T>: Iterator<Item = Maybe<T>> + Sized {
    /// Filters by a predicate on content, dropping `None` entries and
    /// entries whose content fails the predicate. The `Maybe` shape is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::maybe::{Maybe, MaybeIteratorExt};
    ///
    /// let entries = vec![Maybe::some(1), Maybe::none(), Maybe::some(2)];
    /// let even: Vec<Maybe<i32>> = entries.into_iter().where_some(|n| n % 2 == 0).collect();
    /// assert_eq!(even, vec![Maybe::some(2)]);
    /// ```
    fn where_some<P>(self, predicate: P) -> impl Iterator<Item = Maybe<T>>
    where
        P: FnMut(&T) -> bool;

    /// Projects down to the contents, dropping `None` entries.
    fn flatten_maybes(self) -> impl Iterator<Item = T>;

    /// Projects down to the contents, replacing each `None` with a clone of
    /// the literal substitute so positions are preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::maybe::{Maybe, MaybeIteratorExt};
    ///
    /// let entries = vec![Maybe::some(1), Maybe::none(), Maybe::some(2)];
    /// let padded: Vec<i32> = entries.into_iter().flatten_or(0).collect();
    /// assert_eq!(padded, vec![1, 0, 2]);
    /// ```
    fn flatten_or(self, substitute: T) -> impl Iterator<Item = T>
    where
        T: Clone;

    /// Projects down to the contents, replacing each `None` with a computed
    /// substitute so positions are preserved.
    fn flatten_or_else<F>(self, substitute: F) -> impl Iterator<Item = T>
    where
        F: FnMut() -> T;
}

impl<T, I> MaybeIteratorExt<T> for I
where
    I: Iterator<Item = Maybe<T>>,
{
    fn where_some<P>(self, mut predicate: P) -> impl Iterator<Item = Maybe<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.filter_map(move |entry| match entry {
            Maybe::Some(content) => predicate(&content).then(|| Maybe::Some(content)),
            Maybe::None => None,
        })
    }

    fn flatten_maybes(self) -> impl Iterator<Item = T> {
        self.filter_map(Maybe::content)
    }

    fn flatten_or(self, substitute: T) -> impl Iterator<Item = T>
    where
        T: Clone,
    {
        self.map(move |entry| entry.reduce_with(|| substitute.clone()))
    }

    fn flatten_or_else<F>(self, mut substitute: F) -> impl Iterator<Item = T>
    where
        F: FnMut() -> T,
    {
        self.map(move |entry| match entry {
            Maybe::Some(content) => content,
            Maybe::None => substitute(),
        })
    }
}
