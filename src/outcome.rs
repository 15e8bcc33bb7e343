//! Success/failure container.
//!
//! This module provides [`Outcome<T>`], a discriminated container that is
//! either `Success(T)` or `Failure(ErrorInfo)`, together with the
//! synchronous combinator algebra: `bind`, `fold`, `tap`, `ensure`, and the
//! conversions to [`Maybe`](crate::maybe::Maybe) and unit.
//!
//! The combinators route failures by construction: a failing container
//! bypasses every user-supplied transform, predicate, and action. Handler
//! functions are assumed to be validated logic; a panic inside a handler
//! propagates to the caller and is never converted into a failure.
//!
//! # Examples
//!
//! ```rust
//! use combinar::error::ErrorInfo;
//! use combinar::outcome::Outcome;
//!
//! fn parse(text: &str) -> Outcome<i32> {
//!     text.parse::<i32>()
//!         .map_or_else(|_| Outcome::failure(ErrorInfo::new("not a number")), Outcome::success)
//! }
//!
//! let result = parse("21")
//!     .bind(|n| Outcome::success(n * 2))
//!     .ensure(|n| *n > 0, ErrorInfo::new("must be positive"));
//! assert_eq!(result, Outcome::success(42));
//!
//! let message = parse("x").fold(|n| n.to_string(), |error| error.message().to_string());
//! assert_eq!(message, "not a number");
//! ```

use std::fmt;

use crate::error::ErrorInfo;
use crate::maybe::Maybe;

/// A discriminated success/failure container.
///
/// Exactly one variant is ever populated. By construction, combinators
/// evaluate their handler at most once and only on the variant the handler
/// addresses: `bind`/`map`/`tap`/`ensure` on `Success`, recovery on
/// `Failure`, and exactly one branch of `fold` in either case.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use combinar::error::ErrorInfo;
/// use combinar::outcome::Outcome;
///
/// let success = Outcome::success(5);
/// assert!(success.is_success());
///
/// let failure: Outcome<i32> = Outcome::failure(ErrorInfo::new("boom"));
/// assert!(failure.is_failure());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The successful variant carrying the computed value.
    Success(T),
    /// The failed variant carrying the failure descriptor.
    Failure(ErrorInfo),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Factories
    // =========================================================================

    /// Wraps a value as a successful outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::outcome::Outcome;
    ///
    /// let outcome = Outcome::success(42);
    /// assert_eq!(outcome.value(), Some(42));
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure descriptor as a failed outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    /// use combinar::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::failure(ErrorInfo::new("boom"));
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn failure(error: ErrorInfo) -> Self {
        Self::Failure(error)
    }

    /// Converts an `Option` into an outcome, substituting the given error
    /// for the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    /// use combinar::outcome::Outcome;
    ///
    /// let present = Outcome::from_option(Some(5), ErrorInfo::new("missing"));
    /// assert_eq!(present, Outcome::success(5));
    ///
    /// let absent: Outcome<i32> = Outcome::from_option(None, ErrorInfo::new("missing"));
    /// assert!(absent.is_failure());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>, error_if_absent: ErrorInfo) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(error_if_absent),
        }
    }

    /// Creates a failed outcome capturing an underlying error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::from_cause("x".parse::<i32>().unwrap_err());
    /// assert!(outcome.unwrap_failure().has_cause());
    /// ```
    #[inline]
    pub fn from_cause<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Failure(ErrorInfo::from_cause(error))
    }

    /// Runs a value-producing closure under the panic trap, wrapping its
    /// result as a success and any panic as a failure.
    ///
    /// This is the same trap boundary used by
    /// [`Deferred::run`](crate::defer::Deferred::run).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::outcome::Outcome;
    ///
    /// let fine = Outcome::capture(|| 21 * 2);
    /// assert_eq!(fine, Outcome::success(42));
    ///
    /// let broken: Outcome<i32> = Outcome::capture(|| panic!("boom"));
    /// assert_eq!(broken.unwrap_failure().message(), "boom");
    /// ```
    #[inline]
    pub fn capture<F>(body: F) -> Self
    where
        F: FnOnce() -> T,
    {
        crate::defer::run_trapped(move || Self::Success(body()))
    }

    // =========================================================================
    // State Checks
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the outcome into an `Option` of the success value,
    /// consuming the outcome.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts the outcome into an `Option` of the failure descriptor,
    /// consuming the outcome.
    #[inline]
    pub fn error(self) -> Option<ErrorInfo> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure descriptor if present.
    #[inline]
    pub const fn error_ref(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    #[inline]
    pub fn unwrap_success(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::unwrap_success()` on a `Failure` value: {error}")
            }
        }
    }

    /// Returns the failure descriptor, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    #[inline]
    pub fn unwrap_failure(self) -> ErrorInfo {
        match self {
            Self::Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Chains a fallible transform over the success value.
    ///
    /// On success, applies `transform` and returns its outcome unmodified
    /// (flattened, never nested). On failure, returns the original error
    /// re-wrapped at the new value type without invoking `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    /// use combinar::outcome::Outcome;
    ///
    /// let chained = Outcome::success(5).bind(|n| Outcome::success(n.to_string()));
    /// assert_eq!(chained, Outcome::success("5".to_string()));
    ///
    /// let error = ErrorInfo::new("boom");
    /// let short_circuited: Outcome<String> =
    ///     Outcome::<i32>::failure(error.clone()).bind(|n| Outcome::success(n.to_string()));
    /// assert_eq!(short_circuited, Outcome::failure(error));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a deferred fallible transform over the success value,
    /// evaluating the returned computation immediately.
    ///
    /// Equivalent to `bind` followed by [`Deferred::run`], so a panic inside
    /// the deferred body surfaces as a failure rather than escaping.
    ///
    /// [`Deferred::run`]: crate::defer::Deferred::run
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::defer::Deferred;
    /// use combinar::outcome::Outcome;
    ///
    /// let outcome = Outcome::success(5)
    ///     .bind_deferred(|n| Deferred::of(move || n * 2));
    /// assert_eq!(outcome, Outcome::success(10));
    /// ```
    #[inline]
    pub fn bind_deferred<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> crate::defer::Deferred<U>,
        U: 'static,
    {
        self.bind(|value| transform(value).run())
    }

    /// Applies an infallible transform to the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::outcome::Outcome;
    ///
    /// let mapped = Outcome::success(21).map(|n| n * 2);
    /// assert_eq!(mapped, Outcome::success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| Outcome::Success(transform(value)))
    }

    /// Collapses the outcome by case analysis: exactly one branch runs.
    ///
    /// A panic inside either branch propagates to the caller; it is never
    /// converted into a failure. The side-effecting form is the `U = ()`
    /// instantiation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    /// use combinar::outcome::Outcome;
    ///
    /// let described = Outcome::success(5)
    ///     .fold(|n| format!("got {n}"), |error| error.message().to_string());
    /// assert_eq!(described, "got 5");
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(ErrorInfo) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Runs a side-effecting action on the success value, returning the
    /// outcome unchanged. No-op on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use combinar::outcome::Outcome;
    ///
    /// let seen = Cell::new(0);
    /// let outcome = Outcome::success(5).tap(|n| seen.set(*n));
    /// assert_eq!(outcome, Outcome::success(5));
    /// assert_eq!(seen.get(), 5);
    /// ```
    #[inline]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs a side-effecting action on the failure descriptor, returning
    /// the outcome unchanged. No-op on success.
    #[inline]
    pub fn tap_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&ErrorInfo),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Gates a success on a predicate.
    ///
    /// A success passes through unchanged when the predicate holds and
    /// becomes `Failure(error_if_false)` when it does not. A failure passes
    /// through unchanged and the predicate is never evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    /// use combinar::outcome::Outcome;
    ///
    /// let kept = Outcome::success(5).ensure(|n| *n > 0, ErrorInfo::new("not positive"));
    /// assert_eq!(kept, Outcome::success(5));
    ///
    /// let rejected = Outcome::success(-5).ensure(|n| *n > 0, ErrorInfo::new("not positive"));
    /// assert!(rejected.is_failure());
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error_if_false: ErrorInfo) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_with(predicate, move || error_if_false)
    }

    /// Gates a success on a predicate, building the rejection error lazily.
    ///
    /// The error function is evaluated only when the predicate rejects.
    #[inline]
    pub fn ensure_with<P, E>(self, predicate: P, error_if_false: E) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: FnOnce() -> ErrorInfo,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error_if_false())
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Recovers from a failure with a fallible recovery function.
    ///
    /// A success passes through unchanged; a failure hands its descriptor
    /// to `recover`, whose outcome becomes the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    /// use combinar::outcome::Outcome;
    ///
    /// let recovered = Outcome::<i32>::failure(ErrorInfo::new("boom"))
    ///     .or_else(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[inline]
    pub fn or_else<F>(self, recover: F) -> Self
    where
        F: FnOnce(ErrorInfo) -> Self,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => recover(error),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts the outcome into a [`Maybe`]: success becomes `Some`,
    /// failure becomes `None` (the descriptor is dropped).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    /// use combinar::maybe::Maybe;
    /// use combinar::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).to_maybe(), Maybe::Some(5));
    /// assert_eq!(Outcome::<i32>::failure(ErrorInfo::new("boom")).to_maybe(), Maybe::None);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Discards the success payload, preserving the success/failure state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).to_unit(), Outcome::success(()));
    /// ```
    #[inline]
    pub fn to_unit(self) -> Outcome<()> {
        self.map(|_| ())
    }
}

impl<T: Default + PartialEq> Outcome<T> {
    /// Returns `true` only for a success whose value equals `T::default()`.
    ///
    /// This is a convenience probe with no bearing on success or failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::outcome::Outcome;
    ///
    /// assert!(Outcome::success(0).is_default());
    /// assert!(!Outcome::success(5).is_default());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Success(value) if *value == T::default())
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<ErrorInfo> for Outcome<T> {
    /// Wraps a failure descriptor as a failed outcome.
    #[inline]
    fn from(error: ErrorInfo) -> Self {
        Self::Failure(error)
    }
}

impl<T> From<Result<T, ErrorInfo>> for Outcome<T> {
    /// Converts a standard `Result` carrying an `ErrorInfo` error.
    #[inline]
    fn from(result: Result<T, ErrorInfo>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorInfo> {
    /// Converts into a standard `Result`, enabling `?` interoperation.
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// Containers are immutable and freely shareable across concurrent contexts.
static_assertions::assert_impl_all!(Outcome<i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use rstest::rstest;

    #[rstest]
    fn test_success_and_failure_are_exact_complements() {
        let success = Outcome::success(5);
        assert!(success.is_success());
        assert!(!success.is_failure());

        let failure: Outcome<i32> = Outcome::failure(ErrorInfo::new("boom"));
        assert!(failure.is_failure());
        assert!(!failure.is_success());
    }

    #[rstest]
    fn test_bind_short_circuits_without_invoking_transform() {
        let invocations = Cell::new(0);
        let error = ErrorInfo::new("boom");

        let result: Outcome<String> = Outcome::<i32>::failure(error.clone()).bind(|n| {
            invocations.set(invocations.get() + 1);
            Outcome::success(n.to_string())
        });

        assert_eq!(result, Outcome::failure(error));
        assert_eq!(invocations.get(), 0);
    }

    #[rstest]
    fn test_bind_flattens() {
        let nested = Outcome::success(5).bind(|n| Outcome::success(n + 1));
        assert_eq!(nested, Outcome::success(6));
    }

    #[rstest]
    fn test_fold_runs_exactly_one_branch() {
        let branches = Cell::new((0, 0));

        Outcome::success(5).fold(
            |_| branches.set((branches.get().0 + 1, branches.get().1)),
            |_| branches.set((branches.get().0, branches.get().1 + 1)),
        );
        assert_eq!(branches.get(), (1, 0));

        Outcome::<i32>::failure(ErrorInfo::new("boom")).fold(
            |_| branches.set((branches.get().0 + 1, branches.get().1)),
            |_| branches.set((branches.get().0, branches.get().1 + 1)),
        );
        assert_eq!(branches.get(), (1, 1));
    }

    #[rstest]
    fn test_tap_preserves_outcome_and_skips_failures() {
        let seen = Cell::new(0);

        let success = Outcome::success(5).tap(|n| seen.set(*n));
        assert_eq!(success, Outcome::success(5));
        assert_eq!(seen.get(), 5);

        let failure: Outcome<i32> = Outcome::failure(ErrorInfo::new("boom"));
        let untouched = failure.clone().tap(|n| seen.set(*n * 100));
        assert_eq!(untouched, failure);
        assert_eq!(seen.get(), 5);
    }

    #[rstest]
    fn test_ensure_never_evaluates_predicate_on_failure() {
        let invocations = Cell::new(0);
        let failure: Outcome<i32> = Outcome::failure(ErrorInfo::new("boom"));

        let result = failure.clone().ensure(
            |_| {
                invocations.set(invocations.get() + 1);
                true
            },
            ErrorInfo::new("unreachable"),
        );

        assert_eq!(result, failure);
        assert_eq!(invocations.get(), 0);
    }

    #[rstest]
    #[case(0, true)]
    #[case(5, false)]
    fn test_is_default(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(Outcome::success(value).is_default(), expected);
    }

    #[rstest]
    fn test_is_default_is_false_on_failure() {
        let failure: Outcome<i32> = Outcome::failure(ErrorInfo::new("boom"));
        assert!(!failure.is_default());
    }

    #[rstest]
    fn test_to_maybe() {
        assert_eq!(Outcome::success(5).to_maybe(), Maybe::Some(5));
        let failure: Outcome<i32> = Outcome::failure(ErrorInfo::new("boom"));
        assert_eq!(failure.to_maybe(), Maybe::None);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, ErrorInfo> = Ok(42);
        let outcome: Outcome<i32> = ok.into();
        let back: Result<i32, ErrorInfo> = outcome.into();
        assert_eq!(back, Ok(42));
    }

    #[rstest]
    #[should_panic(expected = "unwrap_success")]
    fn test_unwrap_success_panics_on_failure() {
        let _ = Outcome::<i32>::failure(ErrorInfo::new("boom")).unwrap_success();
    }
}
