//! Deferred fallible computation.
//!
//! This module provides [`Deferred<T>`], a boxed zero-argument computation
//! producing an [`Outcome<T>`]. Its defining guarantee: invoking the wrapped
//! body never lets a panic escape. The body runs under a single trap
//! boundary ([`run_trapped`]) that converts a panic into
//! `Failure(ErrorInfo::from_panic(..))`.
//!
//! The trap covers only the wrapped body. Handlers attached afterwards with
//! `bind`/`map`/`tap`/`ensure` are validated logic by contract; a panic in
//! one of them propagates to the caller, exactly as it does on a plain
//! [`Outcome`] source.
//!
//! # Examples
//!
//! ```rust
//! use combinar::defer::Deferred;
//! use combinar::outcome::Outcome;
//!
//! let computation: Deferred<i32> = Deferred::of(|| panic!("boom"));
//! let outcome = computation.run();
//! assert_eq!(outcome.unwrap_failure().message(), "boom");
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::ErrorInfo;
use crate::outcome::Outcome;

/// Runs an outcome-producing closure, converting a panic into a failure.
///
/// The single error-trapping boundary of the crate: `Deferred::run`,
/// `Outcome::capture`, and the async wrapper all funnel through this
/// conversion rather than duplicating it per combinator.
pub(crate) fn run_trapped<T>(body: impl FnOnce() -> Outcome<T>) -> Outcome<T> {
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(outcome) => outcome,
        Err(payload) => Outcome::Failure(ErrorInfo::from_panic(payload.as_ref())),
    }
}

/// A deferred zero-argument fallible computation.
///
/// Nothing runs at construction or composition time; the wrapped body and
/// any attached combinators execute when [`run`](Self::run) is called. The
/// body executes under the panic trap, so `run` yields a `Failure` for a
/// panicking body instead of unwinding.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use combinar::defer::Deferred;
/// use combinar::outcome::Outcome;
///
/// let executed = Arc::new(AtomicBool::new(false));
/// let flag = executed.clone();
/// let computation = Deferred::of(move || {
///     flag.store(true, Ordering::SeqCst);
///     42
/// });
/// assert!(!executed.load(Ordering::SeqCst));
///
/// assert_eq!(computation.run(), Outcome::success(42));
/// assert!(executed.load(Ordering::SeqCst));
/// ```
pub struct Deferred<T> {
    body: Box<dyn FnOnce() -> Outcome<T> + Send>,
}

impl<T: 'static> Deferred<T> {
    /// Creates a deferred computation from an outcome-producing body.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::defer::Deferred;
    /// use combinar::outcome::Outcome;
    ///
    /// let computation = Deferred::new(|| Outcome::success(42));
    /// assert_eq!(computation.run(), Outcome::success(42));
    /// ```
    pub fn new<F>(body: F) -> Self
    where
        F: FnOnce() -> Outcome<T> + Send + 'static,
    {
        Self {
            body: Box::new(move || run_trapped(body)),
        }
    }

    /// Creates a deferred computation from a plain value-producing body,
    /// wrapping its result as a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::defer::Deferred;
    /// use combinar::outcome::Outcome;
    ///
    /// let computation = Deferred::of(|| 21 * 2);
    /// assert_eq!(computation.run(), Outcome::success(42));
    /// ```
    pub fn of<F>(producer: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::new(move || Outcome::Success(producer()))
    }

    /// Composition constructor: the closure is already built from trapped
    /// parts, so no second boundary is layered on.
    fn from_raw<F>(body: F) -> Self
    where
        F: FnOnce() -> Outcome<T> + Send + 'static,
    {
        Self {
            body: Box::new(body),
        }
    }

    /// Evaluates the computation, yielding its outcome.
    ///
    /// A panic inside the wrapped body is converted into a failure; a panic
    /// inside a combinator handler attached afterwards propagates.
    #[must_use]
    pub fn run(self) -> Outcome<T> {
        (self.body)()
    }

    // =========================================================================
    // Deferred Combinators
    // =========================================================================

    /// Chains a fallible transform; composition stays deferred.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::defer::Deferred;
    /// use combinar::outcome::Outcome;
    ///
    /// let computation = Deferred::of(|| 5).bind(|n| Outcome::success(n * 2));
    /// assert_eq!(computation.run(), Outcome::success(10));
    /// ```
    #[must_use]
    pub fn bind<U, F>(self, transform: F) -> Deferred<U>
    where
        U: 'static,
        F: FnOnce(T) -> Outcome<U> + Send + 'static,
    {
        Deferred::from_raw(move || self.run().bind(transform))
    }

    /// Chains a transform that yields another deferred computation.
    ///
    /// The inner computation is evaluated as part of running the outer one,
    /// so its body enjoys its own trap boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::defer::Deferred;
    /// use combinar::outcome::Outcome;
    ///
    /// let computation = Deferred::of(|| 5).bind_deferred(|n| Deferred::of(move || n * 2));
    /// assert_eq!(computation.run(), Outcome::success(10));
    /// ```
    #[must_use]
    pub fn bind_deferred<U, F>(self, transform: F) -> Deferred<U>
    where
        U: 'static,
        F: FnOnce(T) -> Deferred<U> + Send + 'static,
    {
        Deferred::from_raw(move || self.run().bind(|value| transform(value).run()))
    }

    /// Applies an infallible transform; composition stays deferred.
    #[must_use]
    pub fn map<U, F>(self, transform: F) -> Deferred<U>
    where
        U: 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Deferred::from_raw(move || self.run().map(transform))
    }

    /// Attaches a side-effecting action on success; composition stays
    /// deferred and the outcome passes through unchanged.
    #[must_use]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::from_raw(move || self.run().tap(action))
    }

    /// Attaches a predicate gate; composition stays deferred.
    #[must_use]
    pub fn ensure<P>(self, predicate: P, error_if_false: ErrorInfo) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::from_raw(move || self.run().ensure(predicate, error_if_false))
    }

    /// Evaluates the computation and collapses it by case analysis.
    ///
    /// Terminal: exactly one branch runs on the evaluated outcome.
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(ErrorInfo) -> U,
    {
        self.run().fold(on_success, on_failure)
    }

    /// Converts into the asynchronous form.
    ///
    /// The body still runs synchronously, when the asynchronous computation
    /// is awaited, and its outcome is yielded as completed work.
    #[cfg(feature = "async")]
    #[must_use]
    pub fn into_async(self) -> crate::future::DeferredAsync<T>
    where
        T: Send,
    {
        crate::future::DeferredAsync::from_blocking(self.body)
    }
}
