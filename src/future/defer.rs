//! Deferred asynchronous fallible computation.

use std::future::{Future, IntoFuture};
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::error::ErrorInfo;
use crate::outcome::Outcome;

/// A deferred zero-argument asynchronous fallible computation.
///
/// The wrapped body is not started at construction or composition time; it
/// runs when the computation is awaited (directly, via `IntoFuture`, or
/// through [`run`](Self::run)). The body executes under the asynchronous
/// panic trap: a panic raised while producing the outcome is converted into
/// `Failure(ErrorInfo::from_panic(..))` instead of unwinding through the
/// caller. Handlers attached with `bind`/`map`/`tap`/`ensure` run outside
/// the trap and propagate their panics, matching the synchronous contract.
///
/// # Examples
///
/// ```rust,ignore
/// use combinar::future::DeferredAsync;
/// use combinar::outcome::Outcome;
///
/// #[tokio::main]
/// async fn main() {
///     let computation = DeferredAsync::of(|| async { 21 * 2 });
///     assert_eq!(computation.await, Outcome::success(42));
///
///     let broken: DeferredAsync<i32> = DeferredAsync::of(|| async { panic!("boom") });
///     assert!(broken.await.is_failure());
/// }
/// ```
pub struct DeferredAsync<T> {
    thunk: Box<dyn FnOnce() -> BoxFuture<'static, Outcome<T>> + Send>,
}

impl<T: Send + 'static> DeferredAsync<T> {
    /// Creates a deferred asynchronous computation from an
    /// outcome-producing body.
    ///
    /// The body runs under the panic trap when the computation is awaited.
    pub fn new<F, Fut>(body: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T>> + Send + 'static,
    {
        Self {
            thunk: Box::new(move || {
                AssertUnwindSafe(async move { body().await })
                    .catch_unwind()
                    .map(|caught| match caught {
                        Ok(outcome) => outcome,
                        Err(payload) => Outcome::Failure(ErrorInfo::from_panic(payload.as_ref())),
                    })
                    .boxed()
            }),
        }
    }

    /// Creates a deferred asynchronous computation from a plain
    /// value-producing body, wrapping its result as a success.
    pub fn of<F, Fut>(producer: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::new(move || async move { Outcome::Success(producer().await) })
    }

    /// Wraps a synchronous trapped body; it runs, synchronously, when the
    /// asynchronous computation is awaited. Backs `Deferred::into_async`.
    pub(crate) fn from_blocking(body: Box<dyn FnOnce() -> Outcome<T> + Send>) -> Self {
        Self {
            thunk: Box::new(move || async move { body() }.boxed()),
        }
    }

    /// Composition constructor; no second trap boundary is layered on.
    fn from_raw<F>(thunk: F) -> Self
    where
        F: FnOnce() -> BoxFuture<'static, Outcome<T>> + Send + 'static,
    {
        Self {
            thunk: Box::new(thunk),
        }
    }

    /// Starts and awaits the computation, yielding its outcome.
    ///
    /// Equivalent to awaiting the computation directly.
    pub async fn run(self) -> Outcome<T> {
        (self.thunk)().await
    }

    // =========================================================================
    // Deferred Combinators
    // =========================================================================

    /// Chains a synchronous fallible transform; composition stays deferred.
    #[must_use]
    pub fn bind<U, F>(self, transform: F) -> DeferredAsync<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Outcome<U> + Send + 'static,
    {
        DeferredAsync::from_raw(move || {
            async move { (self.thunk)().await.bind(transform) }.boxed()
        })
    }

    /// Chains an asynchronous fallible transform; composition stays
    /// deferred. The transform starts only after the wrapped body settles
    /// successfully.
    ///
    /// The transform may yield any future of an outcome, including another
    /// `DeferredAsync`, which is then evaluated in sequence.
    #[must_use]
    pub fn bind_async<U, F, Fut>(self, transform: F) -> DeferredAsync<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: IntoFuture<Output = Outcome<U>> + Send + 'static,
        Fut::IntoFuture: Send,
    {
        DeferredAsync::from_raw(move || {
            async move {
                match (self.thunk)().await {
                    Outcome::Success(value) => transform(value).await,
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }
            .boxed()
        })
    }

    /// Applies an infallible transform; composition stays deferred.
    #[must_use]
    pub fn map<U, F>(self, transform: F) -> DeferredAsync<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.bind(move |value| Outcome::Success(transform(value)))
    }

    /// Attaches a side-effecting action on success; the outcome passes
    /// through unchanged.
    #[must_use]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::from_raw(move || async move { (self.thunk)().await.tap(action) }.boxed())
    }

    /// Attaches a predicate gate; composition stays deferred.
    #[must_use]
    pub fn ensure<P>(self, predicate: P, error_if_false: ErrorInfo) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::from_raw(move || {
            async move { (self.thunk)().await.ensure(predicate, error_if_false) }.boxed()
        })
    }

    /// Starts the computation eagerly on the current tokio runtime.
    ///
    /// The combinators themselves never parallelize: `join2_async` and
    /// friends await their operands strictly in positional order. Overlap
    /// across operands is created by the caller, before the operands are
    /// passed in, and this is the facility for it: the wrapped body starts
    /// running immediately on a spawned task, and awaiting the returned
    /// computation only joins the already-running work.
    ///
    /// Panics inside the body are still trapped into a `Failure`. If the
    /// spawned task is aborted externally, awaiting the returned
    /// computation panics; cancellation is a propagated fault, never a
    /// `Failure`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, or when awaited after the
    /// spawned task was aborted.
    #[must_use]
    pub fn started(self) -> Self {
        let handle = tokio::spawn((self.thunk)());
        Self::from_raw(move || {
            async move {
                match handle.await {
                    Ok(outcome) => outcome,
                    Err(join_error) => {
                        panic!("spawned deferred computation failed: {join_error}")
                    }
                }
            }
            .boxed()
        })
    }

    /// Awaits the computation and collapses it by case analysis.
    ///
    /// Terminal: exactly one branch runs on the settled outcome.
    pub async fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(ErrorInfo) -> U,
    {
        (self.thunk)().await.fold(on_success, on_failure)
    }
}

impl<T> IntoFuture for DeferredAsync<T> {
    type Output = Outcome<T>;
    type IntoFuture = BoxFuture<'static, Outcome<T>>;

    fn into_future(self) -> Self::IntoFuture {
        (self.thunk)()
    }
}
