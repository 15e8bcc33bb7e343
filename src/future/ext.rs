//! Asynchronous combinator extensions for [`Outcome`] and for futures that
//! resolve to one.

use std::future::{Future, IntoFuture};

use crate::error::ErrorInfo;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Asynchronous handlers over a synchronous [`Outcome`] source.
///
/// Each method mirrors its synchronous counterpart on `Outcome` with an
/// asynchronous handler: the handler is invoked at most once and only on
/// the variant it addresses, and a panic inside a handler propagates to the
/// caller uncaught.
///
/// The side-effecting handlers (`tap_async`, `ensure_async`) receive a
/// clone of the success value so the returned future owns its input.
/// Handlers are bounded by `IntoFuture`, so a deferred asynchronous
/// computation returned from one is evaluated in place.
///
/// # Examples
///
/// ```rust,ignore
/// use combinar::outcome::Outcome;
/// use combinar::future::OutcomeExtAsync;
///
/// #[tokio::main]
/// async fn main() {
///     let chained = Outcome::success(5)
///         .bind_async(|n| async move { Outcome::success(n * 2) })
///         .await;
///     assert_eq!(chained, Outcome::success(10));
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait OutcomeExtAsync<T>: Sized {
    /// Chains an asynchronous fallible transform over the success value.
    ///
    /// Failure short-circuits without invoking `transform`; a failure
    /// produced by `transform` propagates exactly like a source failure.
    async fn bind_async<U, F, Fut>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Outcome<U>>;

    /// Collapses the outcome through asynchronous branches: exactly one
    /// branch runs.
    async fn fold_async<U, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: IntoFuture<Output = U>,
        F: FnOnce(ErrorInfo) -> FFut,
        FFut: IntoFuture<Output = U>;

    /// Runs an asynchronous side-effecting action on a clone of the success
    /// value, returning the outcome unchanged. No-op on failure.
    async fn tap_async<F, Fut>(self, action: F) -> Outcome<T>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = ()>;

    /// Gates a success on an asynchronous predicate over a clone of the
    /// value. A failure passes through and the predicate is never
    /// evaluated.
    async fn ensure_async<P, Fut>(self, predicate: P, error_if_false: ErrorInfo) -> Outcome<T>
    where
        T: Clone,
        P: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = bool>;
}

impl<T> OutcomeExtAsync<T> for Outcome<T> {
    async fn bind_async<U, F, Fut>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Outcome<U>>,
    {
        match self {
            Self::Success(value) => transform(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    async fn fold_async<U, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: IntoFuture<Output = U>,
        F: FnOnce(ErrorInfo) -> FFut,
        FFut: IntoFuture<Output = U>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_failure(error).await,
        }
    }

    async fn tap_async<F, Fut>(self, action: F) -> Outcome<T>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        if let Self::Success(value) = &self {
            action(value.clone()).await;
        }
        self
    }

    async fn ensure_async<P, Fut>(self, predicate: P, error_if_false: ErrorInfo) -> Outcome<T>
    where
        T: Clone,
        P: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        match self {
            Self::Success(value) => {
                if predicate(value.clone()).await {
                    Self::Success(value)
                } else {
                    Self::Failure(error_if_false)
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }
}

/// Combinators over an asynchronous [`Outcome`] source.
///
/// Blanket-implemented for every `Future<Output = Outcome<T>>`, so an async
/// function returning an outcome chains directly. The source is always
/// awaited before any handler is evaluated: a handler never runs while the
/// source is still in flight, and failure short-circuits exactly as in the
/// synchronous algebra.
///
/// # Examples
///
/// ```rust,ignore
/// use combinar::outcome::Outcome;
/// use combinar::future::FutureOutcomeExt;
///
/// async fn fetch() -> Outcome<i32> {
///     Outcome::success(5)
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let chained = fetch().bind(|n| Outcome::success(n * 2)).await;
///     assert_eq!(chained, Outcome::success(10));
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Awaits the source, then chains a synchronous fallible transform.
    async fn bind<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.await.bind(transform)
    }

    /// Awaits the source, then chains an asynchronous fallible transform.
    ///
    /// The transform never starts before the source settles.
    async fn bind_async<U, F, Fut>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Outcome<U>>,
    {
        self.await.bind_async(transform).await
    }

    /// Awaits the source, then applies an infallible transform.
    async fn map<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.await.map(transform)
    }

    /// Awaits the source, then collapses it through synchronous branches.
    async fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(ErrorInfo) -> U,
    {
        self.await.fold(on_success, on_failure)
    }

    /// Awaits the source, then collapses it through asynchronous branches.
    async fn fold_async<U, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: IntoFuture<Output = U>,
        F: FnOnce(ErrorInfo) -> FFut,
        FFut: IntoFuture<Output = U>,
    {
        self.await.fold_async(on_success, on_failure).await
    }

    /// Awaits the source, then runs a synchronous side effect on success,
    /// passing the outcome through unchanged.
    async fn tap<F>(self, action: F) -> Outcome<T>
    where
        F: FnOnce(&T),
    {
        self.await.tap(action)
    }

    /// Awaits the source, then runs an asynchronous side effect on a clone
    /// of the success value, passing the outcome through unchanged.
    async fn tap_async<F, Fut>(self, action: F) -> Outcome<T>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        self.await.tap_async(action).await
    }

    /// Awaits the source, then gates a success on a synchronous predicate.
    async fn ensure<P>(self, predicate: P, error_if_false: ErrorInfo) -> Outcome<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.await.ensure(predicate, error_if_false)
    }

    /// Awaits the source, then gates a success on an asynchronous predicate
    /// over a clone of the value.
    async fn ensure_async<P, Fut>(self, predicate: P, error_if_false: ErrorInfo) -> Outcome<T>
    where
        T: Clone,
        P: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        self.await.ensure_async(predicate, error_if_false).await
    }

    /// Awaits the source, then converts it into a [`Maybe`].
    async fn to_maybe(self) -> Maybe<T> {
        self.await.to_maybe()
    }
}

impl<T, Source> FutureOutcomeExt<T> for Source where Source: Future<Output = Outcome<T>> {}
