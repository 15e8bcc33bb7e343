//! # combinar
//!
//! A functional error-handling toolkit for Rust: discriminated containers
//! with a uniform combinator algebra across synchronous and asynchronous
//! execution.
//!
//! ## Overview
//!
//! Two containers carry the data model:
//!
//! - **`Outcome<T>`**: a success/failure container whose failure side is a
//!   structured [`ErrorInfo`](error::ErrorInfo) descriptor
//! - **`Maybe<T>`**: a presence/absence container with a total order
//!
//! Over them sits the combinator layer (`bind`, `fold`, `tap`, `ensure`,
//! `reduce`, and the fixed-arity `join2`..`join10` fan-in) with the same
//! contract in every shape: failure and absence short-circuit, handlers run
//! at most once and only on the variant they address, and a panic inside a
//! handler propagates rather than being converted into a failure.
//!
//! Deferred fallible computations ([`Deferred`](defer::Deferred) and, with
//! the `async` feature, [`DeferredAsync`](future::DeferredAsync)) wrap
//! zero-argument bodies behind a single panic-trap boundary: a panic raised
//! while producing the value becomes a `Failure` instead of unwinding.
//!
//! ## Feature Flags
//!
//! - `async`: the asynchronous surface (`future` module) on tokio/futures
//!
//! ## Example
//!
//! ```rust
//! use combinar::prelude::*;
//!
//! fn parse(text: &str) -> Outcome<i32> {
//!     text.parse::<i32>().map_or_else(
//!         |error| Outcome::from_cause(error),
//!         Outcome::success,
//!     )
//! }
//!
//! let result = join2(parse("20"), parse("22"), |a, b| Outcome::success(a + b))
//!     .ensure(|n| *n > 0, ErrorInfo::new("must be positive"))
//!     .to_maybe()
//!     .reduce(0);
//! assert_eq!(result, 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the error model, the deferred wrappers, and
/// the full join family.
///
/// # Usage
///
/// ```rust
/// use combinar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ErrorInfo;
    pub use crate::outcome::Outcome;
    pub use crate::maybe::{Maybe, MaybeIteratorExt};
    pub use crate::defer::Deferred;
    pub use crate::join::*;

    #[cfg(feature = "async")]
    pub use crate::future::*;
}

pub mod error;
pub mod outcome;
pub mod maybe;
pub mod defer;
pub mod join;

#[cfg(feature = "async")]
pub mod future;
