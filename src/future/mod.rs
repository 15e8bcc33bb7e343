//! Asynchronous combinator surface.
//!
//! This module generalizes the synchronous algebra over asynchronous
//! execution, covering every remaining shape of the sync/async
//! cross-product:
//!
//! - [`OutcomeExtAsync`]: asynchronous handlers over a synchronous
//!   [`Outcome`](crate::outcome::Outcome) source (`bind_async`,
//!   `fold_async`, `tap_async`, `ensure_async`).
//! - [`FutureOutcomeExt`]: synchronous and asynchronous handlers over an
//!   asynchronous source, blanket-implemented for every
//!   `Future<Output = Outcome<T>>`.
//! - [`DeferredAsync`]: the asynchronous deferred fallible computation,
//!   trapping panics raised while the wrapped body runs.
//! - [`join2_async`] through [`join10_async`]: the asynchronous join family.
//!
//! Async operators model cooperative continuation on a single logical
//! thread: they suspend only to await the underlying computation and never
//! spawn background work. The source is always awaited before any handler
//! is evaluated, and a failure produced by a handler propagates exactly
//! like a source failure. A failure arriving from an external cancellation
//! mechanism is not converted; it surfaces as a propagated fault.

mod defer;
mod ext;
mod join;

pub use defer::DeferredAsync;
pub use ext::{FutureOutcomeExt, OutcomeExtAsync};
pub use join::{
    join2_async, join3_async, join4_async, join5_async, join6_async, join7_async, join8_async,
    join9_async, join10_async,
};
