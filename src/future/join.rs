//! Fixed-arity fan-in over asynchronous outcomes.
//!
//! `join2_async` through `join10_async` mirror the synchronous join family
//! over futures of outcomes. Operands are awaited strictly in positional
//! order with early short-circuit: when an operand settles as a failure,
//! that failure becomes the output verbatim, the combiner never runs, and
//! the remaining operand futures are dropped unawaited. The combinator
//! never spawns or parallelizes; callers wanting overlap start their
//! operand computations (for example with `tokio::spawn`) before passing
//! the handles in.

use std::future::Future;

use paste::paste;

use crate::outcome::Outcome;

macro_rules! define_join_async {
    ($name:ident, $arity:literal, $(($operand:ident, $type:ident, $future:ident)),+ $(,)?) => {
        paste! {
            #[doc = concat!(
                "Joins ", $arity, " asynchronous outcomes through a combining \
                 function.\n\nOperands are awaited strictly in positional \
                 order; the first settled failure becomes the output verbatim, \
                 `combine` never runs, and the remaining operands are dropped \
                 unawaited. When every operand succeeds, `combine` receives \
                 the unwrapped values and its own outcome is the final result.",
            )]
            pub async fn [<$name _async>]<$($type,)* $($future,)* TOut, C>(
                $($operand: $future,)*
                combine: C,
            ) -> Outcome<TOut>
            where
                $($future: Future<Output = Outcome<$type>>,)*
                C: FnOnce($($type),*) -> Outcome<TOut>,
            {
                $(
                    let $operand = match $operand.await {
                        Outcome::Success(value) => value,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )*
                combine($($operand),*)
            }
        }
    };
}

define_join_async!(join2, "2", (first, T1, F1), (second, T2, F2));
define_join_async!(join3, "3", (first, T1, F1), (second, T2, F2), (third, T3, F3));
define_join_async!(
    join4, "4",
    (first, T1, F1), (second, T2, F2), (third, T3, F3), (fourth, T4, F4),
);
define_join_async!(
    join5, "5",
    (first, T1, F1), (second, T2, F2), (third, T3, F3), (fourth, T4, F4), (fifth, T5, F5),
);
define_join_async!(
    join6, "6",
    (first, T1, F1), (second, T2, F2), (third, T3, F3), (fourth, T4, F4), (fifth, T5, F5),
    (sixth, T6, F6),
);
define_join_async!(
    join7, "7",
    (first, T1, F1), (second, T2, F2), (third, T3, F3), (fourth, T4, F4), (fifth, T5, F5),
    (sixth, T6, F6), (seventh, T7, F7),
);
define_join_async!(
    join8, "8",
    (first, T1, F1), (second, T2, F2), (third, T3, F3), (fourth, T4, F4), (fifth, T5, F5),
    (sixth, T6, F6), (seventh, T7, F7), (eighth, T8, F8),
);
define_join_async!(
    join9, "9",
    (first, T1, F1), (second, T2, F2), (third, T3, F3), (fourth, T4, F4), (fifth, T5, F5),
    (sixth, T6, F6), (seventh, T7, F7), (eighth, T8, F8), (ninth, T9, F9),
);
define_join_async!(
    join10, "10",
    (first, T1, F1), (second, T2, F2), (third, T3, F3), (fourth, T4, F4), (fifth, T5, F5),
    (sixth, T6, F6), (seventh, T7, F7), (eighth, T8, F8), (ninth, T9, F9), (tenth, T10, F10),
);
