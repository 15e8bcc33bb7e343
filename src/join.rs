//! Fixed-arity fan-in over independent outcomes.
//!
//! This module provides `join2` through `join10`: each takes N independent
//! [`Outcome`] operands plus a combining function over the unwrapped values.
//! Operands are scanned in fixed left-to-right positional order; the first
//! operand in the failed state becomes the output verbatim and the combiner
//! is never invoked. Only when every operand succeeds does the combiner run,
//! and its own outcome (which may itself fail) is the final result.
//!
//! # Examples
//!
//! ```rust
//! use combinar::error::ErrorInfo;
//! use combinar::join::join3;
//! use combinar::outcome::Outcome;
//!
//! let sum = join3(
//!     Outcome::success(1),
//!     Outcome::success(2),
//!     Outcome::success(3),
//!     |first, second, third| Outcome::success(first + second + third),
//! );
//! assert_eq!(sum, Outcome::success(6));
//!
//! let error = ErrorInfo::new("boom");
//! let short_circuited = join3(
//!     Outcome::<i32>::failure(error.clone()),
//!     Outcome::success(2),
//!     Outcome::success(3),
//!     |first, second, third| Outcome::success(first + second + third),
//! );
//! assert_eq!(short_circuited, Outcome::failure(error));
//! ```

use crate::outcome::Outcome;

macro_rules! define_join {
    ($name:ident, $arity:literal, $(($operand:ident, $type:ident)),+ $(,)?) => {
        #[doc = concat!(
            "Joins ", $arity, " independent outcomes through a combining function.\n\n",
            "Operands are scanned left to right; the first failure becomes the \
             output verbatim and `combine` never runs. When every operand \
             succeeds, `combine` receives the unwrapped values and its own \
             outcome is the final result.",
        )]
        pub fn $name<$($type,)* TOut, C>(
            $($operand: Outcome<$type>,)*
            combine: C,
        ) -> Outcome<TOut>
        where
            C: FnOnce($($type),*) -> Outcome<TOut>,
        {
            $(
                let $operand = match $operand {
                    Outcome::Success(value) => value,
                    Outcome::Failure(error) => return Outcome::Failure(error),
                };
            )*
            combine($($operand),*)
        }
    };
}

define_join!(join2, "2", (first, T1), (second, T2));
define_join!(join3, "3", (first, T1), (second, T2), (third, T3));
define_join!(join4, "4", (first, T1), (second, T2), (third, T3), (fourth, T4));
define_join!(
    join5, "5",
    (first, T1), (second, T2), (third, T3), (fourth, T4), (fifth, T5),
);
define_join!(
    join6, "6",
    (first, T1), (second, T2), (third, T3), (fourth, T4), (fifth, T5), (sixth, T6),
);
define_join!(
    join7, "7",
    (first, T1), (second, T2), (third, T3), (fourth, T4), (fifth, T5), (sixth, T6),
    (seventh, T7),
);
define_join!(
    join8, "8",
    (first, T1), (second, T2), (third, T3), (fourth, T4), (fifth, T5), (sixth, T6),
    (seventh, T7), (eighth, T8),
);
define_join!(
    join9, "9",
    (first, T1), (second, T2), (third, T3), (fourth, T4), (fifth, T5), (sixth, T6),
    (seventh, T7), (eighth, T8), (ninth, T9),
);
define_join!(
    join10, "10",
    (first, T1), (second, T2), (third, T3), (fourth, T4), (fifth, T5), (sixth, T6),
    (seventh, T7), (eighth, T8), (ninth, T9), (tenth, T10),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorInfo;
    use std::cell::Cell;
    use rstest::rstest;

    #[rstest]
    fn test_join2_combines_successes() {
        let combined = join2(Outcome::success(2usize), Outcome::success("x"), |n, s| {
            Outcome::success(s.repeat(n))
        });
        assert_eq!(combined, Outcome::success("xx".to_string()));
    }

    #[rstest]
    fn test_join2_first_failure_wins_without_invoking_combiner() {
        let invocations = Cell::new(0);
        let error = ErrorInfo::new("E1");

        let combined = join2(
            Outcome::<i32>::failure(error.clone()),
            Outcome::success(5),
            |first, second| {
                invocations.set(invocations.get() + 1);
                Outcome::success(first + second)
            },
        );

        assert_eq!(combined, Outcome::failure(error));
        assert_eq!(invocations.get(), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn test_join3_surfaces_failure_at_each_position(#[case] failing: usize) {
        let error = ErrorInfo::new("positional");
        let operand = |position: usize| {
            if position == failing {
                Outcome::failure(error.clone())
            } else {
                Outcome::success(position as i32)
            }
        };

        let combined = join3(operand(0), operand(1), operand(2), |a, b, c| {
            Outcome::success(a + b + c)
        });
        assert_eq!(combined, Outcome::failure(error));
    }

    #[rstest]
    fn test_positional_order_decides_which_error_surfaces() {
        let first_error = ErrorInfo::new("first");
        let second_error = ErrorInfo::new("second");

        let combined = join2(
            Outcome::<i32>::failure(first_error.clone()),
            Outcome::<i32>::failure(second_error),
            |a, b| Outcome::success(a + b),
        );
        assert_eq!(combined, Outcome::failure(first_error));
    }

    #[rstest]
    fn test_combiner_failure_is_final_output() {
        let error = ErrorInfo::new("combiner rejected");
        let combined: Outcome<i32> = join2(Outcome::success(1), Outcome::success(2), |_, _| {
            Outcome::failure(error.clone())
        });
        assert_eq!(combined.unwrap_failure().message(), "combiner rejected");
    }

    #[rstest]
    fn test_join10_all_successes() {
        let total = join10(
            Outcome::success(1),
            Outcome::success(2),
            Outcome::success(3),
            Outcome::success(4),
            Outcome::success(5),
            Outcome::success(6),
            Outcome::success(7),
            Outcome::success(8),
            Outcome::success(9),
            Outcome::success(10),
            |a, b, c, d, e, f, g, h, i, j| Outcome::success(a + b + c + d + e + f + g + h + i + j),
        );
        assert_eq!(total, Outcome::success(55));
    }
}
