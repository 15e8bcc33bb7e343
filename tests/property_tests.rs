//! Property tests for the algebraic guarantees of the containers and
//! combinators.

use std::cell::Cell;

use proptest::prelude::*;

use combinar::error::ErrorInfo;
use combinar::maybe::Maybe;
use combinar::outcome::Outcome;

fn arbitrary_error() -> impl Strategy<Value = ErrorInfo> {
    (1u32..=u32::MAX, "[a-z]{1,16}", "[a-z ]{0,16}[a-z]")
        .prop_map(|(code, name, message)| ErrorInfo::coded(code, message).with_name(name))
}

proptest! {
    #[test]
    fn success_reports_success_and_roundtrips_to_some(value in any::<i32>()) {
        let outcome = Outcome::success(value);
        prop_assert!(outcome.is_success());
        prop_assert_eq!(outcome.clone().value(), Some(value));
        prop_assert_eq!(outcome.to_maybe(), Maybe::some(value));
    }

    #[test]
    fn failure_reports_failure_and_maps_to_none(error in arbitrary_error()) {
        let outcome: Outcome<i32> = Outcome::failure(error.clone());
        prop_assert!(outcome.is_failure());
        prop_assert!(!outcome.is_success());
        prop_assert_eq!(outcome.clone().error(), Some(error));
        prop_assert_eq!(outcome.to_maybe(), Maybe::none());
    }

    #[test]
    fn bind_on_failure_is_identity_and_never_invokes_the_transform(
        error in arbitrary_error(),
        offset in any::<i32>(),
    ) {
        let invocations = Cell::new(0u32);
        let bound: Outcome<i32> = Outcome::<i32>::failure(error.clone()).bind(|n| {
            invocations.set(invocations.get() + 1);
            Outcome::success(n.wrapping_add(offset))
        });
        prop_assert_eq!(bound, Outcome::failure(error));
        prop_assert_eq!(invocations.get(), 0);
    }

    #[test]
    fn ensure_is_stable_whenever_the_predicate_holds(
        value in any::<i32>(),
        modulus in 1i32..100,
        error in arbitrary_error(),
    ) {
        let residue = value.rem_euclid(modulus);
        let outcome = Outcome::success(value)
            .ensure(move |n| n.rem_euclid(modulus) == residue, error);
        prop_assert_eq!(outcome, Outcome::success(value));
    }

    #[test]
    fn to_maybe_reduce_roundtrip(
        value in any::<i32>(),
        substitute in any::<i32>(),
        error in arbitrary_error(),
    ) {
        prop_assert_eq!(Outcome::success(value).to_maybe().reduce(substitute), value);
        prop_assert_eq!(
            Outcome::<i32>::failure(error).to_maybe().reduce(substitute),
            substitute
        );
    }

    #[test]
    fn none_orders_before_every_some(content in any::<i64>()) {
        prop_assert!(Maybe::none() < Maybe::some(content));
    }

    #[test]
    fn some_ordering_is_consistent_with_content_ordering(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Maybe::some(a).cmp(&Maybe::some(b)), a.cmp(&b));
    }

    #[test]
    fn with_code_replaces_only_the_code(code in 1u32..=u32::MAX) {
        let original = ErrorInfo::new("boom");
        let updated = original.with_code(code);

        prop_assert_eq!(updated.code(), code);
        prop_assert_eq!(updated.name(), original.name());
        prop_assert_eq!(updated.message(), original.message());
        prop_assert!(!updated.has_cause());
        // Functional update: the original keeps its sentinel code.
        prop_assert_eq!(original.code(), ErrorInfo::DEFAULT_CODE);
    }

    #[test]
    fn a_panicking_deferred_body_never_escapes(message in "[a-z]{1,12}") {
        let panic_message = message.clone();
        let computation: combinar::defer::Deferred<i32> =
            combinar::defer::Deferred::of(move || panic!("{panic_message}"));

        let outcome = computation.run();
        let failure = outcome.unwrap_failure();
        prop_assert_eq!(failure.message(), message);
    }
}
