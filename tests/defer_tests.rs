//! Integration tests for `Deferred`: deferral, the panic-trap boundary,
//! and deferred composition.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;

use combinar::defer::Deferred;
use combinar::error::ErrorInfo;
use combinar::outcome::Outcome;

#[rstest]
fn the_body_runs_only_on_invocation_and_only_once() {
    let executions = Arc::new(AtomicUsize::new(0));
    let counter = executions.clone();

    let computation = Deferred::of(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        42
    });
    assert_eq!(executions.load(Ordering::SeqCst), 0);

    assert_eq!(computation.run(), Outcome::success(42));
    assert_eq!(executions.load(Ordering::SeqCst), 1);
}

#[rstest]
#[case("plain str panic")]
#[case("formatted panic 7")]
fn a_panicking_body_always_yields_a_failure(#[case] message: String) {
    let panic_message = message.clone();
    let computation: Deferred<i32> = Deferred::of(move || panic!("{panic_message}"));

    let error = computation.run().unwrap_failure();
    assert_eq!(error.name(), "Panic");
    assert_eq!(error.message(), message);
}

#[rstest]
#[case("")]
#[case("   ")]
fn a_body_panicking_with_a_blank_message_is_still_trapped(#[case] blank: String) {
    let computation: Deferred<i32> = Deferred::of(move || panic!("{blank}"));

    let error = computation.run().unwrap_failure();
    assert_eq!(error.name(), "Panic");
    assert_eq!(error.message(), "unknown panic payload");
}

#[rstest]
fn a_panicking_outcome_body_is_trapped_at_the_same_boundary() {
    let computation: Deferred<i32> = Deferred::new(|| panic!("outcome body"));
    assert!(computation.run().is_failure());
}

#[rstest]
fn a_failing_body_is_data_not_a_panic() {
    let computation = Deferred::<i32>::new(|| Outcome::failure(ErrorInfo::coded(4, "expected")));
    let error = computation.run().unwrap_failure();
    assert_eq!(error.code(), 4);
    assert_eq!(error.message(), "expected");
}

#[rstest]
fn composition_stays_deferred_until_run() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = invocations.clone();

    let computation = Deferred::of(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        5
    })
    .map(|n| n * 2)
    .bind(|n| Outcome::success(n + 1));

    assert_eq!(invocations.load(Ordering::SeqCst), 0);
    assert_eq!(computation.run(), Outcome::success(11));
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
}

#[rstest]
fn bind_after_a_trapped_panic_short_circuits() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = invocations.clone();

    let computation = Deferred::<i32>::of(|| panic!("boom")).bind(move |n| {
        counter.fetch_add(1, Ordering::SeqCst);
        Outcome::success(n * 2)
    });

    assert!(computation.run().is_failure());
    assert_eq!(invocations.load(Ordering::SeqCst), 0);
}

#[rstest]
fn ensure_gates_the_deferred_result() {
    let accepted = Deferred::of(|| 5)
        .ensure(|n| *n > 0, ErrorInfo::new("not positive"))
        .run();
    assert_eq!(accepted, Outcome::success(5));

    let rejected = Deferred::of(|| -5)
        .ensure(|n| *n > 0, ErrorInfo::new("not positive"))
        .run();
    assert_eq!(rejected.unwrap_failure().message(), "not positive");
}

#[rstest]
fn fold_collapses_the_evaluated_outcome() {
    let described = Deferred::<i32>::of(|| panic!("dead"))
        .fold(|n| n.to_string(), |error| error.message().to_string());
    assert_eq!(described, "dead");
}

#[rstest]
fn outcome_bind_deferred_auto_evaluates() {
    let outcome = Outcome::success(5).bind_deferred(|n| Deferred::of(move || n * 2));
    assert_eq!(outcome, Outcome::success(10));

    let trapped = Outcome::success(5).bind_deferred(|_| Deferred::<i32>::of(|| panic!("inner")));
    assert_eq!(trapped.unwrap_failure().message(), "inner");
}
