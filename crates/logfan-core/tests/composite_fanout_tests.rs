#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Composite sink fan-out: ordering, growth and fail-fast lifecycle.

mod common;

use common::{entries, new_journal, RecordingSink};
use logfan_core::sinks::composite::INITIAL_CAPACITY;
use logfan_core::{CompositeSink, LogError, LogErrorKind, Record, Severity, Sink, SinkKind};

#[test]
fn test_emit_reaches_children_in_insertion_order() {
    // GIVEN a composite with children A, B, C where B fails to start
    let journal = new_journal();
    let mut composite = CompositeSink::new();
    composite
        .add(RecordingSink::new("A", &journal).boxed())
        .unwrap();
    composite
        .add(RecordingSink::new("B", &journal).failing_start().boxed())
        .unwrap();
    composite
        .add(RecordingSink::new("C", &journal).boxed())
        .unwrap();
    let _ = composite.start();
    journal.lock().unwrap().clear();

    // WHEN one record is emitted
    composite.emit(&Record::new(Severity::Info, "m.rs", 9, "hi"));

    // THEN every child sees it, in order
    assert_eq!(
        entries(&journal),
        vec![
            "A:emit [INFO] m.rs:9 | hi",
            "B:emit [INFO] m.rs:9 | hi",
            "C:emit [INFO] m.rs:9 | hi",
        ]
    );
}

#[test]
fn test_capacity_doubles_only_when_full() {
    let journal = new_journal();
    let mut composite = CompositeSink::new();

    composite
        .add(RecordingSink::new("0", &journal).boxed())
        .unwrap();
    assert_eq!(composite.capacity(), INITIAL_CAPACITY);

    for _ in 1..INITIAL_CAPACITY {
        composite
            .add(RecordingSink::new("n", &journal).boxed())
            .unwrap();
    }
    assert_eq!(composite.capacity(), INITIAL_CAPACITY);

    // The fifth child triggers the first doubling
    composite
        .add(RecordingSink::new("5", &journal).boxed())
        .unwrap();
    assert_eq!(composite.len(), 5);
    assert_eq!(composite.capacity(), INITIAL_CAPACITY * 2);
}

#[test]
fn test_start_stops_at_first_failure_without_rollback() {
    let journal = new_journal();
    let mut composite = CompositeSink::new();
    composite
        .add(RecordingSink::new("A", &journal).boxed())
        .unwrap();
    composite
        .add(RecordingSink::new("B", &journal).failing_start().boxed())
        .unwrap();
    composite
        .add(RecordingSink::new("C", &journal).boxed())
        .unwrap();

    let err = composite.start().unwrap_err();

    assert_eq!(err.kind(), LogErrorKind::InvalidPath);
    // C never started, A was not stopped again
    assert_eq!(entries(&journal), vec!["A:start", "B:start"]);
}

#[test]
fn test_stop_stops_at_first_failure() {
    let journal = new_journal();
    let mut composite = CompositeSink::new();
    composite
        .add(RecordingSink::new("A", &journal).failing_stop().boxed())
        .unwrap();
    composite
        .add(RecordingSink::new("B", &journal).boxed())
        .unwrap();
    composite.start().unwrap();
    journal.lock().unwrap().clear();

    let err = composite.stop().unwrap_err();

    assert!(matches!(err, LogError::Io { .. }));
    assert_eq!(entries(&journal), vec!["A:stop"]);
}

#[test]
fn test_destroy_releases_children_in_order() {
    let journal = new_journal();
    let mut composite = CompositeSink::new();
    for name in ["A", "B", "C"] {
        composite
            .add(RecordingSink::new(name, &journal).boxed())
            .unwrap();
    }
    assert_eq!(composite.kinds(), vec![SinkKind::Console; 3]);

    Box::new(composite).destroy();

    assert_eq!(entries(&journal), vec!["A:destroy", "B:destroy", "C:destroy"]);
}

#[test]
fn test_nested_composites_fan_out_depth_first() {
    let journal = new_journal();
    let mut inner = CompositeSink::new();
    inner.add(RecordingSink::new("B", &journal).boxed()).unwrap();

    let mut outer = CompositeSink::new();
    outer.add(RecordingSink::new("A", &journal).boxed()).unwrap();
    outer.add(Box::new(inner)).unwrap();
    outer.add(RecordingSink::new("C", &journal).boxed()).unwrap();

    outer.emit(&Record::new(Severity::Warn, "n.rs", 2, "x"));

    assert_eq!(
        entries(&journal),
        vec![
            "A:emit [WARN] n.rs:2 | x",
            "B:emit [WARN] n.rs:2 | x",
            "C:emit [WARN] n.rs:2 | x",
        ]
    );
    assert_eq!(
        outer.kinds(),
        vec![SinkKind::Console, SinkKind::Composite, SinkKind::Console]
    );
}
