#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use emf_core::limits::{MAX_DIMENSIONS_PER_SET, MAX_METRICS, MAX_VALUES_PER_METRIC};
use emf_core::{EmfEvent, LimitViolation, Limits, MetricAccumulator, OnExceed, Unit};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn wide_dimension_set(keys: usize) -> Vec<(String, String)> {
    (0..keys).map(|i| (format!("d{i}"), format!("v{i}"))).collect()
}

fn oversized_event() -> EmfEvent {
    let mut acc = MetricAccumulator::new("limits");
    acc.add_dimension(wide_dimension_set(12));
    acc.add_dimension([("Service", "checkout")]);
    for i in 0..(MAX_METRICS + 5) {
        acc.add_metric(&format!("m{i}"), Unit::Count, [1.0]);
    }
    acc.add_metric("m0", Unit::Count, (0..120).map(f64::from));
    acc.add_properties([("requestId", "r-1")]);
    acc.finalize()
}

#[test]
fn defaults_match_the_format() {
    let l = Limits::default();
    assert_eq!(l.max_dimensions_per_set, 9);
    assert_eq!(l.max_metrics, 150);
    assert_eq!(l.max_values_per_metric, 100);
    assert_eq!(l.on_exceed, OnExceed::Truncate);
}

#[test]
fn event_within_limits_has_no_violations() {
    let mut acc = MetricAccumulator::new("limits");
    acc.add_dimension(wide_dimension_set(MAX_DIMENSIONS_PER_SET));
    acc.add_metric("Latency", Unit::Milliseconds, (0..MAX_VALUES_PER_METRIC as u32).map(f64::from));

    let mut event = acc.finalize();
    assert!(event.check_limits(&Limits::default()).is_empty());
    let cut = event.enforce_limits(&Limits::default()).unwrap();
    assert!(cut.is_empty());
    assert_eq!(event.dimension_sets()[0].len(), MAX_DIMENSIONS_PER_SET);
}

#[test]
fn check_reports_every_violation_without_modifying() {
    let event = oversized_event();
    let violations = event.check_limits(&Limits::default());

    assert_eq!(
        violations,
        vec![
            LimitViolation::DimensionSet { index: 0, keys: 12, max: 9 },
            LimitViolation::Metrics { count: 155, max: 150 },
            LimitViolation::Values { metric: "m0".into(), count: 121, max: 100 },
        ]
    );
    assert_eq!(event.dimension_sets()[0].len(), 12);
    assert_eq!(event.metrics().len(), 155);
}

#[test]
fn truncate_keeps_leading_entries() {
    init_tracing();
    let mut event = oversized_event();
    let cut = event.enforce_limits(&Limits::default()).unwrap();
    assert_eq!(cut.len(), 3);

    let keys: Vec<&str> = event.dimension_sets()[0].keys().collect();
    assert_eq!(keys, vec!["d0", "d1", "d2", "d3", "d4", "d5", "d6", "d7", "d8"]);
    assert_eq!(event.dimension_sets()[1].get("Service"), Some("checkout"));

    assert_eq!(event.metrics().len(), 150);
    assert!(event.metrics().contains_key("m149"));
    assert!(!event.metrics().contains_key("m150"));
    assert!(event.metrics().get("m150").is_none());

    let m0 = event.metrics().get("m0").unwrap();
    assert_eq!(m0.values().len(), 100);
    assert_eq!(m0.values()[0], 1.0);
    assert_eq!(m0.values()[99], 98.0);

    assert_eq!(event.properties().get("requestId").map(String::as_str), Some("r-1"));
    assert!(event.check_limits(&Limits::default()).is_empty());
}

#[test]
fn reject_fails_and_leaves_event_untouched() {
    init_tracing();
    let mut event = oversized_event();
    let limits = Limits { on_exceed: OnExceed::Reject, ..Limits::default() };

    let err = event.enforce_limits(&limits).expect_err("must reject");
    assert_eq!(err.code().as_str(), "LIMIT_EXCEEDED");
    assert!(err.to_string().contains("dimension set 0 has 12 keys"));
    assert_eq!(event.dimension_sets()[0].len(), 12);
    assert_eq!(event.metrics().len(), 155);
}

#[test]
fn tighter_limits_apply() {
    let mut acc = MetricAccumulator::new("limits");
    acc.add_dimension([("a", "1"), ("b", "2"), ("c", "3")]);
    acc.add_metric("x", Unit::Bytes, [1.0, 2.0, 3.0]);
    acc.add_metric("y", Unit::Bytes, [1.0]);

    let limits = Limits {
        max_dimensions_per_set: 2,
        max_metrics: 1,
        max_values_per_metric: 2,
        on_exceed: OnExceed::Truncate,
    };
    let mut event = acc.finalize();
    event.enforce_limits(&limits).unwrap();

    assert_eq!(event.dimension_sets()[0].keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(event.metrics().len(), 1);
    assert_eq!(event.metrics().get("x").unwrap().values(), &[1.0, 2.0]);
}

#[test]
fn violations_render_readably() {
    let v = LimitViolation::Values { metric: "Latency".into(), count: 101, max: 100 };
    assert_eq!(v.to_string(), "metric Latency has 101 values (max 100)");
}
