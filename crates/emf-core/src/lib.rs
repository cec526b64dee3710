//! EMF core: per-event accumulation of dimensions, metrics and properties for
//! the CloudWatch Embedded Metric Format.
//!
//! An [`MetricAccumulator`] is built once per log event, mutated freely, then
//! finalized into an [`EmfEvent`] that a serializer reads. Writing the wire
//! JSON and shipping log lines live outside this crate.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Recording a metric
//! never fails; the only fallible paths are config loading and limit
//! enforcement, which surface as `EmfError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod accumulator;
pub mod config;
pub mod dimension;
pub mod error;
pub mod event;
pub mod limits;
pub mod metric;
pub mod pairs;
pub mod unit;

pub use accumulator::MetricAccumulator;
pub use dimension::DimensionSet;
pub use error::{EmfError, ErrorCode, Result};
pub use event::EmfEvent;
pub use limits::{LimitViolation, Limits, OnExceed};
pub use metric::{MetricMap, MetricRecord};
pub use unit::Unit;
