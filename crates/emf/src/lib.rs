//! Top-level facade crate for EMF.
//!
//! Re-exports the core accumulator, limits and config loader so users can
//! depend on a single crate.
//!
//! ```
//! use emf::{Limits, MetricAccumulator, Unit};
//!
//! let mut acc = MetricAccumulator::new("checkout");
//! acc.add_dimension([("Service", "payments")]);
//! acc.add_metric("Latency", Unit::Milliseconds, [12.0, 15.5]);
//! acc.add_properties_flat(&["requestId", "r-42"]);
//!
//! let mut event = acc.finalize();
//! event.enforce_limits(&Limits::default())?;
//! assert_eq!(event.metrics().get("Latency").map(|m| m.values().len()), Some(2));
//! # Ok::<(), emf::EmfError>(())
//! ```

pub use emf_core::*;
