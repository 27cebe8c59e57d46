//! Lightweight in-process metrics.
//!
//! Counters are stored as atomics behind `DashMap` and rendered in the
//! Prometheus text format by the metrics listener. The request middleware
//! feeds `endpoint_usage_total`.

pub mod metrics;
pub mod middleware;

pub use metrics::{CatalogMetrics, CounterVec};
pub use middleware::{decode_path, track_endpoint_usage};
