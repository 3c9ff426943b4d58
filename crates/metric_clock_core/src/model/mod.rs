//! Metric time domain model.
//!
//! # Responsibility
//! - Define the canonical `MetricTime` value and its epoch-seconds codec.
//! - Define per-field access and the direct-edit clamp policy.
//!
//! # Invariants
//! - Encoding is a pure mixed-radix decomposition; no calendar rules apply.

pub mod field;
pub mod metric_time;
