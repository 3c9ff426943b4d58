//! Flutter-facing bindings for the metric clock core.

pub mod api;
