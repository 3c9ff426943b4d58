//! Core domain logic for the metric clock.
//! Owns the metric time codec, navigation arithmetic and display helpers;
//! presentation layers hold their own state and call into this crate.

pub mod civil;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod share;

pub use civil::{format_local, format_utc, CivilRendering, INVALID_DATE};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ClockConfig;
pub use logging::{default_log_level, init_logging, init_logging_with, logging_status};
pub use model::field::{
    clamp_field, coerce_field_input, nudge_field, parse_metric_field, set_field, zero_field,
    MetricField, MetricFieldError,
};
pub use model::metric_time::{
    decode, encode, MetricTime, SECONDS_IN_DDD, SECONDS_IN_HH, SECONDS_IN_MMM, SECONDS_IN_YY,
};
pub use service::navigation::{nav_cards, step, NavAction, NavActionError, NavCard};
pub use service::session::ClockSession;
pub use service::week::{week_bounds, week_window, WeekDay};
pub use share::{
    format_label, format_share_state, parse_share_state, share_query, state_from_query,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
