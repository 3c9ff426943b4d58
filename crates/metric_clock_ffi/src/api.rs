//! FFI use-case API for the Flutter clock screen.
//!
//! # Responsibility
//! - Expose sync, use-case level metric clock calls to Dart via FRB.
//! - Keep the displayed instant owned by the caller: every call takes the
//!   current fields and returns a full replacement snapshot.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Invalid field/action ids return a failure envelope carrying the
//!   unchanged snapshot.

use log::warn;
use metric_clock_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ClockConfig, ClockSession, MetricField, MetricTime, NavAction, SystemClock,
};
use std::path::PathBuf;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: `trace|debug|info|warn|error`; `None` uses
///   `METRIC_CLOCK_LOG_LEVEL` or the build-mode default.
/// - `log_dir`: absolute directory; `None` uses `METRIC_CLOCK_LOG_DIR` or
///   the temp-dir default.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Idempotent for the same level + directory.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: Option<String>, log_dir: Option<String>) -> String {
    let config = ClockConfig::from_env().with_overrides(level, log_dir.map(PathBuf::from));
    match metric_clock_core::init_logging_with(&config) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Initializes logging with an explicit level and directory.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging_at(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Metric fields as held by the Dart side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricFields {
    pub yy: i64,
    pub ddd: i64,
    pub hh: i64,
    pub mmm: i64,
}

impl From<MetricFields> for MetricTime {
    fn from(fields: MetricFields) -> Self {
        MetricTime::new(fields.yy, fields.ddd, fields.hh, fields.mmm)
    }
}

/// Everything the clock screen renders for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub fields: MetricFields,
    /// Epoch seconds of the displayed instant.
    pub civil_seconds: i64,
    /// `YYYY-MM-DD HH:MM:SS` or `Invalid Date`.
    pub utc: String,
    /// Long host-local form or `Invalid Date`.
    pub local: String,
    /// False when the instant cannot be shown as a calendar date.
    pub civil_valid: bool,
    /// Value for the `t` query parameter.
    pub share_state: String,
    pub label: String,
}

impl From<ClockSession> for MetricSnapshot {
    fn from(session: ClockSession) -> Self {
        let metric = session.metric();
        let civil = session.civil();
        Self {
            fields: MetricFields {
                yy: metric.yy,
                ddd: metric.ddd,
                hh: metric.hh,
                mmm: metric.mmm,
            },
            civil_seconds: session.civil_seconds(),
            civil_valid: civil.is_valid(),
            utc: civil.utc,
            local: civil.local,
            share_state: session.share_state(),
            label: session.label(),
        }
    }
}

/// Response envelope for calls that take a user-supplied id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricResponse {
    pub ok: bool,
    pub snapshot: MetricSnapshot,
    /// Empty on success, diagnostic text otherwise.
    pub message: String,
}

impl MetricResponse {
    fn success(session: ClockSession) -> Self {
        Self {
            ok: true,
            snapshot: session.into(),
            message: String::new(),
        }
    }

    fn failure(session: ClockSession, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            snapshot: session.into(),
            message: message.into(),
        }
    }
}

/// One entry of the metric week strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDayItem {
    pub day: i64,
    pub civil_seconds: i64,
    /// Host-local `M/D` or `Invalid Date`.
    pub month_day: String,
    pub selected: bool,
}

/// Metric week strip with its header bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekStrip {
    pub start_day: i64,
    pub end_day: i64,
    pub days: Vec<WeekDayItem>,
}

/// One button of the navigation grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCardItem {
    /// Stable id accepted by [`metric_navigate`].
    pub action: String,
    pub title: String,
    pub sub_label: String,
    pub highlight: bool,
}

/// Snapshot of the current wall-clock instant ("LIVE NOW").
#[flutter_rust_bridge::frb(sync)]
pub fn metric_now() -> MetricSnapshot {
    ClockSession::now(&SystemClock).into()
}

/// Snapshot for an explicit epoch-seconds instant.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_from_seconds(seconds: i64) -> MetricSnapshot {
    ClockSession::at_seconds(seconds).into()
}

/// Snapshot for explicit fields, kept as given.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_from_fields(fields: MetricFields) -> MetricSnapshot {
    ClockSession::at_metric(fields.into()).into()
}

/// Restores the instant from a page query string, or "now" when absent.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_from_query(query: String) -> MetricSnapshot {
    ClockSession::from_query_or_now(query.as_str(), &SystemClock).into()
}

/// Direct edit of one field (`yy|ddd|hh|mmm`) from raw input text.
///
/// # FFI contract
/// - Unparseable text becomes `0`; out-of-range values are clamped.
/// - Unknown field ids fail with the unchanged snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_edit_field(fields: MetricFields, field: String, raw: String) -> MetricResponse {
    with_field(fields, &field, |session, field| session.edit_field(field, raw.as_str()))
}

/// Resets one field to zero.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_zero_field(fields: MetricFields, field: String) -> MetricResponse {
    with_field(fields, &field, |session, field| session.zero_field(field))
}

/// Moves one field by `delta` within its bounds.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_nudge_field(fields: MetricFields, field: String, delta: i64) -> MetricResponse {
    with_field(fields, &field, |session, field| session.nudge_field(field, delta))
}

/// Applies one navigation grid action by id (see [`metric_nav_cards`]).
#[flutter_rust_bridge::frb(sync)]
pub fn metric_navigate(fields: MetricFields, action: String) -> MetricResponse {
    let session = ClockSession::at_metric(fields.into());
    match action.parse::<NavAction>() {
        Ok(action) => MetricResponse::success(session.navigate(action)),
        Err(err) => {
            warn!("event=navigate module=ffi status=rejected");
            MetricResponse::failure(session, format!("metric_navigate failed: {err}"))
        }
    }
}

/// Steps by whole years and days with carry into the year.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_step(fields: MetricFields, delta_years: i64, delta_days: i64) -> MetricSnapshot {
    ClockSession::at_metric(fields.into())
        .step(delta_years, delta_days)
        .into()
}

/// Week strip around the current day.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_week(fields: MetricFields) -> WeekStrip {
    let session = ClockSession::at_metric(fields.into());
    let (start_day, end_day) = metric_clock_core::week_bounds(fields.ddd);
    let days = session
        .week()
        .into_iter()
        .map(|entry| WeekDayItem {
            day: entry.day,
            civil_seconds: entry.civil_seconds,
            month_day: metric_clock_core::CivilRendering::of(entry.civil_seconds).month_day,
            selected: entry.selected,
        })
        .collect();
    WeekStrip {
        start_day,
        end_day,
        days,
    }
}

/// Navigation grid for the current instant.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_nav_cards(fields: MetricFields) -> Vec<NavCardItem> {
    ClockSession::at_metric(fields.into())
        .nav_cards()
        .into_iter()
        .map(|card| NavCardItem {
            action: card.action.as_str().to_string(),
            title: card.title.to_string(),
            sub_label: card.sub_label,
            highlight: card.highlight,
        })
        .collect()
}

fn with_field(
    fields: MetricFields,
    field: &str,
    apply: impl FnOnce(&ClockSession, MetricField) -> ClockSession,
) -> MetricResponse {
    let session = ClockSession::at_metric(fields.into());
    match field.parse::<MetricField>() {
        Ok(field) => MetricResponse::success(apply(&session, field)),
        Err(err) => {
            warn!("event=edit_field module=ffi status=rejected");
            MetricResponse::failure(session, format!("field update failed: {err}"))
        }
    }
}
