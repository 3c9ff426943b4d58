//! Displayed-instant session state.
//!
//! # Responsibility
//! - Hold the metric/civil pair owned by one presentation surface.
//! - Turn user events (edit, navigate, resync) into replacement pairs.
//!
//! # Invariants
//! - Transitions never mutate in place; each returns a new session.
//! - `civil_seconds == decode(metric)` after every transition.
//! - No process-global session exists; callers own their value.

use log::{debug, info};

use crate::civil::CivilRendering;
use crate::clock::Clock;
use crate::model::field::{nudge_field, set_field, zero_field, MetricField};
use crate::model::metric_time::{decode, encode, MetricTime};
use crate::service::navigation::{nav_cards, step, NavAction, NavCard};
use crate::service::week::{week_window, WeekDay};
use crate::share::{
    format_label, format_share_state, parse_share_state, share_query, state_from_query,
};

/// Current displayed instant as a metric/civil pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSession {
    metric: MetricTime,
    civil_seconds: i64,
}

impl ClockSession {
    /// Starts at the clock's current instant.
    pub fn now(clock: &impl Clock) -> Self {
        Self::at_seconds(clock.now_epoch_seconds())
    }

    pub fn at_seconds(seconds: i64) -> Self {
        Self {
            metric: encode(seconds),
            civil_seconds: seconds,
        }
    }

    /// Starts at `metric` as given; out-of-range fields are kept.
    pub fn at_metric(metric: MetricTime) -> Self {
        Self {
            metric,
            civil_seconds: decode(&metric),
        }
    }

    /// Restores a shared state string, falling back to "now" when it is
    /// absent or malformed.
    pub fn from_share_state_or_now(raw: Option<&str>, clock: &impl Clock) -> Self {
        match raw.map(parse_share_state) {
            Some(Some(metric)) => Self::at_metric(metric),
            Some(None) => {
                info!("event=share_state_rejected module=session status=fallback reason=malformed");
                Self::now(clock)
            }
            None => Self::now(clock),
        }
    }

    /// Same as [`Self::from_share_state_or_now`] for a full query string.
    pub fn from_query_or_now(query: &str, clock: &impl Clock) -> Self {
        match state_from_query(query) {
            Some(metric) => Self::at_metric(metric),
            None => {
                debug!("event=share_query_absent module=session status=fallback");
                Self::now(clock)
            }
        }
    }

    pub fn metric(&self) -> MetricTime {
        self.metric
    }

    pub fn civil_seconds(&self) -> i64 {
        self.civil_seconds
    }

    /// Re-samples the clock, replacing the whole pair.
    pub fn resync(&self, clock: &impl Clock) -> Self {
        let next = Self::now(clock);
        debug!(
            "event=resync module=session status=ok from={} to={}",
            self.civil_seconds, next.civil_seconds
        );
        next
    }

    /// Direct edit of one field from raw input text.
    pub fn edit_field(&self, field: MetricField, raw: &str) -> Self {
        let next = Self::at_metric(set_field(&self.metric, field, raw));
        debug!(
            "event=edit_field module=session status=ok field={} value={}",
            field,
            field.get(&next.metric)
        );
        next
    }

    pub fn zero_field(&self, field: MetricField) -> Self {
        Self::at_metric(zero_field(&self.metric, field))
    }

    /// Moves one field by `delta` within its bounds.
    pub fn nudge_field(&self, field: MetricField, delta: i64) -> Self {
        Self::at_metric(nudge_field(&self.metric, field, delta))
    }

    pub fn step(&self, delta_years: i64, delta_days: i64) -> Self {
        let next = Self::at_metric(step(&self.metric, delta_years, delta_days));
        debug!(
            "event=step module=session status=ok delta_years={} delta_days={} state={}",
            delta_years,
            delta_days,
            next.share_state()
        );
        next
    }

    pub fn navigate(&self, action: NavAction) -> Self {
        let next = Self::at_metric(action.apply(&self.metric));
        debug!(
            "event=navigate module=session status=ok action={} state={}",
            action,
            next.share_state()
        );
        next
    }

    pub fn week(&self) -> Vec<WeekDay> {
        week_window(&self.metric)
    }

    pub fn nav_cards(&self) -> Vec<NavCard> {
        nav_cards(&self.metric)
    }

    pub fn civil(&self) -> CivilRendering {
        CivilRendering::of(self.civil_seconds)
    }

    pub fn share_state(&self) -> String {
        format_share_state(&self.metric)
    }

    pub fn share_query(&self) -> String {
        share_query(&self.metric)
    }

    pub fn label(&self) -> String {
        format_label(&self.metric)
    }
}
