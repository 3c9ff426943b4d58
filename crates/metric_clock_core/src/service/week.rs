//! Metric week strip derivation.

use serde::{Deserialize, Serialize};

use crate::model::metric_time::{decode, MetricTime, DAYS_IN_YY};
use crate::service::navigation::WEEK_DAYS;

/// One day of the navigable week strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    /// Day of metric year.
    pub day: i64,
    /// Start of that day: same `yy`, `hh = 0`, `mmm = 0`.
    pub metric: MetricTime,
    /// Epoch seconds of `metric`.
    pub civil_seconds: i64,
    /// Whether this is the day currently displayed.
    pub selected: bool,
}

/// Inclusive `(start, end)` days of the week containing `ddd`.
///
/// Saturates at the `i64` bounds for unclamped days.
pub fn week_bounds(ddd: i64) -> (i64, i64) {
    let start = ddd.saturating_sub(ddd.rem_euclid(WEEK_DAYS));
    (start, start.saturating_add(WEEK_DAYS - 1))
}

/// Lists the days of the metric week containing `metric.ddd`, ascending.
///
/// Days outside `0..=999` are skipped, so the list never spills into a
/// neighbouring year and is empty for out-of-range days.
pub fn week_window(metric: &MetricTime) -> Vec<WeekDay> {
    let (start, end) = week_bounds(metric.ddd);
    (start..=end)
        .filter(|day| (0..DAYS_IN_YY).contains(day))
        .map(|day| {
            let day_start = MetricTime::new(metric.yy, day, 0, 0);
            WeekDay {
                day,
                metric: day_start,
                civil_seconds: decode(&day_start),
                selected: day == metric.ddd,
            }
        })
        .collect()
}
