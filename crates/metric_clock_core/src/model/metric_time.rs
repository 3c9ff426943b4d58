//! Metric time value and its epoch-seconds codec.
//!
//! # Responsibility
//! - Define the four-field fixed-radix representation of epoch seconds.
//! - Convert between epoch seconds and `MetricTime` in both directions.
//!
//! # Invariants
//! - `encode` always yields `ddd ∈ [0,999]`, `hh ∈ [0,99]`, `mmm ∈ [0,999]`.
//! - `decode(encode(t)) == t` for every `i64` seconds value.
//! - `decode` is total and accepts out-of-range fields.

use serde::{Deserialize, Serialize};

/// Seconds in one metric year (`yy`).
pub const SECONDS_IN_YY: i64 = 100_000_000;
/// Seconds in one metric day (`ddd`).
pub const SECONDS_IN_DDD: i64 = 100_000;
/// Seconds in one metric hour (`hh`).
pub const SECONDS_IN_HH: i64 = 1_000;
/// Seconds in one metric sub-hour unit (`mmm`).
pub const SECONDS_IN_MMM: i64 = 1;

/// Number of metric days in one metric year.
pub const DAYS_IN_YY: i64 = SECONDS_IN_YY / SECONDS_IN_DDD;

/// Fixed-radix decomposition of seconds elapsed since the Unix epoch.
///
/// Values produced by [`encode`] are always normalized. Values built by hand
/// (direct input, parsed share state) may carry out-of-range fields, which
/// [`decode`] folds into the weighted sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricTime {
    /// Metric year. Negative before 1970-01-01T00:00:00Z.
    pub yy: i64,
    /// Day of metric year, `0..=999` when normalized.
    pub ddd: i64,
    /// Hour of metric day, `0..=99` when normalized.
    pub hh: i64,
    /// Sub-hour unit (one second), `0..=999` when normalized.
    pub mmm: i64,
}

impl MetricTime {
    /// The epoch instant, `0-000-00-000`.
    pub const EPOCH: MetricTime = MetricTime::new(0, 0, 0, 0);

    pub const fn new(yy: i64, ddd: i64, hh: i64, mmm: i64) -> Self {
        Self { yy, ddd, hh, mmm }
    }

    /// Whether every sub-year field lies inside its encoded domain.
    pub fn is_normalized(&self) -> bool {
        (0..DAYS_IN_YY).contains(&self.ddd)
            && (0..SECONDS_IN_DDD / SECONDS_IN_HH).contains(&self.hh)
            && (0..SECONDS_IN_HH).contains(&self.mmm)
    }

    /// Re-encodes the decoded instant, folding any overshoot upward.
    pub fn normalized(&self) -> Self {
        encode(decode(self))
    }
}

/// Encodes epoch seconds into metric time.
///
/// Uses floor division so pre-epoch instants keep non-negative sub-year
/// fields: `encode(-1)` is `-1-999-99-999`.
pub fn encode(seconds: i64) -> MetricTime {
    let yy = seconds.div_euclid(SECONDS_IN_YY);
    let rem = seconds.rem_euclid(SECONDS_IN_YY);

    let ddd = rem / SECONDS_IN_DDD;
    let rem = rem % SECONDS_IN_DDD;

    let hh = rem / SECONDS_IN_HH;
    let mmm = (rem % SECONDS_IN_HH) / SECONDS_IN_MMM;

    MetricTime { yy, ddd, hh, mmm }
}

/// Decodes metric time into epoch seconds.
///
/// Wraps on `i64` overflow instead of panicking; callers that feed
/// astronomically large years get a wrapped value rather than an abort.
pub fn decode(metric: &MetricTime) -> i64 {
    metric
        .yy
        .wrapping_mul(SECONDS_IN_YY)
        .wrapping_add(metric.ddd.wrapping_mul(SECONDS_IN_DDD))
        .wrapping_add(metric.hh.wrapping_mul(SECONDS_IN_HH))
        .wrapping_add(metric.mmm.wrapping_mul(SECONDS_IN_MMM))
}
