//! Per-field access and direct-edit clamp rules.
//!
//! # Responsibility
//! - Name the four metric fields as a closed set.
//! - Apply the direct-edit policy: coerce unparseable input to `0`, then
//!   clamp into the field's domain.
//!
//! # Invariants
//! - `ddd` and `mmm` clamp to `[0,999]`, `hh` to `[0,99]`; `yy` is unbounded.
//! - Direct-edit helpers never fail; they always produce a usable value.

use std::error::Error;
use std::fmt::{Display, Formatter};

use super::metric_time::MetricTime;

/// One editable component of a [`MetricTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    Year,
    Day,
    Hour,
    Unit,
}

/// Stable string id for the year field.
pub const FIELD_YEAR: &str = "yy";
/// Stable string id for the day field.
pub const FIELD_DAY: &str = "ddd";
/// Stable string id for the hour field.
pub const FIELD_HOUR: &str = "hh";
/// Stable string id for the sub-hour unit field.
pub const FIELD_UNIT: &str = "mmm";

impl MetricField {
    /// All fields, most significant first.
    pub const ALL: [MetricField; 4] = [Self::Year, Self::Day, Self::Hour, Self::Unit];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => FIELD_YEAR,
            Self::Day => FIELD_DAY,
            Self::Hour => FIELD_HOUR,
            Self::Unit => FIELD_UNIT,
        }
    }

    /// User-facing input label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Year => "Year (YY)",
            Self::Day => "Day (DDD)",
            Self::Hour => "Hour (HH)",
            Self::Unit => "Sec (mmm)",
        }
    }

    /// Inclusive upper bound, `None` for the unbounded year.
    pub fn max(self) -> Option<i64> {
        match self {
            Self::Year => None,
            Self::Day | Self::Unit => Some(999),
            Self::Hour => Some(99),
        }
    }

    /// Inclusive lower bound, `None` for the unbounded year.
    pub fn min(self) -> Option<i64> {
        match self {
            Self::Year => None,
            Self::Day | Self::Hour | Self::Unit => Some(0),
        }
    }

    /// Clamps `value` into this field's domain.
    pub fn clamp(self, value: i64) -> i64 {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => value.clamp(min, max),
            _ => value,
        }
    }

    /// Reads this field from `metric`.
    pub fn get(self, metric: &MetricTime) -> i64 {
        match self {
            Self::Year => metric.yy,
            Self::Day => metric.ddd,
            Self::Hour => metric.hh,
            Self::Unit => metric.mmm,
        }
    }

    /// Returns a copy of `metric` with this field replaced, unclamped.
    pub fn with_value(self, metric: &MetricTime, value: i64) -> MetricTime {
        let mut next = *metric;
        match self {
            Self::Year => next.yy = value,
            Self::Day => next.ddd = value,
            Self::Hour => next.hh = value,
            Self::Unit => next.mmm = value,
        }
        next
    }
}

impl Display for MetricField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a field from its stable string id.
pub fn parse_metric_field(value: &str) -> Result<MetricField, MetricFieldError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(MetricFieldError::EmptyField);
    }

    match normalized.to_ascii_lowercase().as_str() {
        FIELD_YEAR => Ok(MetricField::Year),
        FIELD_DAY => Ok(MetricField::Day),
        FIELD_HOUR => Ok(MetricField::Hour),
        FIELD_UNIT => Ok(MetricField::Unit),
        other => Err(MetricFieldError::UnknownField(other.to_string())),
    }
}

impl std::str::FromStr for MetricField {
    type Err = MetricFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_metric_field(s)
    }
}

/// Field id parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricFieldError {
    EmptyField,
    UnknownField(String),
}

impl Display for MetricFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField => write!(f, "metric field must not be empty"),
            Self::UnknownField(value) => {
                write!(f, "unknown metric field `{value}`; expected yy|ddd|hh|mmm")
            }
        }
    }
}

impl Error for MetricFieldError {}

/// Clamps `value` into `field`'s domain.
pub fn clamp_field(field: MetricField, value: i64) -> i64 {
    field.clamp(value)
}

/// Coerces raw text input for `field`.
///
/// Unparseable text becomes `0` before clamping.
pub fn coerce_field_input(field: MetricField, raw: &str) -> i64 {
    let parsed = raw.trim().parse::<i64>().unwrap_or(0);
    field.clamp(parsed)
}

/// Applies a direct edit from raw text input.
pub fn set_field(metric: &MetricTime, field: MetricField, raw: &str) -> MetricTime {
    field.with_value(metric, coerce_field_input(field, raw))
}

/// Resets one field to zero.
pub fn zero_field(metric: &MetricTime, field: MetricField) -> MetricTime {
    field.with_value(metric, 0)
}

/// Moves one field by `delta`, saturating at the field's bounds.
pub fn nudge_field(metric: &MetricTime, field: MetricField, delta: i64) -> MetricTime {
    let next = field.get(metric).saturating_add(delta);
    field.with_value(metric, field.clamp(next))
}

#[cfg(test)]
mod tests {
    use super::{
        clamp_field, coerce_field_input, nudge_field, parse_metric_field, set_field, zero_field,
        MetricField, MetricFieldError,
    };
    use crate::model::metric_time::MetricTime;

    #[test]
    fn clamps_each_field_to_its_domain() {
        assert_eq!(clamp_field(MetricField::Day, 1_500), 999);
        assert_eq!(clamp_field(MetricField::Hour, -5), 0);
        assert_eq!(clamp_field(MetricField::Hour, 120), 99);
        assert_eq!(clamp_field(MetricField::Unit, 1_000), 999);
        assert_eq!(clamp_field(MetricField::Year, -42), -42);
    }

    #[test]
    fn unparseable_input_becomes_zero() {
        assert_eq!(coerce_field_input(MetricField::Day, "abc"), 0);
        assert_eq!(coerce_field_input(MetricField::Year, ""), 0);
        assert_eq!(coerce_field_input(MetricField::Day, " 1500 "), 999);
        assert_eq!(coerce_field_input(MetricField::Hour, "-5"), 0);
        assert_eq!(coerce_field_input(MetricField::Year, "-3"), -3);
    }

    #[test]
    fn set_field_only_touches_target() {
        let metric = MetricTime::new(17, 600, 12, 345);
        assert_eq!(
            set_field(&metric, MetricField::Hour, "250"),
            MetricTime::new(17, 600, 99, 345)
        );
        assert_eq!(
            zero_field(&metric, MetricField::Unit),
            MetricTime::new(17, 600, 12, 0)
        );
    }

    #[test]
    fn nudge_saturates_at_bounds() {
        let metric = MetricTime::new(0, 999, 0, 5);
        assert_eq!(nudge_field(&metric, MetricField::Day, 1).ddd, 999);
        assert_eq!(nudge_field(&metric, MetricField::Hour, -1).hh, 0);
        assert_eq!(nudge_field(&metric, MetricField::Unit, 1).mmm, 6);
        assert_eq!(nudge_field(&metric, MetricField::Year, -1).yy, -1);
    }

    #[test]
    fn parses_field_ids() {
        assert_eq!(parse_metric_field("DDD"), Ok(MetricField::Day));
        assert_eq!(parse_metric_field(" "), Err(MetricFieldError::EmptyField));
        assert!(matches!(
            parse_metric_field("minute"),
            Err(MetricFieldError::UnknownField(_))
        ));
    }
}
