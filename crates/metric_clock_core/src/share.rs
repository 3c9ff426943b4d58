//! Shareable state string and compact labels.
//!
//! # Responsibility
//! - Format/parse the `yy-ddd-hh-mmm` tuple mirrored into link query strings.
//! - Produce compact navigation labels.
//!
//! # Invariants
//! - `yy` is never zero-padded; `ddd`, `hh`, `mmm` are fixed width.
//! - Malformed input parses to `None`, never to an error.
//! - Parsed fields follow the direct-edit clamp rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::field::MetricField;
use crate::model::metric_time::MetricTime;

/// Query-string key holding the share state.
pub const SHARE_QUERY_KEY: &str = "t";

// Four integer parts; only the year may carry a sign so negative years
// produced by `format_share_state` remain parseable.
static SHARE_STATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d+)-(\d+)-(\d+)-(\d+)$").expect("valid share state regex")
});

/// Formats `metric` as `"{yy}-{ddd:03}-{hh:02}-{mmm:03}"`.
///
/// Out-of-range fields are folded into a normalized tuple first, so the
/// string always parses back to the same instant.
pub fn format_share_state(metric: &MetricTime) -> String {
    let metric = if metric.is_normalized() {
        *metric
    } else {
        metric.normalized()
    };
    format!(
        "{}-{:03}-{:02}-{:03}",
        metric.yy, metric.ddd, metric.hh, metric.mmm
    )
}

/// Parses a share state string.
///
/// Returns `None` on wrong arity or any non-integer part.
pub fn parse_share_state(raw: &str) -> Option<MetricTime> {
    let captures = SHARE_STATE_RE.captures(raw.trim())?;
    let mut parts = [0_i64; 4];
    for (slot, field) in parts.iter_mut().zip(MetricField::ALL) {
        let text = captures.get(field_group(field))?.as_str();
        *slot = field.clamp(text.parse::<i64>().ok()?);
    }
    let [yy, ddd, hh, mmm] = parts;
    Some(MetricTime::new(yy, ddd, hh, mmm))
}

/// Builds the query string (`t=...`) for `metric`.
pub fn share_query(metric: &MetricTime) -> String {
    format!("{SHARE_QUERY_KEY}={}", format_share_state(metric))
}

/// Extracts and parses the share state from a query string.
///
/// Accepts an optional leading `?`; other keys are ignored.
pub fn state_from_query(query: &str) -> Option<MetricTime> {
    query
        .trim()
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_QUERY_KEY)
        .and_then(|(_, value)| parse_share_state(value))
}

/// Compact label: `"{yy}-{ddd:03}"`, or the full tuple when both `hh` and
/// `mmm` are nonzero.
pub fn format_label(metric: &MetricTime) -> String {
    if metric.hh != 0 && metric.mmm != 0 {
        return format_share_state(metric);
    }
    format!("{}-{:03}", metric.yy, metric.ddd)
}

fn field_group(field: MetricField) -> usize {
    match field {
        MetricField::Year => 1,
        MetricField::Day => 2,
        MetricField::Hour => 3,
        MetricField::Unit => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        format_label, format_share_state, parse_share_state, share_query, state_from_query,
    };
    use crate::model::metric_time::{decode, MetricTime};

    #[test]
    fn formats_fixed_width_tail() {
        assert_eq!(
            format_share_state(&MetricTime::new(17, 6, 0, 0)),
            "17-006-00-000"
        );
        assert_eq!(
            format_share_state(&MetricTime::new(-1, 999, 99, 999)),
            "-1-999-99-999"
        );
    }

    #[test]
    fn parses_formatted_state() {
        assert_eq!(
            parse_share_state("17-006-00-000"),
            Some(MetricTime::new(17, 6, 0, 0))
        );
        assert_eq!(
            parse_share_state("-1-999-99-999"),
            Some(MetricTime::new(-1, 999, 99, 999))
        );
    }

    #[test]
    fn malformed_state_is_absent() {
        assert_eq!(parse_share_state("17-6-0"), None);
        assert_eq!(parse_share_state("17-006-00-000-1"), None);
        assert_eq!(parse_share_state("17-abc-00-000"), None);
        assert_eq!(parse_share_state(""), None);
        assert_eq!(parse_share_state("99999999999999999999-0-0-0"), None);
    }

    #[test]
    fn out_of_range_states_format_to_parseable_links() {
        let raw = MetricTime::new(17, 6, -5, 0);
        let formatted = format_share_state(&raw);
        assert_eq!(formatted, "17-005-95-000");
        let parsed = parse_share_state(&formatted).expect("normalized state parses");
        assert_eq!(decode(&parsed), decode(&raw));

        assert_eq!(
            format_share_state(&MetricTime::new(0, 1_500, 0, 0)),
            "1-500-00-000"
        );
    }

    #[test]
    fn parsed_fields_are_clamped() {
        assert_eq!(
            parse_share_state("17-1500-00-000"),
            Some(MetricTime::new(17, 999, 0, 0))
        );
    }

    #[test]
    fn label_extends_only_when_time_of_day_is_set() {
        assert_eq!(format_label(&MetricTime::new(17, 6, 0, 0)), "17-006");
        assert_eq!(format_label(&MetricTime::new(17, 6, 4, 0)), "17-006");
        assert_eq!(format_label(&MetricTime::new(17, 6, 4, 7)), "17-006-04-007");
    }

    #[test]
    fn query_round_trip() {
        let metric = MetricTime::new(17, 6, 0, 0);
        assert_eq!(share_query(&metric), "t=17-006-00-000");
        assert_eq!(state_from_query("?lang=en&t=17-006-00-000"), Some(metric));
        assert_eq!(state_from_query("lang=en"), None);
    }
}
