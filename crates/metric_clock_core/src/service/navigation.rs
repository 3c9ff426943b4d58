//! Stepping navigation across metric days and years.
//!
//! # Responsibility
//! - Move a `MetricTime` by whole years/days with carry into `yy`.
//! - Describe the fixed navigation actions offered to presentation layers.
//!
//! # Invariants
//! - `step` always returns `ddd ∈ [0,999]`.
//! - `hh` and `mmm` are preserved by every navigation action.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::field::{set_field, MetricField};
use crate::model::metric_time::{MetricTime, DAYS_IN_YY};

/// Days in one metric week.
pub const WEEK_DAYS: i64 = 10;
/// Days in one metric season.
pub const SEASON_DAYS: i64 = 100;

/// Moves `metric` by `delta_years` and `delta_days`.
///
/// Day overflow carries into the year and day underflow borrows from it, so
/// `step({5,995}, 0, 10)` lands on `{6,5}` and `step({5,3}, 0, -10)` on
/// `{4,993}`. Time-of-day fields pass through unchanged.
pub fn step(metric: &MetricTime, delta_years: i64, delta_days: i64) -> MetricTime {
    let days = metric.ddd.wrapping_add(delta_days);
    let yy = metric
        .yy
        .wrapping_add(delta_years)
        .wrapping_add(days.div_euclid(DAYS_IN_YY));

    MetricTime {
        yy,
        ddd: days.rem_euclid(DAYS_IN_YY),
        hh: metric.hh,
        mmm: metric.mmm,
    }
}

/// Fixed navigation actions of the temporal navigation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    PreviousWeek,
    NextWeek,
    PreviousSeason,
    NextSeason,
    LastYear,
    NextYear,
    ResetSeason,
    EndOfYear,
}

impl NavAction {
    /// All actions in grid order.
    pub const ALL: [NavAction; 8] = [
        Self::PreviousWeek,
        Self::NextWeek,
        Self::PreviousSeason,
        Self::NextSeason,
        Self::LastYear,
        Self::NextYear,
        Self::ResetSeason,
        Self::EndOfYear,
    ];

    /// Stable string id used by CLI and FFI callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreviousWeek => "prev-week",
            Self::NextWeek => "next-week",
            Self::PreviousSeason => "prev-season",
            Self::NextSeason => "next-season",
            Self::LastYear => "last-year",
            Self::NextYear => "next-year",
            Self::ResetSeason => "reset-season",
            Self::EndOfYear => "end-of-year",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PreviousWeek => "Previous Week",
            Self::NextWeek => "Next Week",
            Self::PreviousSeason => "Previous Season",
            Self::NextSeason => "Next Season",
            Self::LastYear => "Last Year",
            Self::NextYear => "Next Year",
            Self::ResetSeason => "Reset Season",
            Self::EndOfYear => "End of Year",
        }
    }

    /// `(delta_years, delta_days)` for relative actions, `None` for the
    /// absolute day jumps.
    pub fn deltas(self) -> Option<(i64, i64)> {
        match self {
            Self::PreviousWeek => Some((0, -WEEK_DAYS)),
            Self::NextWeek => Some((0, WEEK_DAYS)),
            Self::PreviousSeason => Some((0, -SEASON_DAYS)),
            Self::NextSeason => Some((0, SEASON_DAYS)),
            Self::LastYear => Some((-1, 0)),
            Self::NextYear => Some((1, 0)),
            Self::ResetSeason | Self::EndOfYear => None,
        }
    }

    /// Absolute actions are rendered highlighted.
    pub fn is_highlight(self) -> bool {
        self.deltas().is_none()
    }

    /// Short preview of where the action leads.
    ///
    /// Relative day previews show the raw target before carry, e.g.
    /// `Day 1004` from day 994.
    pub fn sub_label(self, metric: &MetricTime) -> String {
        match self {
            Self::ResetSeason => "Day 000".to_string(),
            Self::EndOfYear => "Day 999".to_string(),
            Self::LastYear | Self::NextYear => {
                let (dy, _) = self.deltas().unwrap_or_default();
                format!("YY {}", metric.yy.wrapping_add(dy))
            }
            _ => {
                let (_, dd) = self.deltas().unwrap_or_default();
                format!("Day {}", metric.ddd.wrapping_add(dd))
            }
        }
    }

    /// Applies the action to `metric`.
    pub fn apply(self, metric: &MetricTime) -> MetricTime {
        match self {
            Self::ResetSeason => set_field(metric, MetricField::Day, "0"),
            Self::EndOfYear => set_field(metric, MetricField::Day, "999"),
            relative => {
                let (dy, dd) = relative.deltas().unwrap_or_default();
                step(metric, dy, dd)
            }
        }
    }
}

impl Display for NavAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NavAction {
    type Err = NavActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        NavAction::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or(NavActionError(normalized))
    }
}

/// Unknown navigation action id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavActionError(pub String);

impl Display for NavActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown navigation action `{}`", self.0)
    }
}

impl Error for NavActionError {}

/// Render-ready description of one navigation button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCard {
    pub action: NavAction,
    pub title: &'static str,
    pub sub_label: String,
    pub highlight: bool,
}

/// Builds the navigation grid for the current instant.
pub fn nav_cards(metric: &MetricTime) -> Vec<NavCard> {
    NavAction::ALL
        .into_iter()
        .map(|action| NavCard {
            action,
            title: action.title(),
            sub_label: action.sub_label(metric),
            highlight: action.is_highlight(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{nav_cards, step, NavAction, NavActionError};
    use crate::model::metric_time::MetricTime;

    #[test]
    fn step_carries_day_overflow_into_year() {
        let stepped = step(&MetricTime::new(5, 995, 0, 0), 0, 10);
        assert_eq!(stepped, MetricTime::new(6, 5, 0, 0));
    }

    #[test]
    fn step_borrows_year_on_day_underflow() {
        let stepped = step(&MetricTime::new(5, 3, 0, 0), 0, -10);
        assert_eq!(stepped, MetricTime::new(4, 993, 0, 0));
    }

    #[test]
    fn step_borrows_exact_multiples_once() {
        assert_eq!(
            step(&MetricTime::new(5, 0, 0, 0), 0, -1_000),
            MetricTime::new(4, 0, 0, 0)
        );
        assert_eq!(
            step(&MetricTime::new(5, 0, 0, 0), 0, -2_001),
            MetricTime::new(2, 999, 0, 0)
        );
    }

    #[test]
    fn step_preserves_time_of_day() {
        let stepped = step(&MetricTime::new(17, 600, 42, 123), 1, 100);
        assert_eq!(stepped, MetricTime::new(18, 700, 42, 123));
    }

    #[test]
    fn absolute_actions_jump_within_year() {
        let metric = MetricTime::new(17, 432, 1, 2);
        assert_eq!(
            NavAction::ResetSeason.apply(&metric),
            MetricTime::new(17, 0, 1, 2)
        );
        assert_eq!(
            NavAction::EndOfYear.apply(&metric),
            MetricTime::new(17, 999, 1, 2)
        );
    }

    #[test]
    fn cards_preview_targets() {
        let cards = nav_cards(&MetricTime::new(17, 5, 0, 0));
        assert_eq!(cards.len(), 8);
        assert_eq!(cards[0].sub_label, "Day -5");
        assert_eq!(cards[3].sub_label, "Day 105");
        assert_eq!(cards[4].sub_label, "YY 16");
        assert!(cards[6].highlight);
        assert!(!cards[1].highlight);
    }

    #[test]
    fn parses_action_ids() {
        assert_eq!(
            "Next-Season".parse::<NavAction>(),
            Ok(NavAction::NextSeason)
        );
        assert_eq!(
            "sideways".parse::<NavAction>(),
            Err(NavActionError("sideways".to_string()))
        );
    }
}
