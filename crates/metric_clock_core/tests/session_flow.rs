use metric_clock_core::{
    ClockSession, FixedClock, MetricField, MetricTime, NavAction, INVALID_DATE,
};

const NOW: FixedClock = FixedClock(1_760_000_000);

#[test]
fn week_strip_follows_navigation() {
    let session = ClockSession::at_metric(MetricTime::new(17, 24, 3, 4));
    let week = session.week();
    assert_eq!(week.len(), 10);
    assert_eq!(week[0].day, 20);
    assert_eq!(week[9].day, 29);

    let next = session.navigate(NavAction::NextSeason);
    let days = next.week().iter().map(|entry| entry.day).collect::<Vec<_>>();
    assert_eq!(days, (120..=129).collect::<Vec<_>>());
}

#[test]
fn full_edit_cycle_matches_share_state() {
    let session = ClockSession::now(&NOW)
        .edit_field(MetricField::Year, "17")
        .edit_field(MetricField::Day, "6")
        .edit_field(MetricField::Hour, "oops")
        .zero_field(MetricField::Unit);
    assert_eq!(session.share_state(), "17-006-00-000");
    assert_eq!(session.share_query(), "t=17-006-00-000");
    assert_eq!(session.label(), "17-006");

    let restored = ClockSession::from_query_or_now("?t=17-006-00-000", &NOW);
    assert_eq!(restored, session);
}

#[test]
fn end_of_year_then_next_week_wraps_year() {
    let session = ClockSession::at_metric(MetricTime::new(17, 432, 0, 0))
        .navigate(NavAction::EndOfYear)
        .navigate(NavAction::NextWeek);
    assert_eq!(session.metric(), MetricTime::new(18, 9, 0, 0));
}

#[test]
fn civil_rendering_tracks_pair() {
    let session = ClockSession::at_seconds(0);
    assert_eq!(session.civil().utc, "1970-01-01 00:00:00");

    let far = ClockSession::at_metric(MetricTime::new(9_000_000_000, 0, 0, 0));
    assert_eq!(far.civil().utc, INVALID_DATE);
}

#[test]
fn nav_cards_follow_current_day() {
    let cards = ClockSession::at_metric(MetricTime::new(17, 994, 0, 0)).nav_cards();
    let next_week = cards
        .iter()
        .find(|card| card.action == NavAction::NextWeek)
        .expect("next week card");
    assert_eq!(next_week.sub_label, "Day 1004");
}
