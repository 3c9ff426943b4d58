use metric_clock_core::{week_window, MetricField, MetricTime, WeekDay};

#[test]
fn metric_time_serializes_with_short_field_names() {
    let metric = MetricTime::new(-3, 6, 42, 7);

    let json = serde_json::to_value(metric).unwrap();
    assert_eq!(json["yy"], -3);
    assert_eq!(json["ddd"], 6);
    assert_eq!(json["hh"], 42);
    assert_eq!(json["mmm"], 7);

    let decoded: MetricTime = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, metric);
}

#[test]
fn week_day_serializes_its_start_instant() {
    let week = week_window(&MetricTime::new(1, 0, 5, 5));
    let json = serde_json::to_value(week[0]).unwrap();
    assert_eq!(json["day"], 0);
    assert_eq!(json["civil_seconds"], 100_000_000);
    assert_eq!(json["selected"], true);

    let decoded: WeekDay = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, week[0]);
}

#[test]
fn field_metadata_matches_input_boxes() {
    let maxes = MetricField::ALL
        .iter()
        .map(|field| (field.as_str(), field.max()))
        .collect::<Vec<_>>();
    assert_eq!(
        maxes,
        vec![("yy", None), ("ddd", Some(999)), ("hh", Some(99)), ("mmm", Some(999))]
    );
    assert_eq!(MetricField::Unit.label(), "Sec (mmm)");
}
