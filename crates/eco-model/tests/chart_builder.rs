use eco_model::{
    build_chart, reshape, Color, HoverMode, KnownIndicator, LegendClick, LineDash, LineMode,
    LineStyle, Observation, ObservationTable, SeriesTable,
};
use pretty_assertions::assert_eq;

fn series_with(indicators: &[&str]) -> SeriesTable {
    let rows = indicators
        .iter()
        .enumerate()
        .map(|(idx, name)| Observation {
            geo: "European Union".to_string(),
            nace_r2: "C".to_string(),
            indic_bt: name.to_string(),
            values: vec![Some(100.0 + idx as f64), None],
        })
        .collect();
    let table =
        ObservationTable::new(vec!["2021Q1".to_string(), "2021Q2".to_string()], rows).unwrap();
    reshape(&table, "C", "European Union")
}

#[test]
fn plots_known_indicators_in_fixed_order() {
    let series = series_with(&[
        "Turnover (revenues)",
        "Hours worked",
        "Persons employed",
        "Industrial production",
    ]);
    let chart = build_chart(&series, "C", "European Union");

    assert_eq!(
        chart.series_names().collect::<Vec<_>>(),
        vec![
            "Industrial production",
            "Persons employed",
            "Hours worked",
            "Turnover (revenues)",
        ]
    );
}

#[test]
fn styling_matches_indicator_palette() {
    let series = series_with(&[
        "Industrial production",
        "Persons employed",
        "Hours worked",
        "Turnover (revenues)",
    ]);
    let chart = build_chart(&series, "C", "European Union");

    let style = |name: &str| {
        let s = chart.series(name).expect("series present");
        (s.line.clone(), s.opacity)
    };

    assert_eq!(
        style("Industrial production"),
        (
            LineStyle {
                color: Color::Blue,
                width: None,
                dash: LineDash::Solid,
            },
            1.0
        )
    );
    assert_eq!(
        style("Persons employed"),
        (
            LineStyle {
                color: Color::LightGreen,
                width: Some(2.0),
                dash: LineDash::Dashed,
            },
            0.3
        )
    );
    assert_eq!(
        style("Hours worked"),
        (
            LineStyle {
                color: Color::Green,
                width: Some(2.0),
                dash: LineDash::Dotted,
            },
            0.3
        )
    );
    assert_eq!(
        style("Turnover (revenues)"),
        (
            LineStyle {
                color: Color::Purple,
                width: Some(2.0),
                dash: LineDash::Solid,
            },
            0.3
        )
    );
    assert_eq!(Color::LightGreen.name(), "light green");
    assert!(chart.series.iter().all(|s| s.mode == LineMode::Lines));
}

#[test]
fn series_points_follow_the_table() {
    let series = series_with(&["Hours worked"]);
    let chart = build_chart(&series, "C", "European Union");

    let line = chart.series("Hours worked").unwrap();
    assert_eq!(line.x, vec!["2021Q1", "2021Q2"]);
    assert_eq!(line.y, vec![Some(100.0), None]);
}

#[test]
fn unknown_columns_are_never_plotted() {
    let series = series_with(&["Producer prices", "Hours worked", "Hours Worked"]);
    let chart = build_chart(&series, "C", "European Union");
    assert_eq!(chart.series_names().collect::<Vec<_>>(), vec!["Hours worked"]);
}

#[test]
fn chart_without_known_indicators_keeps_metadata() {
    let series = series_with(&["Producer prices"]);
    let chart = build_chart(&series, "C", "European Union");

    assert!(chart.series.is_empty());
    assert_eq!(chart.title, "C short-term indicators in European Union");
    assert_eq!(chart.x_axis_title, "Quarter");
    assert_eq!(chart.y_axis_title, "Index (2021=100)");
    assert_eq!(chart.legend.title, "De-select indicators here");
    assert!(chart.legend.visible);
    assert_eq!(chart.legend.item_click, LegendClick::Toggle);
    assert_eq!(chart.hover_mode, HoverMode::XUnified);
    assert_eq!(chart.template, "plotly_white");
}

#[test]
fn vocabulary_labels_roundtrip() {
    for indicator in KnownIndicator::ALL {
        assert_eq!(KnownIndicator::from_label(indicator.label()), Some(indicator));
    }
    assert_eq!(KnownIndicator::from_label("Producer prices"), None);
}

#[test]
fn chart_spec_serializes_camel_case() {
    let chart = build_chart(&series_with(&["Persons employed"]), "C", "EU");
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["hoverMode"], "xUnified");
    assert_eq!(json["legend"]["itemClick"], "toggle");
    assert_eq!(
        json["series"][0]["line"],
        serde_json::json!({ "color": "light_green", "width": 2.0, "dash": "dashed" })
    );
}
