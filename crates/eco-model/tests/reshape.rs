use std::collections::BTreeSet;

use eco_model::{
    build_chart, reshape, Observation, ObservationTable, SeriesTable, PERIOD_AXIS_NAME,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn observation(geo: &str, sector: &str, indicator: &str, values: &[Option<f64>]) -> Observation {
    Observation {
        geo: geo.to_string(),
        nace_r2: sector.to_string(),
        indic_bt: indicator.to_string(),
        values: values.to_vec(),
    }
}

fn periods(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

#[test]
fn two_indicators_for_one_selection() {
    let table = ObservationTable::new(
        periods(&["2021Q1", "2021Q2"]),
        vec![
            observation("EU", "C", "Industrial production", &[Some(99.0), Some(101.0)]),
            observation("FR", "C", "Industrial production", &[Some(1.0), Some(2.0)]),
            observation("EU", "C", "Hours worked", &[Some(98.5), Some(100.5)]),
            observation("EU", "B", "Hours worked", &[Some(3.0), Some(4.0)]),
        ],
    )
    .unwrap();

    let series = reshape(&table, "C", "EU");
    assert_eq!(series.index_name, PERIOD_AXIS_NAME);
    assert_eq!(series.periods(), ["2021Q1", "2021Q2"]);
    assert_eq!(
        series.column_names().collect::<Vec<_>>(),
        vec!["Industrial production", "Hours worked"]
    );
    assert_eq!(
        series.column("Industrial production").unwrap(),
        [Some(99.0), Some(101.0)]
    );
    assert_eq!(series.value("2021Q2", "Hours worked"), Some(100.5));

    let chart = build_chart(&series, "C", "EU");
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.title, "C short-term indicators in EU");
}

#[test]
fn no_matching_rows_yields_empty_table() {
    let table = ObservationTable::new(
        periods(&["2021Q1"]),
        vec![observation("EU", "C", "Hours worked", &[Some(1.0)])],
    )
    .unwrap();

    let series = reshape(&table, "B", "EU");
    assert!(series.is_empty());
    assert_eq!(series.row_count(), 0);
    assert_eq!(series.column_count(), 0);
    assert_eq!(series, SeriesTable::empty());
}

#[test]
fn periods_keep_file_order() {
    let table = ObservationTable::new(
        periods(&["2022Q1", "2021Q4", "2021Q3"]),
        vec![observation("EU", "C", "Hours worked", &[Some(3.0), Some(2.0), Some(1.0)])],
    )
    .unwrap();

    let series = reshape(&table, "C", "EU");
    assert_eq!(series.periods(), ["2022Q1", "2021Q4", "2021Q3"]);
    assert_eq!(
        series.column("Hours worked").unwrap(),
        [Some(3.0), Some(2.0), Some(1.0)]
    );
}

#[test]
fn unknown_indicators_stay_in_the_table() {
    let table = ObservationTable::new(
        periods(&["2021Q1"]),
        vec![observation("EU", "C", "Producer prices", &[Some(1.0)])],
    )
    .unwrap();

    let series = reshape(&table, "C", "EU");
    assert!(!series.is_empty());
    assert!(series.has_column("Producer prices"));
}

#[test]
fn series_table_json_shape() {
    let table = ObservationTable::new(
        periods(&["2021Q1"]),
        vec![observation("EU", "C", "Hours worked", &[None])],
    )
    .unwrap();

    let json = serde_json::to_value(reshape(&table, "C", "EU")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "indexName": "Quarter",
            "periods": ["2021Q1"],
            "columns": [{ "name": "Hours worked", "values": [null] }],
        })
    );
}

const GEOS: [&str; 3] = ["EU", "FR", "DE"];
const SECTORS: [&str; 2] = ["B", "C"];
const INDICATORS: [&str; 5] = [
    "Industrial production",
    "Persons employed",
    "Hours worked",
    "Turnover (revenues)",
    "Producer prices",
];

/// Tables with unique `(geo, sector, indicator)` keys and a fixed period count.
fn arb_table() -> impl Strategy<Value = ObservationTable> {
    (1usize..5).prop_flat_map(|period_count| {
        let keys = proptest::sample::subsequence(
            GEOS.iter()
                .flat_map(|g| {
                    SECTORS.iter().flat_map(move |s| {
                        INDICATORS.iter().map(move |i| (*g, *s, *i))
                    })
                })
                .collect::<Vec<_>>(),
            0..12,
        );
        let values = proptest::collection::vec(
            proptest::option::of(0.0f64..200.0),
            period_count * 30,
        );
        (keys, values).prop_map(move |(keys, values)| {
            let periods: Vec<String> = (0..period_count)
                .map(|q| format!("2021Q{}", q + 1))
                .collect();
            let rows = keys
                .into_iter()
                .enumerate()
                .map(|(row, (geo, sector, indicator))| {
                    let start = row * period_count;
                    observation(geo, sector, indicator, &values[start..start + period_count])
                })
                .collect();
            ObservationTable::new(periods, rows).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn reshape_rows_are_periods_and_columns_are_matching_indicators(
        table in arb_table(),
        geo in proptest::sample::select(GEOS.to_vec()),
        sector in proptest::sample::select(SECTORS.to_vec()),
    ) {
        let series = reshape(&table, sector, geo);
        let expected: BTreeSet<&str> = table
            .rows_matching(sector, geo)
            .map(|row| row.indic_bt.as_str())
            .collect();

        if expected.is_empty() {
            prop_assert!(series.is_empty());
            prop_assert_eq!(series.column_count(), 0);
            prop_assert_eq!(series.row_count(), 0);
        } else {
            prop_assert_eq!(series.periods(), table.periods());
            let actual: BTreeSet<&str> = series.column_names().collect();
            prop_assert_eq!(actual, expected);
            for row in table.rows_matching(sector, geo) {
                prop_assert_eq!(series.column(&row.indic_bt).unwrap(), row.values.as_slice());
            }
        }
    }

    #[test]
    fn chart_never_plots_outside_the_vocabulary(
        table in arb_table(),
        geo in proptest::sample::select(GEOS.to_vec()),
        sector in proptest::sample::select(SECTORS.to_vec()),
    ) {
        let series = reshape(&table, sector, geo);
        let chart = build_chart(&series, sector, geo);
        let known = &INDICATORS[..4];
        prop_assert!(chart.series_names().all(|name| known.contains(&name)));
        let present = known.iter().filter(|name| series.has_column(name)).count();
        prop_assert_eq!(chart.series.len(), present);
    }
}
