use eco_model::{load_observations_from_path, LoadOptions, ObservationTable, Selection};
use eco_viewer::{render_page, DisplayCommand, PageOutcome, RecordingSurface, ViewerSettings};
use pretty_assertions::assert_eq;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../fixtures/short_term_indicators.csv"
);

fn fixture() -> ObservationTable {
    load_observations_from_path(FIXTURE, &LoadOptions::default()).expect("load fixture")
}

fn kinds(commands: &[DisplayCommand]) -> Vec<&'static str> {
    commands
        .iter()
        .map(|c| match c {
            DisplayCommand::Markdown { .. } => "markdown",
            DisplayCommand::SidebarTitle { .. } => "sidebarTitle",
            DisplayCommand::Dropdown { .. } => "dropdown",
            DisplayCommand::Chart { .. } => "chart",
            DisplayCommand::Warning { .. } => "warning",
            DisplayCommand::DataTable { .. } => "dataTable",
        })
        .collect()
}

#[test]
fn renders_chart_and_raw_data_in_page_order() {
    let table = fixture();
    let settings = ViewerSettings::default();
    let mut surface = RecordingSurface::new();

    let outcome = render_page(
        &table,
        &settings,
        &Selection::new("C", "European Union"),
        &mut surface,
    );

    assert_eq!(outcome, PageOutcome::Rendered { series_count: 4 });
    assert_eq!(
        kinds(&surface.commands),
        vec![
            "markdown",
            "sidebarTitle",
            "dropdown",
            "dropdown",
            "chart",
            "dataTable"
        ]
    );

    assert_eq!(
        surface.commands[2],
        DisplayCommand::Dropdown {
            label: "Select sector".to_string(),
            options: vec!["B".to_string(), "C".to_string()],
            selected: "C".to_string(),
        }
    );
    assert_eq!(
        surface.commands[3],
        DisplayCommand::Dropdown {
            label: "Select country".to_string(),
            options: vec![
                "European Union".to_string(),
                "France".to_string(),
                "Germany".to_string()
            ],
            selected: "European Union".to_string(),
        }
    );

    let chart = surface.recorded_chart().expect("chart");
    assert_eq!(chart.title, "C short-term indicators in European Union");
    assert_eq!(
        chart.series_names().collect::<Vec<_>>(),
        vec![
            "Industrial production",
            "Persons employed",
            "Hours worked",
            "Turnover (revenues)"
        ]
    );
    assert!(matches!(
        surface.commands[4],
        DisplayCommand::Chart {
            fill_width: true,
            ..
        }
    ));

    // The raw table keeps the indicator the chart does not plot.
    let DisplayCommand::DataTable { label, table } = &surface.commands[5] else {
        panic!("expected a data table, got {:?}", surface.commands[5]);
    };
    assert_eq!(label, "Show raw data");
    assert!(table.has_column("Producer prices"));
    assert_eq!(table.column_count(), 5);
}

#[test]
fn no_data_short_circuits_after_the_warning() {
    let table = fixture();
    let settings = ViewerSettings::default();
    let mut surface = RecordingSurface::new();

    let outcome = render_page(&table, &settings, &Selection::new("B", "France"), &mut surface);

    assert_eq!(outcome, PageOutcome::NoData);
    assert_eq!(
        kinds(&surface.commands),
        vec!["markdown", "sidebarTitle", "dropdown", "dropdown", "warning"]
    );
    assert_eq!(
        surface.recorded_warning(),
        Some("No data available for this combination of country and sector.")
    );
    assert!(surface.recorded_chart().is_none());
}

#[test]
fn unknown_indicators_only_give_an_empty_chart() {
    let table = ObservationTable::new(
        vec!["2021Q1".to_string()],
        vec![eco_model::Observation {
            geo: "EU".to_string(),
            nace_r2: "C".to_string(),
            indic_bt: "Producer prices".to_string(),
            values: vec![Some(100.0)],
        }],
    )
    .unwrap();
    let mut surface = RecordingSurface::new();

    let outcome = render_page(
        &table,
        &ViewerSettings::default(),
        &Selection::new("C", "EU"),
        &mut surface,
    );

    assert_eq!(outcome, PageOutcome::Rendered { series_count: 0 });
    assert!(surface.recorded_warning().is_none());
    assert!(surface.recorded_chart().expect("chart").series.is_empty());
}

#[test]
fn raw_data_can_be_turned_off() {
    let table = fixture();
    let settings = ViewerSettings {
        show_raw_data: false,
        ..ViewerSettings::default()
    };
    let mut surface = RecordingSurface::new();

    render_page(&table, &settings, &Selection::new("C", "France"), &mut surface);

    assert_eq!(kinds(&surface.commands).last(), Some(&"chart"));
}

#[test]
fn repeated_renders_issue_identical_calls() {
    let table = fixture();
    let settings = ViewerSettings::default();
    let selection = Selection::new("C", "France");

    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    render_page(&table, &settings, &selection, &mut first);
    render_page(&table, &settings, &selection, &mut second);

    assert_eq!(first, second);
}

#[test]
fn recorded_commands_serialize_with_a_kind_tag() {
    let table = fixture();
    let mut surface = RecordingSurface::new();
    render_page(
        &table,
        &ViewerSettings::default(),
        &Selection::new("B", "France"),
        &mut surface,
    );

    let json = serde_json::to_value(&surface.commands).unwrap();
    assert_eq!(json[1], serde_json::json!({ "kind": "sidebarTitle", "text": "Filter Options" }));
    assert_eq!(json[4]["kind"], "warning");
}
