use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eco_model::{
    load_observations_from_path, LoadOptions, ObservationTable, Selection, SelectionOptions,
};
use serde::Serialize;

use crate::{
    render_page, write_output, DisplayCommand, HtmlSurface, PageOutcome, RecordingSurface,
    Session, TextSurface, ViewerSettings,
};

const PAGE_TITLE: &str = "Short-term indicators";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

#[derive(Parser)]
#[command(about = "Chart quarterly short-term indicators for one sector and country.")]
pub struct Args {
    /// Delimited dataset with `geo`, `nace_r2`, `indic_bt` and one column per period.
    dataset: PathBuf,

    /// Sector code (defaults to the first sector in the dataset).
    #[arg(long)]
    sector: Option<String>,

    /// Country name (defaults to the first entry of the country dropdown).
    #[arg(long)]
    country: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the page to this file instead of stdout (replaced atomically).
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// JSON file overriding page wording and the raw-data toggle.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Field delimiter of the dataset (single ASCII character).
    #[arg(long)]
    delimiter: Option<char>,

    /// Print the sector and country dropdown options and exit.
    #[arg(long)]
    list_options: bool,

    /// Read `sector`/`country` commands from stdin and re-render after each change.
    #[arg(long, conflicts_with_all = ["output", "list_options"])]
    interactive: bool,

    /// Do not render the raw-data table below the chart.
    #[arg(long)]
    no_raw_data: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonPage<'a> {
    dataset: &'a str,
    selection: &'a Selection,
    #[serde(flatten)]
    outcome: PageOutcome,
    commands: Vec<DisplayCommand>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    run_with_args(args)
}

pub fn run_with_args(args: Args) -> Result<()> {
    let mut settings = match &args.settings {
        Some(path) => ViewerSettings::from_path(path)
            .with_context(|| format!("load settings {}", path.display()))?,
        None => ViewerSettings::default(),
    };
    if args.no_raw_data {
        settings.show_raw_data = false;
    }

    let mut load_options = LoadOptions::default();
    if let Some(delimiter) = args.delimiter {
        if !delimiter.is_ascii() {
            anyhow::bail!("invalid --delimiter '{delimiter}' (expected a single ASCII character)");
        }
        load_options.delimiter = delimiter as u8;
    }

    let table = load_observations_from_path(&args.dataset, &load_options)
        .with_context(|| format!("load dataset {}", args.dataset.display()))?;
    let options = SelectionOptions::from_table(&table, &settings.preferred_country);

    if args.list_options {
        let bytes = list_options(&options, args.format)?;
        return emit(&bytes, args.output.as_ref());
    }

    let selection = Selection::resolve(&options, args.sector.as_deref(), args.country.as_deref())
        .context("select sector and country")?;

    if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(&table, &settings, selection);
        return match session.run(stdin.lock(), stdout.lock()) {
            Ok(renders) => {
                log::debug!("session ended after {renders} renders");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            Err(err) => Err(err).context("interactive session"),
        };
    }

    let bytes = render(&table, &settings, &selection, &args)?;
    emit(&bytes, args.output.as_ref())
}

fn render(
    table: &ObservationTable,
    settings: &ViewerSettings,
    selection: &Selection,
    args: &Args,
) -> Result<Vec<u8>> {
    match args.format {
        OutputFormat::Text => {
            let mut surface = TextSurface::new(Vec::new());
            render_page(table, settings, selection, &mut surface);
            Ok(surface.finish()?)
        }
        OutputFormat::Json => {
            let mut surface = RecordingSurface::new();
            let outcome = render_page(table, settings, selection, &mut surface);
            let dataset = args.dataset.to_string_lossy();
            let page = JsonPage {
                dataset: &dataset,
                selection,
                outcome,
                commands: surface.into_commands(),
            };
            let mut bytes = serde_json::to_vec_pretty(&page)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        OutputFormat::Html => {
            let mut surface = HtmlSurface::new(PAGE_TITLE);
            render_page(table, settings, selection, &mut surface);
            Ok(surface.into_html().into_bytes())
        }
    }
}

fn list_options(options: &SelectionOptions, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => {
            let mut bytes = serde_json::to_vec_pretty(options)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        OutputFormat::Text | OutputFormat::Html => {
            let mut out = String::from("sectors:\n");
            for sector in &options.sectors {
                out.push_str(&format!("  {sector}\n"));
            }
            out.push_str("countries:\n");
            for country in &options.countries {
                out.push_str(&format!("  {country}\n"));
            }
            Ok(out.into_bytes())
        }
    }
}

fn emit(bytes: &[u8], output: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output {
        write_output(path, bytes)?;
        return Ok(());
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match handle.write_all(bytes).and_then(|()| handle.flush()) {
        Ok(()) => Ok(()),
        // A closed pipe (e.g. `| head`) is not a failure.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write to stdout"),
    }
}
