use std::io::{self, BufRead, Write};

use eco_model::{ObservationTable, Selection, SelectionOptions};

use crate::{render_page, TextSurface, ViewerSettings};

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Sector(String),
    Country(String),
    /// Re-render the current selection.
    Show,
    /// Print the dropdown options.
    Options,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse `sector <code>`, `country <name>`, `show`, `options`, `help` or `quit`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match (word.to_ascii_lowercase().as_str(), rest) {
            ("sector", value) if !value.is_empty() => Some(Self::Sector(value.to_string())),
            ("country", value) if !value.is_empty() => Some(Self::Country(value.to_string())),
            ("show", "") => Some(Self::Show),
            ("options", "") => Some(Self::Options),
            ("help", "") | ("?", "") => Some(Self::Help),
            ("quit", "") | ("exit", "") => Some(Self::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "commands: sector <code> | country <name> | show | options | help | quit";

/// Line-driven selection loop over a loaded table.
///
/// Every accepted dropdown change builds a new [`Selection`] and re-runs [`render_page`] from
/// scratch; the only thing carried between renders is the selection pair itself.
pub struct Session<'a> {
    table: &'a ObservationTable,
    settings: &'a ViewerSettings,
    options: SelectionOptions,
    selection: Selection,
}

impl<'a> Session<'a> {
    pub fn new(
        table: &'a ObservationTable,
        settings: &'a ViewerSettings,
        selection: Selection,
    ) -> Self {
        Self {
            table,
            settings,
            options: SelectionOptions::from_table(table, &settings.preferred_country),
            selection,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut surface = TextSurface::new(&mut *out);
        let outcome = render_page(self.table, self.settings, &self.selection, &mut surface);
        log::debug!("rendered {:?} for {:?}", outcome, self.selection);
        surface.finish()?;
        Ok(())
    }

    /// Render once, then handle commands until `quit` or end of input.
    ///
    /// Returns the number of page renders.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<usize> {
        self.render(&mut out)?;
        let mut renders = 1;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let Some(command) = SessionCommand::parse(&line) else {
                writeln!(out, "unrecognized command `{}`; {HELP}", line.trim())?;
                continue;
            };

            let next = match command {
                SessionCommand::Quit => break,
                SessionCommand::Help => {
                    writeln!(out, "{HELP}")?;
                    continue;
                }
                SessionCommand::Options => {
                    writeln!(out, "sectors: {}", self.options.sectors.join(", "))?;
                    writeln!(out, "countries: {}", self.options.countries.join(", "))?;
                    continue;
                }
                SessionCommand::Show => self.selection.clone(),
                SessionCommand::Sector(sector) => self.selection.with_sector(sector),
                SessionCommand::Country(country) => self.selection.with_country(country),
            };

            match Selection::resolve(
                &self.options,
                Some(next.sector.as_str()),
                Some(next.country.as_str()),
            ) {
                Ok(selection) => {
                    self.selection = selection;
                    writeln!(out)?;
                    self.render(&mut out)?;
                    renders += 1;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            }
        }

        Ok(renders)
    }
}
