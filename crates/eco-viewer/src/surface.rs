use eco_model::{ChartSpec, SeriesTable};
use serde::{Deserialize, Serialize};

/// Anything that can draw the viewer page.
///
/// Calls arrive in page order. After [`DisplaySurface::warning`] the page handler stops issuing
/// calls for the current interaction.
pub trait DisplaySurface {
    fn markdown(&mut self, text: &str);

    fn sidebar_title(&mut self, text: &str);

    /// A dropdown bound to one selection variable.
    fn dropdown(&mut self, label: &str, options: &[String], selected: &str);

    fn chart(&mut self, chart: &ChartSpec, fill_width: bool);

    fn warning(&mut self, text: &str);

    /// An expandable table of the reshaped data, collapsed by default.
    fn data_table(&mut self, label: &str, table: &SeriesTable);
}

/// One recorded display call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DisplayCommand {
    Markdown {
        text: String,
    },
    SidebarTitle {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Dropdown {
        label: String,
        options: Vec<String>,
        selected: String,
    },
    #[serde(rename_all = "camelCase")]
    Chart {
        chart: ChartSpec,
        fill_width: bool,
    },
    Warning {
        text: String,
    },
    DataTable {
        label: String,
        table: SeriesTable,
    },
}

/// Surface that keeps every call as a [`DisplayCommand`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    pub commands: Vec<DisplayCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_commands(self) -> Vec<DisplayCommand> {
        self.commands
    }

    pub fn recorded_chart(&self) -> Option<&ChartSpec> {
        self.commands.iter().find_map(|c| match c {
            DisplayCommand::Chart { chart, .. } => Some(chart),
            _ => None,
        })
    }

    pub fn recorded_warning(&self) -> Option<&str> {
        self.commands.iter().find_map(|c| match c {
            DisplayCommand::Warning { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DisplaySurface for RecordingSurface {
    fn markdown(&mut self, text: &str) {
        self.commands.push(DisplayCommand::Markdown {
            text: text.to_string(),
        });
    }

    fn sidebar_title(&mut self, text: &str) {
        self.commands.push(DisplayCommand::SidebarTitle {
            text: text.to_string(),
        });
    }

    fn dropdown(&mut self, label: &str, options: &[String], selected: &str) {
        self.commands.push(DisplayCommand::Dropdown {
            label: label.to_string(),
            options: options.to_vec(),
            selected: selected.to_string(),
        });
    }

    fn chart(&mut self, chart: &ChartSpec, fill_width: bool) {
        self.commands.push(DisplayCommand::Chart {
            chart: chart.clone(),
            fill_width,
        });
    }

    fn warning(&mut self, text: &str) {
        self.commands.push(DisplayCommand::Warning {
            text: text.to_string(),
        });
    }

    fn data_table(&mut self, label: &str, table: &SeriesTable) {
        self.commands.push(DisplayCommand::DataTable {
            label: label.to_string(),
            table: table.clone(),
        });
    }
}
