use std::fmt::Write as _;

use eco_model::{format_value, ChartSpec, SeriesTable};

use crate::plotly;
use crate::DisplaySurface;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Standalone HTML page: a sidebar with the dropdowns and a main column with the chart.
///
/// Charts are embedded as Plotly.js figures; everything else is static markup.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    page_title: String,
    sidebar: String,
    main: String,
    charts: usize,
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// JSON embedded in a `<script>` block must not be able to close the tag.
fn script_json(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

impl HtmlSurface {
    pub fn new(page_title: impl Into<String>) -> Self {
        Self {
            page_title: page_title.into(),
            ..Self::default()
        }
    }

    pub fn into_html(self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n<script src=\"{PLOTLY_JS}\"></script>\n<style>\n\
             body {{ display: flex; margin: 0; font-family: sans-serif; }}\n\
             aside {{ width: 18rem; padding: 1rem; background: #f0f2f6; min-height: 100vh; }}\n\
             main {{ flex: 1; padding: 1rem 2rem; }}\n\
             .warning {{ background: #fffce7; border-left: 4px solid #ffbd45; padding: 0.75rem; }}\n\
             table {{ border-collapse: collapse; }}\n\
             td, th {{ padding: 0.2rem 0.6rem; text-align: right; border-bottom: 1px solid #ddd; }}\n\
             </style>\n</head>\n<body>\n<aside>\n{}</aside>\n<main>\n{}</main>\n</body>\n</html>\n",
            escape_html(&self.page_title),
            self.sidebar,
            self.main
        );
        html
    }
}

impl DisplaySurface for HtmlSurface {
    fn markdown(&mut self, text: &str) {
        for paragraph in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let _ = writeln!(self.main, "<p>{}</p>", escape_html(paragraph));
        }
    }

    fn sidebar_title(&mut self, text: &str) {
        let _ = writeln!(self.sidebar, "<h2>{}</h2>", escape_html(text));
    }

    fn dropdown(&mut self, label: &str, options: &[String], selected: &str) {
        let _ = writeln!(
            self.sidebar,
            "<label>{}<br>\n<select>",
            escape_html(label)
        );
        for option in options {
            let marker = if option == selected { " selected" } else { "" };
            let _ = writeln!(
                self.sidebar,
                "<option{marker}>{}</option>",
                escape_html(option)
            );
        }
        let _ = writeln!(self.sidebar, "</select>\n</label>");
    }

    fn chart(&mut self, chart: &ChartSpec, fill_width: bool) {
        self.charts += 1;
        let id = format!("chart-{}", self.charts);
        let figure = plotly::figure(chart);
        let width = if fill_width { "100%" } else { "auto" };
        let _ = writeln!(
            self.main,
            "<div id=\"{id}\" style=\"width: {width}; height: 32rem;\"></div>\n<script>\n\
             Plotly.newPlot(\"{id}\", {}, {}, {});\n</script>",
            script_json(&figure.data),
            script_json(&figure.layout),
            script_json(&plotly::config(fill_width))
        );
    }

    fn warning(&mut self, text: &str) {
        let _ = writeln!(
            self.main,
            "<div class=\"warning\">{}</div>",
            escape_html(text)
        );
    }

    fn data_table(&mut self, label: &str, table: &SeriesTable) {
        let main = &mut self.main;
        let _ = writeln!(
            main,
            "<details>\n<summary>{}</summary>\n<table>\n<tr><th>{}</th>",
            escape_html(label),
            escape_html(&table.index_name)
        );
        for name in table.column_names() {
            let _ = write!(main, "<th>{}</th>", escape_html(name));
        }
        let _ = writeln!(main, "</tr>");
        for (row, period) in table.periods().iter().enumerate() {
            let _ = write!(main, "<tr><th>{}</th>", escape_html(period));
            for column in table.columns() {
                let value = format_value(column.values.get(row).copied().flatten());
                let _ = write!(main, "<td>{value}</td>");
            }
            let _ = writeln!(main, "</tr>");
        }
        let _ = writeln!(main, "</table>\n</details>");
    }
}
