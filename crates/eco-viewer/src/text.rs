use std::io::{self, Write};

use eco_model::{format_value, ChartSpec, HoverMode, LineSeries, SeriesTable};

use crate::DisplaySurface;

/// Terminal rendering of the viewer page.
///
/// Surface calls cannot fail, so the first write error is kept and reported by
/// [`TextSurface::finish`]; later calls become no-ops.
pub struct TextSurface<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = f(&mut self.out) {
            self.error = Some(err);
        }
    }
}

fn describe_style(series: &LineSeries) -> String {
    let mut parts = vec![
        series.line.color.name().to_string(),
        series.line.dash.as_str().to_string(),
    ];
    if let Some(width) = series.line.width {
        parts.push(format!("width {width}"));
    }
    if series.opacity < 1.0 {
        parts.push(format!("opacity {}", series.opacity));
    }
    parts.join(", ")
}

fn write_chart<W: Write>(out: &mut W, chart: &ChartSpec) -> io::Result<()> {
    writeln!(out, "{}", chart.title)?;
    let hover = match chart.hover_mode {
        HoverMode::XUnified => "unified by x",
        HoverMode::Closest => "closest point",
    };
    writeln!(
        out,
        "  x: {}  y: {}  hover: {hover}",
        chart.x_axis_title, chart.y_axis_title
    )?;

    if chart.series.is_empty() {
        writeln!(out, "  (no plottable indicators)")?;
        return Ok(());
    }

    if chart.legend.visible {
        writeln!(out, "  {}:", chart.legend.title)?;
        for series in &chart.series {
            writeln!(out, "    - {} ({})", series.name, describe_style(series))?;
        }
    }

    // Every series shares the same x values, so one grid holds them all.
    let periods = &chart.series[0].x;
    let index_width = periods
        .iter()
        .map(|p| p.chars().count())
        .chain(std::iter::once(chart.x_axis_title.chars().count()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = chart
        .series
        .iter()
        .map(|s| {
            s.y.iter()
                .map(|v| format_value(*v).chars().count())
                .chain(std::iter::once(s.name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write!(out, "  {:<index_width$}", chart.x_axis_title)?;
    for (series, width) in chart.series.iter().zip(&widths) {
        write!(out, "  {:>width$}", series.name, width = *width)?;
    }
    writeln!(out)?;
    for (row, period) in periods.iter().enumerate() {
        write!(out, "  {period:<index_width$}")?;
        for (series, width) in chart.series.iter().zip(&widths) {
            let value = format_value(series.y.get(row).copied().flatten());
            write!(out, "  {value:>width$}", width = *width)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl<W: Write> DisplaySurface for TextSurface<W> {
    fn markdown(&mut self, text: &str) {
        self.emit(|out| writeln!(out, "{}\n", text.trim()));
    }

    fn sidebar_title(&mut self, text: &str) {
        self.emit(|out| writeln!(out, "== {text} =="));
    }

    fn dropdown(&mut self, label: &str, options: &[String], selected: &str) {
        self.emit(|out| {
            writeln!(
                out,
                "{label}: [{selected}] ({} options: {})",
                options.len(),
                options.join(", ")
            )
        });
    }

    fn chart(&mut self, chart: &ChartSpec, _fill_width: bool) {
        self.emit(|out| {
            writeln!(out)?;
            write_chart(out, chart)
        });
    }

    fn warning(&mut self, text: &str) {
        self.emit(|out| writeln!(out, "\nwarning: {text}"));
    }

    fn data_table(&mut self, label: &str, table: &SeriesTable) {
        self.emit(|out| write!(out, "\n> {label}\n{}", table.display()));
    }
}
