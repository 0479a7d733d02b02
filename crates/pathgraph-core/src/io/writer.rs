use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{PathgraphError, Result};
use crate::format::OutputFormat;
use crate::graph::{PathTable, ReportRow};

/// Results of both algorithms for one start node
#[derive(Debug, Clone)]
pub struct Report {
    pub dijkstra: PathTable,
    pub bellman_ford: PathTable,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start: &'a str,
    dijkstra: Vec<ReportRow>,
    bellman_ford: Vec<ReportRow>,
}

/// Count line followed by one `id distance parent` line per node
fn render_block(table: &PathTable) -> String {
    let mut out = format!("{}\n", table.len());
    for row in table.rows() {
        out.push_str(&format!("{} {} {}\n", row.id, row.distance, row.parent));
    }
    out
}

/// Render the text report: both sections, each headed by the algorithm name
pub fn render_text(report: &Report) -> String {
    format!(
        "{}\n\n{}\n{}\n\n{}",
        report.dijkstra.algorithm.title(),
        render_block(&report.dijkstra),
        report.bellman_ford.algorithm.title(),
        render_block(&report.bellman_ford),
    )
}

pub fn render_json(report: &Report) -> Result<String> {
    let doc = JsonReport {
        start: &report.dijkstra.start,
        dijkstra: report.dijkstra.rows(),
        bellman_ford: report.bellman_ford.rows(),
    };
    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push('\n');
    Ok(text)
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Write the report to `path`, replacing any existing file
pub fn write_report(path: &Path, report: &Report, format: OutputFormat) -> Result<()> {
    let content = render(report, format)?;
    let file = File::create(path)
        .map_err(|e| PathgraphError::io_operation("create", path.display(), e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| PathgraphError::io_operation("write", path.display(), e))?;
    tracing::debug!(path = %path.display(), format = %format, "wrote report");
    Ok(())
}
