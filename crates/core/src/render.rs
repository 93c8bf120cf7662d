//! Table, JSON and YAML output over the selected columns.

#![forbid(unsafe_code)]

use std::fmt;
use std::io::Write;

use comfy_table::{presets::ASCII_FULL, ContentArrangement, Table};
use serde::Serialize;
use tracing::warn;

use crate::columns::Selection;
use crate::counter::UniqueCounter;
use crate::error::ImagesResult;
use crate::row::{ImageRecord, ImageRow};

pub const NO_MATCH: &str = "[Oh...] No images matched!";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Accepts `table`/`t`, `json`/`j`, `yaml`/`y`; anything else renders a table.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "table" | "t" => OutputFormat::Table,
            "json" | "j" => OutputFormat::Json,
            "yaml" | "y" => OutputFormat::Yaml,
            other => {
                warn!(format = %other, "unknown output format; using table");
                OutputFormat::Table
            }
        }
    }
}

/// Distinct namespaces, pods and images plus the total container count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub namespaces: usize,
    pub pods: usize,
    pub containers: usize,
    pub images: usize,
}

impl Summary {
    pub fn from_rows(rows: &[ImageRow]) -> Self {
        let mut namespaces = UniqueCounter::new();
        let mut pods = UniqueCounter::new();
        let mut images = UniqueCounter::new();
        for r in rows {
            namespaces.add(&r.namespace);
            pods.add(&r.pod);
            images.add(&r.image);
        }
        Summary {
            namespaces: namespaces.count(),
            pods: pods.count(),
            containers: rows.len(),
            images: images.count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Summary]: {} namespaces, {} pods, {} containers and {} different images",
            self.namespaces, self.pods, self.containers, self.images
        )
    }
}

/// Blank every cell equal to the one directly above it in the same column.
/// The rule between the two rows is still drawn across the blanked cell.
fn merge_repeated<'a>(cells: &[Vec<&'a str>]) -> Vec<Vec<&'a str>> {
    let mut out = Vec::with_capacity(cells.len());
    let mut prev: Option<&Vec<&str>> = None;
    for row in cells {
        let merged: Vec<&'a str> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| match prev.and_then(|p| p.get(i)) {
                Some(above) if above == cell => "",
                _ => *cell,
            })
            .collect();
        out.push(merged);
        prev = Some(row);
    }
    out
}

pub fn build_table(rows: &[ImageRow], selection: &Selection) -> Table {
    if selection.is_empty() {
        warn!("no known columns selected; table has no cells");
    }
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.set_header(selection.labels());
    let cells: Vec<Vec<&str>> = rows.iter().map(|r| r.select(selection)).collect();
    for row in merge_repeated(&cells) {
        table.add_row(row);
    }
    table
}

/// Summary over `summary_rows`, then the table over `rows`.
pub fn render_table<W: Write>(out: &mut W, summary_rows: &[ImageRow], rows: &[ImageRow], selection: &Selection) -> ImagesResult<()> {
    writeln!(out, "{}", Summary::from_rows(summary_rows))?;
    writeln!(out, "{}", build_table(rows, selection))?;
    Ok(())
}

fn records<'a>(rows: &'a [ImageRow], selection: &Selection) -> Vec<ImageRecord<'a>> {
    rows.iter().map(|r| r.record(selection)).collect()
}

pub fn render_json<W: Write>(out: &mut W, rows: &[ImageRow], selection: &Selection) -> ImagesResult<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records(rows, selection).serialize(&mut ser)?;
    out.write_all(&buf)?;
    writeln!(out)?;
    Ok(())
}

pub fn render_yaml<W: Write>(out: &mut W, rows: &[ImageRow], selection: &Selection) -> ImagesResult<()> {
    let text = serde_yaml::to_string(&records(rows, selection))?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
