//! The image listing pipeline: run kubectl, parse, reconcile, filter, group, render.

#![forbid(unsafe_code)]

use std::io::Write;

use regex::Regex;
use tracing::{debug, warn};

use crate::columns::Selection;
use crate::command::{build_args, CommandRunner, Parameters};
use crate::error::ImagesResult;
use crate::group::{filter_by_pod, unique_images};
use crate::parse::parse_and_reconcile;
use crate::render::{render_json, render_table, render_yaml, OutputFormat, NO_MATCH};
use crate::row::ImageRow;

pub struct ImageLister<R: CommandRunner> {
    runner: R,
    params: Parameters,
    selection: Selection,
    pattern: Option<Regex>,
}

impl<R: CommandRunner> ImageLister<R> {
    pub fn new(runner: R, params: Parameters, pattern: Option<Regex>) -> Self {
        let selection = Selection::parse(&params.columns);
        if selection.is_empty() {
            warn!(columns = %params.columns, "no known column tokens; expected a subset of 0,1,2,3,4");
        }
        Self { runner, params, selection, pattern }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn args(&self) -> Vec<String> {
        build_args(&self.params)
    }

    /// Rows after reconciliation and pod-name filtering, before grouping.
    pub fn collect(&self) -> ImagesResult<Vec<ImageRow>> {
        let raw = self.runner.run(&self.args())?;
        let rows = parse_and_reconcile(&raw);
        let parsed = rows.len();
        let rows = filter_by_pod(rows, self.pattern.as_ref());
        debug!(parsed, filtered = rows.len(), "collected rows");
        Ok(rows)
    }

    /// Rows as they will be rendered.
    pub fn group(&self, rows: &[ImageRow]) -> Vec<ImageRow> {
        if self.params.unique {
            let grouped = unique_images(rows);
            debug!(before = rows.len(), after = grouped.len(), "grouped unique images");
            grouped
        } else {
            rows.to_vec()
        }
    }

    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> ImagesResult<()> {
        let rows = self.collect()?;
        let grouped = self.group(&rows);
        if grouped.is_empty() {
            writeln!(out, "{}", NO_MATCH)?;
            return Ok(());
        }
        match format {
            OutputFormat::Table => render_table(out, &rows, &grouped, &self.selection),
            OutputFormat::Json => render_json(out, &grouped, &self.selection),
            OutputFormat::Yaml => render_yaml(out, &grouped, &self.selection),
        }
    }
}
