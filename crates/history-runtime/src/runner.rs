//! One complete report run.
//!
//! [`ReportRunner`] walks the configured periods, builds the payout table
//! through a [`PayoutSource`], prints the console grid and, when requested,
//! writes the delimited export. Everything happens on the calling thread.

use std::io::Write;
use std::path::{Path, PathBuf};

use history_core::config::ReportConfig;
use history_core::error::Result;
use history_core::formatting::Locale;
use history_core::models::PayoutTable;
use history_core::settings::Settings;
use history_data::builder::build_table;
use history_data::fetcher::PayoutSource;
use history_ui::export::{resolve_export_path, write_csv};
use history_ui::table_view::{render_table, render_title};

// ── Public types ──────────────────────────────────────────────────────────────

/// Command-line choices that shape a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    /// Also write the delimited export file.
    pub export_csv: bool,
    /// Replace an existing export file instead of picking a suffixed name.
    pub overwrite: bool,
    pub locale: Locale,
}

impl From<&Settings> for ReportOptions {
    fn from(s: &Settings) -> Self {
        Self {
            export_csv: s.csv,
            overwrite: s.overwrite,
            locale: s.locale,
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub table: PayoutTable,
    /// Where the export was written, if one was requested.
    pub export_path: Option<PathBuf>,
}

// ── ReportRunner ──────────────────────────────────────────────────────────────

/// Drives the report stages for a validated [`ReportConfig`].
pub struct ReportRunner<'a> {
    config: &'a ReportConfig,
    options: ReportOptions,
    /// Directory the export file is placed in.
    export_dir: PathBuf,
}

impl<'a> ReportRunner<'a> {
    /// Create a runner exporting into the current working directory.
    ///
    /// The directory is left empty so the announced path is the bare file name.
    pub fn new(config: &'a ReportConfig, options: ReportOptions) -> Self {
        Self {
            config,
            options,
            export_dir: PathBuf::new(),
        }
    }

    /// Place the export file in `dir` instead of the working directory.
    pub fn with_export_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.export_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Fetch, build, print to `out` and optionally export.
    ///
    /// Fetch failures never abort the run; only writing to `out` or to the
    /// export file can fail.
    pub fn run<S, W>(&self, source: &S, out: &mut W) -> Result<ReportOutcome>
    where
        S: PayoutSource + ?Sized,
        W: Write,
    {
        tracing::info!(
            start = %self.config.start,
            end = %self.config.end,
            nodes = self.config.nodes.len(),
            locale = %self.options.locale,
            "building payout report"
        );

        let table = build_table(self.config.periods(), &self.config.nodes, source);

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            render_title(&self.config.start.to_string(), &self.config.end.to_string())
        )?;
        writeln!(out)?;
        write!(out, "{}", render_table(&table, self.options.locale))?;

        let export_path = if self.options.export_csv {
            let path = resolve_export_path(
                &self.export_dir,
                &self.config.export_file_name,
                self.options.overwrite,
            );
            write_csv(&table, self.options.locale, &path)?;
            writeln!(out)?;
            writeln!(out, "CSV exported to: {}", path.display())?;
            Some(path)
        } else {
            None
        };

        Ok(ReportOutcome { table, export_path })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
