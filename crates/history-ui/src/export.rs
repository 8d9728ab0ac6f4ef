//! Delimited-file export of the payout table.
//!
//! Only the per-period rows are written; the `TOTAL` column and `SUM` row are
//! console-only. The locale picks both the decimal separator and the field
//! delimiter so the two never collide.

use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use tracing::{debug, info};

use history_core::error::{HistoryError, Result};
use history_core::formatting::{format_amount, Locale};
use history_core::models::PayoutTable;

use crate::table_view::PERIOD_HEADER;

// ── File naming ───────────────────────────────────────────────────────────────

/// Choose where the export goes inside `dir`.
///
/// With `overwrite` the base name is always used and any existing file is
/// replaced. Otherwise the first free name among `base`, `base1`, `base2`, …
/// (suffix inserted before the extension) is returned.
pub fn resolve_export_path(dir: &Path, file_name: &str, overwrite: bool) -> PathBuf {
    let base = dir.join(file_name);
    if overwrite || !base.exists() {
        return base;
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut suffix = 1u32;
    loop {
        let candidate = dir.join(format!("{stem}{suffix}{extension}"));
        if !candidate.exists() {
            debug!(path = %candidate.display(), "export name taken; using suffixed name");
            return candidate;
        }
        suffix += 1;
    }
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Write the per-period rows of `table` to `path`, replacing any existing file.
pub fn write_csv(table: &PayoutTable, locale: Locale, path: &Path) -> Result<()> {
    let export_err = |source: csv::Error| HistoryError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = WriterBuilder::new()
        .delimiter(locale.field_delimiter())
        .terminator(Terminator::CRLF)
        .from_path(path)
        .map_err(export_err)?;

    let mut header = Vec::with_capacity(table.labels().len() + 1);
    header.push(PERIOD_HEADER.to_string());
    header.extend(table.labels().iter().cloned());
    wtr.write_record(&header).map_err(export_err)?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.period.to_string());
        record.extend(row.values.iter().map(|v| format_amount(*v, locale)));
        wtr.write_record(&record).map_err(export_err)?;
    }

    wtr.flush().map_err(|e| export_err(csv::Error::from(e)))?;

    info!(path = %path.display(), rows = table.rows().len(), "export written");
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
