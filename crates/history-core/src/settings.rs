use clap::Parser;

use crate::formatting::Locale;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Fetches payout data for Storj nodes and outputs a summary table.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "node-history",
    about = "Fetches payout data for Storj nodes and outputs a summary table.",
    version
)]
pub struct Settings {
    /// Export the result table as CSV (node-history.csv)
    #[arg(short = 'c', long)]
    pub csv: bool,

    /// Overwrite 'node-history.csv' if it already exists
    #[arg(short = 'o', long)]
    pub overwrite: bool,

    /// Select number format (de = 1,23 ; en = 1.23)
    #[arg(short = 'l', long, value_enum, default_value_t = Locale::De)]
    pub locale: Locale,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Log level after applying `--debug`, which overrides `--log-level`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
