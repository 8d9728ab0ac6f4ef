mod bootstrap;

use anyhow::Result;
use clap::Parser;
use history_core::config::ReportConfig;
use history_core::settings::Settings;
use history_data::fetcher::HttpPayoutSource;
use history_runtime::runner::{ReportOptions, ReportRunner};

fn main() -> Result<()> {
    // Invalid flags (e.g. an unknown locale) exit here, before any request.
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("node-history v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ReportConfig::builtin()?;
    config.validate()?;

    let source = HttpPayoutSource::new(&config)?;
    let runner = ReportRunner::new(&config, ReportOptions::from(&settings));

    let stdout = std::io::stdout();
    let outcome = runner.run(&source, &mut stdout.lock())?;

    tracing::info!(periods = outcome.table.rows().len(), "report finished");

    Ok(())
}
