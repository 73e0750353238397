mod enrich;
mod table;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::enrich::{enrich_table, EnrichSettings, EnrichmentReport};
use crate::table::PlaceTable;

#[derive(Debug, Parser)]
#[command(name = "placefill")]
#[command(about = "Fill in address, rating and other details for a CSV of places")]
struct Cli {
    /// CSV to read; must have a `Name` column, `Location` is optional
    input: PathBuf,
    /// Path the enriched CSV is written to
    output: PathBuf,
    /// Environment variable holding the Google Maps API key
    #[arg(long, default_value = placefill_core::DEFAULT_API_KEY_ENV)]
    api_key_env: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // The credential check runs before any file is touched.
    let config = placefill_core::load_app_config(&cli.api_key_env)?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    run(&cli, &config).await?;
    println!("enriched data saved to: {}", cli.output.display());
    Ok(())
}

/// Loads the input table, enriches every row, and writes the result.
///
/// # Errors
///
/// Returns an error if the Places client cannot be built or the table cannot
/// be read or written. Per-row lookup failures are logged and never
/// propagated.
async fn run(
    cli: &Cli,
    config: &placefill_core::AppConfig,
) -> anyhow::Result<EnrichmentReport> {
    let client = build_places_client(config)?;

    let mut table = PlaceTable::load(&cli.input)?;
    table.ensure_columns(&placefill_core::ENRICHMENT_COLUMNS);

    let settings = EnrichSettings::from_config(config);
    let report = enrich_table(&client, &table, &settings).await;

    tracing::debug!(
        rows = table.len(),
        enriched = report.updates.len(),
        skipped = report.skipped,
        failed = report.failed,
        "enrichment pass finished"
    );

    table.merge(&report.updates);
    table.save(&cli.output)?;
    Ok(report)
}

fn build_places_client(
    config: &placefill_core::AppConfig,
) -> anyhow::Result<placefill_places::PlacesClient> {
    placefill_places::PlacesClient::with_base_url(
        &config.places_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Places client: {e}"))
}
