//! NEO Loader
//!
//! Loads the configured NEO catalog and close-approach data, links them and
//! reports what was found. Paths and logging come from `AppConfig`
//! (`config/*` files and `NEO__*` environment variables).

use anyhow::{Context, Result};
use tracing::{error, info};

use neo_database::load_database;
use neo_utils::{init_logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;
    info!("Starting NEO loader");

    let database = match load_database(&config) {
        Ok(database) => database,
        Err(e) => {
            error!(error = %e, code = e.error_code(), "NEO load failed");
            return Err(e).context("Failed to load NEO datasets");
        }
    };

    let summary = database.summary();
    info!(
        summary = %serde_json::to_string(&summary)?,
        "NEO database ready"
    );

    let hazardous = database.neos().iter().filter(|n| n.hazardous).count();
    let unknown_diameter = database
        .neos()
        .iter()
        .filter(|n| !n.has_known_diameter())
        .count();
    info!(hazardous, unknown_diameter, "Catalog composition");

    if let Some(first) = database.approaches().first() {
        info!(example = %first, "First close approach");
    }

    Ok(())
}
