//! Linked, in-memory NEO database.
//!
//! Loads both raw sources, links every close approach to its near-Earth
//! object by designation and exposes the cross-referenced collections.

pub mod database;
pub mod linker;

pub use database::{NeoDatabase, IN_MEMORY_SOURCE};
pub use linker::{build_index, link, LinkSummary};

use tracing::info;

use neo_utils::{load_approaches, load_neos, AppConfig, NeoResult};

/// Parse both configured sources, then link them.
///
/// Linking starts only after both collections are complete, so every
/// designation is known before any approach is resolved.
pub fn load_database(config: &AppConfig) -> NeoResult<NeoDatabase> {
    info!(
        neo_csv = %config.data.neo_csv_path,
        cad_json = %config.data.cad_json_path,
        "Loading NEO datasets"
    );

    let neos = load_neos(&config.data.neo_csv_path)?;
    let approaches = load_approaches(&config.data.cad_json_path)?;

    NeoDatabase::from_source(
        &config.data.neo_csv_path,
        neos,
        approaches,
        config.linking.duplicate_policy,
    )
}
