//! NEO CSV Parser
//!
//! Reads the near-Earth object catalog. Only the `pdes`, `name`, `diameter`
//! and `pha` columns are used; any other columns are ignored.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use neo_models::NearEarthObject;

use super::source_name;
use crate::error::{NeoError, NeoResult};
use crate::validation::{validate_required_fields, NEO_REQUIRED_FIELDS};

/// Raw CSV row; every value is kept as the source string.
#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    name: String,
    diameter: String,
    pha: String,
}

#[derive(Debug, Default)]
pub struct NeoParser;

impl NeoParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV bytes already in memory.
    pub fn parse_bytes(&self, source_name: &str, data: &[u8]) -> NeoResult<Vec<NearEarthObject>> {
        self.parse_reader(source_name, data)
    }

    /// Parse every row of `reader`, in source order.
    ///
    /// The header is checked before any row is read. The first row that fails
    /// to coerce aborts the whole parse.
    pub fn parse_reader<R: Read>(
        &self,
        source_name: &str,
        reader: R,
    ) -> NeoResult<Vec<NearEarthObject>> {
        let mut reader = csv::ReaderBuilder::new().from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| NeoError::csv(source_name, e.to_string()))?
            .clone();
        let header_names: Vec<&str> = headers.iter().collect();
        validate_required_fields(source_name, &header_names, NEO_REQUIRED_FIELDS)?;
        debug!(source = source_name, columns = headers.len(), "NEO header validated");

        let mut neos = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| NeoError::csv(source_name, e.to_string()))?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 2);

            let row: NeoRow = record
                .deserialize(Some(&headers))
                .map_err(|e| NeoError::invalid_record(source_name, line, "row", e.to_string()))?;

            let neo = NearEarthObject::from_raw(&row.pdes, &row.name, &row.diameter, &row.pha)
                .map_err(|e| NeoError::from_model(source_name, line, e))?;
            neos.push(neo);
        }

        Ok(neos)
    }
}

/// Read near-Earth objects from a CSV file.
pub fn load_neos(path: impl AsRef<Path>) -> NeoResult<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let name = source_name(path);
    let file = File::open(path).map_err(|e| NeoError::io(&name, &e))?;

    let neos = NeoParser::new().parse_reader(&name, file)?;
    info!(source = %name, count = neos.len(), "Loaded near-Earth objects");
    Ok(neos)
}
