//! Close Approach JSON Parser
//!
//! The close-approach document is columnar: `fields` names each column once
//! and every entry of `data` is a positional row aligned to it. Column
//! positions are resolved a single time before any row is read.

use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use neo_models::coerce::{check_measure, parse_measure};
use neo_models::{cd_to_datetime, CloseApproach, ModelError};

use super::source_name;
use crate::error::{NeoError, NeoResult};
use crate::validation::{resolve_positions, APPROACH_REQUIRED_FIELDS};

/// Top-level shape of the close-approach document. Other members
/// (`signature`, `count`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CadDocument {
    pub fields: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

/// Row positions of the four columns the parser needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPositions {
    pub des: usize,
    pub cd: usize,
    pub dist: usize,
    pub v_rel: usize,
}

impl FieldPositions {
    pub fn resolve(source_name: &str, fields: &[String]) -> NeoResult<Self> {
        let positions = resolve_positions(source_name, fields, APPROACH_REQUIRED_FIELDS)?;
        Ok(Self {
            des: positions[0],
            cd: positions[1],
            dist: positions[2],
            v_rel: positions[3],
        })
    }
}

#[derive(Debug, Default)]
pub struct ApproachParser;

impl ApproachParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_bytes(&self, source_name: &str, data: &[u8]) -> NeoResult<Vec<CloseApproach>> {
        let document: CadDocument = serde_json::from_slice(data)
            .map_err(|e| NeoError::json(source_name, e.to_string()))?;
        self.parse_document(source_name, &document)
    }

    pub fn parse_reader<R: Read>(&self, source_name: &str, reader: R) -> NeoResult<Vec<CloseApproach>> {
        let document: CadDocument = serde_json::from_reader(BufReader::new(reader))
            .map_err(|e| NeoError::json(source_name, e.to_string()))?;
        self.parse_document(source_name, &document)
    }

    /// Build one unlinked `CloseApproach` per data row, in order.
    pub fn parse_document(
        &self,
        source_name: &str,
        document: &CadDocument,
    ) -> NeoResult<Vec<CloseApproach>> {
        let positions = FieldPositions::resolve(source_name, &document.fields)?;
        debug!(source = source_name, ?positions, "Resolved close approach fields");

        document
            .data
            .iter()
            .enumerate()
            .map(|(row, values)| {
                self.map_row(&positions, values)
                    .map_err(|e| NeoError::from_model(source_name, row, e))
            })
            .collect()
    }

    fn map_row(&self, positions: &FieldPositions, values: &[Value]) -> Result<CloseApproach, ModelError> {
        let des = text_at(values, positions.des, "des")?;
        let cd = text_at(values, positions.cd, "cd")?;
        let time = cd_to_datetime(cd)?;
        let distance = measure_at(values, positions.dist, "dist")?;
        let velocity = measure_at(values, positions.v_rel, "v_rel")?;

        Ok(CloseApproach::new(des.to_string(), time, distance, velocity))
    }
}

fn text_at<'a>(values: &'a [Value], index: usize, field: &'static str) -> Result<&'a str, ModelError> {
    match values.get(index) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ModelError::invalid_text(field, other.to_string())),
        None => Err(ModelError::invalid_text(field, "")),
    }
}

/// Measurements usually arrive as strings; bare JSON numbers are accepted too.
fn measure_at(values: &[Value], index: usize, field: &'static str) -> Result<f64, ModelError> {
    match values.get(index) {
        Some(Value::String(s)) => parse_measure(field, s),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ModelError::invalid_number(field, n.to_string()))
            .and_then(|v| check_measure(field, v)),
        Some(other) => Err(ModelError::invalid_number(field, other.to_string())),
        None => Err(ModelError::invalid_number(field, "")),
    }
}

/// Read close approaches from a JSON file.
pub fn load_approaches(path: impl AsRef<Path>) -> NeoResult<Vec<CloseApproach>> {
    let path = path.as_ref();
    let name = source_name(path);
    let file = File::open(path).map_err(|e| NeoError::io(&name, &e))?;

    let approaches = ApproachParser::new().parse_reader(&name, file)?;
    info!(source = %name, count = approaches.len(), "Loaded close approaches");
    Ok(approaches)
}
