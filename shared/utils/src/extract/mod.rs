//! NEO Data Extraction Module
//!
//! Parsers that turn the two raw NEO data sources into domain entities:
//! the tabular NEO catalog (CSV) and the columnar close-approach document
//! (JSON with a `fields` header and positional `data` rows).

pub mod approach_parser;
pub mod neo_parser;

pub use approach_parser::{load_approaches, ApproachParser, CadDocument, FieldPositions};
pub use neo_parser::{load_neos, NeoParser};

use std::path::Path;

/// Name used for a source path in error messages and logs.
pub(crate) fn source_name(path: &Path) -> String {
    path.display().to_string()
}
