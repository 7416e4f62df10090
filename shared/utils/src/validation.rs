use crate::error::{NeoError, NeoResult};

/// Columns the NEO CSV must provide.
pub const NEO_REQUIRED_FIELDS: &[&str] = &["pdes", "name", "diameter", "pha"];

/// Fields the close-approach JSON header must list.
pub const APPROACH_REQUIRED_FIELDS: &[&str] = &["des", "cd", "dist", "v_rel"];

/// Fail on the first required name missing from `headers`.
pub fn validate_required_fields<S: AsRef<str>>(
    source_name: &str,
    headers: &[S],
    required_fields: &[&str],
) -> NeoResult<()> {
    match required_fields
        .iter()
        .find(|field| !headers.iter().any(|h| h.as_ref() == **field))
    {
        Some(missing) => Err(NeoError::missing_field(source_name, *missing)),
        None => Ok(()),
    }
}

/// Resolve the position of each required field within `headers`.
pub fn resolve_positions<S: AsRef<str>>(
    source_name: &str,
    headers: &[S],
    required_fields: &[&str],
) -> NeoResult<Vec<usize>> {
    required_fields
        .iter()
        .map(|field| {
            headers
                .iter()
                .position(|h| h.as_ref() == *field)
                .ok_or_else(|| NeoError::missing_field(source_name, *field))
        })
        .collect()
}
