//! Near-Earth object domain model.
//!
//! A `NearEarthObject` carries its primary designation (required, unique),
//! an optional IAU name, a diameter in kilometers that may be unknown, and
//! the potentially-hazardous flag. Its close approaches are attached later by
//! the linker, as `ApproachId`s into the approach collection.

use serde::Serialize;
use std::fmt;

use crate::coerce::parse_diameter;
use crate::error::ModelResult;
use crate::ids::ApproachId;

/// Raw marker the source uses for "potentially hazardous".
pub const HAZARDOUS_MARKER: &str = "Y";

#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    pub designation: String,
    pub name: Option<String>,
    /// Kilometers; NaN when unknown.
    pub diameter: f64,
    pub hazardous: bool,
    approaches: Vec<ApproachId>,
}

/// Export shape of a `NearEarthObject`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoRecord {
    pub designation: String,
    pub name: Option<String>,
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}

impl NearEarthObject {
    pub fn new(designation: String, name: Option<String>, diameter: f64, hazardous: bool) -> Self {
        Self {
            designation,
            name,
            diameter,
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Build an object from the four raw tabular fields.
    ///
    /// `name` and `diameter` treat the empty string as absent; `pha` is
    /// hazardous only when it equals `"Y"` exactly.
    pub fn from_raw(pdes: &str, name: &str, diameter: &str, pha: &str) -> ModelResult<Self> {
        let diameter = parse_diameter(diameter)?;
        let name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };

        Ok(Self::new(
            pdes.to_string(),
            name,
            diameter,
            pha == HAZARDOUS_MARKER,
        ))
    }

    /// `designation`, or `designation (name)` when a name is known.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    pub fn has_known_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    /// Close approaches attached by the linker, in link order.
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// Record a close approach against this object. Only the linker calls this.
    pub fn attach_approach(&mut self, approach: ApproachId) {
        self.approaches.push(approach);
    }

    pub fn serialize(&self) -> NeoRecord {
        NeoRecord {
            designation: self.designation.clone(),
            name: self.name.clone(),
            diameter_km: self.diameter,
            potentially_hazardous: self.hazardous,
        }
    }
}

impl NeoRecord {
    /// Stand-in used when an approach names an object outside the dataset.
    pub fn unknown(designation: &str) -> Self {
        Self {
            designation: designation.to_string(),
            name: None,
            diameter_km: f64::NAN,
            potentially_hazardous: false,
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NEO {} ", self.fullname())?;
        if self.has_known_diameter() {
            write!(f, "has a diameter of {:.3} km", self.diameter)?;
        } else {
            write!(f, "has unknown diameter")?;
        }
        let verb = if self.hazardous { "is" } else { "is not" };
        write!(f, " and {} potentially hazardous.", verb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    #[test]
    fn test_eros_from_raw() {
        let neo = NearEarthObject::from_raw("433", "Eros", "16.84", "N").unwrap();
        assert_eq!(neo.designation, "433");
        assert_eq!(neo.name.as_deref(), Some("Eros"));
        assert_eq!(neo.diameter, 16.84);
        assert!(!neo.hazardous);
        assert_eq!(neo.fullname(), "433 (Eros)");
        assert!(neo.approaches().is_empty());
    }

    #[test]
    fn test_missing_fields_become_sentinels() {
        let neo = NearEarthObject::from_raw("2020 AB", "", "", "").unwrap();
        assert_eq!(neo.name, None);
        assert!(neo.diameter.is_nan());
        assert!(!neo.hazardous);
        assert_eq!(neo.fullname(), "2020 AB");
    }

    #[test]
    fn test_hazard_marker_is_exact() {
        assert!(NearEarthObject::from_raw("1", "", "", "Y").unwrap().hazardous);
        for raw in ["y", "Yes", "N", " Y", "true"] {
            assert!(!NearEarthObject::from_raw("1", "", "", raw).unwrap().hazardous);
        }
    }

    #[test]
    fn test_malformed_diameter_is_rejected() {
        let err = NearEarthObject::from_raw("433", "Eros", "abc", "N").unwrap_err();
        assert_eq!(err.field(), "diameter");
        assert!(matches!(err, ModelError::InvalidNumber { .. }));
    }

    #[test]
    fn test_display() {
        let neo = NearEarthObject::from_raw("433", "Eros", "16.84", "N").unwrap();
        assert_eq!(
            neo.to_string(),
            "NEO 433 (Eros) has a diameter of 16.840 km and is not potentially hazardous."
        );

        let neo = NearEarthObject::from_raw("2020 AB", "", "", "Y").unwrap();
        assert_eq!(
            neo.to_string(),
            "NEO 2020 AB has unknown diameter and is potentially hazardous."
        );
    }

    #[test]
    fn test_serialize_keeps_nan_and_null_name() {
        let neo = NearEarthObject::from_raw("2020 AB", "", "", "Y").unwrap();
        let record = neo.serialize();
        assert!(record.diameter_km.is_nan());
        assert_eq!(record.name, None);
        assert!(record.potentially_hazardous);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["designation"], "2020 AB");
        assert!(json["name"].is_null());
    }
}
