//! Close approach domain model.
//!
//! A `CloseApproach` records when an NEO passes closest to Earth, at what
//! nominal distance (au) and relative velocity (km/s). Until linking it only
//! knows the raw designation of its NEO; afterwards `neo()` holds the id of
//! the matching object, if the dataset contains one.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use crate::coerce::parse_measure;
use crate::error::ModelResult;
use crate::ids::NeoId;
use crate::neo::{NearEarthObject, NeoRecord};
use crate::time::{cd_to_datetime, datetime_to_str};

#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    pub neo_designation: String,
    pub time: NaiveDateTime,
    pub distance: f64,
    pub velocity: f64,
    neo: Option<NeoId>,
}

/// Export shape of a `CloseApproach`, with its NEO nested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachRecord {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoRecord,
}

impl CloseApproach {
    pub fn new(neo_designation: String, time: NaiveDateTime, distance: f64, velocity: f64) -> Self {
        Self {
            neo_designation,
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Build an approach from the raw `des`, `cd`, `dist` and `v_rel` strings.
    pub fn from_raw(des: &str, cd: &str, dist: &str, v_rel: &str) -> ModelResult<Self> {
        Ok(Self::new(
            des.to_string(),
            cd_to_datetime(cd)?,
            parse_measure("dist", dist)?,
            parse_measure("v_rel", v_rel)?,
        ))
    }

    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }

    /// The linked NEO, if one was found.
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    pub fn is_linked(&self) -> bool {
        self.neo.is_some()
    }

    /// Point this approach at its NEO. Only the linker calls this.
    pub fn link_to(&mut self, neo: NeoId) {
        self.neo = Some(neo);
    }

    /// Export record; `neo` must be the object `self.neo()` resolves to.
    ///
    /// An unlinked approach gets a placeholder NEO carrying only the raw
    /// designation.
    pub fn serialize(&self, neo: Option<&NearEarthObject>) -> ApproachRecord {
        ApproachRecord {
            datetime_utc: self.time_str(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
            neo: neo
                .map(NearEarthObject::serialize)
                .unwrap_or_else(|| NeoRecord::unknown(&self.neo_designation)),
        }
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "On {} '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.neo_designation,
            self.distance,
            self.velocity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    fn sample() -> CloseApproach {
        CloseApproach::from_raw("433", "1900-Jan-01 12:11", "0.3", "5.5").unwrap()
    }

    #[test]
    fn test_from_raw() {
        let ca = sample();
        assert_eq!(ca.neo_designation, "433");
        assert_eq!(ca.time_str(), "1900-01-01 12:11");
        assert_eq!(ca.distance, 0.3);
        assert_eq!(ca.velocity, 5.5);
        assert_eq!(ca.neo(), None);
    }

    #[test]
    fn test_malformed_measures() {
        let err = CloseApproach::from_raw("433", "1900-Jan-01 12:11", "far", "5.5").unwrap_err();
        assert_eq!(err.field(), "dist");

        let err = CloseApproach::from_raw("433", "1900-Jan-01 12:11", "0.3", "").unwrap_err();
        assert_eq!(err.field(), "v_rel");

        let err = CloseApproach::from_raw("433", "yesterday", "0.3", "5.5").unwrap_err();
        assert!(matches!(err, ModelError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_display() {
        let ca = CloseApproach::from_raw("2020 AB", "2020-Jan-01 12:00", "0.12345", "10.1").unwrap();
        assert_eq!(
            ca.to_string(),
            "On 2020-01-01 12:00 '2020 AB' approaches Earth at a distance of 0.12 au and a velocity of 10.10 km/s."
        );
    }

    #[test]
    fn test_serialize_linked() {
        let neo = NearEarthObject::from_raw("433", "Eros", "16.84", "N").unwrap();
        let mut ca = sample();
        ca.link_to(NeoId(0));

        let record = ca.serialize(Some(&neo));
        assert_eq!(record.datetime_utc, "1900-01-01 12:11");
        assert_eq!(record.distance_au, 0.3);
        assert_eq!(record.velocity_km_s, 5.5);
        assert_eq!(record.neo, neo.serialize());
    }

    #[test]
    fn test_serialize_unlinked_uses_placeholder() {
        let record = sample().serialize(None);
        assert_eq!(record.neo.designation, "433");
        assert_eq!(record.neo.name, None);
        assert!(record.neo.diameter_km.is_nan());
        assert!(!record.neo.potentially_hazardous);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["datetime_utc"], "1900-01-01 12:11");
        assert!(json["neo"]["diameter_km"].is_null());
    }
}
