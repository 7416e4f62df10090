//! # NEO Domain Models
//!
//! Entity types for near-Earth objects and their close approaches to Earth,
//! with the normalization rules applied to raw source fields.
//!
//! ## Key Models
//!
//! - **NearEarthObject**: primary designation, optional IAU name, diameter
//!   (NaN when unknown) and the potentially-hazardous flag
//! - **CloseApproach**: approach time, distance (au) and relative velocity
//!   (km/s), plus the raw designation of its NEO
//!
//! Both sides of the NEO/approach relation are held as ids (`NeoId`,
//! `ApproachId`) into the collections that own the entities, so neither type
//! owns the other.

pub mod approach;
pub mod coerce;
pub mod error;
pub mod ids;
pub mod neo;
pub mod time;

#[cfg(test)]
pub mod property_tests;

pub use approach::{ApproachRecord, CloseApproach};
pub use error::{ModelError, ModelResult};
pub use ids::{ApproachId, NeoId};
pub use neo::{NearEarthObject, NeoRecord, HAZARDOUS_MARKER};
pub use time::{cd_to_datetime, datetime_to_str};
