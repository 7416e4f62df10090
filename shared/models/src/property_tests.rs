//! Property-based tests for the NEO domain models
//!
//! Covers raw-field normalization of near-Earth objects and the calendar
//! date round trip of close approaches.

use proptest::prelude::*;
use proptest::option;

use crate::{cd_to_datetime, datetime_to_str, CloseApproach, NearEarthObject};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

prop_compose! {
    fn arb_designation()(des in "[0-9]{1,6}( [A-Z]{2}[0-9]{0,3})?") -> String {
        des
    }
}

prop_compose! {
    fn arb_raw_name()(name in option::of("[A-Z][a-z]{2,12}")) -> String {
        name.unwrap_or_default()
    }
}

prop_compose! {
    fn arb_raw_diameter()(diameter in option::of(0.0..1000.0f64)) -> String {
        diameter.map(|d| format!("{}", d)).unwrap_or_default()
    }
}

prop_compose! {
    fn arb_raw_pha()(pha in prop_oneof![
        Just(String::new()),
        Just("Y".to_string()),
        Just("N".to_string()),
        "[A-Za-z]{1,3}",
    ]) -> String {
        pha
    }
}

prop_compose! {
    fn arb_calendar_date()(
        year in 1900..2200i32,
        month in 0..12usize,
        day in 1..=28u32,
        hour in 0..24u32,
        minute in 0..60u32
    ) -> (String, String) {
        (
            format!("{}-{}-{:02} {:02}:{:02}", year, MONTHS[month], day, hour, minute),
            format!("{}-{:02}-{:02} {:02}:{:02}", year, month + 1, day, hour, minute),
        )
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Diameter is NaN exactly when the raw field is empty.
    #[test]
    fn property_diameter_nan_iff_empty(
        des in arb_designation(),
        diameter in arb_raw_diameter()
    ) {
        let neo = NearEarthObject::from_raw(&des, "", &diameter, "N").unwrap();
        prop_assert_eq!(neo.diameter.is_nan(), diameter.is_empty());
    }

    /// Name is absent exactly when the raw field is empty, and fullname
    /// collapses to the designation in that case.
    #[test]
    fn property_name_absent_iff_empty(
        des in arb_designation(),
        name in arb_raw_name()
    ) {
        let neo = NearEarthObject::from_raw(&des, &name, "", "").unwrap();
        prop_assert_eq!(neo.name.is_none(), name.is_empty());
        prop_assert_eq!(neo.fullname() == des, name.is_empty());
        prop_assert_eq!(&neo.designation, &des);
    }

    #[test]
    fn property_hazardous_iff_exact_marker(pha in arb_raw_pha()) {
        let neo = NearEarthObject::from_raw("433", "", "", &pha).unwrap();
        prop_assert_eq!(neo.hazardous, pha == "Y");
    }

    /// Parsing then formatting yields a zero-padded numeric month and no seconds.
    #[test]
    fn property_calendar_date_round_trip((raw, expected) in arb_calendar_date()) {
        let dt = cd_to_datetime(&raw).unwrap();
        prop_assert_eq!(datetime_to_str(&dt), expected.clone());

        let approach = CloseApproach::from_raw("433", &raw, "0.1", "1.0").unwrap();
        prop_assert_eq!(approach.time_str(), expected);
    }

    #[test]
    fn property_malformed_diameter_never_builds(garbage in "[a-zA-Z]{1,8}") {
        prop_assert!(NearEarthObject::from_raw("433", "Eros", &garbage, "N").is_err());
    }
}
