//! Approach-to-NEO linking
//!
//! Builds the designation index over the NEO collection, then walks the
//! approaches once, pointing each at its NEO and appending it to that NEO's
//! approach list. Approaches naming an unknown designation stay unlinked.

use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

use neo_models::{ApproachId, CloseApproach, NearEarthObject, NeoId};
use neo_utils::{DuplicatePolicy, NeoError, NeoResult};

/// Counts describing one linking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkSummary {
    pub neos: usize,
    pub approaches: usize,
    pub linked: usize,
    pub unlinked: usize,
    /// NEOs hidden from the index by a later duplicate designation.
    pub shadowed: usize,
}

/// Map every designation to its NEO.
///
/// Returns the index and the number of shadowed entries. Under
/// `DuplicatePolicy::Reject` a repeated designation is an error naming
/// `source_name`.
pub fn build_index(
    source_name: &str,
    neos: &[NearEarthObject],
    policy: DuplicatePolicy,
) -> NeoResult<(HashMap<String, NeoId>, usize)> {
    let mut index: HashMap<String, NeoId> = HashMap::with_capacity(neos.len());
    let mut shadowed = 0;

    for (position, neo) in neos.iter().enumerate() {
        match index.entry(neo.designation.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(NeoId(position));
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::Reject => {
                    return Err(NeoError::DuplicateDesignation {
                        source_name: source_name.to_string(),
                        designation: neo.designation.clone(),
                        first_row: slot.get().index(),
                        second_row: position,
                    });
                }
                DuplicatePolicy::LastWins => {
                    warn!(
                        designation = %neo.designation,
                        shadowed = slot.get().index(),
                        kept = position,
                        "Duplicate designation shadows an earlier NEO"
                    );
                    slot.insert(NeoId(position));
                    shadowed += 1;
                }
            },
        }
    }

    Ok((index, shadowed))
}

/// Link approaches to their NEOs in a single pass.
///
/// Must run once, after both collections are fully parsed; running it again
/// over the same collections would append every approach a second time.
pub fn link(
    neos: &mut [NearEarthObject],
    approaches: &mut [CloseApproach],
    index: &HashMap<String, NeoId>,
) -> LinkSummary {
    let mut summary = LinkSummary {
        neos: neos.len(),
        approaches: approaches.len(),
        ..LinkSummary::default()
    };

    for (position, approach) in approaches.iter_mut().enumerate() {
        match index.get(&approach.neo_designation) {
            Some(&neo_id) => {
                approach.link_to(neo_id);
                neos[neo_id.index()].attach_approach(ApproachId(position));
                summary.linked += 1;
            }
            None => {
                debug!(designation = %approach.neo_designation, "No NEO for close approach");
                summary.unlinked += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neo(des: &str) -> NearEarthObject {
        NearEarthObject::from_raw(des, "", "", "N").unwrap()
    }

    fn approach(des: &str, cd: &str) -> CloseApproach {
        CloseApproach::from_raw(des, cd, "0.1", "1.0").unwrap()
    }

    #[test]
    fn test_link_attaches_both_directions() {
        let mut neos = vec![neo("433"), neo("719")];
        let mut approaches = vec![
            approach("719", "1900-Jan-01 00:00"),
            approach("433", "1900-Jan-02 00:00"),
            approach("719", "1900-Jan-03 00:00"),
            approach("99999", "1900-Jan-04 00:00"),
        ];

        let (index, shadowed) = build_index("neos.csv", &neos, DuplicatePolicy::Reject).unwrap();
        let summary = link(&mut neos, &mut approaches, &index);

        assert_eq!(shadowed, 0);
        assert_eq!(summary.linked, 3);
        assert_eq!(summary.unlinked, 1);
        assert_eq!(neos[1].approaches(), &[ApproachId(0), ApproachId(2)]);
        assert_eq!(neos[0].approaches(), &[ApproachId(1)]);
        assert_eq!(approaches[0].neo(), Some(NeoId(1)));
        assert_eq!(approaches[3].neo(), None);
    }

    #[test]
    fn test_duplicate_designation_rejected() {
        let neos = vec![neo("433"), neo("719"), neo("433")];
        let err = build_index("neos.csv", &neos, DuplicatePolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            NeoError::DuplicateDesignation {
                source_name: "neos.csv".to_string(),
                designation: "433".to_string(),
                first_row: 0,
                second_row: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_designation_last_wins() {
        let mut neos = vec![neo("433"), neo("433")];
        let mut approaches = vec![approach("433", "1900-Jan-01 00:00")];

        let (index, shadowed) = build_index("neos.csv", &neos, DuplicatePolicy::LastWins).unwrap();
        let summary = link(&mut neos, &mut approaches, &index);

        assert_eq!(shadowed, 1);
        assert_eq!(summary.linked, 1);
        assert!(neos[0].approaches().is_empty());
        assert_eq!(neos[1].approaches(), &[ApproachId(0)]);
        assert_eq!(approaches[0].neo(), Some(NeoId(1)));
    }

    #[test]
    fn test_empty_collections() {
        let (index, _) = build_index("neos.csv", &[], DuplicatePolicy::Reject).unwrap();
        let summary = link(&mut [], &mut [], &index);
        assert_eq!(summary, LinkSummary::default());
    }
}
