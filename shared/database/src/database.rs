//! Linked NEO collections
//!
//! `NeoDatabase` owns the parsed near-Earth objects and close approaches,
//! links them on construction and answers lookups against the result.

use std::collections::HashMap;
use tracing::{info, warn};

use neo_models::{ApproachId, ApproachRecord, CloseApproach, NearEarthObject, NeoId, NeoRecord};
use neo_utils::{DuplicatePolicy, NeoResult};

use crate::linker::{build_index, link, LinkSummary};

/// Source label for collections not read through `load_database`.
pub const IN_MEMORY_SOURCE: &str = "in-memory NEO collection";

#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
    summary: LinkSummary,
}

impl NeoDatabase {
    /// Link freshly parsed collections, rejecting duplicate designations.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> NeoResult<Self> {
        Self::with_policy(neos, approaches, DuplicatePolicy::default())
    }

    pub fn with_policy(
        neos: Vec<NearEarthObject>,
        approaches: Vec<CloseApproach>,
        policy: DuplicatePolicy,
    ) -> NeoResult<Self> {
        Self::from_source(IN_MEMORY_SOURCE, neos, approaches, policy)
    }

    /// Link collections parsed from `source_name`, which labels duplicate
    /// designation errors.
    pub fn from_source(
        source_name: &str,
        mut neos: Vec<NearEarthObject>,
        mut approaches: Vec<CloseApproach>,
        policy: DuplicatePolicy,
    ) -> NeoResult<Self> {
        let (by_designation, shadowed) = build_index(source_name, &neos, policy)?;
        let mut summary = link(&mut neos, &mut approaches, &by_designation);
        summary.shadowed = shadowed;

        // Only indexed objects are named; among those, the first carrying a
        // name keeps it.
        let mut by_name = HashMap::new();
        for (position, neo) in neos.iter().enumerate() {
            if by_designation.get(&neo.designation) != Some(&NeoId(position)) {
                continue;
            }
            if let Some(name) = &neo.name {
                by_name.entry(name.clone()).or_insert(NeoId(position));
            }
        }

        info!(
            neos = summary.neos,
            approaches = summary.approaches,
            linked = summary.linked,
            unlinked = summary.unlinked,
            "Linked close approaches to near-Earth objects"
        );
        if summary.unlinked > 0 {
            warn!(
                unlinked = summary.unlinked,
                "Some close approaches reference NEOs outside the dataset"
            );
        }

        Ok(Self {
            neos,
            approaches,
            by_designation,
            by_name,
            summary,
        })
    }

    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.index())
    }

    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.index())
    }

    pub fn summary(&self) -> LinkSummary {
        self.summary
    }

    pub fn neo_id(&self, designation: &str) -> Option<NeoId> {
        self.by_designation.get(designation).copied()
    }

    /// Exact, case-sensitive match on the primary designation.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.neo_id(designation).and_then(|id| self.neo(id))
    }

    /// Exact, case-sensitive match on the IAU name.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).and_then(|&id| self.neo(id))
    }

    /// Close approaches of one NEO, in link order.
    pub fn approaches_of(&self, id: NeoId) -> impl Iterator<Item = &CloseApproach> + '_ {
        self.neo(id)
            .map(NearEarthObject::approaches)
            .unwrap_or_default()
            .iter()
            .filter_map(move |&approach_id| self.approach(approach_id))
    }

    /// The NEO an approach is linked to.
    pub fn neo_of(&self, id: ApproachId) -> Option<&NearEarthObject> {
        self.approach(id)
            .and_then(CloseApproach::neo)
            .and_then(|neo_id| self.neo(neo_id))
    }

    pub fn unlinked_approaches(&self) -> impl Iterator<Item = &CloseApproach> + '_ {
        self.approaches.iter().filter(|a| !a.is_linked())
    }

    pub fn serialize_neo(&self, id: NeoId) -> Option<NeoRecord> {
        self.neo(id).map(NearEarthObject::serialize)
    }

    /// Export record with the linked NEO nested, or a placeholder if unlinked.
    pub fn serialize_approach(&self, id: ApproachId) -> Option<ApproachRecord> {
        self.approach(id)
            .map(|approach| approach.serialize(self.neo_of(id)))
    }
}
