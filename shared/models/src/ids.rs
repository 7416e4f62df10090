use serde::Serialize;
use std::fmt;

/// Position of a `NearEarthObject` in its owning collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NeoId(pub usize);

/// Position of a `CloseApproach` in its owning collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ApproachId(pub usize);

impl NeoId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl ApproachId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NeoId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "neo#{}", self.0)
    }
}

impl fmt::Display for ApproachId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "approach#{}", self.0)
    }
}
