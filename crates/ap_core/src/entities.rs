//! Table entities consumed and produced by the engine.
//!
//! The votes and regions tables are inputs built by external ingestion and are
//! never mutated here; seat tables are computed fresh per invocation.

use crate::ids::{PartyId, RegionId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constituency class. Special constituencies carry a legally fixed single
/// seat regardless of population and sit outside the proportional pool.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RegionKind {
    Ordinary,
    Special,
}

/// One row of the regions table.
///
/// `seats` is the number of seats this region will apportion among parties.
/// It is populated by region seat pre-distribution (or supplied directly)
/// before party apportionment runs.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub id: RegionId,
    pub kind: RegionKind,
    /// Elector population (people with the right to vote).
    pub electorate: u64,
    pub seats: u32,
}

impl Region {
    #[inline]
    pub fn is_ordinary(&self) -> bool {
        self.kind == RegionKind::Ordinary
    }
}

/// One row of the votes table: a party's vote count within one region.
/// The party set need not be uniform across regions.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VoteRecord {
    pub region: RegionId,
    pub party: PartyId,
    pub votes: u64,
}
