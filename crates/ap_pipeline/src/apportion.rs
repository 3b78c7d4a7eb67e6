//! APPORTION stage: apply one formula independently per region and fold the
//! per-region seats into a ranked national table.
//!
//! Input: votes table, regions table with `seats` already populated (by region
//! pre-distribution or directly by the caller), a formula name, and the
//! electoral barrier. All choices are deterministic given the same inputs;
//! regions are processed in ascending `RegionId` order, though the fold is
//! commutative and any order would aggregate identically.

use std::collections::BTreeMap;

use ap_algo::{filter_by_barrier, Method};
use ap_core::entities::{Region, VoteRecord};
use ap_core::ids::{PartyId, RegionId};

use crate::PipelineError;

/// One row of the national seat table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartySeats {
    pub party: PartyId,
    /// National vote total across all regions.
    pub votes: u64,
    pub seats: u32,
}

/// National seat table, ranked seats ↓, national votes ↓, party ↑.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalSeats {
    pub rows: Vec<PartySeats>,
}

impl NationalSeats {
    /// Seats keyed by party, for the scorer and for assertions.
    pub fn seats_by_party(&self) -> BTreeMap<PartyId, u32> {
        self.rows
            .iter()
            .map(|r| (r.party.clone(), r.seats))
            .collect()
    }

    /// National votes keyed by party.
    pub fn votes_by_party(&self) -> BTreeMap<PartyId, u64> {
        self.rows
            .iter()
            .map(|r| (r.party.clone(), r.votes))
            .collect()
    }

    pub fn total_seats(&self) -> u32 {
        self.rows.iter().map(|r| r.seats).sum()
    }
}

/// Apply `method_name` independently in every region and aggregate.
///
/// Every party present anywhere in the votes table appears in the output,
/// with 0 seats if it never won any. A barrier failure in any region aborts
/// the whole computation: a threshold too high for the dataset is a global
/// configuration error, not a per-region condition.
pub fn apportion_nationally(
    method_name: &str,
    votes: &[VoteRecord],
    regions: &[Region],
    threshold: f64,
) -> Result<NationalSeats, PipelineError> {
    let method: Method = method_name.parse()?;

    // National vote totals seed the accumulator with the full party set.
    let mut national_votes: BTreeMap<PartyId, u64> = BTreeMap::new();
    for rec in votes {
        *national_votes.entry(rec.party.clone()).or_insert(0) += rec.votes;
    }
    let mut national_seats: BTreeMap<PartyId, u32> =
        national_votes.keys().cloned().map(|p| (p, 0)).collect();

    let mut ordered: Vec<&Region> = regions.iter().collect();
    ordered.sort_by_key(|r| r.id);

    for region in ordered {
        let regional = slice_region(votes, region.id);
        let eligible = filter_by_barrier(&regional, threshold).map_err(|source| {
            PipelineError::Barrier {
                region: region.id,
                source,
            }
        })?;
        let alloc = method.allocate(region.seats, &eligible);
        for (party, seats) in alloc {
            *national_seats.entry(party).or_insert(0) += seats;
        }
    }

    let mut rows: Vec<PartySeats> = national_seats
        .into_iter()
        .map(|(party, seats)| {
            let votes = *national_votes.get(&party).unwrap_or(&0);
            PartySeats { party, votes, seats }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.seats
            .cmp(&a.seats)
            .then_with(|| b.votes.cmp(&a.votes))
            .then_with(|| a.party.cmp(&b.party))
    });

    Ok(NationalSeats { rows })
}

/// Sum a region's vote rows by party (a party may appear in several rows).
fn slice_region(votes: &[VoteRecord], region: RegionId) -> BTreeMap<PartyId, u64> {
    let mut out: BTreeMap<PartyId, u64> = BTreeMap::new();
    for rec in votes.iter().filter(|r| r.region == region) {
        *out.entry(rec.party.clone()).or_insert(0) += rec.votes;
    }
    out
}
