//! Region seat pre-distribution: allocate a national seat total across
//! constituencies by elector population, honoring per-constituency minimums.
//!
//! Special constituencies always receive exactly 1 seat and sit outside the
//! proportional pool. Ordinary constituencies start at `min_seats`; the
//! remaining budget is distributed over their electorates by one of:
//!
//! - `loreg` — a single population-per-seat ratio (`pool / remaining`),
//!   floored quotients, leftovers by largest remainder;
//! - `dhondt` — highest averages over populations;
//! - `hare`  — Hare quota over populations.
//!
//! The output table is re-sorted by region identifier and always sums to the
//! requested total.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use ap_core::entities::Region;
use ap_core::ids::RegionId;

use crate::allocation::quota::allocate_with_quota;
use crate::allocation::{allocate_divisor, allocate_quota, DivisorRule, QuotaRule};

/// A recognized region pre-distribution method.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RegionMethod {
    Loreg,
    DHondt,
    Hare,
}

impl RegionMethod {
    pub const NAMES: [&'static str; 3] = ["loreg", "dhondt", "hare"];

    pub fn name(self) -> &'static str {
        match self {
            RegionMethod::Loreg => "loreg",
            RegionMethod::DHondt => "dhondt",
            RegionMethod::Hare => "hare",
        }
    }
}

impl fmt::Display for RegionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RegionMethod {
    type Err = RegionSeatsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loreg" => Ok(RegionMethod::Loreg),
            "dhondt" => Ok(RegionMethod::DHondt),
            "hare" => Ok(RegionMethod::Hare),
            other => Err(RegionSeatsError::UnknownMethod {
                given: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSeatsError {
    /// Region method name not in `{loreg, dhondt, hare}`.
    UnknownMethod { given: String },
    /// The fixed minimums consume the whole seat budget (or exceed it);
    /// nothing is left for the proportional step.
    InvalidSeatBudget { total_seats: u32, fixed: u32 },
    /// No ordinary constituency to distribute the remaining pool over.
    NoOrdinaryRegions,
}

impl fmt::Display for RegionSeatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionSeatsError::UnknownMethod { given } => write!(
                f,
                "unknown region method `{}`; valid methods: {}",
                given,
                RegionMethod::NAMES.join(", ")
            ),
            RegionSeatsError::InvalidSeatBudget { total_seats, fixed } => write!(
                f,
                "seat budget {total_seats} leaves nothing to distribute after \
                 {fixed} fixed minimum seats"
            ),
            RegionSeatsError::NoOrdinaryRegions => {
                write!(f, "regions table has no ordinary constituency")
            }
        }
    }
}

impl std::error::Error for RegionSeatsError {}

/// Populate `seats` on every region, conserving `total_seats` exactly.
pub fn distribute_region_seats(
    regions: &[Region],
    total_seats: u32,
    min_seats: u32,
    method: RegionMethod,
) -> Result<Vec<Region>, RegionSeatsError> {
    let mut out: Vec<Region> = regions.to_vec();
    out.sort_by_key(|r| r.id);

    for r in &mut out {
        r.seats = if r.is_ordinary() { min_seats } else { 1 };
    }
    let fixed: u64 = out.iter().map(|r| r.seats as u64).sum();
    if fixed >= total_seats as u64 {
        return Err(RegionSeatsError::InvalidSeatBudget {
            total_seats,
            fixed: fixed.min(u32::MAX as u64) as u32,
        });
    }
    let remaining = total_seats - fixed as u32;

    let pool: BTreeMap<RegionId, u64> = out
        .iter()
        .filter(|r| r.is_ordinary())
        .map(|r| (r.id, r.electorate))
        .collect();
    if pool.is_empty() {
        return Err(RegionSeatsError::NoOrdinaryRegions);
    }

    let extra: BTreeMap<RegionId, u32> = match method {
        RegionMethod::Loreg => {
            let population: u128 = pool.values().map(|&s| s as u128).sum();
            let ratio = population / remaining as u128;
            allocate_with_quota(remaining, &pool, ratio)
        }
        RegionMethod::DHondt => allocate_divisor(remaining, &pool, DivisorRule::DHondt),
        RegionMethod::Hare => allocate_quota(remaining, &pool, QuotaRule::Hare),
    };

    for r in &mut out {
        if let Some(&e) = extra.get(&r.id) {
            r.seats += e;
        }
    }

    debug_assert_eq!(
        out.iter().map(|r| r.seats as u64).sum::<u64>(),
        total_seats as u64
    );
    Ok(out)
}
