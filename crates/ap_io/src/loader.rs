//! Loaders: read the two engine input tables from local JSON files, validate
//! row shape and cross-references, and return typed core entities.
//!
//! Wire shapes:
//! - votes:   `[{"party": "...", "region": N, "votes": N}, ...]`
//! - regions: `[{"region_id": N, "type": "ordinary"|"special", "size": N,
//!              "seats": N?}, ...]`
//!
//! `seats` is optional; it is either present on every row (pre-apportioned
//! table) or absent everywhere (table awaiting seat pre-distribution).

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use ap_core::entities::{Region, RegionKind, VoteRecord};
use ap_core::ids::{PartyId, RegionId};

use crate::{IoError, IoResult};

/// One votes-table row as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteRow {
    pub party: String,
    pub region: u32,
    pub votes: u64,
}

/// One regions-table row as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRow {
    pub region_id: u32,
    #[serde(rename = "type")]
    pub kind: RegionKind,
    pub size: u64,
    #[serde(default)]
    pub seats: Option<u32>,
}

/// Regions table plus whether the file carried explicit seat counts.
#[derive(Debug, Clone)]
pub struct LoadedRegions {
    pub regions: Vec<Region>,
    /// True iff every row declared `seats`; such a table can be apportioned
    /// directly, without region seat pre-distribution.
    pub seats_present: bool,
}

/// Load and validate the regions table.
///
/// Rejects duplicate region identifiers and tables mixing rows with and
/// without explicit `seats`.
pub fn load_regions(path: &Path) -> IoResult<LoadedRegions> {
    let raw = fs::read_to_string(path)?;
    let rows: Vec<RegionRow> = serde_json::from_str(&raw)?;

    if rows.is_empty() {
        return Err(IoError::Invalid("regions table is empty".to_string()));
    }

    let mut seen: BTreeSet<u32> = BTreeSet::new();
    for row in &rows {
        if !seen.insert(row.region_id) {
            return Err(IoError::Invalid(format!(
                "duplicate region id {} in regions table",
                row.region_id
            )));
        }
    }

    let with_seats = rows.iter().filter(|r| r.seats.is_some()).count();
    let seats_present = with_seats == rows.len();
    if with_seats != 0 && !seats_present {
        return Err(IoError::Invalid(
            "regions table mixes rows with and without `seats`".to_string(),
        ));
    }

    let regions = rows
        .into_iter()
        .map(|row| Region {
            id: RegionId(row.region_id),
            kind: row.kind,
            electorate: row.size,
            seats: row.seats.unwrap_or(0),
        })
        .collect();

    Ok(LoadedRegions {
        regions,
        seats_present,
    })
}

/// Load and validate the votes table against an already-loaded regions table.
///
/// Party identifiers must be token-shaped; every row must reference a
/// declared region (silently dropping stray rows would skew vote totals).
pub fn load_votes(path: &Path, regions: &[Region]) -> IoResult<Vec<VoteRecord>> {
    let raw = fs::read_to_string(path)?;
    let rows: Vec<VoteRow> = serde_json::from_str(&raw)?;

    let known: BTreeSet<RegionId> = regions.iter().map(|r| r.id).collect();

    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let party: PartyId = row.party.parse().map_err(|e| {
            IoError::Invalid(format!("votes row {i}: party `{}`: {e}", row.party))
        })?;
        let region = RegionId(row.region);
        if !known.contains(&region) {
            return Err(IoError::Invalid(format!(
                "votes row {i}: region {} not in regions table",
                row.region
            )));
        }
        out.push(VoteRecord {
            region,
            party,
            votes: row.votes,
        });
    }
    Ok(out)
}
