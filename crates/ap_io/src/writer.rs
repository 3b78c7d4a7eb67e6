//! Writers: emit the two engine output tables as deterministic JSON.
//!
//! Callers pass rows already ranked (national: seats descending; regions:
//! identifier ascending); nothing is re-sorted here.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::IoResult;

/// One row of the national seat table on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct NationalRow {
    pub party: String,
    pub votes: u64,
    pub seats: u32,
}

/// One row of the region seat table on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RegionSeatRow {
    pub region_id: u32,
    pub seats: u32,
}

/// Pretty JSON for the national table (stdout or file).
pub fn national_seats_json(rows: &[NationalRow]) -> IoResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Pretty JSON for the region seat table.
pub fn region_seats_json(rows: &[RegionSeatRow]) -> IoResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn write_national_seats(path: &Path, rows: &[NationalRow]) -> IoResult<()> {
    fs::write(path, national_seats_json(rows)? + "\n")?;
    Ok(())
}

pub fn write_region_seats(path: &Path, rows: &[RegionSeatRow]) -> IoResult<()> {
    fs::write(path, region_seats_json(rows)? + "\n")?;
    Ok(())
}
