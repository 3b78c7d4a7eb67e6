//! ap_pipeline — deterministic driver surface
//! (pre-distribute → per-region apportion → national aggregate → score).
//!
//! This crate stays I/O-free: tables arrive in memory (see `ap_io`) and the
//! math lives in `ap_algo`. An apportionment either fully succeeds with seat
//! conservation guaranteed or fails outright; no partial results.

#![forbid(unsafe_code)]

use std::fmt;

use ap_algo::{BarrierError, RegionSeatsError, ScoreError, UnknownMethod};
use ap_core::ids::RegionId;

pub mod apportion;

pub use apportion::{apportion_nationally, NationalSeats, PartySeats};

/// Single error surface for the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Formula name rejected by the registry.
    UnknownMethod(UnknownMethod),
    /// Barrier filter failed for one region; the whole run aborts.
    Barrier { region: RegionId, source: BarrierError },
    /// Region seat pre-distribution rejected its configuration.
    RegionSeats(RegionSeatsError),
    /// Proportionality score over degenerate totals.
    Score(ScoreError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::UnknownMethod(e) => write!(f, "{e}"),
            PipelineError::Barrier { region, source } => {
                write!(f, "region {region}: {source}")
            }
            PipelineError::RegionSeats(e) => write!(f, "{e}"),
            PipelineError::Score(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<UnknownMethod> for PipelineError {
    fn from(e: UnknownMethod) -> Self {
        PipelineError::UnknownMethod(e)
    }
}

impl From<RegionSeatsError> for PipelineError {
    fn from(e: RegionSeatsError) -> Self {
        PipelineError::RegionSeats(e)
    }
}

impl From<ScoreError> for PipelineError {
    fn from(e: ScoreError) -> Self {
        PipelineError::Score(e)
    }
}
