//! Electoral barrier: minimum vote-share filter applied per region before
//! apportionment.

use std::collections::BTreeMap;
use std::fmt;

use ap_core::ids::PartyId;

#[derive(Debug, Clone, PartialEq)]
pub enum BarrierError {
    /// Threshold must lie in `[0, 1)`.
    InvalidThreshold { threshold: f64 },
    /// Every party fell below the barrier; apportionment cannot proceed.
    NoPartyClearsBarrier { threshold: f64 },
}

impl fmt::Display for BarrierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierError::InvalidThreshold { threshold } => {
                write!(f, "electoral barrier {threshold} is outside [0, 1)")
            }
            BarrierError::NoPartyClearsBarrier { threshold } => {
                write!(
                    f,
                    "no party clears the electoral barrier of {} %",
                    threshold * 100.0
                )
            }
        }
    }
}

impl std::error::Error for BarrierError {}

/// Remove parties whose votes are strictly below `threshold * total` within
/// the given scope. Parties exactly on the cut line stay in.
///
/// With a zero vote total the cut line is zero and every party survives,
/// zero-vote parties included.
pub fn filter_by_barrier(
    votes: &BTreeMap<PartyId, u64>,
    threshold: f64,
) -> Result<BTreeMap<PartyId, u64>, BarrierError> {
    if !(0.0..1.0).contains(&threshold) {
        return Err(BarrierError::InvalidThreshold { threshold });
    }

    let total: u64 = votes.values().sum();

    let kept: BTreeMap<PartyId, u64> = votes
        .iter()
        .filter(|&(_, &v)| clears_cut(v, total, threshold))
        .map(|(p, &v)| (p.clone(), v))
        .collect();

    if kept.is_empty() {
        return Err(BarrierError::NoPartyClearsBarrier { threshold });
    }
    Ok(kept)
}

/// Cut-line resolution: the barrier is a decimal fraction, held to
/// parts-per-billion.
const CUT_SCALE: u128 = 1_000_000_000;

/// `votes / total >= threshold`, cross-multiplied in `u128` at
/// parts-per-billion resolution like the quotient rankings. Comparing in
/// `f64` instead can misplace the cut line once `total` exceeds 2^53.
/// Both products stay under 2^95, far inside `u128`.
fn clears_cut(votes: u64, total: u64, threshold: f64) -> bool {
    let scaled = (threshold * CUT_SCALE as f64).round() as u128;
    votes as u128 * CUT_SCALE >= scaled * total as u128
}
