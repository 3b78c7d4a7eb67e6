//! Proportionality score: how closely seat shares mirror vote shares.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use ap_core::ids::PartyId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Seat table sums to zero; shares are undefined.
    ZeroSeatTotal,
    /// Vote table sums to zero; shares are undefined.
    ZeroVoteTotal,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::ZeroSeatTotal => write!(f, "seat table sums to zero"),
            ScoreError::ZeroVoteTotal => write!(f, "vote table sums to zero"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// `1 - Σ |seat_share - vote_share|` over the union of parties.
///
/// 1.0 means seat shares exactly mirror vote shares; lower (possibly
/// negative) values indicate disproportionality. A party present on only one
/// side contributes its full share from the other. Pure function; zero
/// totals fail explicitly instead of propagating NaN.
pub fn score_proportionality(
    seats: &BTreeMap<PartyId, u32>,
    votes: &BTreeMap<PartyId, u64>,
) -> Result<f64, ScoreError> {
    let seat_total: u64 = seats.values().map(|&s| s as u64).sum();
    if seat_total == 0 {
        return Err(ScoreError::ZeroSeatTotal);
    }
    let vote_total: u128 = votes.values().map(|&v| v as u128).sum();
    if vote_total == 0 {
        return Err(ScoreError::ZeroVoteTotal);
    }

    let parties: BTreeSet<&PartyId> = seats.keys().chain(votes.keys()).collect();
    let mut error_abs = 0.0f64;
    for p in parties {
        let seat_share = *seats.get(p).unwrap_or(&0) as f64 / seat_total as f64;
        let vote_share = *votes.get(p).unwrap_or(&0) as f64 / vote_total as f64;
        error_abs += (seat_share - vote_share).abs();
    }
    Ok(1.0 - error_abs)
}
