//! Highest-averages (divisor) allocation.
//!
//! Contract:
//! - Award `seats` sequentially; each round goes to the maximum running
//!   quotient, recomputed as `votes / f(seats_won)` in floor division.
//! - Divisors: D'Hondt `f(n) = n + 1`; Sainte-Laguë `f(n) = 2n + 1`;
//!   Modified Sainte-Laguë identical except the entry quotient is `votes/1.4`
//!   (computed exactly as `votes * 5 / 7`).
//! - Ties break on higher raw votes, then ascending key. Never input order.
//! - `seats == 0` returns an all-zero map over the same key set.
//!
//! Thresholding happens upstream (`barrier`); this function assumes the vote
//! map is already filtered.

use std::collections::BTreeMap;

/// Divisor rule selecting the quotient sequence.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DivisorRule {
    DHondt,
    SainteLague,
    /// Sainte-Laguë with a 1.4 first divisor, raising the entry bar for
    /// parties without a seat yet.
    SainteLagueModified,
}

impl DivisorRule {
    /// Quotient before any seat is won.
    #[inline]
    fn entry_quotient(self, votes: u64) -> u64 {
        match self {
            // votes / 1.4 == votes * 5 / 7 exactly; stays in integer math.
            DivisorRule::SainteLagueModified => ((votes as u128) * 5 / 7) as u64,
            _ => votes,
        }
    }

    /// Divisor after `seats_won` seats.
    #[inline]
    fn divisor(self, seats_won: u32) -> u64 {
        match self {
            DivisorRule::DHondt => seats_won as u64 + 1,
            DivisorRule::SainteLague | DivisorRule::SainteLagueModified => {
                2 * seats_won as u64 + 1
            }
        }
    }
}

/// Allocate `seats` among `votes` keys by the given divisor rule.
///
/// The returned map carries every input key (zero-seat parties included), so
/// the caller keeps the full party set. An empty input yields an empty map;
/// eligibility is the barrier filter's concern.
pub fn allocate_divisor<K: Ord + Clone>(
    seats: u32,
    votes: &BTreeMap<K, u64>,
    rule: DivisorRule,
) -> BTreeMap<K, u32> {
    let mut alloc: BTreeMap<K, u32> = votes.keys().cloned().map(|k| (k, 0)).collect();
    if seats == 0 || votes.is_empty() {
        return alloc;
    }

    // Running state per key: (votes, seats won, current quotient).
    // Rows sit in ascending key order, so the first best wins residual ties.
    let mut rows: Vec<(&K, u64, u32, u64)> = votes
        .iter()
        .map(|(k, &v)| (k, v, 0u32, rule.entry_quotient(v)))
        .collect();

    for _round in 0..seats {
        let mut best = 0usize;
        for i in 1..rows.len() {
            let (q, raw) = (rows[i].3, rows[i].1);
            let (bq, braw) = (rows[best].3, rows[best].1);
            if q > bq || (q == bq && raw > braw) {
                best = i;
            }
        }
        rows[best].2 += 1;
        rows[best].3 = rows[best].1 / rule.divisor(rows[best].2);
    }

    for (k, _, won, _) in rows {
        alloc.insert(k.clone(), won);
    }
    alloc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region0() -> BTreeMap<&'static str, u64> {
        [
            ("party_a", 391_000),
            ("party_b", 311_000),
            ("party_c", 184_000),
            ("party_d", 73_000),
            ("party_e", 27_000),
            ("party_f", 12_000),
            ("party_g", 2_000),
        ]
        .into()
    }

    fn seat_vec(alloc: &BTreeMap<&str, u32>) -> Vec<u32> {
        alloc.values().copied().collect()
    }

    #[test]
    fn dhondt_twenty_one_seats() {
        let alloc = allocate_divisor(21, &region0(), DivisorRule::DHondt);
        assert_eq!(seat_vec(&alloc), vec![9, 7, 4, 1, 0, 0, 0]);
    }

    #[test]
    fn sainte_lague_twenty_one_seats() {
        let alloc = allocate_divisor(21, &region0(), DivisorRule::SainteLague);
        assert_eq!(seat_vec(&alloc), vec![8, 6, 4, 2, 1, 0, 0]);
    }

    #[test]
    fn modified_sainte_lague_twenty_one_seats() {
        let alloc = allocate_divisor(21, &region0(), DivisorRule::SainteLagueModified);
        assert_eq!(seat_vec(&alloc), vec![8, 7, 4, 2, 0, 0, 0]);
    }

    #[test]
    fn zero_seats_keeps_party_set() {
        let alloc = allocate_divisor(0, &region0(), DivisorRule::DHondt);
        assert_eq!(alloc.len(), 7);
        assert!(alloc.values().all(|&s| s == 0));
    }

    #[test]
    fn conserves_total() {
        for rule in [
            DivisorRule::DHondt,
            DivisorRule::SainteLague,
            DivisorRule::SainteLagueModified,
        ] {
            let alloc = allocate_divisor(21, &region0(), rule);
            assert_eq!(alloc.values().sum::<u32>(), 21);
        }
    }

    #[test]
    fn equal_quotient_tie_goes_to_smaller_key() {
        // Two identical parties; odd seat count forces a tie on every round.
        let votes: BTreeMap<&str, u64> = [("a", 100), ("b", 100)].into();
        let alloc = allocate_divisor(3, &votes, DivisorRule::DHondt);
        assert_eq!(alloc["a"], 2);
        assert_eq!(alloc["b"], 1);
    }

    #[test]
    fn more_seats_than_positive_parties_is_accepted() {
        // Degenerate: zero-vote party may absorb seats once quotients hit 0.
        let votes: BTreeMap<&str, u64> = [("a", 1), ("z", 0)].into();
        let alloc = allocate_divisor(5, &votes, DivisorRule::DHondt);
        assert_eq!(alloc.values().sum::<u32>(), 5);
    }
}
