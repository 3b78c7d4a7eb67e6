//! Shared quotient/remainder primitives used by every formula.
//!
//! All orderings here are total and deterministic: value, then raw weight,
//! then ascending key. Nothing depends on incidental input order.

use std::collections::BTreeMap;

/// Rank keys by `value` descending, breaking ties by `raw` descending and
/// finally key ascending. Used for largest-remainder top-ups and the LOREG
/// leftover pass.
pub fn rank_descending<K: Ord + Clone>(entries: &BTreeMap<K, (u128, u64)>) -> Vec<K> {
    let mut ranking: Vec<(&K, u128, u64)> = entries
        .iter()
        .map(|(k, &(value, raw))| (k, value, raw))
        .collect();
    ranking.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.2.cmp(&a.2))
            .then_with(|| a.0.cmp(b.0))
    });
    ranking.into_iter().map(|(k, _, _)| k.clone()).collect()
}

/// Inverse ranking: `value` ascending, `raw` ascending, key ascending.
/// Used when floors over-allocate and seats must be trimmed back.
pub fn rank_ascending<K: Ord + Clone>(entries: &BTreeMap<K, (u128, u64)>) -> Vec<K> {
    let mut ranking: Vec<(&K, u128, u64)> = entries
        .iter()
        .map(|(k, &(value, raw))| (k, value, raw))
        .collect();
    ranking.sort_by(|a, b| {
        a.1.cmp(&b.1)
            .then_with(|| a.2.cmp(&b.2))
            .then_with(|| a.0.cmp(b.0))
    });
    ranking.into_iter().map(|(k, _, _)| k.clone()).collect()
}

/// Integer floors and remainders of `weights` against divisor `q`.
///
/// A zero divisor (tiny totals) yields zero floors and raw-weight remainders,
/// so callers can still run their leftover pass.
pub fn floors_and_remainders<K: Ord + Clone>(
    weights: &BTreeMap<K, u64>,
    q: u128,
) -> (BTreeMap<K, u32>, BTreeMap<K, u128>) {
    let mut floors: BTreeMap<K, u32> = BTreeMap::new();
    let mut rems: BTreeMap<K, u128> = BTreeMap::new();

    for (k, &w) in weights {
        let w128 = w as u128;
        if q == 0 {
            floors.insert(k.clone(), 0);
            rems.insert(k.clone(), w128);
        } else {
            let f128 = w128 / q;
            // Saturate; in practice seat totals bound this far below.
            let f = if f128 > u32::MAX as u128 { u32::MAX } else { f128 as u32 };
            floors.insert(k.clone(), f);
            rems.insert(k.clone(), w128 % q);
        }
    }

    (floors, rems)
}
