//! Formula registry: method names → apportionment functions.
//!
//! This is the sole validation point for method names. Callers parse a
//! `Method` here and dispatch through [`Method::allocate`]; nothing else in
//! the engine special-cases method strings.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::allocation::{allocate_divisor, allocate_quota, DivisorRule, QuotaRule};

/// A recognized apportionment formula.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Method {
    DHondt,
    SainteLague,
    SainteLagueModified,
    Hare,
    Droop,
    HagenbachBischoff,
    Imperiali,
}

impl Method {
    /// Wire names, in registry order.
    pub const NAMES: [&'static str; 7] = [
        "dhondt",
        "sainte_lague",
        "sainte_lague_modificado",
        "hare",
        "droop",
        "hagenbach",
        "imperiali",
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::DHondt => "dhondt",
            Method::SainteLague => "sainte_lague",
            Method::SainteLagueModified => "sainte_lague_modificado",
            Method::Hare => "hare",
            Method::Droop => "droop",
            Method::HagenbachBischoff => "hagenbach",
            Method::Imperiali => "imperiali",
        }
    }

    /// Run the formula. Divisor methods award seat by seat; quota methods go
    /// through floors plus largest-remainder top-up.
    pub fn allocate<K: Ord + Clone>(
        self,
        seats: u32,
        votes: &BTreeMap<K, u64>,
    ) -> BTreeMap<K, u32> {
        match self {
            Method::DHondt => allocate_divisor(seats, votes, DivisorRule::DHondt),
            Method::SainteLague => allocate_divisor(seats, votes, DivisorRule::SainteLague),
            Method::SainteLagueModified => {
                allocate_divisor(seats, votes, DivisorRule::SainteLagueModified)
            }
            Method::Hare => allocate_quota(seats, votes, QuotaRule::Hare),
            Method::Droop => allocate_quota(seats, votes, QuotaRule::Droop),
            Method::HagenbachBischoff => {
                allocate_quota(seats, votes, QuotaRule::HagenbachBischoff)
            }
            Method::Imperiali => allocate_quota(seats, votes, QuotaRule::Imperiali),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejection of a method name not present in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod {
    pub given: String,
}

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown method `{}`; valid methods: {}",
            self.given,
            Method::NAMES.join(", ")
        )
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dhondt" => Ok(Method::DHondt),
            "sainte_lague" => Ok(Method::SainteLague),
            "sainte_lague_modificado" => Ok(Method::SainteLagueModified),
            "hare" => Ok(Method::Hare),
            "droop" => Ok(Method::Droop),
            "hagenbach" => Ok(Method::HagenbachBischoff),
            "imperiali" => Ok(Method::Imperiali),
            other => Err(UnknownMethod {
                given: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registry_name_parses_back() {
        for name in Method::NAMES {
            let m: Method = name.parse().unwrap();
            assert_eq!(m.name(), name);
        }
    }

    #[test]
    fn unknown_name_lists_the_valid_set() {
        let err = "fake_method".parse::<Method>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("fake_method"));
        for name in Method::NAMES {
            assert!(msg.contains(name), "missing {name} in: {msg}");
        }
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let votes: BTreeMap<&str, u64> = [("a", 300), ("b", 100)].into();
        let via_registry = Method::DHondt.allocate(4, &votes);
        let direct = allocate_divisor(4, &votes, DivisorRule::DHondt);
        assert_eq!(via_registry, direct);
    }
}
