//! Identifier newtypes for parties and electoral regions.
//! Deterministic, ASCII-only, strict shapes; no I/O.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned when validating or parsing identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    Empty,
    NonAscii,
    TooLong,
    BadShape,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::Empty => write!(f, "identifier is empty"),
            IdError::NonAscii => write!(f, "identifier contains non-ASCII bytes"),
            IdError::TooLong => write!(f, "identifier exceeds 64 bytes"),
            IdError::BadShape => write!(f, "identifier has characters outside [A-Za-z0-9_.:-]"),
        }
    }
}

impl std::error::Error for IdError {}

const TOKEN_MAX_LEN: usize = 64;

/// Token shape for party identifiers: ^[A-Za-z0-9_.:-]{1,64}$ (ASCII only).
#[inline]
pub fn is_valid_token(s: &str) -> bool {
    let bs = s.as_bytes();
    if bs.is_empty() || bs.len() > TOKEN_MAX_LEN {
        return false;
    }
    bs.iter().all(|&b| {
        b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b == b':' || b == b'-'
    })
}

/// Party identifier (string key, typically initials such as `PSOE` or `party_a`).
///
/// Ordering is lexicographic on the token; every deterministic tie-break in the
/// engine bottoms out on this ordering.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PartyId(String);

impl PartyId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartyId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PartyId {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        if !s.is_ascii() {
            return Err(IdError::NonAscii);
        }
        if s.len() > TOKEN_MAX_LEN {
            return Err(IdError::TooLong);
        }
        if !is_valid_token(s) {
            return Err(IdError::BadShape);
        }
        Ok(PartyId(s.to_owned()))
    }
}

impl TryFrom<&str> for PartyId {
    type Error = IdError;
    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Region (constituency) identifier, stable across the votes and regions tables.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RegionId(pub u32);

impl RegionId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RegionId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RegionId {
    #[inline]
    fn from(v: u32) -> Self {
        RegionId(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_token_shapes() {
        assert!("party_a".parse::<PartyId>().is_ok());
        assert!("PSOE".parse::<PartyId>().is_ok());
        assert!("a.b:c-d".parse::<PartyId>().is_ok());
        assert_eq!("".parse::<PartyId>(), Err(IdError::Empty));
        assert_eq!("has space".parse::<PartyId>(), Err(IdError::BadShape));
        assert_eq!("ñ".parse::<PartyId>(), Err(IdError::NonAscii));
        let long = "x".repeat(65);
        assert_eq!(long.parse::<PartyId>(), Err(IdError::TooLong));
    }

    #[test]
    fn party_ordering_is_lexicographic() {
        let a: PartyId = "party_a".parse().unwrap();
        let b: PartyId = "party_b".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn region_id_roundtrip() {
        let r = RegionId::from(7);
        assert_eq!(r.as_u32(), 7);
        assert_eq!(r.to_string(), "7");
    }
}
