// crates/ap_algo/src/lib.rs
#![forbid(unsafe_code)]

//! Algorithm layer of the apportionment engine.
//!
//! Pure, deterministic, integer-first seat mathematics over in-memory tables:
//! no I/O, no RNG, no hidden state. Every operation either conserves the
//! requested seat total exactly or fails outright.

pub mod barrier;
pub mod ranking;
pub mod region_seats;
pub mod registry;
pub mod score;

pub mod allocation {
    pub mod divisor;
    pub mod quota;

    pub use divisor::{allocate_divisor, DivisorRule};
    pub use quota::{allocate_quota, QuotaRule};
}

// Tight, explicit re-exports (avoid wildcard export drift).
pub use allocation::{allocate_divisor, allocate_quota, DivisorRule, QuotaRule};
pub use barrier::{filter_by_barrier, BarrierError};
pub use region_seats::{distribute_region_seats, RegionMethod, RegionSeatsError};
pub use registry::{Method, UnknownMethod};
pub use score::{score_proportionality, ScoreError};
