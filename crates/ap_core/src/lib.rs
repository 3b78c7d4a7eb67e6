//! ap_core — Core types for the apportionment engine.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! engine (`ap_algo`, `ap_pipeline`, `ap_io`, `ap_cli`):
//!
//! - Identifier newtypes: `PartyId`, `RegionId`
//! - Table entities: `Region`, `RegionKind`, `VoteRecord`
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod entities;
pub mod ids;

pub use entities::{Region, RegionKind, VoteRecord};
pub use ids::{IdError, PartyId, RegionId};
