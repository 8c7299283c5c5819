//! csb_core — Core types and deterministic ordering helpers.
//!
//! This crate is **I/O-free**. It defines the stable types/APIs used across
//! the engine (`csb_algo`, `csb_pipeline`):
//!
//! - Id newtypes: `CsId`, `CustomerId` (id `0` is reserved)
//! - Entities: `CustomerSuccess`, `Customer`, `Assignment`, `Tally`
//! - Deterministic ordering helpers (stable score comparator)
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod determinism;
pub mod entities;
pub mod ids;

pub use entities::{Assignment, Customer, CustomerSuccess, Score, Tally};
pub use ids::{CsId, CustomerId};
