// crates/csb_algo/src/lib.rs
#![forbid(unsafe_code)]

// Core ids and entities
pub use csb_core::{
    entities::{Assignment, Customer, CustomerSuccess, Score, Tally},
    ids::{CsId, CustomerId},
};

// ----------------------------- Stages (public surface) -----------------------------

// File modules (actual implementations)
pub mod aggregation;
pub mod availability;
pub mod distribution;
pub mod ordering;
pub mod resolution;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use aggregation::tally_assignments;
pub use availability::filter_available;
pub use distribution::distribute;
pub use ordering::{rank_by_score, ScoreRanked};
pub use resolution::{resolve_unique_max, Resolution};
