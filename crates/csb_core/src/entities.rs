//! crates/csb_core/src/entities.rs
//! Caller-supplied entities and the derived structures the engine produces.
//! Plain data, integer-only; all lifecycle is per-invocation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{CsId, CustomerId};

/// Compatibility key. For a representative this is capability/seniority;
/// for a customer it is the required service level.
pub type Score = u32;

/// A customer-success representative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomerSuccess {
    pub id: CsId,
    pub score: Score,
}

impl CustomerSuccess {
    #[inline]
    pub const fn new(id: CsId, score: Score) -> Self {
        Self { id, score }
    }
}

/// A customer awaiting assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Customer {
    pub id: CustomerId,
    pub score: Score,
}

impl Customer {
    #[inline]
    pub const fn new(id: CustomerId, score: Score) -> Self {
        Self { id, score }
    }
}

/// One matched customer; derived, at most one per customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub cs_id: CsId,
    pub customer_id: CustomerId,
}

/// Customer count for one representative; present only for counts ≥ 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tally {
    pub cs_id: CsId,
    pub total_customers: u32,
}
