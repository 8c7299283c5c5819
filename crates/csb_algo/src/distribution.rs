//! Distribution: match each customer to the least-capable sufficient
//! representative (deterministic; integers only; no RNG).
//!
//! Contract:
//! - The roster is ranked ascending by score (witnessed by `ScoreRanked`),
//!   so "first representative with score ≥ customer score" is the leftmost
//!   qualifying index, i.e. a standard lower-bound search.
//! - Among equal-score representatives the stable ranking puts the earliest
//!   input entry first, so the lower bound lands on it.
//! - A customer whose score exceeds every ranked score is skipped: no
//!   assignment, no error.
//! - Output order follows input customer order, minus skipped customers.

use csb_core::entities::{Assignment, Customer};

use crate::ordering::ScoreRanked;

/// Assign each customer to the first ranked representative that can serve it.
pub fn distribute(customers: &[Customer], ranked: &ScoreRanked) -> Vec<Assignment> {
    let roster = ranked.as_slice();
    let mut out: Vec<Assignment> = Vec::with_capacity(customers.len());

    for customer in customers {
        // Lower bound: leftmost index with roster[idx].score >= customer.score.
        let idx = roster.partition_point(|cs| cs.score < customer.score);
        if let Some(cs) = roster.get(idx) {
            out.push(Assignment {
                cs_id: cs.id,
                customer_id: customer.id,
            });
        }
    }

    out
}
