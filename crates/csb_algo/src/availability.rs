//! Availability filter: drop representatives currently away.
//!
//! Order-preserving subset; pure, no errors. An empty roster or a fully-away
//! roster yields an empty output, which downstream stages handle as
//! "no winner".

use std::collections::BTreeSet;

use csb_core::entities::CustomerSuccess;
use csb_core::ids::CsId;

/// Representatives whose id is not in `away`, input order preserved.
pub fn filter_available(roster: &[CustomerSuccess], away: &BTreeSet<CsId>) -> Vec<CustomerSuccess> {
    roster
        .iter()
        .filter(|cs| !away.contains(&cs.id))
        .copied()
        .collect()
}
