//! Max-and-tie resolution (deterministic; no RNG).
//!
//! Scan the tally list once, tracking the maximum count and everyone tied at
//! it. Exactly one representative at the maximum wins; zero entries or a tie
//! yields no winner. There is no tie-breaking policy, by contract.

use csb_core::entities::Tally;
use csb_core::ids::CsId;

/// Outcome of scanning the tallies for a unique maximum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Empty tally list: no customers were distributed.
    NoAssignments,
    /// A single representative holds the maximum count.
    Winner { cs_id: CsId, total: u32 },
    /// Two or more representatives share the maximum count; contenders in
    /// tally (first-occurrence) order.
    TiedAtMax { total: u32, contenders: Vec<CsId> },
}

impl Resolution {
    /// The unique winner, if any.
    #[inline]
    pub fn winner(&self) -> Option<CsId> {
        match self {
            Resolution::Winner { cs_id, .. } => Some(*cs_id),
            _ => None,
        }
    }
}

/// Scan tallies and return the sole representative at the maximum, or the
/// reason there is none.
pub fn resolve_unique_max(tallies: &[Tally]) -> Resolution {
    let mut max_count: u32 = 0;
    let mut tied: Vec<CsId> = Vec::new();

    for tally in tallies {
        if tally.total_customers > max_count {
            max_count = tally.total_customers;
            tied.clear();
            tied.push(tally.cs_id);
        } else if tally.total_customers == max_count {
            tied.push(tally.cs_id);
        }
    }

    match tied.len() {
        0 => Resolution::NoAssignments,
        1 => Resolution::Winner {
            cs_id: tied[0],
            total: max_count,
        },
        _ => Resolution::TiedAtMax {
            total: max_count,
            contenders: tied,
        },
    }
}
