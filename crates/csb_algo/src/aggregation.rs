//! Aggregation: tally assignments per representative.
//!
//! One entry per distinct `cs_id` present in the assignment list, in order
//! of first occurrence. Representatives with zero assignments are absent
//! (never present with count 0).

use std::collections::BTreeMap;

use csb_core::entities::{Assignment, Tally};
use csb_core::ids::CsId;

/// Count assignments per representative, first-occurrence order.
pub fn tally_assignments(assignments: &[Assignment]) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = Vec::new();
    let mut index: BTreeMap<CsId, usize> = BTreeMap::new();

    for assignment in assignments {
        match index.get(&assignment.cs_id).copied() {
            Some(i) => tallies[i].total_customers += 1,
            None => {
                index.insert(assignment.cs_id, tallies.len());
                tallies.push(Tally {
                    cs_id: assignment.cs_id,
                    total_customers: 1,
                });
            }
        }
    }

    tallies
}

#[cfg(test)]
mod tests {
    use super::*;
    use csb_core::ids::CustomerId;

    fn assignment(cs: u32, customer: u32) -> Assignment {
        Assignment {
            cs_id: CsId::new(cs),
            customer_id: CustomerId::new(customer),
        }
    }

    #[test]
    fn counts_per_cs_in_first_occurrence_order() {
        let assignments = [
            assignment(3, 1),
            assignment(1, 2),
            assignment(3, 3),
            assignment(1, 4),
            assignment(3, 5),
        ];
        let tallies = tally_assignments(&assignments);
        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].cs_id, CsId::new(3));
        assert_eq!(tallies[0].total_customers, 3);
        assert_eq!(tallies[1].cs_id, CsId::new(1));
        assert_eq!(tallies[1].total_customers, 2);
    }

    #[test]
    fn empty_assignments_yield_empty_tally() {
        assert!(tally_assignments(&[]).is_empty());
    }

    #[test]
    fn absent_means_absent_not_zero() {
        let tallies = tally_assignments(&[assignment(7, 1)]);
        assert_eq!(tallies.len(), 1);
        assert!(tallies.iter().all(|t| t.total_customers >= 1));
    }
}
