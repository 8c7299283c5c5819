//! csb_pipeline — deterministic pipeline surface
//! (filter → rank → distribute → aggregate → resolve).
//!
//! This crate stays I/O-free and delegates stage math to `csb_algo`. It owns
//! the public entry points, the audit sidecar, and input validation. The
//! balancing path never fails for structurally valid input; validation is a
//! separate pre-flight (see [`validate`]) and only the opt-in [`run_strict`]
//! turns its errors into `Err`.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use thiserror::Error;

use csb_algo::{
    distribute, filter_available, rank_by_score, resolve_unique_max, tally_assignments,
    Resolution,
};
use csb_core::{
    entities::{Assignment, Customer, CustomerSuccess, Tally},
    ids::{CsId, CustomerId},
};

pub mod validate;

pub use validate::{EntityRef, Severity, ValidationIssue, ValidationReport};

// ---------------------------------- Inputs ----------------------------------

/// The three caller-supplied collections, typed.
#[derive(Clone, Debug, Default)]
pub struct BalanceInput {
    pub roster: Vec<CustomerSuccess>,
    pub customers: Vec<Customer>,
    pub away: BTreeSet<CsId>,
}

impl BalanceInput {
    /// Build from raw `(id, score)` pairs and raw away ids.
    pub fn from_raw(roster: &[(u32, u32)], customers: &[(u32, u32)], away: &[u32]) -> Self {
        Self {
            roster: roster
                .iter()
                .map(|&(id, score)| CustomerSuccess::new(CsId::new(id), score))
                .collect(),
            customers: customers
                .iter()
                .map(|&(id, score)| Customer::new(CustomerId::new(id), score))
                .collect(),
            away: away.iter().map(|&id| CsId::new(id)).collect(),
        }
    }
}

// ------------------------------ Audit sidecar -------------------------------

/// Deterministic by-products of a balancing run. Purely informational;
/// computing the audit never changes the outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceAudit {
    /// Roster size after the availability filter.
    pub available: usize,
    /// One entry per matched customer, input customer order.
    pub assignments: Vec<Assignment>,
    /// Per-representative counts, first-occurrence order.
    pub tallies: Vec<Tally>,
    /// Customers no available representative could serve, input order.
    pub unassigned: Vec<CustomerId>,
}

/// Outputs of a strict run: outcome plus sidecars.
#[derive(Clone, Debug)]
pub struct BalanceOutputs {
    pub resolution: Resolution,
    pub audit: BalanceAudit,
    pub validation: ValidationReport,
}

// ------------------------------ Error surface -------------------------------

/// Strict-mode rejection; one variant per validation error class.
/// Warnings never fail strict mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("duplicate representative id {0}")]
    DuplicateCsId(CsId),
    #[error("duplicate customer id {0}")]
    DuplicateCustomerId(CustomerId),
    #[error("representative id {0} is reserved for the sentinel")]
    ReservedCsId(CsId),
}

// -------------------------------- Public API --------------------------------

/// Typed pipeline: the sole representative that uniquely received the
/// largest share of customers, or `None` when nothing was distributed or
/// the maximum is tied. Never fails for structurally valid input.
pub fn balance(
    roster: &[CustomerSuccess],
    customers: &[Customer],
    away: &BTreeSet<CsId>,
) -> Option<CsId> {
    let ranked = rank_by_score(filter_available(roster, away));
    let assignments = distribute(customers, &ranked);
    resolve_unique_max(&tally_assignments(&assignments)).winner()
}

/// Same pipeline, returning the full resolution plus the audit sidecar.
pub fn balance_with_audit(
    roster: &[CustomerSuccess],
    customers: &[Customer],
    away: &BTreeSet<CsId>,
) -> (Resolution, BalanceAudit) {
    let ranked = rank_by_score(filter_available(roster, away));

    // A customer is unservable iff its score exceeds the highest ranked
    // score (the ranking is ascending, so that is the last entry).
    let cap = ranked.as_slice().last().map(|cs| cs.score);
    let unassigned: Vec<CustomerId> = customers
        .iter()
        .filter(|c| cap.map_or(true, |cap| c.score > cap))
        .map(|c| c.id)
        .collect();

    let assignments = distribute(customers, &ranked);
    let tallies = tally_assignments(&assignments);
    let resolution = resolve_unique_max(&tallies);

    let audit = BalanceAudit {
        available: ranked.len(),
        assignments,
        tallies,
        unassigned,
    };
    (resolution, audit)
}

/// Sentinel-compatible entry point over raw `(id, score)` pairs.
///
/// Returns the winning representative id, or `0` when no customers were
/// distributed or the maximum is tied among several representatives. Because
/// `0` doubles as the sentinel, roster ids must start at 1 (the validation
/// stage flags id `0`).
pub fn customer_success_balancing(
    customer_success: &[(u32, u32)],
    customers: &[(u32, u32)],
    customer_success_away: &[u32],
) -> u32 {
    let input = BalanceInput::from_raw(customer_success, customers, customer_success_away);
    balance(&input.roster, &input.customers, &input.away)
        .map_or(0, CsId::as_u32)
}

/// Opt-in strict mode: validate first, reject inputs whose report contains
/// errors, otherwise run the pipeline and return outcome + sidecars.
pub fn run_strict(input: &BalanceInput) -> Result<BalanceOutputs, BalanceError> {
    let validation = validate::validate_inputs(input);
    if let Some(err) = validation
        .issues
        .iter()
        .find_map(validate::error_for_issue)
    {
        return Err(err);
    }

    let (resolution, audit) = balance_with_audit(&input.roster, &input.customers, &input.away);
    Ok(BalanceOutputs {
        resolution,
        audit,
        validation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(roster: &[(u32, u32)], customers: &[(u32, u32)], away: &[u32]) -> BalanceInput {
        BalanceInput::from_raw(roster, customers, away)
    }

    #[test]
    fn audit_accounts_for_every_customer() {
        let input = input(
            &[(1, 60), (2, 20)],
            &[(1, 10), (2, 50), (3, 99)],
            &[],
        );
        let (resolution, audit) = balance_with_audit(&input.roster, &input.customers, &input.away);
        assert_eq!(audit.available, 2);
        assert_eq!(audit.assignments.len(), 2);
        assert_eq!(audit.unassigned, vec![CustomerId::new(3)]);
        assert_eq!(
            audit.assignments.len() + audit.unassigned.len(),
            input.customers.len()
        );
        // CS 2 serves customer 1, CS 1 serves customer 2: a tie.
        assert_eq!(resolution.winner(), None);
    }

    #[test]
    fn empty_roster_leaves_everyone_unassigned() {
        let input = input(&[], &[(1, 10)], &[]);
        let (resolution, audit) = balance_with_audit(&input.roster, &input.customers, &input.away);
        assert_eq!(resolution, Resolution::NoAssignments);
        assert_eq!(audit.available, 0);
        assert_eq!(audit.unassigned, vec![CustomerId::new(1)]);
    }

    #[test]
    fn strict_mode_rejects_duplicate_roster_ids() {
        let input = input(&[(1, 10), (1, 20)], &[(1, 5)], &[]);
        let err = run_strict(&input).unwrap_err();
        assert_eq!(err, BalanceError::DuplicateCsId(CsId::new(1)));
    }

    #[test]
    fn strict_mode_rejects_reserved_id() {
        let input = input(&[(0, 10)], &[(1, 5)], &[]);
        let err = run_strict(&input).unwrap_err();
        assert_eq!(err, BalanceError::ReservedCsId(CsId::new(0)));
    }

    #[test]
    fn strict_mode_passes_warnings_through() {
        // Unknown away id is a warning, not an error.
        let input = input(&[(1, 10)], &[(1, 5)], &[99]);
        let out = run_strict(&input).expect("warnings must not fail strict mode");
        assert!(out.validation.pass);
        assert!(out
            .validation
            .issues
            .iter()
            .any(|i| i.severity == Severity::Warning));
        assert_eq!(out.resolution.winner(), Some(CsId::new(1)));
    }
}
