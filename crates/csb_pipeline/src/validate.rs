//! crates/csb_pipeline/src/validate.rs
//! Structural validation before any computation.
//! Deterministic outputs; pure integer reasoning.
//!
//! The balancing path assumes unique ids and non-reserved roster ids but
//! never enforces them; this module surfaces violations as a report callers
//! (or [`crate::run_strict`]) can act on. Warnings describe inputs that are
//! legal but probably unintended.

use std::collections::BTreeSet;

use csb_core::ids::{CsId, CustomerId};

use crate::{BalanceError, BalanceInput};

/// Issue severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Where the issue occurred (kept small & deterministic).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntityRef {
    Root,
    Cs(CsId),
    Customer(CustomerId),
}

/// One validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    pub where_: EntityRef,
}

/// Deterministic report: pass = (no Error); ordering of issues is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub pass: bool,
    pub issues: Vec<ValidationIssue>,
}

/// Top-level entry point.
pub fn validate_inputs(input: &BalanceInput) -> ValidationReport {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    issues.extend(check_roster_ids(input));
    issues.extend(check_customer_ids(input));
    issues.extend(check_away_set(input));

    // Deterministic sort (by code, then location, then message) for
    // byte-identical reports.
    sort_issues_stably(&mut issues);

    ValidationReport {
        pass: !issues.iter().any(|i| i.severity == Severity::Error),
        issues,
    }
}

/// Map a validation error issue onto the strict-mode error surface.
/// Warnings map to `None`.
pub(crate) fn error_for_issue(issue: &ValidationIssue) -> Option<BalanceError> {
    match (issue.code, issue.where_) {
        ("duplicate_cs_id", EntityRef::Cs(id)) => Some(BalanceError::DuplicateCsId(id)),
        ("reserved_cs_id", EntityRef::Cs(id)) => Some(BalanceError::ReservedCsId(id)),
        ("duplicate_customer_id", EntityRef::Customer(id)) => {
            Some(BalanceError::DuplicateCustomerId(id))
        }
        _ => None,
    }
}

// ------------------------------------------------------------------------------------------------
// Helpers / checks
// ------------------------------------------------------------------------------------------------

fn check_roster_ids(input: &BalanceInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen: BTreeSet<CsId> = BTreeSet::new();
    let mut reported: BTreeSet<CsId> = BTreeSet::new();

    for cs in &input.roster {
        if cs.id.is_reserved() && reported.insert(cs.id) {
            issues.push(ValidationIssue {
                severity: Severity::Error,
                code: "reserved_cs_id",
                message: format!("representative id {} collides with the sentinel", cs.id),
                where_: EntityRef::Cs(cs.id),
            });
        }
        if !seen.insert(cs.id) && reported.insert(cs.id) {
            issues.push(ValidationIssue {
                severity: Severity::Error,
                code: "duplicate_cs_id",
                message: format!("representative id {} appears more than once", cs.id),
                where_: EntityRef::Cs(cs.id),
            });
        }
    }
    issues
}

fn check_customer_ids(input: &BalanceInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen: BTreeSet<CustomerId> = BTreeSet::new();
    let mut reported: BTreeSet<CustomerId> = BTreeSet::new();

    for customer in &input.customers {
        if !seen.insert(customer.id) && reported.insert(customer.id) {
            issues.push(ValidationIssue {
                severity: Severity::Error,
                code: "duplicate_customer_id",
                message: format!("customer id {} appears more than once", customer.id),
                where_: EntityRef::Customer(customer.id),
            });
        }
    }
    issues
}

fn check_away_set(input: &BalanceInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let roster_ids: BTreeSet<CsId> = input.roster.iter().map(|cs| cs.id).collect();

    for &away_id in &input.away {
        if !roster_ids.contains(&away_id) {
            issues.push(ValidationIssue {
                severity: Severity::Warning,
                code: "away_id_unknown",
                message: format!("away id {away_id} is not in the roster"),
                where_: EntityRef::Cs(away_id),
            });
        }
    }

    if !input.roster.is_empty() && roster_ids.iter().all(|id| input.away.contains(id)) {
        issues.push(ValidationIssue {
            severity: Severity::Warning,
            code: "roster_fully_away",
            message: "every representative is away; no customer can be assigned".to_string(),
            where_: EntityRef::Root,
        });
    }

    issues
}

fn sort_issues_stably(issues: &mut [ValidationIssue]) {
    issues.sort_by(|a, b| {
        a.code
            .cmp(b.code)
            .then_with(|| a.where_.cmp(&b.where_))
            .then_with(|| a.message.cmp(&b.message))
    });
}
