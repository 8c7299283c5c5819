//! Score ranking: ascending by score, stable among equal scores.
//!
//! The ranked roster is wrapped in [`ScoreRanked`] so the distribution stage
//! can rely on the sorted invariant by type instead of re-checking it at
//! runtime. Construction goes through [`rank_by_score`] only.

use csb_core::determinism::{is_ranked_ascending, sort_by_score_stable};
use csb_core::entities::CustomerSuccess;

/// Roster sorted ascending by score; equal scores keep input relative order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRanked(Vec<CustomerSuccess>);

impl ScoreRanked {
    #[inline]
    pub fn as_slice(&self) -> &[CustomerSuccess] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn into_inner(self) -> Vec<CustomerSuccess> {
        self.0
    }
}

/// Rank the available roster ascending by score (stable sort).
pub fn rank_by_score(mut available: Vec<CustomerSuccess>) -> ScoreRanked {
    sort_by_score_stable(&mut available);
    debug_assert!(is_ranked_ascending(&available));
    ScoreRanked(available)
}
