//! Law violations reported by the conformance checks.

use thiserror::Error;

/// A broken law found by [`check_round_trip`](super::check_round_trip) or
/// [`check_guard_purity`](super::check_guard_purity).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LawViolation {
    #[error("case {case}: embedding {sample} produced a machine that does not extract it")]
    ExtractFailed { case: &'static str, sample: String },

    #[error("case {case}: embedded {expected} but extracted {found}")]
    RoundTripMismatch {
        case: &'static str,
        expected: String,
        found: String,
    },

    #[error("arrow {arrow}: guard gave different answers for the same state {state}")]
    UnstableGuard { arrow: &'static str, state: String },

    #[error("arrow {arrow}: guard failed but execute changed {state}")]
    GuardMissMutated { arrow: &'static str, state: String },

    #[error("arrow {arrow}: guard failed but execute emitted {count} effects")]
    GuardMissEmitted { arrow: &'static str, count: usize },
}
