//! Invariant violations: composition bugs that abort instead of returning.

use thiserror::Error;

/// Conditions that can only arise from an incorrect case or arrow
/// implementation. They are never returned; [`violated`] logs and panics.
///
/// Guard misses are not violations: they are silent no-ops.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("case '{case}' was embedded but its machine does not extract it")]
    EmbedMismatch { case: &'static str },

    #[error("dispatcher '{label}' was reused after a dispatch loop unwound with {pending} queued arrows")]
    Poisoned { label: String, pending: usize },
}

/// Abort on an invariant violation.
#[track_caller]
pub fn violated(violation: InvariantViolation) -> ! {
    tracing::error!(%violation, "invariant violation");
    panic!("{violation}")
}
