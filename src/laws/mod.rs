//! Conformance laws for hand-written cases and arrows.
//!
//! Generated code satisfies these by construction. Hand-written [`Case`]
//! and [`Arrow`] impls can be checked against sample values in tests;
//! every violation is accumulated rather than stopping at the first.
//!
//! [`Case`]: crate::core::Case
//! [`Arrow`]: crate::arrows::Arrow

pub mod rules;
pub mod violations;

pub use rules::{check_guard_purity, check_round_trip, LawCheck};
pub use violations::LawViolation;
