//! Core state contracts.
//!
//! This module contains the pure vocabulary every machine is built from:
//! - [`StateChart`] and [`CaseMachine`] for aggregates and sum-typed fields
//! - [`Case`] for the extract/embed contract of a single variant
//! - [`Lens`] for addressing a field inside an aggregate
//! - [`Effects`] for the ordered leave/enter/transition bundle
//! - [`Guard`] predicates
//!
//! Nothing here performs I/O or owns state; execution lives in
//! [`crate::arrows`] and [`crate::dispatch`].

mod case;
mod chart;
mod effects;
mod error;
mod guard;
mod lens;

pub use case::Case;
pub use chart::{CaseMachine, EffectOf, StateChart};
pub use effects::Effects;
pub use error::{violated, InvariantViolation};
pub use guard::Guard;
pub use lens::Lens;
