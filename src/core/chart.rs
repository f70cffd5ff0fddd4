//! Aggregate and case-machine contracts.
//!
//! A machine's state is a tree: the root [`StateChart`] holds one or more
//! [`CaseMachine`] fields (or is itself one), and each case machine is a
//! sum type whose variants are [`Case`](super::Case) payloads.

use std::fmt::Debug;

/// The root state container of a machine.
///
/// Every chart declares the effect type its arrows emit. Effects are
/// opaque domain values: the engine only orders and forwards them.
///
/// # Example
///
/// ```rust
/// use casemachines::core::StateChart;
///
/// #[derive(Debug)]
/// enum Signal {
///     Booted,
/// }
///
/// #[derive(Default)]
/// struct Counter {
///     value: u32,
/// }
///
/// impl StateChart for Counter {
///     type Effect = Signal;
///
///     fn on_init(&self) -> Option<Signal> {
///         Some(Signal::Booted)
///     }
/// }
///
/// assert!(Counter::default().on_init().is_some());
/// ```
pub trait StateChart {
    /// Effects emitted by arrows over this chart.
    type Effect: Debug;

    /// Effect delivered once when a dispatcher takes ownership of this value.
    ///
    /// Default implementation returns `None`.
    fn on_init(&self) -> Option<Self::Effect> {
        None
    }
}

/// A tagged union of cases.
///
/// `Default` supplies the machine's initial value. The discriminant only
/// needs to tell cases apart; `std::mem::Discriminant<Self>` is the usual
/// choice and is what [`case_machine!`](crate::case_machine) generates.
pub trait CaseMachine: StateChart + Default {
    /// Tag identifying the active case.
    type Discriminant: Copy + Eq + Debug;

    /// The tag of the currently active case.
    fn discriminant(&self) -> Self::Discriminant;

    /// Effect fired when a move lands in the current case.
    fn on_enter(&self) -> Option<Self::Effect> {
        None
    }

    /// Effect fired when a move leaves the current case.
    fn on_leave(&self) -> Option<Self::Effect> {
        None
    }
}

/// Shorthand for the effect type of a chart.
pub type EffectOf<A> = <A as StateChart>::Effect;
