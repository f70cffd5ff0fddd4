//! The extract/embed contract between a case and its enclosing machine.

use super::chart::{CaseMachine, EffectOf};

/// One variant payload of a [`CaseMachine`].
///
/// Implementations must obey the round-trip law: embedding a value and
/// extracting it again yields an equal value. [`crate::laws::check_round_trip`]
/// verifies this for sample values.
///
/// Case-local effects are lifted into the machine's effect type through
/// `Into`, so a case may emit a narrower type than its machine.
///
/// # Example
///
/// ```rust
/// use casemachines::core::{Case, CaseMachine, StateChart};
///
/// #[derive(Debug, PartialEq)]
/// struct Idle;
///
/// #[derive(Debug)]
/// enum Worker {
///     Idle(Idle),
///     Busy(u32),
/// }
///
/// impl Default for Worker {
///     fn default() -> Self {
///         Self::Idle(Idle)
///     }
/// }
///
/// impl StateChart for Worker {
///     type Effect = ();
/// }
///
/// impl CaseMachine for Worker {
///     type Discriminant = std::mem::Discriminant<Self>;
///
///     fn discriminant(&self) -> Self::Discriminant {
///         std::mem::discriminant(self)
///     }
/// }
///
/// impl Case for Idle {
///     type Machine = Worker;
///     type Effect = ();
///
///     fn extract(machine: &Worker) -> Option<&Self> {
///         match machine {
///             Worker::Idle(idle) => Some(idle),
///             _ => None,
///         }
///     }
///
///     fn extract_mut(machine: &mut Worker) -> Option<&mut Self> {
///         match machine {
///             Worker::Idle(idle) => Some(idle),
///             _ => None,
///         }
///     }
///
///     fn embed(self, machine: &mut Worker) {
///         *machine = Worker::Idle(self);
///     }
/// }
///
/// let mut worker = Worker::Busy(3);
/// assert!(Idle::extract(&worker).is_none());
/// Idle.embed(&mut worker);
/// assert_eq!(Idle::extract(&worker), Some(&Idle));
/// ```
pub trait Case: Sized {
    /// The sum type this case belongs to.
    type Machine: CaseMachine;

    /// Effects emitted by methods on this case, lifted with `Into`.
    type Effect: Into<EffectOf<Self::Machine>>;

    /// Borrow the payload if the machine is currently in this case.
    fn extract(machine: &Self::Machine) -> Option<&Self>;

    /// Mutably borrow the payload if the machine is currently in this case.
    fn extract_mut(machine: &mut Self::Machine) -> Option<&mut Self>;

    /// Replace the machine's current value with this case.
    fn embed(self, machine: &mut Self::Machine);

    /// Effect fired when a move lands in this case.
    fn on_enter(&self) -> Option<Self::Effect> {
        None
    }

    /// Effect fired when a move leaves this case.
    fn on_leave(&self) -> Option<Self::Effect> {
        None
    }

    /// Run `modify` against the payload in place and lift its effect.
    ///
    /// If the machine is not in this case nothing happens and `None` is
    /// returned; this is what makes case methods guarded. The payload is
    /// borrowed, never detached, so it stays embedded on every exit path.
    fn try_modify<F>(machine: &mut Self::Machine, modify: F) -> Option<EffectOf<Self::Machine>>
    where
        F: FnOnce(&mut Self) -> Option<Self::Effect>,
    {
        Self::extract_mut(machine).and_then(modify).map(Into::into)
    }
}
