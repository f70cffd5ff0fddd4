//! Arrows: typed transition objects over an aggregate.
//!
//! Every arrow reduces to one object-safe contract, [`Arrow`]: a pure guard
//! (`should_run`) and an `execute` step that may mutate the aggregate and
//! returns an ordered [`Effects`] bundle. Arrows whose guard fails do
//! nothing at all, which is what makes composition sound.
//!
//! # Arrow kinds
//!
//! Concrete arrows are usually written against one of the kind traits and
//! wired up with [`impl_arrow!`](crate::impl_arrow):
//!
//! | kind            | guard                 | state change            | effects            |
//! |-----------------|-----------------------|-------------------------|--------------------|
//! | [`Do`]          | `enabled` (default on)| none                    | transition         |
//! | [`Move`]        | source case present   | source -> destination   | leave, enter, transition |
//! | [`PureMove`]    | source case present   | source -> destination   | leave, enter       |
//! | [`GoTo`]        | source case present   | constant destination    | leave, enter, transition |
//! | [`CaseMethod`]  | case present          | in place                | transition         |
//! | [`PureMethod`]  | case present          | in place                | none               |
//! | [`Coordinated`] | its composite's guard | its composite's         | its composite's    |
//!
//! Composite arrows ([`IfAll`], [`IfAny`], [`Guarded`]) hold type-erased
//! [`BoxedArrow`]s so that arrows of different kinds can be mixed.

pub mod compose;
pub mod coordinated;
pub mod emit;
pub mod methods;
pub mod moves;

pub use compose::{Guarded, IfAll, IfAny};
pub use coordinated::Coordinated;
pub use emit::{Do, Emit};
pub use methods::{CaseMethod, MethodSignature, PureMethod};
pub use moves::{GoTo, Move, MoveSignature, PureMove};

use crate::core::{EffectOf, Effects, Guard, StateChart};

/// A transition descriptor over aggregate `A`.
///
/// Arrows are transient: built by the caller, executed once and dropped.
/// `execute` must be side-effect free whenever `should_run` is false.
pub trait Arrow<A: StateChart> {
    /// Whether executing now would do anything. Must be pure.
    fn should_run(&self, _state: &A) -> bool {
        true
    }

    /// Apply the arrow, returning the effects it produced.
    fn execute(&self, state: &mut A) -> Effects<EffectOf<A>>;

    /// Name used in traces.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A type-erased arrow, the element type of composites and queues.
pub type BoxedArrow<A> = Box<dyn Arrow<A>>;

impl<A: StateChart, T: Arrow<A> + ?Sized> Arrow<A> for Box<T> {
    fn should_run(&self, state: &A) -> bool {
        (**self).should_run(state)
    }

    fn execute(&self, state: &mut A) -> Effects<EffectOf<A>> {
        (**self).execute(state)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Combinators available on every arrow.
pub trait ArrowExt<A: StateChart>: Arrow<A> + Sized + 'static {
    /// Erase the concrete arrow type.
    fn boxed(self) -> BoxedArrow<A> {
        Box::new(self)
    }

    /// Only run while `predicate` also holds.
    fn when<F>(self, predicate: F) -> Guarded<A, Self>
    where
        F: Fn(&A) -> bool + 'static,
    {
        Guarded::new(Guard::new(predicate), self)
    }

    /// Run both arrows, but only if both guards hold beforehand.
    fn and<T: Arrow<A> + 'static>(self, other: T) -> IfAll<A> {
        IfAll::new().with(self).with(other)
    }

    /// Run every arrow of the pair whose guard holds.
    fn or<T: Arrow<A> + 'static>(self, other: T) -> IfAny<A> {
        IfAny::new().with(self).with(other)
    }
}

impl<A: StateChart, T: Arrow<A> + 'static> ArrowExt<A> for T {}
