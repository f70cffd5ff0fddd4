//! Moves: arrows that replace one case of a field with another.
//!
//! All three move kinds share [`MoveSignature`], which names the field and
//! the source and destination cases. They differ only in how the
//! destination is computed. Boundary effects are derived by comparing the
//! field's discriminant before and after embedding: `on_leave` of the old
//! case and `on_enter` of the new one are emitted only when it changed.

use crate::core::{
    violated, Case, CaseMachine, EffectOf, Effects, InvariantViolation, Lens, StateChart,
};

/// Shape shared by every move kind.
pub trait MoveSignature {
    type Aggregate: StateChart;
    /// The case machine field the move operates on.
    type Field: CaseMachine<Effect = EffectOf<Self::Aggregate>>;
    type From: Case<Machine = Self::Field>;
    type To: Case<Machine = Self::Field>;

    /// Path from the aggregate to the field.
    fn field(&self) -> Lens<Self::Aggregate, Self::Field>;
}

/// A move computing its destination and an optional effect from the source.
pub trait Move: MoveSignature {
    fn advance(&self, from: &Self::From) -> (Self::To, Option<EffectOf<Self::Aggregate>>);
}

/// A move computing only its destination.
pub trait PureMove: MoveSignature {
    fn advance(&self, from: &Self::From) -> Self::To;
}

/// A jump to a constant destination.
pub trait GoTo: MoveSignature {
    fn target(&self) -> Self::To;

    /// Effect emitted by the jump. Default implementation returns `None`.
    fn effect(&self) -> Option<EffectOf<Self::Aggregate>> {
        None
    }
}

/// A move can run while its field is reachable and holds the source case.
pub fn should_run<T: MoveSignature + ?Sized>(arrow: &T, state: &T::Aggregate) -> bool {
    arrow
        .field()
        .get(state)
        .and_then(|field| T::From::extract(field))
        .is_some()
}

pub fn execute_move<T: Move + ?Sized>(
    arrow: &T,
    state: &mut T::Aggregate,
) -> Effects<EffectOf<T::Aggregate>> {
    cross(arrow, state, |from| arrow.advance(from))
}

pub fn execute_pure_move<T: PureMove + ?Sized>(
    arrow: &T,
    state: &mut T::Aggregate,
) -> Effects<EffectOf<T::Aggregate>> {
    cross(arrow, state, |from| (arrow.advance(from), None))
}

pub fn execute_go_to<T: GoTo + ?Sized>(
    arrow: &T,
    state: &mut T::Aggregate,
) -> Effects<EffectOf<T::Aggregate>> {
    cross(arrow, state, |_| (arrow.target(), arrow.effect()))
}

fn cross<T, F>(arrow: &T, state: &mut T::Aggregate, transform: F) -> Effects<EffectOf<T::Aggregate>>
where
    T: MoveSignature + ?Sized,
    F: FnOnce(&T::From) -> (T::To, Option<EffectOf<T::Aggregate>>),
{
    let Some(field) = arrow.field().get_mut(state) else {
        return Effects::none();
    };
    let Some(from) = T::From::extract(field) else {
        return Effects::none();
    };

    let before = field.discriminant();
    let leaving = field.on_leave();
    let (next, effect) = transform(from);

    next.embed(field);
    if T::To::extract(field).is_none() {
        violated(InvariantViolation::EmbedMismatch {
            case: std::any::type_name::<T::To>(),
        });
    }

    let mut effects = Effects::from_transition(effect);
    if field.discriminant() != before {
        effects.on_leave.extend(leaving);
        effects.on_enter.extend(field.on_enter());
    }
    effects
}
