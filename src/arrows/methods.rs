//! Case methods: in-place mutation of the active case.
//!
//! A method never changes which case is active, so it contributes only
//! transition effects.

use crate::core::{Case, CaseMachine, EffectOf, Effects, Lens, StateChart};

/// Shape shared by every method kind.
pub trait MethodSignature {
    type Aggregate: StateChart;
    type Field: CaseMachine<Effect = EffectOf<Self::Aggregate>>;
    /// The case the method mutates.
    type Case: Case<Machine = Self::Field>;

    fn field(&self) -> Lens<Self::Aggregate, Self::Field>;
}

/// Mutates the case and may emit a case-local effect.
pub trait CaseMethod: MethodSignature {
    fn apply(&self, case: &mut Self::Case) -> Option<<Self::Case as Case>::Effect>;
}

/// Mutates the case without emitting anything.
pub trait PureMethod: MethodSignature {
    fn apply(&self, case: &mut Self::Case);
}

pub fn should_run<T: MethodSignature + ?Sized>(arrow: &T, state: &T::Aggregate) -> bool {
    arrow
        .field()
        .get(state)
        .and_then(|field| T::Case::extract(field))
        .is_some()
}

pub fn execute_method<T: CaseMethod + ?Sized>(
    arrow: &T,
    state: &mut T::Aggregate,
) -> Effects<EffectOf<T::Aggregate>> {
    let Some(field) = arrow.field().get_mut(state) else {
        return Effects::none();
    };
    Effects::from_transition(T::Case::try_modify(field, |case| arrow.apply(case)))
}

pub fn execute_pure_method<T: PureMethod + ?Sized>(
    arrow: &T,
    state: &mut T::Aggregate,
) -> Effects<EffectOf<T::Aggregate>> {
    if let Some(field) = arrow.field().get_mut(state) {
        T::Case::try_modify(field, |case| {
            arrow.apply(case);
            None
        });
    }
    Effects::none()
}
