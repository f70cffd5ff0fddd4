//! Unconditional effect emission.

use super::Arrow;
use crate::core::{EffectOf, Effects, StateChart};

/// An arrow that only emits an effect and never touches state.
pub trait Do {
    type Aggregate: StateChart;

    /// The effect to emit.
    fn effect(&self) -> EffectOf<Self::Aggregate>;

    /// Extra condition for emitting. Default implementation returns `true`.
    fn enabled(&self, _state: &Self::Aggregate) -> bool {
        true
    }
}

pub fn should_run<T: Do + ?Sized>(arrow: &T, state: &T::Aggregate) -> bool {
    arrow.enabled(state)
}

/// Emit `arrow.effect()` as a transition effect if enabled.
pub fn execute<T: Do + ?Sized>(
    arrow: &T,
    state: &mut T::Aggregate,
) -> Effects<EffectOf<T::Aggregate>> {
    if !arrow.enabled(state) {
        return Effects::none();
    }
    Effects::transition(arrow.effect())
}

/// Ready-made [`Do`] arrow carrying a constant effect.
pub struct Emit<A: StateChart> {
    effect: EffectOf<A>,
}

impl<A: StateChart> Emit<A> {
    pub fn new(effect: EffectOf<A>) -> Self {
        Self { effect }
    }
}

impl<A: StateChart> Do for Emit<A>
where
    EffectOf<A>: Clone,
{
    type Aggregate = A;

    fn effect(&self) -> EffectOf<A> {
        self.effect.clone()
    }
}

impl<A: StateChart> Arrow<A> for Emit<A>
where
    EffectOf<A>: Clone,
{
    fn should_run(&self, state: &A) -> bool {
        should_run(self, state)
    }

    fn execute(&self, state: &mut A) -> Effects<EffectOf<A>> {
        execute(self, state)
    }
}
