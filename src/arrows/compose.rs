//! Guarded composition of arrows.

use super::{Arrow, BoxedArrow};
use crate::core::{EffectOf, Effects, Guard, StateChart};

// Builder surface shared by the list composites. `$join` is the chaining
// alias that keeps `a.and(b).and(c)` flat.
macro_rules! arrow_list {
    ($(#[$meta:meta])* $name:ident, $join:ident) => {
        $(#[$meta])*
        pub struct $name<A: StateChart> {
            arrows: Vec<BoxedArrow<A>>,
        }

        impl<A: StateChart> $name<A> {
            pub fn new() -> Self {
                Self { arrows: Vec::new() }
            }

            /// Append an arrow.
            pub fn with<T: Arrow<A> + 'static>(mut self, arrow: T) -> Self {
                self.arrows.push(Box::new(arrow));
                self
            }

            #[doc = concat!("Append an arrow; same as [`", stringify!($name), "::with`].")]
            pub fn $join<T: Arrow<A> + 'static>(self, arrow: T) -> Self {
                self.with(arrow)
            }

            pub fn push(&mut self, arrow: BoxedArrow<A>) {
                self.arrows.push(arrow);
            }

            pub fn len(&self) -> usize {
                self.arrows.len()
            }

            pub fn is_empty(&self) -> bool {
                self.arrows.is_empty()
            }
        }

        impl<A: StateChart> Default for $name<A> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<A: StateChart> From<Vec<BoxedArrow<A>>> for $name<A> {
            fn from(arrows: Vec<BoxedArrow<A>>) -> Self {
                Self { arrows }
            }
        }
    };
}

arrow_list! {
    /// AND composition: runs every arrow, or none of them.
    ///
    /// All guards are evaluated against the aggregate as it is before the
    /// first arrow runs; they are not re-evaluated between arrows. If any
    /// guard fails the composite returns an empty bundle and mutates nothing.
    /// Otherwise the arrows execute in order, threading the aggregate through,
    /// and their bundles are concatenated phase by phase.
    IfAll, and
}

impl<A: StateChart> Arrow<A> for IfAll<A> {
    fn should_run(&self, state: &A) -> bool {
        self.arrows.iter().all(|arrow| arrow.should_run(state))
    }

    fn execute(&self, state: &mut A) -> Effects<EffectOf<A>> {
        if !self.should_run(state) {
            tracing::trace!(arrows = self.arrows.len(), "if_all guard failed");
            return Effects::none();
        }

        let mut effects = Effects::none();
        for arrow in &self.arrows {
            effects.append(arrow.execute(state));
        }
        effects
    }
}

arrow_list! {
    /// OR composition: runs every arrow whose guard holds.
    ///
    /// Unlike a short-circuiting boolean or, all matching branches fire. The
    /// branches to run are selected against the aggregate as it is before the
    /// first one executes; each selected branch still self-guards when it
    /// runs, so a branch disabled by an earlier one stays a no-op.
    IfAny, or
}

impl<A: StateChart> Arrow<A> for IfAny<A> {
    fn should_run(&self, state: &A) -> bool {
        self.arrows.iter().any(|arrow| arrow.should_run(state))
    }

    fn execute(&self, state: &mut A) -> Effects<EffectOf<A>> {
        let selected: Vec<&BoxedArrow<A>> = {
            let snapshot: &A = state;
            self.arrows
                .iter()
                .filter(|arrow| arrow.should_run(snapshot))
                .collect()
        };

        let mut effects = Effects::none();
        for arrow in selected {
            effects.append(arrow.execute(state));
        }
        effects
    }
}

/// An arrow that additionally requires a [`Guard`] to hold.
pub struct Guarded<A, T> {
    guard: Guard<A>,
    arrow: T,
}

impl<A: StateChart, T: Arrow<A>> Guarded<A, T> {
    pub fn new(guard: Guard<A>, arrow: T) -> Self {
        Self { guard, arrow }
    }
}

impl<A: StateChart, T: Arrow<A>> Arrow<A> for Guarded<A, T> {
    fn should_run(&self, state: &A) -> bool {
        self.guard.check(state) && self.arrow.should_run(state)
    }

    fn execute(&self, state: &mut A) -> Effects<EffectOf<A>> {
        if !self.guard.check(state) {
            return Effects::none();
        }
        self.arrow.execute(state)
    }

    fn name(&self) -> &'static str {
        self.arrow.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrows::{ArrowExt, Emit};
    use crate::fixtures::{
        CloseDoor, Closed, Door, Event, House, Lamp, LockDoor, Locked, OpenDoor, Opened, SwitchOff,
        SwitchOn,
    };
    use crate::{if_all, if_any};

    #[test]
    fn if_all_runs_every_arrow_in_order() {
        let mut house = House::default();
        let both = if_all![OpenDoor { width: 2 }, SwitchOn];

        let effects = both.execute(&mut house);

        assert_eq!(house.door, Door::Opened(Opened { width: 2 }));
        assert_eq!(house.lamp, Lamp::On(crate::fixtures::On));
        assert_eq!(
            effects.on_leave,
            vec![Event::Left("closed"), Event::Left("off")]
        );
        assert_eq!(
            effects.on_enter,
            vec![Event::Entered("opened"), Event::Entered("on")]
        );
        assert_eq!(effects.on_transition, vec![Event::Said("creak".to_string())]);
    }

    #[test]
    fn if_all_is_atomic_when_a_later_guard_fails() {
        let mut house = House::default();
        let before = house.clone();
        // The door is closed, so OpenDoor alone could run; SwitchOff cannot.
        let both = OpenDoor { width: 2 }.and(SwitchOff);

        assert!(OpenDoor { width: 2 }.should_run(&house));
        assert!(!both.should_run(&house));
        assert!(both.execute(&mut house).is_empty());
        assert_eq!(house, before);
    }

    #[test]
    fn if_all_does_not_reevaluate_guards_mid_sequence() {
        let mut house = House::default();
        // Both guards hold initially; LockDoor no longer applies once the
        // door is open, so it quietly does nothing.
        let sequence = if_all![OpenDoor { width: 1 }, LockDoor { code: 3 }];

        let effects = sequence.execute(&mut house);

        assert_eq!(house.door, Door::Opened(Opened { width: 1 }));
        assert_eq!(effects.on_leave, vec![Event::Left("closed")]);
    }

    #[test]
    fn if_any_fires_every_matching_branch() {
        let mut house = House::default();
        let either = Emit::<House>::new(Event::Count(1)).or(SwitchOn);

        let effects = either.execute(&mut house);

        assert_eq!(effects.on_transition, vec![Event::Count(1)]);
        assert_eq!(effects.on_enter, vec![Event::Entered("on")]);
        assert_eq!(house.lamp, Lamp::On(crate::fixtures::On));
    }

    #[test]
    fn if_any_skips_branches_whose_guard_fails() {
        let mut house = House::default();
        let choice = if_any![CloseDoor, LockDoor { code: 9 }, SwitchOff];

        assert!(choice.should_run(&house));
        choice.execute(&mut house);

        assert_eq!(house.door, Door::Locked(Locked { code: 9 }));
        assert_eq!(house.lamp, Lamp::default());
    }

    #[test]
    fn if_any_with_no_matching_branch_is_noop() {
        let mut house = House::default();
        let before = house.clone();
        let choice = CloseDoor.or(SwitchOff);

        assert!(!choice.should_run(&house));
        assert!(choice.execute(&mut house).is_empty());
        assert_eq!(house, before);
    }

    #[test]
    fn chained_and_stays_flat() {
        let chain = OpenDoor { width: 1 }.and(SwitchOn).and(Emit::<House>::new(Event::Count(2)));
        assert_eq!(chain.len(), 3);

        let from_vec: IfAll<House> = vec![SwitchOn.boxed(), CloseDoor.boxed()].into();
        assert_eq!(from_vec.len(), 2);
        assert!(!IfAny::<House>::new().should_run(&House::default()));
    }

    #[test]
    fn both_lists_share_one_builder_surface() {
        let mut any = OpenDoor { width: 1 }.or(SwitchOn).or(CloseDoor);
        any.push(SwitchOff.boxed());
        assert_eq!(any.len(), 4);

        let mut all = IfAll::<House>::default();
        assert!(all.is_empty());
        all.push(SwitchOn.boxed());
        let all = all.with(OpenDoor { width: 2 });
        assert_eq!(all.len(), 2);

        let from_vec: IfAny<House> = vec![SwitchOn.boxed()].into();
        assert!(!from_vec.is_empty());
        assert!(IfAny::<House>::default().is_empty());
    }

    #[test]
    fn guarded_requires_predicate_and_inner_guard() {
        let mut house = House::default();
        let only_when_lit = SwitchOff.when(|h: &House| matches!(h.door, Door::Closed(Closed)));
        let open_when_lit =
            OpenDoor { width: 4 }.when(|h: &House| matches!(h.lamp, Lamp::On(_)));

        assert!(!only_when_lit.should_run(&house));
        assert!(!open_when_lit.should_run(&house));
        assert!(open_when_lit.execute(&mut house).is_empty());

        SwitchOn.execute(&mut house);
        assert!(only_when_lit.should_run(&house));
        assert!(!open_when_lit.execute(&mut house).is_empty());
        assert_eq!(house.door, Door::Opened(Opened { width: 4 }));
    }
}
