//! Arrows defined by a composite of other arrows.

use super::Arrow;
use crate::core::{EffectOf, Effects, StateChart};

/// An arrow whose behaviour is another, usually composite, arrow.
///
/// This is how several fields change together, e.g. a producer finishing
/// and a buffer filling as one guarded step:
///
/// ```ignore
/// impl Coordinated for Finish {
///     type Aggregate = Plant;
///     type Composite = IfAll<Plant>;
///
///     fn arrows(&self) -> IfAll<Plant> {
///         if_all![StopProducing, FillBuffer]
///     }
/// }
/// impl_arrow!(Coordinated: Finish);
/// ```
pub trait Coordinated {
    type Aggregate: StateChart;
    type Composite: Arrow<Self::Aggregate>;

    /// Build the composite this arrow stands for.
    fn arrows(&self) -> Self::Composite;
}

pub fn should_run<T: Coordinated + ?Sized>(arrow: &T, state: &T::Aggregate) -> bool {
    arrow.arrows().should_run(state)
}

pub fn execute<T: Coordinated + ?Sized>(
    arrow: &T,
    state: &mut T::Aggregate,
) -> Effects<EffectOf<T::Aggregate>> {
    arrow.arrows().execute(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrows::{ArrowExt, IfAll};
    use crate::fixtures::{Door, Event, House, Lamp, On, OpenDoor, Opened, SwitchOn};

    struct Welcome;

    impl Coordinated for Welcome {
        type Aggregate = House;
        type Composite = IfAll<House>;

        fn arrows(&self) -> IfAll<House> {
            SwitchOn.and(OpenDoor { width: 80 })
        }
    }

    crate::impl_arrow!(Coordinated: Welcome);

    #[test]
    fn coordinated_arrow_behaves_like_its_composite() {
        let mut house = House::default();

        assert!(Welcome.should_run(&house));
        let effects = Welcome.execute(&mut house);

        assert_eq!(house.lamp, Lamp::On(On));
        assert_eq!(house.door, Door::Opened(Opened { width: 80 }));
        assert_eq!(effects.on_enter, vec![Event::Entered("on"), Event::Entered("opened")]);
    }

    #[test]
    fn coordinated_arrow_inherits_composite_guard() {
        let mut house = House::default();
        Welcome.execute(&mut house);
        let before = house.clone();

        assert!(!Welcome.should_run(&house));
        assert!(Welcome.execute(&mut house).is_empty());
        assert_eq!(house, before);
    }
}
