//! The ordered effect bundle produced by one arrow application.

use serde::{Deserialize, Serialize};

/// Effects produced by executing a single arrow.
///
/// Delivery order is fixed: every `on_leave` effect, then every `on_enter`
/// effect, then every `on_transition` effect. Composite arrows concatenate
/// the bundles of their parts phase by phase, in execution order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects<E> {
    /// Fired because a case was left.
    pub on_leave: Vec<E>,
    /// Fired because a case was entered.
    pub on_enter: Vec<E>,
    /// Emitted by the transition itself.
    pub on_transition: Vec<E>,
}

impl<E> Effects<E> {
    /// The empty bundle returned by guard misses.
    pub fn none() -> Self {
        Self {
            on_leave: Vec::new(),
            on_enter: Vec::new(),
            on_transition: Vec::new(),
        }
    }

    /// A bundle holding a single transition effect.
    pub fn transition(effect: E) -> Self {
        Self::from_transition(Some(effect))
    }

    /// A bundle holding the transition effect if there is one.
    pub fn from_transition(effect: Option<E>) -> Self {
        let mut effects = Self::none();
        effects.on_transition.extend(effect);
        effects
    }

    /// Append `other` phase by phase.
    pub fn append(&mut self, other: Effects<E>) {
        self.on_leave.extend(other.on_leave);
        self.on_enter.extend(other.on_enter);
        self.on_transition.extend(other.on_transition);
    }

    /// Total number of effects across all phases.
    pub fn len(&self) -> usize {
        self.on_leave.len() + self.on_enter.len() + self.on_transition.len()
    }

    /// True when no phase holds an effect.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate in delivery order without consuming the bundle.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.on_leave
            .iter()
            .chain(&self.on_enter)
            .chain(&self.on_transition)
    }
}

impl<E> Default for Effects<E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<E> IntoIterator for Effects<E> {
    type Item = E;
    type IntoIter = std::iter::Chain<
        std::iter::Chain<std::vec::IntoIter<E>, std::vec::IntoIter<E>>,
        std::vec::IntoIter<E>,
    >;

    /// Consume the bundle in delivery order.
    fn into_iter(self) -> Self::IntoIter {
        self.on_leave
            .into_iter()
            .chain(self.on_enter)
            .chain(self.on_transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_empty() {
        let effects: Effects<u8> = Effects::none();
        assert!(effects.is_empty());
        assert_eq!(effects, Effects::default());
    }

    #[test]
    fn delivery_order_is_leave_enter_transition() {
        let effects = Effects {
            on_leave: vec!["leave"],
            on_enter: vec!["enter"],
            on_transition: vec!["move"],
        };

        let ordered: Vec<_> = effects.clone().into_iter().collect();
        assert_eq!(ordered, vec!["leave", "enter", "move"]);
        assert_eq!(effects.iter().copied().collect::<Vec<_>>(), ordered);
    }

    #[test]
    fn append_concatenates_per_phase() {
        let mut first = Effects {
            on_leave: vec![1],
            on_enter: vec![],
            on_transition: vec![2],
        };
        let second = Effects {
            on_leave: vec![3],
            on_enter: vec![4],
            on_transition: vec![5],
        };

        first.append(second);

        assert_eq!(first.on_leave, vec![1, 3]);
        assert_eq!(first.on_enter, vec![4]);
        assert_eq!(first.on_transition, vec![2, 5]);
        assert_eq!(
            first.into_iter().collect::<Vec<_>>(),
            vec![1, 3, 4, 2, 5]
        );
    }

    #[test]
    fn from_transition_skips_missing_effect() {
        assert!(Effects::<u8>::from_transition(None).is_empty());
        assert_eq!(Effects::transition(9).on_transition, vec![9]);
    }

    #[test]
    fn effects_serialize_as_three_phases() {
        let effects = Effects {
            on_leave: vec!["a".to_string()],
            on_enter: vec![],
            on_transition: vec!["b".to_string()],
        };

        let json = serde_json::to_string(&effects).unwrap();
        let back: Effects<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(effects, back);
        assert!(json.contains("on_transition"));
    }
}
