//! Guard predicates over aggregates.
//!
//! Guards are pure boolean functions that decide whether an arrow may run.
//! Every arrow already carries its own structural guard (is the source case
//! present?); a `Guard` adds a domain condition on top, see
//! [`ArrowExt::when`](crate::arrows::ArrowExt::when).

/// Pure predicate over an aggregate.
///
/// # Example
///
/// ```rust
/// use casemachines::core::Guard;
///
/// struct Tank {
///     litres: u32,
/// }
///
/// let has_fuel = Guard::new(|tank: &Tank| tank.litres > 0);
///
/// assert!(has_fuel.check(&Tank { litres: 5 }));
/// assert!(!has_fuel.check(&Tank { litres: 0 }));
/// ```
pub struct Guard<A> {
    predicate: Box<dyn Fn(&A) -> bool>,
}

impl<A> Guard<A> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects: it may
    /// be evaluated more than once per dispatch.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows running against this aggregate.
    pub fn check(&self, state: &A) -> bool {
        (self.predicate)(state)
    }
}

impl<A> std::fmt::Debug for Guard<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
