//! Conformance checks for cases and arrows using Validation.

use crate::arrows::Arrow;
use crate::core::{Case, StateChart};
use crate::laws::violations::LawViolation;
use std::fmt::Debug;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a law check: success, or every violation found.
pub type LawCheck = Validation<(), NonEmptyVec<LawViolation>>;

/// Check that `extract(embed(c)) == c` for every sample.
///
/// Each sample is embedded into a default machine. Accumulates one
/// violation per failing sample.
pub fn check_round_trip<C, I>(samples: I) -> LawCheck
where
    C: Case + Clone + PartialEq + Debug,
    I: IntoIterator<Item = C>,
{
    let case = std::any::type_name::<C>();
    let checks: Vec<LawCheck> = samples
        .into_iter()
        .map(|sample| {
            let mut machine = C::Machine::default();
            sample.clone().embed(&mut machine);

            match C::extract(&machine) {
                None => Validation::fail(LawViolation::ExtractFailed {
                    case,
                    sample: format!("{sample:?}"),
                }),
                Some(found) if *found != sample => Validation::fail(LawViolation::RoundTripMismatch {
                    case,
                    expected: format!("{sample:?}"),
                    found: format!("{found:?}"),
                }),
                Some(_) => Validation::success(()),
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Check that `arrow`'s guard is stable and that a failed guard makes
/// `execute` a no-op, for every given state.
pub fn check_guard_purity<A, T, I>(arrow: &T, states: I) -> LawCheck
where
    A: StateChart + Clone + PartialEq + Debug,
    T: Arrow<A> + ?Sized,
    I: IntoIterator<Item = A>,
{
    let name = arrow.name();
    let mut checks: Vec<LawCheck> = Vec::new();

    for state in states {
        let first = arrow.should_run(&state);
        if first != arrow.should_run(&state) {
            checks.push(Validation::fail(LawViolation::UnstableGuard {
                arrow: name,
                state: format!("{state:?}"),
            }));
            continue;
        }
        if first {
            continue;
        }

        let mut scratch = state.clone();
        let effects = arrow.execute(&mut scratch);

        if scratch != state {
            checks.push(Validation::fail(LawViolation::GuardMissMutated {
                arrow: name,
                state: format!("{state:?}"),
            }));
        }
        if !effects.is_empty() {
            checks.push(Validation::fail(LawViolation::GuardMissEmitted {
                arrow: name,
                count: effects.len(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
