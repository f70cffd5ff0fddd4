//! Undo and redo on top of a dispatcher.
//!
//! An [`Undoable`] arrow can produce, from the aggregate as it was before
//! it ran, an inverse arrow that puts that aggregate back. [`DefaultUndo`]
//! does this by snapshot. [`UndoStack`] stands in for a host undo facility:
//! it keeps the inverses and submits them on request.

mod record;
mod stack;

pub use record::UndoRecord;
pub use stack::UndoStack;

use crate::arrows::Arrow;
use crate::core::{EffectOf, Effects, StateChart};

/// A type-erased undoable arrow.
pub type BoxedUndo<A> = Box<dyn Undoable<A>>;

/// An arrow that knows how to reverse itself.
///
/// Most implementations reverse by snapshot:
///
/// ```ignore
/// impl Undoable<Editor> for InsertText {
///     fn action_name(&self) -> String {
///         "Typing".to_string()
///     }
///
///     fn reverse(&self, old: &Editor) -> BoxedUndo<Editor> {
///         DefaultUndo::boxed(old.clone(), self.clone())
///     }
/// }
/// ```
///
/// Write a dedicated inverse arrow instead when the aggregate is too
/// expensive to copy.
pub trait Undoable<A: StateChart>: Arrow<A> {
    /// Whether the host may drop this action from its history freely.
    fn is_discardable(&self) -> bool {
        false
    }

    /// Human readable name, e.g. for an "Undo ..." menu item.
    fn action_name(&self) -> String {
        String::new()
    }

    /// Effects to play when this arrow is undone back to `old`.
    fn on_revert(&self, _old: &A) -> Effects<EffectOf<A>> {
        Effects::none()
    }

    /// The arrow that undoes this one, given the aggregate before it ran.
    fn reverse(&self, old: &A) -> BoxedUndo<A>;
}

impl<A: StateChart, U: Undoable<A> + ?Sized> Undoable<A> for Box<U> {
    fn is_discardable(&self) -> bool {
        (**self).is_discardable()
    }

    fn action_name(&self) -> String {
        (**self).action_name()
    }

    fn on_revert(&self, old: &A) -> Effects<EffectOf<A>> {
        (**self).on_revert(old)
    }

    fn reverse(&self, old: &A) -> BoxedUndo<A> {
        (**self).reverse(old)
    }
}

/// Snapshot based inverse of `U`.
///
/// Executing it restores the snapshot and plays `U::on_revert`. Its own
/// inverse is `U` again, so undo and redo alternate between the two.
pub struct DefaultUndo<A, U> {
    old: A,
    redo: U,
}

impl<A, U> DefaultUndo<A, U>
where
    A: StateChart + Clone + 'static,
    U: Undoable<A> + Clone + 'static,
{
    pub fn new(old: A, redo: U) -> Self {
        Self { old, redo }
    }

    pub fn boxed(old: A, redo: U) -> BoxedUndo<A> {
        Box::new(Self::new(old, redo))
    }

    /// The aggregate this undo restores.
    pub fn snapshot(&self) -> &A {
        &self.old
    }
}

impl<A, U> Arrow<A> for DefaultUndo<A, U>
where
    A: StateChart + Clone + 'static,
    U: Undoable<A> + Clone + 'static,
{
    fn execute(&self, state: &mut A) -> Effects<EffectOf<A>> {
        *state = self.old.clone();
        self.redo.on_revert(&self.old)
    }

    fn name(&self) -> &'static str {
        "undo"
    }
}

impl<A, U> Undoable<A> for DefaultUndo<A, U>
where
    A: StateChart + Clone + 'static,
    U: Undoable<A> + Clone + 'static,
{
    fn is_discardable(&self) -> bool {
        self.redo.is_discardable()
    }

    fn action_name(&self) -> String {
        format!("Undo {}", self.redo.action_name())
    }

    /// Replays the original arrow against a copy of `old`, keeping only its effects.
    fn on_revert(&self, old: &A) -> Effects<EffectOf<A>> {
        let mut copy = old.clone();
        self.redo.execute(&mut copy)
    }

    fn reverse(&self, _old: &A) -> BoxedUndo<A> {
        Box::new(self.redo.clone())
    }
}
