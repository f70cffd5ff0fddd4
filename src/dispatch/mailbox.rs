//! The effect sink and the reentrant submission channel handed to it.

use crate::arrows::{Arrow, BoxedArrow};
use crate::core::{EffectOf, StateChart};

/// Receives every effect a dispatcher delivers, in delivery order.
///
/// The interpreter is the only way effects leave the engine. It may react
/// by submitting further arrows through the [`Mailbox`]; those are queued
/// behind everything already pending and run by the active loop.
///
/// Closures `FnMut(effect, &mut Mailbox<A>)` implement this trait.
pub trait Interpreter<A: StateChart> {
    fn on_effect(&mut self, effect: EffectOf<A>, mailbox: &mut Mailbox<'_, A>);
}

impl<A, F> Interpreter<A> for F
where
    A: StateChart,
    F: FnMut(EffectOf<A>, &mut Mailbox<'_, A>),
{
    fn on_effect(&mut self, effect: EffectOf<A>, mailbox: &mut Mailbox<'_, A>) {
        self(effect, mailbox)
    }
}

/// Access to a running dispatcher from inside effect delivery.
///
/// Submissions only grow the queue; they never start a nested loop, so
/// chains of reactions run iteratively in strict FIFO order.
pub struct Mailbox<'a, A: StateChart> {
    pub(super) queue: &'a mut Vec<BoxedArrow<A>>,
    pub(super) state: &'a A,
    pub(super) next: usize,
}

impl<A: StateChart + 'static> Mailbox<'_, A> {
    /// Queue an arrow behind everything already pending.
    pub fn submit<T: Arrow<A> + 'static>(&mut self, arrow: T) {
        self.submit_boxed(Box::new(arrow));
    }

    pub fn submit_boxed(&mut self, arrow: BoxedArrow<A>) {
        tracing::trace!(
            arrow = arrow.name(),
            pending = self.pending() + 1,
            "arrow queued during delivery"
        );
        self.queue.push(arrow);
    }

    /// The aggregate as left by the arrow whose effects are being delivered.
    pub fn state(&self) -> &A {
        self.state
    }

    /// Arrows queued but not yet started.
    pub fn pending(&self) -> usize {
        self.queue.len().saturating_sub(self.next)
    }
}
