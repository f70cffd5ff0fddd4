//! Dispatcher that owns the live aggregate and runs submitted arrows.

use super::mailbox::{Interpreter, Mailbox};
use crate::arrows::{Arrow, BoxedArrow};
use crate::builder::DispatcherBuilder;
use crate::core::{violated, EffectOf, Effects, InvariantViolation, StateChart};
use std::marker::PhantomData;
use std::rc::Rc;
use uuid::Uuid;

/// Callback fired around a dispatch loop.
pub type Hook<A> = Box<dyn FnMut(&A)>;

/// Owns a machine's state and serializes every change to it.
///
/// Arrows run strictly in submission order, including arrows submitted by
/// the interpreter while effects are being delivered. One outer
/// [`submit`](Dispatcher::submit) fires `before_change` once, runs the
/// whole chain it causes, then fires `after_change` once.
///
/// A dispatcher is confined to the thread that created it (it is `!Send`);
/// all submissions and effect deliveries happen there.
pub struct Dispatcher<A: StateChart + 'static> {
    pub(crate) id: Uuid,
    pub(crate) label: String,
    pub(crate) state: A,
    pub(crate) queue: Vec<BoxedArrow<A>>,
    pub(crate) interpreter: Option<Box<dyn Interpreter<A>>>,
    pub(crate) before_change: Option<Hook<A>>,
    pub(crate) after_change: Option<Hook<A>>,
    pub(crate) _affinity: PhantomData<Rc<()>>,
}

impl<A: StateChart + 'static> Dispatcher<A> {
    /// A dispatcher without interpreter or hooks.
    pub fn new(state: A) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: super::DEFAULT_LABEL.to_string(),
            state,
            queue: Vec::new(),
            interpreter: None,
            before_change: None,
            after_change: None,
            _affinity: PhantomData,
        }
    }

    pub fn builder() -> DispatcherBuilder<A> {
        DispatcherBuilder::new()
    }

    /// Current aggregate. Never observed mid-arrow.
    pub fn current_state(&self) -> &A {
        &self.state
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Arrows waiting to run. Zero whenever control is outside the engine.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Submit an arrow and run it, plus everything it triggers, to completion.
    pub fn submit<T: Arrow<A> + 'static>(&mut self, arrow: T) {
        self.submit_boxed(Box::new(arrow));
    }

    pub fn submit_boxed(&mut self, arrow: BoxedArrow<A>) {
        // Outside a loop the queue is always drained; leftovers mean a
        // previous loop unwound part way through.
        if !self.queue.is_empty() {
            violated(InvariantViolation::Poisoned {
                label: self.label.clone(),
                pending: self.queue.len(),
            });
        }

        tracing::debug!(machine = %self.label, arrow = arrow.name(), "arrow submitted");
        self.queue.push(arrow);
        self.dispatch(None);
    }

    /// Deliver the initial effect and run anything it queued, as one loop.
    ///
    /// Without an init effect nothing can be queued, so no hooks fire.
    pub(crate) fn start(&mut self) {
        if let Some(effect) = self.state.on_init() {
            tracing::debug!(machine = %self.label, ?effect, "delivering init effect");
            self.dispatch(Some(effect));
        }
    }

    fn dispatch(&mut self, init: Option<EffectOf<A>>) {
        let span = tracing::debug_span!("dispatch", machine = %self.label, id = %self.id);
        let _entered = span.enter();

        if let Some(hook) = self.before_change.as_mut() {
            hook(&self.state);
        }

        if let Some(effect) = init {
            self.deliver(Effects::transition(effect), 0);
        }

        let mut cursor = 0;
        while cursor < self.queue.len() {
            let arrow = &self.queue[cursor];
            let name = arrow.name();

            if arrow.should_run(&self.state) {
                let effects = arrow.execute(&mut self.state);
                tracing::debug!(arrow = name, effects = effects.len(), "arrow executed");
                self.deliver(effects, cursor + 1);
            } else {
                tracing::trace!(arrow = name, "guard miss");
            }

            cursor += 1;
        }

        self.queue.clear();
        tracing::debug!(arrows = cursor, "dispatch drained");

        if let Some(hook) = self.after_change.as_mut() {
            hook(&self.state);
        }
    }

    fn deliver(&mut self, effects: Effects<EffectOf<A>>, next: usize) {
        let Some(interpreter) = self.interpreter.as_mut() else {
            if !effects.is_empty() {
                tracing::trace!(dropped = effects.len(), "no interpreter attached");
            }
            return;
        };

        for effect in effects {
            tracing::trace!(?effect, "delivering effect");
            let mut mailbox = Mailbox {
                queue: &mut self.queue,
                state: &self.state,
                next,
            };
            interpreter.on_effect(effect, &mut mailbox);
        }
    }
}

impl<A: StateChart + std::fmt::Debug + 'static> std::fmt::Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("state", &self.state)
            .field("pending", &self.queue.len())
            .finish_non_exhaustive()
    }
}
