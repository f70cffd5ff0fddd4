//! Builder for constructing dispatchers.

use crate::builder::error::BuildError;
use crate::core::{EffectOf, StateChart};
use crate::dispatch::{Dispatcher, Hook, Interpreter, Mailbox, DEFAULT_LABEL};
use std::marker::PhantomData;
use uuid::Uuid;

/// Builder for constructing dispatchers with a fluent API.
pub struct DispatcherBuilder<A: StateChart + 'static> {
    initial: Option<A>,
    label: String,
    interpreter: Option<Box<dyn Interpreter<A>>>,
    before_change: Option<Hook<A>>,
    after_change: Option<Hook<A>>,
    deliver_on_init: bool,
}

impl<A: StateChart + 'static> DispatcherBuilder<A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            label: DEFAULT_LABEL.to_string(),
            interpreter: None,
            before_change: None,
            after_change: None,
            deliver_on_init: true,
        }
    }

    /// Set the initial aggregate (required).
    pub fn initial(mut self, state: A) -> Self {
        self.initial = Some(state);
        self
    }

    /// Name used in logs and diagnostics.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Attach a closure as the effect interpreter.
    pub fn interpreter<F>(self, interpreter: F) -> Self
    where
        F: FnMut(EffectOf<A>, &mut Mailbox<'_, A>) + 'static,
    {
        self.with_interpreter(interpreter)
    }

    /// Attach any [`Interpreter`] implementation.
    pub fn with_interpreter<I: Interpreter<A> + 'static>(mut self, interpreter: I) -> Self {
        self.interpreter = Some(Box::new(interpreter));
        self
    }

    /// Called once before each dispatch loop.
    pub fn before_change<F: FnMut(&A) + 'static>(mut self, hook: F) -> Self {
        self.before_change = Some(Box::new(hook));
        self
    }

    /// Called once after each dispatch loop, with the settled aggregate.
    pub fn after_change<F: FnMut(&A) + 'static>(mut self, hook: F) -> Self {
        self.after_change = Some(Box::new(hook));
        self
    }

    /// Whether the aggregate's init effect is delivered on build. Defaults to true.
    pub fn deliver_on_init(mut self, deliver: bool) -> Self {
        self.deliver_on_init = deliver;
        self
    }

    /// Build the dispatcher.
    ///
    /// Unless disabled with [`deliver_on_init`](Self::deliver_on_init), the
    /// init effect is delivered here and anything it submits runs before
    /// `build` returns. Both happen inside one `before_change` /
    /// `after_change` pair, exactly like an outer submission.
    pub fn build(self) -> Result<Dispatcher<A>, BuildError> {
        let state = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.label.trim().is_empty() {
            return Err(BuildError::EmptyLabel);
        }

        let mut dispatcher = Dispatcher {
            id: Uuid::new_v4(),
            label: self.label,
            state,
            queue: Vec::new(),
            interpreter: self.interpreter,
            before_change: self.before_change,
            after_change: self.after_change,
            _affinity: PhantomData,
        };

        tracing::debug!(machine = %dispatcher.label, id = %dispatcher.id, "dispatcher built");

        if self.deliver_on_init {
            dispatcher.start();
        }

        Ok(dispatcher)
    }
}

impl<A: StateChart + 'static> Default for DispatcherBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
