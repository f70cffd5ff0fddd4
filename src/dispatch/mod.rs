//! Serialized execution of arrows against a live aggregate.
//!
//! A [`Dispatcher`] owns the aggregate, a FIFO queue of pending arrows and
//! an [`Interpreter`] that receives every effect. Submitting an arrow
//! while idle starts a loop that drains the queue; arrows the interpreter
//! submits through its [`Mailbox`] join the same loop.

mod dispatcher;
mod mailbox;

pub use dispatcher::{Dispatcher, Hook};
pub use mailbox::{Interpreter, Mailbox};

/// Label used when none is configured.
pub const DEFAULT_LABEL: &str = "machine";
