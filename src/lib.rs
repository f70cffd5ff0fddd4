//! CaseMachines: composable state machines over enum cases
//!
//! Application state is an aggregate of independent case machines (enums
//! whose variants each wrap one payload). Typed arrows describe guarded
//! transitions on one case of one field; a dispatcher owns the aggregate,
//! runs submitted arrows in strict FIFO order and hands every effect they
//! produce to an interpreter.
//!
//! # Core Concepts
//!
//! - **Cases**: variant payloads with `extract`/`embed` access via [`Case`]
//! - **Arrows**: guarded transitions of a few kinds (see [`arrows`])
//! - **Composition**: all-or-nothing [`IfAll`], every-match [`IfAny`]
//! - **Effects**: ordered leave, enter and transition bundles ([`Effects`])
//! - **Dispatch**: reentrancy-safe serialized execution ([`Dispatcher`])
//! - **Undo**: snapshot based reversal of arrows ([`undo`])
//!
//! # Example
//!
//! ```rust
//! use casemachines::arrows::{GoTo, MoveSignature};
//! use casemachines::core::{Lens, StateChart};
//! use casemachines::dispatch::{Dispatcher, Mailbox};
//! use casemachines::{case_machine, impl_arrow, lens};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! pub enum Signal {
//!     Lit,
//!     Dark,
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Default)]
//! pub struct Off;
//!
//! #[derive(Clone, Debug, PartialEq, Default)]
//! pub struct On;
//!
//! case_machine! {
//!     #[derive(Clone, Debug, PartialEq)]
//!     pub enum Bulb {
//!         Off(Off) => {
//!             on_enter: |_| Some(Signal::Dark),
//!         },
//!         On(On) => {
//!             on_enter: |_| Some(Signal::Lit),
//!         },
//!     }
//!     effect: Signal,
//!     initial: Off,
//! }
//!
//! #[derive(Debug, Default)]
//! pub struct Room {
//!     bulb: Bulb,
//! }
//!
//! impl StateChart for Room {
//!     type Effect = Signal;
//! }
//!
//! pub struct Flip;
//!
//! impl MoveSignature for Flip {
//!     type Aggregate = Room;
//!     type Field = Bulb;
//!     type From = Off;
//!     type To = On;
//!
//!     fn field(&self) -> Lens<Room, Bulb> {
//!         lens!(Room => bulb)
//!     }
//! }
//!
//! impl GoTo for Flip {
//!     fn target(&self) -> On {
//!         On
//!     }
//! }
//!
//! impl_arrow!(GoTo: Flip);
//!
//! let mut room = Dispatcher::builder()
//!     .initial(Room::default())
//!     .interpreter(|effect: Signal, _mailbox: &mut Mailbox<'_, Room>| println!("{effect:?}"))
//!     .build()
//!     .unwrap();
//!
//! room.submit(Flip);
//! assert_eq!(room.current_state().bulb, Bulb::On(On));
//!
//! // Off no longer holds, so a second flip is a silent no-op.
//! room.submit(Flip);
//! assert_eq!(room.current_state().bulb, Bulb::On(On));
//! ```

pub mod arrows;
pub mod builder;
pub mod core;
pub mod dispatch;
pub mod laws;
pub mod undo;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use arrows::{Arrow, ArrowExt, BoxedArrow, IfAll, IfAny};
pub use builder::{BuildError, DispatcherBuilder};
pub use crate::core::{Case, CaseMachine, EffectOf, Effects, InvariantViolation, Lens, StateChart};
pub use dispatch::{Dispatcher, Interpreter, Mailbox};
pub use undo::{DefaultUndo, UndoStack, Undoable};
