//! Bounded undo and redo stacks driving a dispatcher.

use super::{BoxedUndo, UndoRecord, Undoable};
use crate::core::StateChart;
use crate::dispatch::Dispatcher;

struct UndoEntry<A: StateChart + 'static> {
    record: UndoRecord,
    inverse: BoxedUndo<A>,
}

/// Undo and redo history for one dispatcher.
///
/// Each entry pairs an [`UndoRecord`] with the inverse arrow to submit.
/// Undoing submits the inverse and files the inverse's own inverse on the
/// redo side; redoing does the reverse. Recording a fresh action clears
/// the redo side.
pub struct UndoStack<A: StateChart + 'static> {
    undo: Vec<UndoEntry<A>>,
    redo: Vec<UndoEntry<A>>,
    capacity: Option<usize>,
}

impl<A: StateChart + 'static> UndoStack<A> {
    /// An unbounded stack.
    pub fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            capacity: None,
        }
    }

    /// A stack that forgets its oldest steps beyond `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// File `inverse` as the way back from the action just performed.
    pub fn record(&mut self, inverse: BoxedUndo<A>, record: UndoRecord) {
        tracing::debug!(
            action = %record.action_name,
            dropped_redo = self.redo.len(),
            "undo step recorded"
        );
        self.redo.clear();
        push_bounded(&mut self.undo, UndoEntry { record, inverse }, self.capacity);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_action_name(&self) -> Option<&str> {
        self.undo.last().map(|entry| entry.record.action_name.as_str())
    }

    pub fn redo_action_name(&self) -> Option<&str> {
        self.redo.last().map(|entry| entry.record.action_name.as_str())
    }

    /// Undoable steps, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &UndoRecord> {
        self.undo.iter().map(|entry| &entry.record)
    }

    /// Undo the most recent step. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self, dispatcher: &mut Dispatcher<A>) -> bool {
        let Some(entry) = self.undo.pop() else {
            return false;
        };
        tracing::debug!(machine = dispatcher.label(), action = %entry.record.action_name, "undo");

        let redo = entry.inverse.reverse(dispatcher.current_state());
        dispatcher.submit(entry.inverse);
        push_bounded(
            &mut self.redo,
            UndoEntry {
                record: entry.record,
                inverse: redo,
            },
            self.capacity,
        );
        true
    }

    /// Redo the most recently undone step. Returns `false` if there is none.
    pub fn redo(&mut self, dispatcher: &mut Dispatcher<A>) -> bool {
        let Some(entry) = self.redo.pop() else {
            return false;
        };
        tracing::debug!(machine = dispatcher.label(), action = %entry.record.action_name, "redo");

        let undo = entry.inverse.reverse(dispatcher.current_state());
        dispatcher.submit(entry.inverse);
        push_bounded(
            &mut self.undo,
            UndoEntry {
                record: entry.record,
                inverse: undo,
            },
            self.capacity,
        );
        true
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl<A: StateChart + 'static> Default for UndoStack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: StateChart + 'static> std::fmt::Debug for UndoStack<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoStack")
            .field("undo", &self.undo.len())
            .field("redo", &self.redo.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

fn push_bounded<A: StateChart + 'static>(
    stack: &mut Vec<UndoEntry<A>>,
    entry: UndoEntry<A>,
    capacity: Option<usize>,
) {
    stack.push(entry);
    if let Some(capacity) = capacity {
        if stack.len() > capacity {
            let excess = stack.len() - capacity;
            stack.drain(..excess);
        }
    }
}

impl<A: StateChart + 'static> Dispatcher<A> {
    /// Submit an undoable arrow and record its inverse on `stack`.
    ///
    /// The inverse is taken against the aggregate before submission, so an
    /// undo also reverts every arrow the interpreter chained onto this one.
    /// Nothing is recorded when the arrow's guard does not hold.
    pub fn submit_undoable<U: Undoable<A> + 'static>(&mut self, arrow: U, stack: &mut UndoStack<A>) {
        if !arrow.should_run(self.current_state()) {
            tracing::trace!(arrow = arrow.name(), "undoable guard miss, nothing recorded");
            self.submit(arrow);
            return;
        }

        let inverse = arrow.reverse(self.current_state());
        let record = UndoRecord::new(arrow.action_name(), arrow.is_discardable());
        self.submit(arrow);
        stack.record(inverse, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Mailbox;
    use crate::fixtures::{CloseDoor, Closed, Door, Event, House, OpenDoor, Opened};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dispatcher(log: &Rc<RefCell<Vec<Event>>>) -> Dispatcher<House> {
        let sink = log.clone();
        Dispatcher::builder()
            .initial(House::default())
            .interpreter(move |effect: Event, _mailbox: &mut Mailbox<'_, House>| {
                sink.borrow_mut().push(effect)
            })
            .build()
            .unwrap()
    }

    #[test]
    fn undo_restores_state_and_delivers_revert_effects() {
        let log = Rc::default();
        let mut machine = dispatcher(&log);
        let mut stack = UndoStack::new();

        machine.submit_undoable(OpenDoor { width: 5 }, &mut stack);
        assert_eq!(machine.current_state().door, Door::Opened(Opened { width: 5 }));
        assert_eq!(stack.undo_action_name(), Some("Open door"));
        log.borrow_mut().clear();

        assert!(stack.undo(&mut machine));

        assert_eq!(*machine.current_state(), House::default());
        assert_eq!(*log.borrow(), vec![Event::Said("slam".to_string())]);
        assert!(!stack.can_undo());
        assert_eq!(stack.redo_action_name(), Some("Open door"));
    }

    #[test]
    fn redo_reapplies_the_arrow() {
        let log = Rc::default();
        let mut machine = dispatcher(&log);
        let mut stack = UndoStack::new();

        machine.submit_undoable(OpenDoor { width: 5 }, &mut stack);
        stack.undo(&mut machine);
        log.borrow_mut().clear();

        assert!(stack.redo(&mut machine));

        assert_eq!(machine.current_state().door, Door::Opened(Opened { width: 5 }));
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Left("closed"),
                Event::Entered("opened"),
                Event::Said("creak".to_string()),
            ]
        );
        assert!(stack.can_undo());
        assert!(!stack.can_redo());

        stack.undo(&mut machine);
        assert_eq!(machine.current_state().door, Door::Closed(Closed));
    }

    #[test]
    fn recording_clears_redo() {
        let log = Rc::default();
        let mut machine = dispatcher(&log);
        let mut stack = UndoStack::new();

        machine.submit_undoable(OpenDoor { width: 1 }, &mut stack);
        stack.undo(&mut machine);
        assert!(stack.can_redo());

        machine.submit_undoable(OpenDoor { width: 2 }, &mut stack);

        assert!(!stack.can_redo());
        assert!(!stack.redo(&mut machine));
        assert_eq!(stack.history().count(), 1);
    }

    #[test]
    fn guard_miss_records_nothing() {
        let log = Rc::default();
        let mut machine = dispatcher(&log);
        let mut stack = UndoStack::new();

        machine.submit_undoable(OpenDoor { width: 1 }, &mut stack);
        machine.submit_undoable(OpenDoor { width: 2 }, &mut stack);

        assert_eq!(stack.history().count(), 1);
        assert_eq!(machine.current_state().door, Door::Opened(Opened { width: 1 }));
    }

    #[test]
    fn capacity_drops_oldest_steps() {
        let log = Rc::default();
        let mut machine = dispatcher(&log);
        let mut stack = UndoStack::with_capacity(2);

        for width in 1..=3 {
            machine.submit_undoable(OpenDoor { width }, &mut stack);
            machine.submit(CloseDoor);
        }

        assert_eq!(stack.capacity(), Some(2));
        assert_eq!(stack.history().count(), 2);
        assert!(stack.undo(&mut machine));
        assert!(stack.undo(&mut machine));
        assert!(!stack.undo(&mut machine));
    }

    #[test]
    fn empty_stack_does_nothing() {
        let log = Rc::default();
        let mut machine = dispatcher(&log);
        let mut stack = UndoStack::<House>::default();

        assert!(!stack.undo(&mut machine));
        assert!(!stack.redo(&mut machine));
        assert_eq!(stack.undo_action_name(), None);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn clear_forgets_both_sides() {
        let log = Rc::default();
        let mut machine = dispatcher(&log);
        let mut stack = UndoStack::new();
        machine.submit_undoable(OpenDoor { width: 1 }, &mut stack);

        stack.clear();

        assert!(!stack.can_undo());
        assert_eq!(format!("{stack:?}"), "UndoStack { undo: 0, redo: 0, capacity: None }");
    }
}
