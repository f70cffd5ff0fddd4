//! Small house machine shared by unit tests.

use crate::arrows::{GoTo, Move, MoveSignature, PureMove};
use crate::core::{Lens, StateChart};
use crate::{case_machine, impl_arrow, lens};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Left(&'static str),
    Entered(&'static str),
    Said(String),
    Count(u32),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Closed;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Opened {
    pub width: u32,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Locked {
    pub code: u32,
}

case_machine! {
    #[derive(Clone, Debug, PartialEq)]
    pub enum Door {
        Closed(Closed) => {
            on_enter: |_| Some(Event::Entered("closed")),
            on_leave: |_| Some(Event::Left("closed")),
        },
        Opened(Opened) => {
            on_enter: |_| Some(Event::Entered("opened")),
            on_leave: |_| Some(Event::Left("opened")),
        },
        Locked(Locked),
    }
    effect: Event,
    initial: Closed,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Off;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct On;

case_machine! {
    #[derive(Clone, Debug, PartialEq)]
    pub enum Lamp {
        Off(Off) => {
            on_leave: |_| Some(Event::Left("off")),
        },
        On(On) => {
            on_enter: |_| Some(Event::Entered("on")),
        },
    }
    effect: Event,
    initial: Off,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct House {
    pub door: Door,
    pub lamp: Lamp,
}

impl StateChart for House {
    type Effect = Event;
}

/// Closed -> Opened, says "creak".
#[derive(Clone)]
pub struct OpenDoor {
    pub width: u32,
}

impl MoveSignature for OpenDoor {
    type Aggregate = House;
    type Field = Door;
    type From = Closed;
    type To = Opened;

    fn field(&self) -> Lens<House, Door> {
        lens!(House => door)
    }
}

impl Move for OpenDoor {
    fn advance(&self, _from: &Closed) -> (Opened, Option<Event>) {
        (
            Opened { width: self.width },
            Some(Event::Said("creak".to_string())),
        )
    }
}

/// Opened -> Opened, wider.
pub struct Stretch {
    pub by: u32,
}

impl MoveSignature for Stretch {
    type Aggregate = House;
    type Field = Door;
    type From = Opened;
    type To = Opened;

    fn field(&self) -> Lens<House, Door> {
        lens!(House => door)
    }
}

impl Move for Stretch {
    fn advance(&self, from: &Opened) -> (Opened, Option<Event>) {
        let width = from.width + self.by;
        (Opened { width }, Some(Event::Count(width)))
    }
}

pub struct CloseDoor;

impl MoveSignature for CloseDoor {
    type Aggregate = House;
    type Field = Door;
    type From = Opened;
    type To = Closed;

    fn field(&self) -> Lens<House, Door> {
        lens!(House => door)
    }
}

impl GoTo for CloseDoor {
    fn target(&self) -> Closed {
        Closed
    }
}

pub struct LockDoor {
    pub code: u32,
}

impl MoveSignature for LockDoor {
    type Aggregate = House;
    type Field = Door;
    type From = Closed;
    type To = Locked;

    fn field(&self) -> Lens<House, Door> {
        lens!(House => door)
    }
}

impl PureMove for LockDoor {
    fn advance(&self, _from: &Closed) -> Locked {
        Locked { code: self.code }
    }
}

#[derive(Clone)]
pub struct SwitchOn;

impl MoveSignature for SwitchOn {
    type Aggregate = House;
    type Field = Lamp;
    type From = Off;
    type To = On;

    fn field(&self) -> Lens<House, Lamp> {
        lens!(House => lamp)
    }
}

impl GoTo for SwitchOn {
    fn target(&self) -> On {
        On
    }
}

pub struct SwitchOff;

impl MoveSignature for SwitchOff {
    type Aggregate = House;
    type Field = Lamp;
    type From = On;
    type To = Off;

    fn field(&self) -> Lens<House, Lamp> {
        lens!(House => lamp)
    }
}

impl GoTo for SwitchOff {
    fn target(&self) -> Off {
        Off
    }
}

impl_arrow!(Move: OpenDoor, Stretch);
impl_arrow!(GoTo: CloseDoor, SwitchOn, SwitchOff);
impl_arrow!(PureMove: LockDoor);
