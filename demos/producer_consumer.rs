//! Producer/consumer plant driven by a dispatcher.
//!
//! Run with `RUST_LOG=casemachines=trace` to see every arrow and effect.

use casemachines::arrows::{ArrowExt, Coordinated, GoTo, IfAll, Move, MoveSignature};
use casemachines::core::{Effects, Lens, StateChart};
use casemachines::dispatch::{Dispatcher, Mailbox};
use casemachines::undo::{BoxedUndo, DefaultUndo, UndoStack, Undoable};
use casemachines::{case_machine, if_all, impl_arrow, lens, BuildError};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq)]
enum Event {
    ProductionStarted { batch: u32 },
    Stocked,
    Drained,
    Consumed,
    Scrapped,
}

#[derive(Clone, Debug, PartialEq, Default)]
struct IdleProducer;

#[derive(Clone, Debug, PartialEq, Default)]
struct Producing {
    batch: u32,
}

#[derive(Clone, Debug, PartialEq, Default)]
struct EmptyBuffer;

#[derive(Clone, Debug, PartialEq, Default)]
struct Goods;

#[derive(Clone, Debug, PartialEq, Default)]
struct IdleConsumer;

#[derive(Clone, Debug, PartialEq, Default)]
struct Consuming;

case_machine! {
    #[derive(Clone, Debug, PartialEq)]
    enum Producer {
        Idle(IdleProducer),
        Producing(Producing),
    }
    effect: Event,
    initial: Idle,
}

case_machine! {
    #[derive(Clone, Debug, PartialEq)]
    enum Buffer {
        Empty(EmptyBuffer),
        GoodsAvailable(Goods) => {
            on_enter: |_| Some(Event::Stocked),
            on_leave: |_| Some(Event::Drained),
        },
    }
    effect: Event,
    initial: Empty,
}

case_machine! {
    #[derive(Clone, Debug, PartialEq)]
    enum Consumer {
        Idle(IdleConsumer) => {
            on_enter: |_| Some(Event::Consumed),
        },
        Consuming(Consuming),
    }
    effect: Event,
    initial: Idle,
}

#[derive(Clone, Debug, PartialEq, Default)]
struct ProducerConsumer {
    producer: Producer,
    buffer: Buffer,
    consumer: Consumer,
}

impl StateChart for ProducerConsumer {
    type Effect = Event;
}

/// Start a batch.
#[derive(Clone)]
struct Produce {
    batch: u32,
}

impl MoveSignature for Produce {
    type Aggregate = ProducerConsumer;
    type Field = Producer;
    type From = IdleProducer;
    type To = Producing;

    fn field(&self) -> Lens<ProducerConsumer, Producer> {
        lens!(ProducerConsumer => producer)
    }
}

impl Move for Produce {
    fn advance(&self, _from: &IdleProducer) -> (Producing, Option<Event>) {
        (
            Producing { batch: self.batch },
            Some(Event::ProductionStarted { batch: self.batch }),
        )
    }
}

impl Undoable<ProducerConsumer> for Produce {
    fn action_name(&self) -> String {
        format!("Produce batch {}", self.batch)
    }

    fn on_revert(&self, _old: &ProducerConsumer) -> Effects<Event> {
        Effects::transition(Event::Scrapped)
    }

    fn reverse(&self, old: &ProducerConsumer) -> BoxedUndo<ProducerConsumer> {
        DefaultUndo::boxed(old.clone(), self.clone())
    }
}

struct StopProducing;

impl MoveSignature for StopProducing {
    type Aggregate = ProducerConsumer;
    type Field = Producer;
    type From = Producing;
    type To = IdleProducer;

    fn field(&self) -> Lens<ProducerConsumer, Producer> {
        lens!(ProducerConsumer => producer)
    }
}

impl GoTo for StopProducing {
    fn target(&self) -> IdleProducer {
        IdleProducer
    }
}

struct Fill;

impl MoveSignature for Fill {
    type Aggregate = ProducerConsumer;
    type Field = Buffer;
    type From = EmptyBuffer;
    type To = Goods;

    fn field(&self) -> Lens<ProducerConsumer, Buffer> {
        lens!(ProducerConsumer => buffer)
    }
}

impl GoTo for Fill {
    fn target(&self) -> Goods {
        Goods
    }
}

struct Use;

impl MoveSignature for Use {
    type Aggregate = ProducerConsumer;
    type Field = Buffer;
    type From = Goods;
    type To = EmptyBuffer;

    fn field(&self) -> Lens<ProducerConsumer, Buffer> {
        lens!(ProducerConsumer => buffer)
    }
}

impl GoTo for Use {
    fn target(&self) -> EmptyBuffer {
        EmptyBuffer
    }
}

struct StartConsuming;

impl MoveSignature for StartConsuming {
    type Aggregate = ProducerConsumer;
    type Field = Consumer;
    type From = IdleConsumer;
    type To = Consuming;

    fn field(&self) -> Lens<ProducerConsumer, Consumer> {
        lens!(ProducerConsumer => consumer)
    }
}

impl GoTo for StartConsuming {
    fn target(&self) -> Consuming {
        Consuming
    }
}

struct FinishConsuming;

impl MoveSignature for FinishConsuming {
    type Aggregate = ProducerConsumer;
    type Field = Consumer;
    type From = Consuming;
    type To = IdleConsumer;

    fn field(&self) -> Lens<ProducerConsumer, Consumer> {
        lens!(ProducerConsumer => consumer)
    }
}

impl GoTo for FinishConsuming {
    fn target(&self) -> IdleConsumer {
        IdleConsumer
    }
}

/// Producer goes idle and the buffer fills, or neither happens.
struct FinishProducing;

impl Coordinated for FinishProducing {
    type Aggregate = ProducerConsumer;
    type Composite = IfAll<ProducerConsumer>;

    fn arrows(&self) -> IfAll<ProducerConsumer> {
        if_all![StopProducing, Fill]
    }
}

/// Consumer starts and the buffer empties, or neither happens.
struct Consume;

impl Coordinated for Consume {
    type Aggregate = ProducerConsumer;
    type Composite = IfAll<ProducerConsumer>;

    fn arrows(&self) -> IfAll<ProducerConsumer> {
        StartConsuming.and(Use)
    }
}

impl_arrow!(Move: Produce);
impl_arrow!(GoTo: StopProducing, Fill, Use, StartConsuming, FinishConsuming);
impl_arrow!(Coordinated: FinishProducing, Consume);

fn interpret(event: Event, mailbox: &mut Mailbox<'_, ProducerConsumer>) {
    tracing::info!(?event, "effect");
    match event {
        // Goods never sit in the buffer: consume as soon as they arrive.
        Event::Stocked => mailbox.submit(Consume),
        Event::Drained => mailbox.submit(FinishConsuming),
        _ => {}
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut plant = Dispatcher::builder()
        .initial(ProducerConsumer::default())
        .label("plant")
        .interpreter(interpret)
        .after_change(|state: &ProducerConsumer| tracing::info!(?state, "settled"))
        .build()?;

    let mut history = UndoStack::with_capacity(8);

    // Nothing to consume yet: a silent no-op.
    plant.submit(Consume);

    plant.submit_undoable(Produce { batch: 1 }, &mut history);
    plant.submit(FinishProducing);

    plant.submit_undoable(Produce { batch: 2 }, &mut history);
    if let Some(name) = history.undo_action_name() {
        tracing::info!(action = name, "undoing");
    }
    history.undo(&mut plant);

    assert_eq!(*plant.current_state(), ProducerConsumer::default());
    tracing::info!(
        undo = history.history().count(),
        redo = history.can_redo(),
        "plant back at rest"
    );

    Ok(())
}
