//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus replaces implicit reactivity with explicit registration: anything
//! interested in state changes calls `subscribe()` and receives a copy of every
//! event published afterwards (broadcast semantics).
//!
//! Publication happens synchronously right after a mutation is applied. The bus
//! is for notification only; it never stores events and never feeds back into
//! the stores.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// workspace.add_inventory_item(form)?;
/// for event in subscription.drain() {
///     println!("{}", event.event_type());
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Collect every message that is already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish()` can fail (e.g. internal lock poisoning). Callers treat that as
/// a logging concern: the mutation that produced the event has already been
/// applied and stays applied.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
