//! State-change notifications.
//!
//! The workspace publishes a [`StoreEvent`] after every mutation; observers
//! register explicitly through [`EventBus::subscribe`] and drain their
//! [`Subscription`] whenever they choose.

pub mod bus;
pub mod event;
pub mod in_memory_bus;
pub mod store_event;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use store_event::{StoreEvent, StoreEventKind};
