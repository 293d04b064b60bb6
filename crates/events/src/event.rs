use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are **immutable** facts describing a change that already happened.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.item.added").
    fn event_type(&self) -> &'static str;

    /// When the change was applied (wall clock).
    fn occurred_at(&self) -> DateTime<Utc>;
}
