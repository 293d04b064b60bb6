//! Inventory domain module.
//!
//! Raw materials the shop buys (sugar, milk, cups...), each with the size and
//! price of one purchased batch. Pure domain logic: no IO, no persistence.

pub mod item;
pub mod store;

pub use item::{InventoryItem, InventoryItemForm, UomKind};
pub use store::{DEFAULT_PAGE_SIZE, InventoryStore, Page, paginate};
