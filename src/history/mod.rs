//! Session-local archive of successful scans

mod item;
mod store;

pub use item::HistoryItem;
pub use store::HistoryStore;
