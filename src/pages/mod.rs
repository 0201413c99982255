//! Page-level state containers
//!
//! One struct per admin page, each owning its local copy of the seed
//! datasets and exposing the operations its view needs. Pages are plain
//! state machines: methods mutate in place and report failures as
//! `AdminError` values.

pub mod catalog;
pub mod dashboard;
pub mod directory;
pub mod finance;
pub mod logs;
pub mod media;
pub mod messages;

pub use catalog::{CatalogState, MediaSlot, MediaSource};
pub use dashboard::DashboardState;
pub use directory::{DirectoryState, UserDetail};
pub use finance::{FinanceState, FinanceTab};
pub use logs::LogsState;
pub use media::{MediaFilter, MediaState};
pub use messages::MessagingState;
