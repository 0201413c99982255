//! Shell state: session gate, navigation, ephemeral resources

pub mod navigation;
pub mod objects;
pub mod session;

pub use navigation::{NavItem, Route, NAV_ITEMS};
pub use objects::ObjectUrlRegistry;
pub use session::{MemorySentinelStore, SentinelStore, SessionGate};
