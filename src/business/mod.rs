//! Window discovery and text injection

pub mod terminal_sender;
pub mod window_locator;

pub use terminal_sender::{SendError, TerminalSender, KEY_DELAY};
pub use window_locator::{MatchCriteria, WindowDescriptor, WindowLocator};
