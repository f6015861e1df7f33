//! Terminal Keys - send text to Windows Terminal without focus
//!
//! Locates the Windows Terminal window running the target session and posts
//! keystrokes to its input window, leaving whatever has focus untouched.

pub mod business;
pub mod data;
pub mod platform;

pub use business::{SendError, TerminalSender, WindowLocator};
pub use data::{AppConfig, LoggingConfig};
pub use platform::{PlatformFactory, WindowHandle, WindowSystem};
