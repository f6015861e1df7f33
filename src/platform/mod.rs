//! Platform window-system access
//!
//! Everything the locator and sender need from the OS goes through
//! [`WindowSystem`], so the matching and pacing logic stays testable off Windows.

use std::fmt;

#[cfg(target_os = "windows")]
pub mod windows;
#[cfg(target_os = "windows")]
pub use self::windows::Win32WindowSystem;

#[cfg(test)]
pub(crate) mod fake;

/// Opaque OS window identifier.
///
/// Borrowed from the window manager for the duration of one invocation.
/// Never owned, never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Virtual key code for Enter (`VK_RETURN`).
pub const VK_RETURN: u16 = 0x0D;

/// A message posted to a window's queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMessage {
    /// Character input carrying a Unicode code point
    Char(u32),
    /// Key press for a virtual key code
    KeyDown(u16),
    /// Key release for a virtual key code
    KeyUp(u16),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window injection is only supported on Windows")]
    UnsupportedPlatform,
    #[error("OS call failed: {0}")]
    Os(String),
}

/// Window-manager primitives used by the locator and the sender.
///
/// Enumeration hands every handle to `visit` in OS order; callers collect
/// into their own storage and inspect it after the call returns.
pub trait WindowSystem {
    /// Visit every top-level window
    fn enum_top_level(&self, visit: &mut dyn FnMut(WindowHandle));

    /// Visit the child windows of `parent`
    fn enum_children(&self, parent: WindowHandle, visit: &mut dyn FnMut(WindowHandle));

    /// Window title, `None` when the window has no title text
    fn window_title(&self, hwnd: WindowHandle) -> Option<String>;

    /// Registered window class name
    fn class_name(&self, hwnd: WindowHandle) -> Option<String>;

    /// Queue `message` on the window without waiting for it to be processed
    fn post_message(&self, hwnd: WindowHandle, message: WindowMessage) -> Result<(), PlatformError>;
}

/// Factory for the platform window system
pub struct PlatformFactory;

impl PlatformFactory {
    pub fn create_window_system() -> Result<Box<dyn WindowSystem>, PlatformError> {
        #[cfg(target_os = "windows")]
        return Ok(Box::new(Win32WindowSystem::new()));
        #[cfg(not(target_os = "windows"))]
        Err(PlatformError::UnsupportedPlatform)
    }
}
