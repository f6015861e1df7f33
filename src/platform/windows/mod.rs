use crate::platform::{PlatformError, WindowHandle, WindowMessage, WindowSystem};
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, TRUE, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumChildWindows, EnumWindows, GetClassNameW, GetWindowTextLengthW, GetWindowTextW,
    PostMessageW, WM_CHAR, WM_KEYDOWN, WM_KEYUP,
};

/// Window class names are capped at 256 characters by the window manager.
const CLASS_NAME_CAPACITY: usize = 256;

/// Win32 implementation over user32
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32WindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared `WNDENUMPROC` for top-level and child enumeration.
///
/// `lparam` points at a `&mut dyn FnMut(WindowHandle)` that lives on the
/// caller's stack for the whole enumeration call.
unsafe extern "system" fn enum_window_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let visit = &mut *(lparam.0 as *mut &mut dyn FnMut(WindowHandle));
    visit(WindowHandle(hwnd.0));
    TRUE
}

impl WindowSystem for Win32WindowSystem {
    fn enum_top_level(&self, mut visit: &mut dyn FnMut(WindowHandle)) {
        let lparam = LPARAM(&mut visit as *mut &mut dyn FnMut(WindowHandle) as isize);
        if let Err(e) = unsafe { EnumWindows(Some(enum_window_proc), lparam) } {
            tracing::warn!("EnumWindows failed: {}", e);
        }
    }

    fn enum_children(&self, parent: WindowHandle, mut visit: &mut dyn FnMut(WindowHandle)) {
        let lparam = LPARAM(&mut visit as *mut &mut dyn FnMut(WindowHandle) as isize);
        // The return value of EnumChildWindows is not used
        let _ = unsafe { EnumChildWindows(HWND(parent.0), Some(enum_window_proc), lparam) };
    }

    fn window_title(&self, hwnd: WindowHandle) -> Option<String> {
        let hwnd = HWND(hwnd.0);
        let length = unsafe { GetWindowTextLengthW(hwnd) };
        if length <= 0 {
            return None;
        }

        let mut buf = vec![0u16; length as usize + 1];
        let copied = unsafe { GetWindowTextW(hwnd, &mut buf) };
        if copied <= 0 {
            return None;
        }

        Some(String::from_utf16_lossy(&buf[..copied as usize]))
    }

    fn class_name(&self, hwnd: WindowHandle) -> Option<String> {
        let mut buf = [0u16; CLASS_NAME_CAPACITY];
        let copied = unsafe { GetClassNameW(HWND(hwnd.0), &mut buf) };
        if copied <= 0 {
            return None;
        }

        Some(String::from_utf16_lossy(&buf[..copied as usize]))
    }

    fn post_message(&self, hwnd: WindowHandle, message: WindowMessage) -> Result<(), PlatformError> {
        let (msg, wparam) = match message {
            WindowMessage::Char(code_point) => (WM_CHAR, code_point as usize),
            WindowMessage::KeyDown(vk) => (WM_KEYDOWN, vk as usize),
            WindowMessage::KeyUp(vk) => (WM_KEYUP, vk as usize),
        };

        unsafe { PostMessageW(HWND(hwnd.0), msg, WPARAM(wparam), LPARAM(0)) }
            .map_err(|e| PlatformError::Os(e.to_string()))
    }
}
