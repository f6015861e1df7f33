//! Scripted in-memory window system for tests

use crate::platform::{PlatformError, WindowHandle, WindowMessage, WindowSystem};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone)]
struct FakeWindow {
    title: String,
    class_name: String,
    children: Vec<WindowHandle>,
}

/// A message the code under test posted, with the time it was posted
#[derive(Debug, Clone, Copy)]
pub struct Posted {
    pub hwnd: WindowHandle,
    pub message: WindowMessage,
    pub at: Instant,
}

#[derive(Default)]
pub struct FakeWindowSystem {
    top_level: Vec<WindowHandle>,
    windows: HashMap<WindowHandle, FakeWindow>,
    /// Zero-based index of the post call that should fail
    fail_post_at: Option<usize>,
    posted: RefCell<Vec<Posted>>,
    post_calls: RefCell<usize>,
}

impl FakeWindowSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_level(mut self, hwnd: isize, title: &str, class_name: &str) -> Self {
        let hwnd = WindowHandle(hwnd);
        self.top_level.push(hwnd);
        self.windows.insert(
            hwnd,
            FakeWindow {
                title: title.to_string(),
                class_name: class_name.to_string(),
                children: Vec::new(),
            },
        );
        self
    }

    pub fn with_child(mut self, parent: isize, hwnd: isize, class_name: &str) -> Self {
        let hwnd = WindowHandle(hwnd);
        self.windows.insert(
            hwnd,
            FakeWindow {
                title: String::new(),
                class_name: class_name.to_string(),
                children: Vec::new(),
            },
        );
        if let Some(parent) = self.windows.get_mut(&WindowHandle(parent)) {
            parent.children.push(hwnd);
        }
        self
    }

    pub fn failing_post_at(mut self, call_index: usize) -> Self {
        self.fail_post_at = Some(call_index);
        self
    }

    /// Messages that were successfully queued
    pub fn posted(&self) -> Vec<Posted> {
        self.posted.borrow().clone()
    }

    pub fn messages(&self) -> Vec<WindowMessage> {
        self.posted.borrow().iter().map(|p| p.message).collect()
    }
}

impl WindowSystem for FakeWindowSystem {
    fn enum_top_level(&self, visit: &mut dyn FnMut(WindowHandle)) {
        for hwnd in &self.top_level {
            visit(*hwnd);
        }
    }

    fn enum_children(&self, parent: WindowHandle, visit: &mut dyn FnMut(WindowHandle)) {
        if let Some(window) = self.windows.get(&parent) {
            for child in &window.children {
                visit(*child);
            }
        }
    }

    fn window_title(&self, hwnd: WindowHandle) -> Option<String> {
        self.windows
            .get(&hwnd)
            .map(|w| w.title.clone())
            .filter(|t| !t.is_empty())
    }

    fn class_name(&self, hwnd: WindowHandle) -> Option<String> {
        self.windows.get(&hwnd).map(|w| w.class_name.clone())
    }

    fn post_message(&self, hwnd: WindowHandle, message: WindowMessage) -> Result<(), PlatformError> {
        let call = {
            let mut calls = self.post_calls.borrow_mut();
            let call = *calls;
            *calls += 1;
            call
        };

        if self.fail_post_at == Some(call) {
            return Err(PlatformError::Os("PostMessageW returned FALSE".to_string()));
        }

        self.posted.borrow_mut().push(Posted {
            hwnd,
            message,
            at: Instant::now(),
        });
        Ok(())
    }
}
