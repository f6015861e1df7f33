//! Window Locator
//!
//! Finds the Windows Terminal window hosting the session and the nested
//! child window that actually consumes keyboard input.

use crate::platform::{WindowHandle, WindowSystem};

/// Title fragments identifying the target terminal tab
pub const TITLE_PATTERNS: &[&str] = &[
    "claude",
    "Claude",
    "CLAUDE",
    "Red Queen",
    "red queen",
    "RED QUEEN",
];

/// Top-level window class registered by Windows Terminal
pub const TERMINAL_WINDOW_CLASS: &str = "CASCADIA_HOSTING_WINDOW_CLASS";

/// Class name fragment of the XAML input-hosting child window
pub const INPUT_SITE_CLASS: &str = "Windows.UI.Input.InputSite.WindowClass";

/// Compiled-in criteria for the target window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCriteria {
    pub title_patterns: &'static [&'static str],
    pub class_name: &'static str,
    pub input_site_class: &'static str,
}

impl Default for MatchCriteria {
    fn default() -> Self {
        Self {
            title_patterns: TITLE_PATTERNS,
            class_name: TERMINAL_WINDOW_CLASS,
            input_site_class: INPUT_SITE_CLASS,
        }
    }
}

/// Snapshot of one enumerated window, dropped once it has been matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub hwnd: WindowHandle,
    pub title: String,
    pub class_name: String,
}

impl WindowDescriptor {
    /// Class must match exactly; the title only needs to contain one pattern.
    pub fn matches(&self, title_patterns: &[&str], class_name: &str) -> bool {
        self.class_name == class_name
            && title_patterns
                .iter()
                .any(|pattern| self.title.contains(pattern))
    }
}

pub struct WindowLocator<'a> {
    system: &'a dyn WindowSystem,
}

impl<'a> WindowLocator<'a> {
    pub fn new(system: &'a dyn WindowSystem) -> Self {
        Self { system }
    }

    fn describe(&self, hwnd: WindowHandle) -> Option<WindowDescriptor> {
        // Untitled windows are never candidates
        let title = self.system.window_title(hwnd)?;
        let class_name = self.system.class_name(hwnd).unwrap_or_default();
        Some(WindowDescriptor {
            hwnd,
            title,
            class_name,
        })
    }

    /// First top-level window, in enumeration order, that matches.
    pub fn find_top_level(
        &self,
        title_patterns: &[&str],
        class_name: &str,
    ) -> Option<WindowHandle> {
        tracing::info!(
            "Searching for {} window with title containing one of {:?}",
            class_name,
            title_patterns
        );

        let mut handles = Vec::new();
        self.system.enum_top_level(&mut |hwnd| handles.push(hwnd));

        let found = handles
            .into_iter()
            .filter_map(|hwnd| self.describe(hwnd))
            .find(|window| window.matches(title_patterns, class_name));

        match found {
            Some(window) => {
                tracing::debug!(
                    "Found window: {} (Class: {}, Handle: {})",
                    window.title,
                    window.class_name,
                    window.hwnd
                );
                tracing::info!("Found terminal window: {}", window.hwnd);
                Some(window.hwnd)
            }
            None => {
                tracing::warn!("No terminal window found matching {:?}", title_patterns);
                None
            }
        }
    }

    /// Last child of `parent` whose class contains `input_site_class`.
    ///
    /// Windows Terminal can host several InputSite windows; the most
    /// recently created one is the live text sink. This is an observed
    /// behaviour of current Terminal builds, not a documented contract.
    pub fn find_input_sink(
        &self,
        parent: WindowHandle,
        input_site_class: &str,
    ) -> Option<WindowHandle> {
        let mut children = Vec::new();
        self.system.enum_children(parent, &mut |hwnd| children.push(hwnd));

        let sink = children.into_iter().rev().find(|&hwnd| {
            self.system
                .class_name(hwnd)
                .is_some_and(|class| class.contains(input_site_class))
        });

        match sink {
            Some(hwnd) => tracing::info!("Using input window: {}", hwnd),
            None => tracing::warn!("Could not find InputSite window under {}", parent),
        }
        sink
    }
}
