//! Terminal Sender
//!
//! Types text into the terminal window by posting WM_CHAR messages
//! straight to its input sink, so the window never needs focus.

use crate::business::window_locator::{MatchCriteria, WindowLocator};
use crate::platform::{PlatformError, WindowHandle, WindowMessage, WindowSystem, VK_RETURN};
use std::thread;
use std::time::Duration;

/// Pause after every posted message. Windows Terminal drops input when its
/// message pump is flooded.
pub const KEY_DELAY: Duration = Duration::from_millis(10);

/// Characters of the payload shown in the log line
const LOG_PREVIEW_CHARS: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("terminal window not found")]
    WindowNotFound,
    #[error("failed to send character {ch:?}: {source}")]
    PostFailed {
        ch: char,
        #[source]
        source: PlatformError,
    },
}

/// Sends text to the matched terminal without requiring focus
pub struct TerminalSender<'a> {
    system: &'a dyn WindowSystem,
    criteria: MatchCriteria,
    delay: Duration,
}

impl<'a> TerminalSender<'a> {
    pub fn new(system: &'a dyn WindowSystem) -> Self {
        Self {
            system,
            criteria: MatchCriteria::default(),
            delay: KEY_DELAY,
        }
    }

    /// Override the inter-key pause
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Send `text`, optionally followed by Enter. Returns whether every
    /// character was queued.
    pub fn send_text(&self, text: &str, send_enter: bool) -> bool {
        match self.try_send(text, send_enter) {
            Ok(()) => {
                tracing::info!("Text sent successfully");
                true
            }
            Err(e) => {
                tracing::error!("Cannot send text: {}", e);
                false
            }
        }
    }

    /// Resolve the target window, then post the text.
    pub fn try_send(&self, text: &str, send_enter: bool) -> Result<(), SendError> {
        let locator = WindowLocator::new(self.system);

        let hwnd = locator
            .find_top_level(self.criteria.title_patterns, self.criteria.class_name)
            .ok_or(SendError::WindowNotFound)?;

        let target = match locator.find_input_sink(hwnd, self.criteria.input_site_class) {
            Some(sink) => sink,
            None => {
                tracing::warn!("Could not find input window, trying main window");
                hwnd
            }
        };

        tracing::info!("Sending text to window {}: {}", target, preview(text));

        self.post_chars(target, text)?;

        if send_enter {
            self.press_enter(target);
        }
        Ok(())
    }

    fn post_chars(&self, target: WindowHandle, text: &str) -> Result<(), SendError> {
        for ch in text.chars() {
            self.system
                .post_message(target, WindowMessage::Char(ch as u32))
                .map_err(|source| SendError::PostFailed { ch, source })?;
            thread::sleep(self.delay);
        }
        Ok(())
    }

    /// Best effort: a lost Enter leaves the text typed but unsubmitted.
    fn press_enter(&self, target: WindowHandle) {
        tracing::debug!("Sending Enter key");

        if let Err(e) = self
            .system
            .post_message(target, WindowMessage::KeyDown(VK_RETURN))
        {
            tracing::warn!("Enter key down was not queued: {}", e);
        }
        thread::sleep(self.delay);
        if let Err(e) = self
            .system
            .post_message(target, WindowMessage::KeyUp(VK_RETURN))
        {
            tracing::warn!("Enter key up was not queued: {}", e);
        }
    }
}

fn preview(text: &str) -> String {
    let head: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    format!("{}...", head)
}
