//! Shared test utilities.

#![allow(dead_code)]

use bsd3gen::clipboard::{ClipboardError, ClipboardSink};
use bsd3gen::license::FormState;
use bsd3gen::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

pub const STATUS_TIMEOUT: Duration = Duration::from_millis(3000);

/// Clipboard fake that remembers every write.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// Clipboard fake that always fails.
pub struct FailingClipboard;

impl ClipboardSink for FailingClipboard {
    fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write("no display".to_string()))
    }
}

/// App with an empty form and a recording clipboard.
pub fn app_with_clipboard() -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::default();
    let app = App::new(FormState::default(), STATUS_TIMEOUT)
        .with_clipboard(Box::new(clipboard.clone()));
    (app, clipboard)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Send each character of `text` as a key press.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        bsd3gen::ui::input::handle_key(app, key(KeyCode::Char(ch)));
    }
}
