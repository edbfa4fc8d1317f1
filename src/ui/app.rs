use crate::clipboard::ClipboardSink;
use crate::license::FormState;
use crate::ui::form::{FormField, FormIntent, FormPhase, FormReducer, FormScreenState};
use crate::ui::layout::output_viewport;
use crate::ui::mvi::Reducer;
use crate::ui::render::output_rows;
use crate::ui::status::{StatusIntent, StatusKind, StatusLineState, StatusReducer};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

pub const MSG_GENERATED: &str = "License generated successfully!";
pub const MSG_COPIED: &str = "License copied to clipboard!";
pub const MSG_NOTHING_TO_COPY: &str = "No license to copy";
pub const MSG_CLIPBOARD_UNAVAILABLE: &str = "Clipboard unavailable";

/// Lines moved by one PageUp/PageDown.
const SCROLL_PAGE: u16 = 5;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// UI shell. Owns the only mutable form state and the clipboard.
pub struct App {
    should_quit: bool,
    form: FormScreenState,
    status: StatusLineState,
    status_timeout: Duration,
    /// `None` when the system clipboard could not be opened.
    clipboard: Option<Box<dyn ClipboardSink>>,
    /// Output text area from the last known terminal size.
    output_viewport: Option<Rect>,
}

impl App {
    pub fn new(initial: FormState, status_timeout: Duration) -> Self {
        Self {
            should_quit: false,
            form: FormScreenState::with_form(initial),
            status: StatusLineState::default(),
            status_timeout,
            clipboard: None,
            output_viewport: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &FormScreenState {
        &self.form
    }

    pub fn phase(&self) -> FormPhase {
        self.form.phase()
    }

    pub fn status(&self) -> &StatusLineState {
        &self.status
    }

    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    /// Expire the status message if its deadline is at or before `now`.
    pub fn on_tick_at(&mut self, now: Instant) {
        dispatch_mvi!(self, status, StatusReducer, StatusIntent::Tick { now });
    }

    /// Record the terminal size and keep the scroll offset in range for it.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.output_viewport = Some(output_viewport(Rect::new(0, 0, cols, rows)));
        let max = self.max_scroll();
        self.dispatch_form(FormIntent::ScrollDown { lines: 0, max });
    }

    pub fn insert_char(&mut self, ch: char) {
        self.dispatch_form(FormIntent::Insert { ch });
    }

    pub fn paste(&mut self, text: &str) {
        self.dispatch_form(FormIntent::Paste {
            text: text.to_string(),
        });
    }

    pub fn backspace(&mut self) {
        self.dispatch_form(FormIntent::Backspace);
    }

    pub fn focus_next(&mut self) {
        self.dispatch_form(FormIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        self.dispatch_form(FormIntent::FocusPrev);
    }

    pub fn focus(&mut self, field: FormField) {
        self.dispatch_form(FormIntent::Focus(field));
    }

    pub fn scroll_up(&mut self) {
        self.dispatch_form(FormIntent::ScrollUp { lines: SCROLL_PAGE });
    }

    pub fn scroll_down(&mut self) {
        let max = self.max_scroll();
        self.dispatch_form(FormIntent::ScrollDown {
            lines: SCROLL_PAGE,
            max,
        });
    }

    /// Largest scroll offset that still fills the output pane.
    fn max_scroll(&self) -> u16 {
        let Some(text) = self.form.output.as_ref() else {
            return 0;
        };
        let (width, height) = match self.output_viewport {
            Some(area) => (area.width.max(1), area.height),
            // Size not known yet: one row per line, one row visible
            None => (u16::MAX, 1),
        };
        let rows = output_rows(text, width).saturating_sub(height as usize);
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// Enter key: press the focused button, or generate from a text field.
    pub fn activate(&mut self) {
        match self.form.focus {
            FormField::Copy => self.copy(),
            FormField::Year | FormField::Author | FormField::Generate => self.generate(),
        }
    }

    /// Render the license into the output pane.
    ///
    /// Does nothing while the form is invalid, which is how the disabled
    /// generate action behaves.
    pub fn generate(&mut self) {
        if !self.form.can_generate() {
            tracing::debug!(phase = ?self.form.phase(), "Generate ignored, form not ready");
            return;
        }
        self.dispatch_form(FormIntent::Generate);
        tracing::info!(year = %self.form.form.year, "License generated");
        self.show_status(MSG_GENERATED, StatusKind::Success);
    }

    /// Copy the displayed license text to the clipboard.
    pub fn copy(&mut self) {
        let Some(text) = self.form.output.as_ref() else {
            self.show_status(MSG_NOTHING_TO_COPY, StatusKind::Error);
            return;
        };
        let Some(clipboard) = self.clipboard.as_mut() else {
            tracing::warn!("Copy requested without a clipboard");
            self.show_status(MSG_CLIPBOARD_UNAVAILABLE, StatusKind::Error);
            return;
        };
        match clipboard.write(text.as_str()) {
            Ok(()) => {
                tracing::info!(stale = self.form.stale, "License copied to clipboard");
                self.show_status(MSG_COPIED, StatusKind::Success);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard write failed");
                self.show_status(&err.to_string(), StatusKind::Error);
            }
        }
    }

    fn show_status(&mut self, message: &str, kind: StatusKind) {
        let intent = StatusIntent::Show {
            message: message.to_string(),
            kind,
            now: Instant::now(),
            ttl: self.status_timeout,
        };
        dispatch_mvi!(self, status, StatusReducer, intent);
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }
}
