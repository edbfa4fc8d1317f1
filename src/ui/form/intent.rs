use crate::ui::form::state::FormField;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Typed character for the focused text field.
    Insert { ch: char },
    /// Bracketed paste into the focused text field.
    Paste { text: String },
    Backspace,
    FocusNext,
    FocusPrev,
    Focus(FormField),
    /// Render the license. Ignored unless the form is ready.
    Generate,
    ScrollUp { lines: u16 },
    /// Scroll towards the end, never past `max` rows from the top.
    ScrollDown { lines: u16, max: u16 },
}

impl Intent for FormIntent {}
