use crate::license::{FormState, LicenseText};
use crate::ui::mvi::UiState;

/// Focusable widgets in tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Year,
    Author,
    Generate,
    Copy,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Year,
        FormField::Author,
        FormField::Generate,
        FormField::Copy,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// Where the form is in its lifecycle, derived from [`FormScreenState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing typed yet.
    Empty,
    Invalid,
    Ready,
    /// Output is current with the fields.
    Generated,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormScreenState {
    pub form: FormState,
    pub focus: FormField,
    /// Last generated license, kept across later edits.
    pub output: Option<LicenseText>,
    /// Fields were edited after `output` was generated.
    pub stale: bool,
    /// True after the first accepted edit.
    pub edited: bool,
    /// First visible output line.
    pub scroll: u16,
}

impl UiState for FormScreenState {}

impl FormScreenState {
    pub fn with_form(form: FormState) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> FormPhase {
        if self.output.is_some() && !self.stale {
            FormPhase::Generated
        } else if !self.edited && self.form.is_empty() {
            FormPhase::Empty
        } else if self.form.is_ready() {
            FormPhase::Ready
        } else {
            FormPhase::Invalid
        }
    }

    /// Generate button enabled.
    pub fn can_generate(&self) -> bool {
        self.form.is_ready()
    }

    /// Copy button enabled.
    pub fn can_copy(&self) -> bool {
        self.output.is_some()
    }

    pub fn field_text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Year => Some(&self.form.year),
            FormField::Author => Some(&self.form.author),
            FormField::Generate | FormField::Copy => None,
        }
    }
}
