use crate::ui::mvi::UiState;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusLineState {
    #[default]
    Hidden,
    Visible {
        message: String,
        kind: StatusKind,
        expires_at: Instant,
    },
}

impl UiState for StatusLineState {}

impl StatusLineState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<(&str, StatusKind)> {
        match self {
            Self::Visible { message, kind, .. } => Some((message.as_str(), *kind)),
            Self::Hidden => None,
        }
    }
}
