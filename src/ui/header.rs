use crate::license::LICENSE_NAME;
use crate::ui::form::FormPhase;
use crate::ui::theme::{
    DISABLED_TEXT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_WARN,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, phase: FormPhase, stale: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (label, color) = match phase {
            FormPhase::Empty => ("Waiting for input", DISABLED_TEXT),
            FormPhase::Invalid => ("Incomplete", STATUS_WARN),
            FormPhase::Ready if stale => ("Fields changed, regenerate", STATUS_WARN),
            FormPhase::Ready => ("Ready", STATUS_OK),
            FormPhase::Generated => ("Generated", STATUS_OK),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(format!("{} Generator", LICENSE_NAME), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(color)),
            Span::styled(" ", text_style),
            Span::styled(label, Style::default().fg(color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
