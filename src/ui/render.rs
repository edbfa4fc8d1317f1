use crate::license::{LicenseText, LICENSE_NAME};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{FormField, FormScreenState};
use crate::ui::header::Header;
use crate::ui::layout::{field_columns, layout_regions};
use crate::ui::status::StatusKind;
use crate::ui::theme::{
    ACCENT, DISABLED_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const PLACEHOLDER: &str =
    "Please enter the year and author above to generate the BSD 3-Clause License text.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let state = app.form();

    frame.render_widget(
        Header::new().widget(app.phase(), state.stale),
        regions.header,
    );
    draw_fields(frame, state, regions.fields);
    frame.render_widget(buttons(state), regions.buttons);
    frame.render_widget(output(state), regions.output);

    if let Some((message, kind)) = app.status().message() {
        let color = match kind {
            StatusKind::Success => STATUS_OK,
            StatusKind::Error => STATUS_ERROR,
        };
        frame.render_widget(
            Paragraph::new(format!("  {message}")).style(Style::default().fg(color)),
            regions.status,
        );
    }

    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}

fn draw_fields(frame: &mut Frame<'_>, state: &FormScreenState, area: Rect) {
    let (label, year, author) = field_columns(area);
    frame.render_widget(
        // Blank first line lines the label up with the boxed inputs
        Paragraph::new(vec![Line::from(""), Line::from("Copyright (c) ")])
            .alignment(Alignment::Right)
            .style(Style::default().fg(HEADER_TEXT)),
        label,
    );

    for (field, rect, title) in [
        (FormField::Year, year, " Year "),
        (FormField::Author, author, " Author "),
    ] {
        let text = state.field_text(field).unwrap_or_default();
        let focused = state.focus == field;
        let visible = visible_tail(text, rect.width.saturating_sub(3) as usize);
        let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        frame.render_widget(
            Paragraph::new(visible).style(Style::default().fg(HEADER_TEXT)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(border)),
            ),
            rect,
        );
        if focused && rect.width > 2 && rect.height > 2 {
            let offset = visible.chars().count() as u16;
            let x = rect.x + 1 + offset.min(rect.width.saturating_sub(3));
            frame.set_cursor_position((x, rect.y + 1));
        }
    }
}

/// Last `width` characters of `text`, so the caret end stays visible.
fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    match text.char_indices().nth(skip) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

fn buttons(state: &FormScreenState) -> Paragraph<'static> {
    let button = |label: &'static str, field: FormField, enabled: bool| {
        let style = if !enabled {
            Style::default().fg(DISABLED_TEXT)
        } else if state.focus == field {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT)
        };
        let style = if state.focus == field && !enabled {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    Paragraph::new(Line::from(vec![
        button("Generate License", FormField::Generate, state.can_generate()),
        Span::raw("   "),
        button("Copy to Clipboard", FormField::Copy, state.can_copy()),
    ]))
    .alignment(Alignment::Center)
}

fn output(state: &FormScreenState) -> Paragraph<'_> {
    let (title, border) = if state.stale {
        (
            format!(" {LICENSE_NAME} (fields changed since generation) "),
            STATUS_WARN,
        )
    } else {
        (format!(" {LICENSE_NAME} "), GLOBAL_BORDER)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border));

    match state.output.as_ref() {
        Some(text) => license_paragraph(text)
            .scroll((state.scroll, 0))
            .block(block),
        None => Paragraph::new(PLACEHOLDER)
            .style(Style::default().fg(DISABLED_TEXT))
            .wrap(Wrap { trim: true })
            .block(block),
    }
}

fn license_paragraph(text: &LicenseText) -> Paragraph<'_> {
    Paragraph::new(text.as_str())
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: false })
}

/// Rows the license occupies once wrapped to `width` columns.
pub fn output_rows(text: &LicenseText, width: u16) -> usize {
    license_paragraph(text).line_count(width)
}

#[cfg(test)]
mod tests {
    use super::visible_tail;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(visible_tail("2024", 6), "2024");
    }

    #[test]
    fn long_text_keeps_the_end() {
        assert_eq!(visible_tail("Jane Doe", 3), "Doe");
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundary() {
        assert_eq!(visible_tail("Zoë Ålund", 5), "Ålund");
    }
}
