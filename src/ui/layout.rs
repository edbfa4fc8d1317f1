use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub fields: Rect,
    pub buttons: Rect,
    pub output: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let [header, fields, buttons, output, status, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);
    Regions {
        header,
        fields,
        buttons,
        output,
        status,
        footer,
    }
}

/// Text area inside the output pane's border.
pub fn output_viewport(area: Rect) -> Rect {
    let output = layout_regions(area).output;
    Rect {
        x: output.x.saturating_add(1),
        y: output.y.saturating_add(1),
        width: output.width.saturating_sub(2),
        height: output.height.saturating_sub(2),
    }
}

/// Splits the field row into label, year box, and author box.
pub fn field_columns(area: Rect) -> (Rect, Rect, Rect) {
    let [label, year, author] = Layout::horizontal([
        Constraint::Length(15),
        Constraint::Length(10),
        Constraint::Min(10),
    ])
    .areas(area);
    (label, year, author)
}
