mod common;

use bsd3gen::license::FormState;
use bsd3gen::ui::app::App;
use bsd3gen::ui::render::draw;
use common::{ctrl, key, STATUS_TIMEOUT};
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn generated_app(cols: u16, rows: u16) -> App {
    let mut app = App::new(FormState::new("2024", "Jane Doe"), STATUS_TIMEOUT);
    app.on_resize(cols, rows);
    app.generate();
    app
}

fn draw_to(app: &App, cols: u16, rows: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    screen_text(&terminal)
}

#[test]
fn narrow_terminal_scrolls_to_the_end_of_the_license() {
    let mut app = generated_app(40, 20);
    for _ in 0..50 {
        app.scroll_down();
    }
    let screen = draw_to(&app, 40, 20);
    assert!(screen.contains("DAMAGE."), "last line not reachable:\n{screen}");
}

#[test]
fn scrolling_stops_with_the_last_row_at_the_bottom() {
    let mut app = generated_app(40, 20);
    for _ in 0..50 {
        app.scroll_down();
    }
    let at_end = app.form().scroll;
    app.scroll_down();
    assert_eq!(app.form().scroll, at_end);

    // One page back up hides the end again
    bsd3gen::ui::input::handle_key(&mut app, key(KeyCode::PageUp));
    let screen = draw_to(&app, 40, 20);
    assert!(!screen.contains("DAMAGE."));
}

#[test]
fn widening_the_terminal_pulls_the_offset_back() {
    let mut app = generated_app(40, 20);
    for _ in 0..50 {
        app.scroll_down();
    }
    let narrow_end = app.form().scroll;

    app.on_resize(120, 20);
    assert!(app.form().scroll < narrow_end);
    let screen = draw_to(&app, 120, 20);
    assert!(screen.contains("DAMAGE."));
}

#[test]
fn unscrolled_output_starts_with_the_title() {
    let mut app = generated_app(80, 40);
    bsd3gen::ui::input::handle_key(&mut app, ctrl('g'));
    let screen = draw_to(&app, 80, 40);
    assert!(screen.contains("Copyright (c) 2024, Jane Doe"));
}
