use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0x7b, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DISABLED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x28, 0xa7, 0x45);
pub const STATUS_ERROR: Color = Color::Rgb(0xdc, 0x35, 0x45);
pub const STATUS_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
