//! Shell color palette

use ratatui::style::Color;

pub const ACCENT: Color = Color::Magenta;
pub const DIM: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;
pub const WARNING: Color = Color::Yellow;
pub const OK: Color = Color::Green;
pub const CHROME_BG: Color = Color::Indexed(236);
