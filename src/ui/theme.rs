use ratatui::style::Color;

pub const PARCHMENT: Color = Color::Rgb(0xed, 0xe7, 0xd5);
pub const PAPER: Color = Color::Rgb(0xff, 0xfc, 0xf3);
pub const PAPER_EDGE: Color = Color::Rgb(0xe9, 0xe1, 0xc9);
pub const ACTIVE_OUTLINE: Color = Color::Rgb(0xc3, 0xb6, 0x92);
pub const INK: Color = Color::Rgb(0x3c, 0x3a, 0x37);
pub const INPUT_INK: Color = Color::Rgb(0x1f, 0x2a, 0x44);
pub const MARGIN_RED: Color = Color::Rgb(0xe9, 0x6a, 0x6a);
pub const PIN_RED: Color = Color::Rgb(0xd9, 0x4f, 0x4f);
pub const MUTED: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const PROFILE_BACKGROUND: Color = Color::Rgb(0xf4, 0xf6, 0xfa);
