use super::console::Tone;
use ratatui::style::{Color, Modifier, Style};

// ── Base palette ────────────────────────────────────────────────
pub const BG: Color = Color::Rgb(6, 6, 6);
pub const SCREEN: Color = Color::Rgb(18, 18, 18);
pub const BORDER: Color = Color::Rgb(50, 50, 50);
pub const BORDER_FOCUS: Color = Color::Rgb(140, 140, 140);

pub const TEXT: Color = Color::Rgb(235, 235, 235);
pub const TEXT_DIM: Color = Color::Rgb(130, 130, 130);
pub const ACCENT: Color = Color::Rgb(235, 235, 235);

pub const SUCCESS: Color = Color::Rgb(0, 255, 0);
pub const ERROR: Color = Color::Rgb(255, 50, 50);

// ── Composite styles ────────────────────────────────────────────
pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn subtitle_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn panel_title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn footer_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}

/// Style for a console cell of the given tone.
pub fn tone_style(tone: Tone) -> Style {
    let base = Style::default().bg(SCREEN);
    match tone {
        Tone::Normal => base.fg(TEXT),
        Tone::Banner => base.fg(ACCENT).add_modifier(Modifier::BOLD),
        Tone::Selected => base
            .fg(TEXT)
            .bg(Color::Rgb(40, 40, 45))
            .add_modifier(Modifier::BOLD),
        Tone::Dim => base.fg(TEXT_DIM),
        Tone::Status => base.fg(SUCCESS),
        Tone::Error => base.fg(ERROR).add_modifier(Modifier::BOLD),
    }
}
