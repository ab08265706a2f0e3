use super::console::{DualConsole, Tone};
use super::header;
use crate::app::IdeState;
use crate::storage::clip_to_width;
use crate::types::MainItem;

pub fn draw_main_menu(console: &mut DualConsole, state: &IdeState) {
    header::draw_banner(console, "Replit3DS - 3DS IDE v1.0");

    for item in MainItem::ALL {
        let i = item.index();
        header::list_row(console, 5 + i, item.label(), i == state.selected);
    }

    header::draw_separator(console, 15);
    header::draw_hint(console, 16, "D-Pad: Navigate  A: Select  B: Back");

    if !state.status.is_empty() {
        let tone = if state.status.starts_with("Error") {
            Tone::Error
        } else {
            Tone::Status
        };
        console.print_toned(
            18,
            1,
            &format!(" Status: {}", clip_to_width(&state.status, 35)),
            tone,
        );
    }

    if state.project_open {
        console.print_at(
            20,
            1,
            &format!(" Current: {}", clip_to_width(&state.current_project, 30)),
        );
    }
}
