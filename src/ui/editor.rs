use super::console::{DualConsole, Tone};
use super::header;
use crate::app::IdeState;
use crate::storage::{self, Storage};

const FIRST_ROW: usize = 7;
const VISIBLE_LINES: usize = 11;
const TEXT_COLS: usize = 31;

/// Read-only view of the open project's seed source.
///
/// The file is read again on every call; only the scroll offset lives in
/// the state.
pub fn draw_editor(console: &mut DualConsole, state: &IdeState, storage: &Storage) {
    header::draw_banner(console, "Code Viewer (Read-Only)");

    if !state.project_open {
        console.print_at(8, 1, "  No project open");
        header::draw_hint(console, 20, "↑↓: Scroll  B: Back");
        return;
    }

    let path = storage.seed_source_path(&state.current_project);
    match storage::read_lines(&path, state.editor_scroll, VISIBLE_LINES, TEXT_COLS) {
        Ok(lines) => {
            console.print_at(5, 1, &format!(" File: {} (Scroll: ↑↓)", storage::SEED_SOURCE));
            header::draw_separator(console, 6);
            for (i, line) in lines.iter().enumerate() {
                let number = state.editor_scroll + i + 1;
                console.print_toned(FIRST_ROW + i, 1, &format!("{:3}:", number), Tone::Dim);
                console.print_at(FIRST_ROW + i, 5, &format!(" {}", line));
            }
            console.print_at(19, 1, &format!(" Line {}+ of file", state.editor_scroll + 1));
        }
        Err(e) => {
            log::debug!("{}", e);
            console.print_toned(8, 1, "  Error: Cannot open file", Tone::Error);
        }
    }

    header::draw_hint(console, 20, "↑↓: Scroll  B: Back");
}
