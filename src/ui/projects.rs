use super::console::DualConsole;
use super::header;
use crate::app::IdeState;
use crate::storage::clip_to_width;

/// Rows available for project names.
const VISIBLE_ROWS: usize = 10;

pub fn draw_projects(console: &mut DualConsole, state: &IdeState) {
    header::draw_banner(console, "Project Browser");

    if state.projects.is_empty() {
        console.print_at(6, 1, "  No projects found.");
        console.print_at(8, 1, "  Create a new project from");
        console.print_at(9, 1, "  the main menu.");
    } else {
        console.print_at(5, 1, &format!(" Projects ({}):", state.projects.len()));

        // Scroll the window so the cursor row is always on screen.
        let first = state.selected.saturating_sub(VISIBLE_ROWS - 1);
        for (row, (i, name)) in state
            .projects
            .iter()
            .enumerate()
            .skip(first)
            .take(VISIBLE_ROWS)
            .enumerate()
        {
            header::list_row(console, 7 + row, &clip_to_width(name, 30), i == state.selected);
        }
    }

    header::draw_hint(console, 20, "A: Open  B: Back");
}
