pub mod console;
pub mod dependencies;
pub mod editor;
pub mod header;
pub mod instructions;
pub mod layout;
pub mod main_menu;
pub mod projects;
pub mod theme;
pub mod top_screen;

use crate::app::{App, IdeState};
use crate::storage::Storage;
use crate::types::Menu;
use console::{DualConsole, Screen};
use ratatui::Frame;

/// Redraw the bottom console from the state. Reads only; the top console is
/// left as drawn at startup.
pub fn render(console: &mut DualConsole, state: &IdeState, storage: &Storage) {
    console.select(Screen::Bottom);
    console.clear();

    match state.menu {
        Menu::Main => main_menu::draw_main_menu(console, state),
        Menu::Projects => projects::draw_projects(console, state),
        Menu::Editor => editor::draw_editor(console, state, storage),
        Menu::Dependencies => dependencies::draw_dependencies(console, state),
        Menu::Build => instructions::draw_build(console, state),
        Menu::Install => instructions::draw_install(console, state),
    }
}

/// Master paint function: the two consoles framed in the terminal.
pub fn draw(f: &mut Frame, app: &App) {
    layout::draw_layout(f, f.area(), app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold;
    use tempfile::TempDir;

    fn mounted() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        storage.init_layout();
        (dir, storage)
    }

    fn rendered(state: &IdeState, storage: &Storage) -> DualConsole {
        let mut console = DualConsole::new();
        render(&mut console, state, storage);
        console
    }

    fn open_state(name: &str, menu: Menu) -> IdeState {
        IdeState {
            menu,
            project_open: true,
            current_project: name.into(),
            ..IdeState::default()
        }
    }

    #[test]
    fn main_menu_shows_cursor_status_and_project() {
        let (_dir, storage) = mounted();
        let mut state = open_state("Foo", Menu::Main);
        state.selected = 2;
        state.status = "Opened project: Foo".into();
        let console = rendered(&state, &storage);
        let screen = console.bottom();

        assert_eq!(screen.row_text(5), "    New Project");
        assert_eq!(screen.row_text(7), "  > Edit File");
        assert_eq!(screen.row_text(18), " Status: Opened project: Foo");
        assert_eq!(screen.row_text(20), " Current: Foo");
    }

    #[test]
    fn long_status_is_clipped() {
        let (_dir, storage) = mounted();
        let state = IdeState {
            status: "x".repeat(60),
            ..IdeState::default()
        };
        let console = rendered(&state, &storage);
        assert_eq!(console.bottom().row_text(18), format!(" Status: {}", "x".repeat(31)));
    }

    #[test]
    fn empty_browser_message() {
        let (_dir, storage) = mounted();
        let state = IdeState {
            menu: Menu::Projects,
            ..IdeState::default()
        };
        let console = rendered(&state, &storage);
        assert_eq!(console.bottom().row_text(6), "  No projects found.");
    }

    #[test]
    fn browser_window_follows_cursor() {
        let (_dir, storage) = mounted();
        let state = IdeState {
            menu: Menu::Projects,
            projects: (0..15).map(|i| format!("P{i}")).collect(),
            selected: 12,
            ..IdeState::default()
        };
        let console = rendered(&state, &storage);
        let screen = console.bottom();
        assert_eq!(screen.row_text(5), " Projects (15):");
        assert_eq!(screen.row_text(7), "    P3");
        assert_eq!(screen.row_text(16), "  > P12");
    }

    #[test]
    fn editor_without_project() {
        let (_dir, storage) = mounted();
        let state = IdeState {
            menu: Menu::Editor,
            ..IdeState::default()
        };
        let console = rendered(&state, &storage);
        assert_eq!(console.bottom().row_text(8), "  No project open");
    }

    #[test]
    fn editor_shows_numbered_lines() {
        let (_dir, storage) = mounted();
        scaffold::create_project(&storage, "Foo").unwrap();
        let mut state = open_state("Foo", Menu::Editor);
        state.editor_scroll = 1;
        let console = rendered(&state, &storage);
        let screen = console.bottom();

        assert_eq!(screen.row_text(7), "  2: #include <stdio.h>");
        assert_eq!(screen.row_text(19), " Line 2+ of file");
        assert!(screen.text().contains("Hello from Foo!"));
    }

    #[test]
    fn editor_past_end_is_blank() {
        let (_dir, storage) = mounted();
        scaffold::create_project(&storage, "Foo").unwrap();
        let mut state = open_state("Foo", Menu::Editor);
        state.editor_scroll = 500;
        let console = rendered(&state, &storage);
        let screen = console.bottom();
        assert_eq!(screen.row_text(7), "");
        assert_eq!(screen.row_text(19), " Line 501+ of file");
    }

    #[test]
    fn editor_missing_file_is_inline_error() {
        let (_dir, storage) = mounted();
        let state = open_state("Ghost", Menu::Editor);
        let console = rendered(&state, &storage);
        assert_eq!(console.bottom().row_text(8), "  Error: Cannot open file");
    }

    #[test]
    fn dependency_menu_lists_catalog_and_back() {
        let (_dir, storage) = mounted();
        let state = IdeState {
            menu: Menu::Dependencies,
            selected: 4,
            ..IdeState::default()
        };
        let console = rendered(&state, &storage);
        let screen = console.bottom();
        assert_eq!(screen.row_text(7), "    libctru (Core library)");
        assert_eq!(screen.row_text(11), "  > Back");
    }

    #[test]
    fn build_and_install_name_the_project() {
        let (_dir, storage) = mounted();
        let console = rendered(&open_state("Foo", Menu::Build), &storage);
        assert_eq!(console.bottom().row_text(18), "    /3ds/Foo.3dsx");

        let console = rendered(&open_state("Foo", Menu::Install), &storage);
        assert_eq!(console.bottom().row_text(11), "      -o Foo.cia \\");

        let closed = IdeState {
            menu: Menu::Build,
            ..IdeState::default()
        };
        let console = rendered(&closed, &storage);
        assert_eq!(console.bottom().row_text(10), "  Open a project first");
    }

    #[test]
    fn render_leaves_top_screen_alone() {
        let (_dir, storage) = mounted();
        let mut console = DualConsole::new();
        top_screen::draw_top_screen(&mut console);
        let before = console.top().text();
        render(&mut console, &IdeState::default(), &storage);
        assert_eq!(console.top().text(), before);
        assert!(before.contains("Press START to exit IDE"));
    }
}
