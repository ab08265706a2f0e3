//! Per-frame input handling.
//!
//! A frame's [`Keys`] snapshot is split into [`Event`]s, each looked up in
//! [`transition`] against the current state, and the resulting [`Command`]s
//! are applied in order. The back button is checked last, after the menu's
//! own handler, so it also undoes a forward move made in the same frame.

use crate::app::IdeState;
use crate::scaffold;
use crate::storage::Storage;
use crate::types::*;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Up,
    Down,
    Confirm,
}

/// What a single event does to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(usize),
    Scroll(usize),
    CreateProject,
    BrowseProjects,
    ViewSource,
    GoTo(Menu),
    OpenProject(usize),
    MarkInstalled(Dependency),
    ReturnToMain,
}

/// Map a host key press onto a console button. Unknown keys map to nothing.
pub fn keys_for(key: KeyEvent) -> Keys {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return Keys::empty();
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Keys::UP,
        KeyCode::Down | KeyCode::Char('j') => Keys::DOWN,
        KeyCode::Enter | KeyCode::Char('a') => Keys::A,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Keys::B,
        KeyCode::Char('s') => Keys::START,
        _ => Keys::empty(),
    }
}

/// The outer loop's exit check: START or A on the Exit entry of the main menu.
pub fn wants_exit(state: &IdeState, keys: Keys) -> bool {
    state.menu == Menu::Main
        && state.selected == MainItem::Exit.index()
        && keys.intersects(Keys::START | Keys::A)
}

/// Events a menu reacts to, in the order its handler looks at them.
fn frame_events(menu: Menu, keys: Keys) -> Vec<Event> {
    let order: &[(Keys, Event)] = match menu {
        Menu::Editor => &[(Keys::UP, Event::Up), (Keys::DOWN, Event::Down)],
        Menu::Build | Menu::Install => &[],
        Menu::Main | Menu::Projects | Menu::Dependencies => &[
            (Keys::DOWN, Event::Down),
            (Keys::UP, Event::Up),
            (Keys::A, Event::Confirm),
        ],
    };
    order
        .iter()
        .filter(|(bit, _)| keys.contains(*bit))
        .map(|(_, event)| *event)
        .collect()
}

/// The transition table: `(menu, event)` to the command it triggers.
pub fn transition(state: &IdeState, event: Event) -> Option<Command> {
    let count = state.item_count();
    if state.menu.has_list() && count == 0 {
        return None;
    }

    match (state.menu, event) {
        (Menu::Main | Menu::Projects | Menu::Dependencies, Event::Down) => {
            Some(Command::Select((state.selected + 1) % count))
        }
        (Menu::Main | Menu::Projects | Menu::Dependencies, Event::Up) => {
            Some(Command::Select((state.selected + count - 1) % count))
        }
        (Menu::Main, Event::Confirm) => match MainItem::from_index(state.selected)? {
            MainItem::NewProject => Some(Command::CreateProject),
            MainItem::OpenProject => Some(Command::BrowseProjects),
            MainItem::EditFile => Some(Command::ViewSource),
            MainItem::ManageDependencies => Some(Command::GoTo(Menu::Dependencies)),
            MainItem::BuildProject => Some(Command::GoTo(Menu::Build)),
            MainItem::InstallToHomeMenu => Some(Command::GoTo(Menu::Install)),
            // Left to the outer loop.
            MainItem::Exit => None,
        },
        (Menu::Projects, Event::Confirm) => Some(Command::OpenProject(state.selected)),
        (Menu::Dependencies, Event::Confirm) => Some(
            Dependency::from_index(state.selected)
                .map(Command::MarkInstalled)
                .unwrap_or(Command::ReturnToMain),
        ),
        (Menu::Editor, Event::Up) => state
            .editor_scroll
            .checked_sub(1)
            .map(Command::Scroll),
        (Menu::Editor, Event::Down) => Some(Command::Scroll(state.editor_scroll.saturating_add(1))),
        _ => None,
    }
}

pub fn apply(state: &mut IdeState, storage: &Storage, command: Command, now: DateTime<Utc>) {
    match command {
        Command::Select(index) => state.selected = index,
        Command::Scroll(offset) => state.editor_scroll = offset,
        Command::CreateProject => {
            let name = scaffold::auto_project_name(now);
            state.create_project(storage, &name);
        }
        Command::BrowseProjects => state.browse_projects(storage),
        Command::ViewSource => state.view_source(),
        Command::GoTo(menu) => state.go_to(menu),
        Command::OpenProject(index) => state.open_project(index),
        Command::MarkInstalled(dep) => state.mark_dependency(storage, dep),
        Command::ReturnToMain => state.return_to_main(),
    }
}

/// Run one frame of the controller.
pub fn handle_keys(state: &mut IdeState, storage: &Storage, keys: Keys, now: DateTime<Utc>) {
    let menu = state.menu;
    for event in frame_events(menu, keys) {
        // Once the handler has left its menu it stops reading this frame.
        if state.menu != menu {
            break;
        }
        if let Some(command) = transition(state, event) {
            apply(state, storage, command, now);
        }
    }

    if keys.contains(Keys::B) && state.menu != Menu::Main {
        state.return_to_main();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_042, 0).unwrap()
    }

    fn mounted() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        storage.init_layout();
        (dir, storage)
    }

    fn press(state: &mut IdeState, storage: &Storage, keys: Keys) {
        handle_keys(state, storage, keys, now());
    }

    fn state_in(menu: Menu) -> IdeState {
        IdeState {
            menu,
            ..IdeState::default()
        }
    }

    #[test]
    fn down_n_times_wraps_home() {
        let (_dir, storage) = mounted();
        for menu in [Menu::Main, Menu::Dependencies] {
            let mut state = state_in(menu);
            let n = state.item_count();
            for _ in 0..n {
                press(&mut state, &storage, Keys::DOWN);
            }
            assert_eq!(state.selected, 0, "{menu:?}");
        }

        let mut state = state_in(Menu::Projects);
        state.projects = vec!["a".into(), "b".into(), "c".into()];
        state.selected = 1;
        for _ in 0..3 {
            press(&mut state, &storage, Keys::DOWN);
        }
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn up_from_top_goes_to_last() {
        let (_dir, storage) = mounted();
        let mut state = IdeState::default();
        press(&mut state, &storage, Keys::UP);
        assert_eq!(state.selected, 6);

        let mut deps = state_in(Menu::Dependencies);
        press(&mut deps, &storage, Keys::UP);
        assert_eq!(deps.selected, 4);
    }

    #[test]
    fn empty_project_list_ignores_input() {
        let (_dir, storage) = mounted();
        let mut state = state_in(Menu::Projects);
        press(&mut state, &storage, Keys::DOWN);
        press(&mut state, &storage, Keys::UP);
        press(&mut state, &storage, Keys::A);
        assert_eq!(state.selected, 0);
        assert_eq!(state.menu, Menu::Projects);
        assert!(!state.project_open);
    }

    #[test]
    fn new_project_uses_clock_name() {
        let (_dir, storage) = mounted();
        let mut state = IdeState::default();
        press(&mut state, &storage, Keys::A);
        assert_eq!(state.menu, Menu::Main);
        assert_eq!(state.current_project, "Project_42");
        assert!(storage.seed_source_path("Project_42").is_file());
    }

    #[test]
    fn open_project_from_browser() {
        let (_dir, storage) = mounted();
        fs::create_dir(storage.project_dir("Foo")).unwrap();
        let mut state = IdeState::default();
        state.selected = MainItem::OpenProject.index();
        press(&mut state, &storage, Keys::A);
        assert_eq!(state.menu, Menu::Projects);
        assert_eq!(state.selected, 0);

        press(&mut state, &storage, Keys::A);
        assert_eq!(state.menu, Menu::Main);
        assert_eq!(state.selected, 0);
        assert!(state.project_open);
        assert_eq!(state.current_project, "Foo");
        assert_eq!(state.status, "Opened project: Foo");
    }

    #[test]
    fn edit_without_project_stays_on_main() {
        let (_dir, storage) = mounted();
        let mut state = IdeState::default();
        state.selected = MainItem::EditFile.index();
        press(&mut state, &storage, Keys::A);
        assert_eq!(state.menu, Menu::Main);
        assert_eq!(state.status, "Please open a project first");
    }

    #[test]
    fn main_confirm_reaches_each_menu() {
        let (_dir, storage) = mounted();
        for (item, menu) in [
            (MainItem::ManageDependencies, Menu::Dependencies),
            (MainItem::BuildProject, Menu::Build),
            (MainItem::InstallToHomeMenu, Menu::Install),
        ] {
            let mut state = IdeState::default();
            state.selected = item.index();
            press(&mut state, &storage, Keys::A);
            assert_eq!(state.menu, menu);
            assert_eq!(state.selected, 0);
        }
    }

    #[test]
    fn exit_item_is_left_to_outer_loop() {
        let (_dir, storage) = mounted();
        let mut state = IdeState::default();
        state.selected = MainItem::Exit.index();
        let before = state.clone();
        press(&mut state, &storage, Keys::A);
        assert_eq!(state, before);
        assert!(wants_exit(&state, Keys::START));
        assert!(!wants_exit(&IdeState::default(), Keys::START));
    }

    #[test]
    fn dependency_confirm_marks_and_stays() {
        let (_dir, storage) = mounted();
        let mut state = state_in(Menu::Dependencies);
        state.selected = 1;
        press(&mut state, &storage, Keys::A);
        assert_eq!(state.menu, Menu::Dependencies);
        assert!(storage.dependency_dir("citro3d").is_dir());

        state.selected = 4;
        press(&mut state, &storage, Keys::A);
        assert_eq!(state.menu, Menu::Main);
    }

    #[test]
    fn editor_scroll_is_floored_not_capped() {
        let (_dir, storage) = mounted();
        let mut state = state_in(Menu::Editor);
        press(&mut state, &storage, Keys::UP);
        assert_eq!(state.editor_scroll, 0);
        for _ in 0..100 {
            press(&mut state, &storage, Keys::DOWN);
        }
        assert_eq!(state.editor_scroll, 100);
        for _ in 0..150 {
            press(&mut state, &storage, Keys::UP);
        }
        assert_eq!(state.editor_scroll, 0);
    }

    #[test]
    fn build_and_install_only_go_back() {
        let (_dir, storage) = mounted();
        for menu in [Menu::Build, Menu::Install] {
            let mut state = state_in(menu);
            press(&mut state, &storage, Keys::DOWN | Keys::A);
            assert_eq!(state.menu, menu);
            press(&mut state, &storage, Keys::B);
            assert_eq!(state.menu, Menu::Main);
        }
    }

    #[test]
    fn back_resets_cursor_and_scroll() {
        let (_dir, storage) = mounted();
        let mut state = state_in(Menu::Editor);
        state.editor_scroll = 7;
        press(&mut state, &storage, Keys::B);
        assert_eq!(state.menu, Menu::Main);
        assert_eq!(state.selected, 0);
        assert_eq!(state.editor_scroll, 0);
    }

    #[test]
    fn back_on_main_does_nothing() {
        let (_dir, storage) = mounted();
        let mut state = IdeState::default();
        state.selected = 3;
        press(&mut state, &storage, Keys::B);
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn back_in_same_frame_beats_forward_move() {
        let (_dir, storage) = mounted();
        let mut state = IdeState::default();
        state.selected = MainItem::BuildProject.index();
        press(&mut state, &storage, Keys::A | Keys::B);
        assert_eq!(state.menu, Menu::Main);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn move_then_confirm_in_one_frame() {
        let (_dir, storage) = mounted();
        let mut state = IdeState::default();
        state.selected = MainItem::ManageDependencies.index();
        // DOWN is read before A, so the confirm lands on Build.
        press(&mut state, &storage, Keys::DOWN | Keys::A);
        assert_eq!(state.menu, Menu::Build);
    }

    #[test]
    fn key_mapping() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(keys_for(key(KeyCode::Up)), Keys::UP);
        assert_eq!(keys_for(key(KeyCode::Enter)), Keys::A);
        assert_eq!(keys_for(key(KeyCode::Esc)), Keys::B);
        assert_eq!(keys_for(key(KeyCode::Char('s'))), Keys::START);
        assert_eq!(keys_for(key(KeyCode::Char('z'))), Keys::empty());
        assert_eq!(
            keys_for(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Keys::empty()
        );
    }
}
