use crate::config;
use crate::deps;
use crate::error::IdeError;
use crate::input;
use crate::scaffold;
use crate::storage::{self, Storage};
use crate::types::*;
use crate::ui;
use crate::ui::console::DualConsole;
use chrono::Utc;

/// Everything the controller may change and the renderer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeState {
    pub menu: Menu,
    pub selected: usize,
    /// Leading lines of the open file hidden by the viewer.
    pub editor_scroll: usize,
    pub current_project: String,
    pub project_open: bool,
    pub status: String,
    /// Listing taken when the browser was last entered; not kept live.
    pub projects: Vec<String>,
}

impl Default for IdeState {
    fn default() -> Self {
        Self {
            menu: Menu::Main,
            selected: 0,
            editor_scroll: 0,
            current_project: String::new(),
            project_open: false,
            status: "IDE Ready".into(),
            projects: Vec::new(),
        }
    }
}

impl IdeState {
    /// Number of cursor positions in the current menu (0 for cursorless menus).
    pub fn item_count(&self) -> usize {
        match self.menu {
            Menu::Main => MainItem::ALL.len(),
            Menu::Projects => self.projects.len(),
            Menu::Dependencies => Dependency::MENU_LEN,
            Menu::Editor | Menu::Build | Menu::Install => 0,
        }
    }

    pub fn go_to(&mut self, menu: Menu) {
        log::debug!("menu {:?} -> {:?}", self.menu, menu);
        self.menu = menu;
        self.selected = 0;
    }

    /// The universal back action.
    pub fn return_to_main(&mut self) {
        self.go_to(Menu::Main);
        self.editor_scroll = 0;
    }

    /// "New Project": scaffold under an auto-generated name.
    pub fn create_project(&mut self, storage: &Storage, name: &str) {
        if !storage.storage_available() {
            log::warn!("{}", IdeError::StorageUnavailable(storage.root().to_path_buf()));
            self.status = "Error: SD card not accessible".into();
            return;
        }

        match scaffold::create_project(storage, name) {
            Ok(dir) => {
                log::info!("created project {} at {}", name, dir.display());
                self.status = format!("Project '{}' created successfully!", name);
                self.current_project = name.to_string();
                self.project_open = true;
            }
            Err(e) => {
                log::warn!("scaffolding {} failed: {}", name, e);
                self.status = scaffold_status(&e, storage, name);
            }
        }
    }

    /// Snapshot the projects root and enter the browser.
    pub fn browse_projects(&mut self, storage: &Storage) {
        match storage::list_dirs(&storage.projects_root(), MAX_PROJECTS) {
            Ok(names) => {
                self.status = format!("Found {} project(s)", names.len());
                self.projects = names;
            }
            Err(e) => {
                log::debug!("{}", e);
                self.projects.clear();
                self.status = "No projects found. Create a new project!".into();
            }
        }
        self.go_to(Menu::Projects);
    }

    pub fn open_project(&mut self, index: usize) {
        let Some(name) = self.projects.get(index).cloned() else {
            return;
        };
        log::info!("opened project {}", name);
        self.status = format!("Opened project: {}", name);
        self.current_project = name;
        self.project_open = true;
        self.go_to(Menu::Main);
    }

    pub fn view_source(&mut self) {
        if self.project_open {
            self.go_to(Menu::Editor);
            self.status = format!("Viewing: {}", storage::SEED_SOURCE);
        } else {
            self.status = "Please open a project first".into();
        }
    }

    pub fn mark_dependency(&mut self, storage: &Storage, dep: Dependency) {
        match deps::mark_installed(storage, dep.name()) {
            Ok(_) => {
                log::info!("marked dependency {}", dep.name());
                self.status = format!("Dependency '{}' marked for installation", dep.name());
            }
            Err(e) => {
                log::warn!("{}", e);
                self.status = "Error creating dependency directory".into();
            }
        }
    }
}

fn scaffold_status(error: &IdeError, storage: &Storage, name: &str) -> String {
    match error {
        IdeError::FileWrite { path, .. } if *path == storage.build_descriptor_path(name) => {
            format!("Error: Cannot create {}", storage::BUILD_DESCRIPTOR)
        }
        IdeError::FileWrite { .. } => format!("Error: Cannot create {} file", storage::SEED_SOURCE),
        _ => "Error: Cannot create project directory".into(),
    }
}

/// Top-level application: state, storage volume and the two consoles.
pub struct App {
    pub state: IdeState,
    pub storage: Storage,
    pub console: DualConsole,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let storage = Storage::new(config::storage_root(config));
        storage.init_layout();

        let mut console = DualConsole::new();
        ui::top_screen::draw_top_screen(&mut console);

        let mut app = Self {
            state: IdeState::default(),
            storage,
            console,
            should_quit: false,
        };
        app.render();
        app
    }

    /// Apply one frame's input snapshot.
    pub fn step(&mut self, keys: Keys) {
        if input::wants_exit(&self.state, keys) {
            log::info!("exit selected");
            self.should_quit = true;
            return;
        }
        input::handle_keys(&mut self.state, &self.storage, keys, Utc::now());
        self.render();
    }

    pub fn render(&mut self) {
        ui::render(&mut self.console, &self.state, &self.storage);
    }
}
