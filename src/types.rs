use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Most project directories kept from one listing; extra entries are dropped.
pub const MAX_PROJECTS: usize = 20;

/// Persisted settings (`config.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory standing in for the SD card volume.
    #[serde(rename = "storageRoot", default)]
    pub storage_root: Option<String>,
    /// Length of one frame, i.e. the wait for the next display refresh.
    #[serde(rename = "frameMillis", default = "default_frame_millis")]
    pub frame_millis: u64,
    #[serde(rename = "logFile", default)]
    pub log_file: Option<String>,
}

fn default_frame_millis() -> u64 {
    16
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: None,
            frame_millis: default_frame_millis(),
            log_file: None,
        }
    }
}

/// The screen currently driving input and the bottom console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    Projects,
    Editor,
    Dependencies,
    Build,
    Install,
}

impl Menu {
    /// Menus that show a cursor over a list.
    pub fn has_list(self) -> bool {
        matches!(self, Menu::Main | Menu::Projects | Menu::Dependencies)
    }
}

bitflags! {
    /// Buttons newly pressed during one frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Keys: u32 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const A = 1 << 2;
        const B = 1 << 3;
        const START = 1 << 4;
    }
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainItem {
    NewProject,
    OpenProject,
    EditFile,
    ManageDependencies,
    BuildProject,
    InstallToHomeMenu,
    Exit,
}

impl MainItem {
    pub const ALL: [MainItem; 7] = [
        MainItem::NewProject,
        MainItem::OpenProject,
        MainItem::EditFile,
        MainItem::ManageDependencies,
        MainItem::BuildProject,
        MainItem::InstallToHomeMenu,
        MainItem::Exit,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            MainItem::NewProject => "New Project",
            MainItem::OpenProject => "Open Project",
            MainItem::EditFile => "Edit File",
            MainItem::ManageDependencies => "Manage Dependencies",
            MainItem::BuildProject => "Build Project",
            MainItem::InstallToHomeMenu => "Install to Home Menu",
            MainItem::Exit => "Exit",
        }
    }
}

/// The fixed dependency catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    Libctru,
    Citro3d,
    Citro2d,
    Sf2d,
}

impl Dependency {
    pub const ALL: [Dependency; 4] = [
        Dependency::Libctru,
        Dependency::Citro3d,
        Dependency::Citro2d,
        Dependency::Sf2d,
    ];

    /// Catalog entries plus the trailing "Back" row.
    pub const MENU_LEN: usize = Self::ALL.len() + 1;

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Package name, also used as the marker directory name.
    pub fn name(self) -> &'static str {
        match self {
            Dependency::Libctru => "libctru",
            Dependency::Citro3d => "citro3d",
            Dependency::Citro2d => "citro2d",
            Dependency::Sf2d => "sf2d",
        }
    }

    /// Short description shown in the dependency menu.
    pub fn menu_hint(self) -> &'static str {
        match self {
            Dependency::Libctru => "Core library",
            Dependency::Citro3d => "3D graphics",
            Dependency::Citro2d => "2D graphics",
            Dependency::Sf2d => "Simple 2D",
        }
    }

    /// Longer description written to the shared README.
    pub fn summary(self) -> &'static str {
        match self {
            Dependency::Libctru => "Core 3DS library",
            Dependency::Citro3d => "3D graphics",
            Dependency::Citro2d => "2D graphics",
            Dependency::Sf2d => "Simple 2D library",
        }
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.menu_hint())
    }
}
