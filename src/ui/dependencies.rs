use super::console::DualConsole;
use super::header;
use crate::app::IdeState;
use crate::types::Dependency;

pub fn draw_dependencies(console: &mut DualConsole, state: &IdeState) {
    header::draw_banner(console, "Dependency Manager");
    console.print_at(5, 1, " Available dependencies:");

    for (i, dep) in Dependency::ALL.iter().enumerate() {
        header::list_row(console, 7 + i, &dep.to_string(), i == state.selected);
    }
    let back = Dependency::ALL.len();
    header::list_row(console, 7 + back, "Back", back == state.selected);

    header::draw_separator(console, 15);
    console.print_at(16, 1, " Note: Dependencies are installed");
    console.print_at(17, 1, " via devkitPro pacman on build PC");
    header::draw_hint(console, 20, "A: Mark  B: Back");
}
