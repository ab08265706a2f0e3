//! Off-device build and install walkthroughs. Nothing here runs a tool.

use super::console::DualConsole;
use super::header;
use crate::app::IdeState;
use crate::storage::{clip_to_width, PROJECTS_DIR};

pub fn draw_build(console: &mut DualConsole, state: &IdeState) {
    header::draw_banner(console, "Build Instructions");

    if open_project_heading(console, state) {
        let name = &state.current_project;
        console.print_at(7, 1, " To build this project:");
        console.print_at(9, 1, " 1. Copy project folder to PC:");
        console.print_at(10, 1, &format!("    /3ds/{}/", PROJECTS_DIR));
        console.print_at(11, 1, &format!("    {}", name));
        console.print_at(13, 1, " 2. On PC with devkitPro:");
        console.print_at(14, 1, &format!("    cd {}", name));
        console.print_at(15, 1, "    make");
        console.print_at(17, 1, " 3. Copy .3dsx back to 3DS:");
        console.print_at(18, 1, &format!("    /3ds/{}.3dsx", name));
    }

    header::draw_hint(console, 20, "B: Back to menu");
}

pub fn draw_install(console: &mut DualConsole, state: &IdeState) {
    header::draw_banner(console, "Install to Home Menu");

    if open_project_heading(console, state) {
        let name = &state.current_project;
        console.print_at(7, 1, " After building on PC:");
        console.print_at(9, 1, " 1. Create CIA file:");
        console.print_at(10, 1, "    makerom -f cia \\");
        console.print_at(11, 1, &format!("      -o {}.cia \\", name));
        console.print_at(12, 1, &format!("      -elf {}.elf", name));
        console.print_at(14, 1, " 2. Copy .cia to SD card");
        console.print_at(16, 1, " 3. Install with FBI:");
        console.print_at(17, 1, &format!("    SD > {}.cia", name));
        console.print_at(18, 1, "    > Install");
    }

    header::draw_hint(console, 20, "B: Back to menu");
}

/// Project line and rule, or the "no project" notice. Returns whether a
/// project is open.
fn open_project_heading(console: &mut DualConsole, state: &IdeState) -> bool {
    if !state.project_open {
        console.print_at(8, 1, "  No project open");
        console.print_at(10, 1, "  Open a project first");
        return false;
    }
    console.print_at(
        5,
        1,
        &format!(" Project: {}", clip_to_width(&state.current_project, 25)),
    );
    header::draw_separator(console, 6);
    true
}
