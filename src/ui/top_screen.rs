use super::console::{DualConsole, Screen, Tone};
use crate::storage::PROJECTS_DIR;

/// Static branding for the upper console. Drawn once at startup.
pub fn draw_top_screen(console: &mut DualConsole) {
    console.select(Screen::Top);
    console.clear();

    console.print_toned(1, 1, "╔════════════════════════════════════════╗", Tone::Banner);
    console.print_toned(2, 1, "║     Replit3DS - Nintendo 3DS IDE       ║", Tone::Banner);
    console.print_toned(3, 1, "╠════════════════════════════════════════╣", Tone::Banner);
    console.print_toned(4, 1, "║  Create, Edit & Build 3DS Homebrew     ║", Tone::Banner);
    console.print_toned(5, 1, "╚════════════════════════════════════════╝", Tone::Banner);

    console.print_at(7, 1, &format!(" Version: {}", env!("CARGO_PKG_VERSION")));
    console.print_at(8, 1, " Built with: devkitPro + libctru");
    console.print_at(10, 1, " Features:");
    for (i, feature) in [
        "Project Management",
        "Dependency Tracking",
        "Build Instructions",
        "Home Menu Support",
    ]
    .iter()
    .enumerate()
    {
        console.print_at(11 + i, 1, &format!("  • {}", feature));
    }
    console.print_at(16, 1, &format!(" Storage: /3ds/{}/", PROJECTS_DIR));
    console.print_toned(18, 1, " Use bottom screen to navigate", Tone::Dim);
    console.print_toned(19, 1, " Press START to exit IDE", Tone::Dim);
}
