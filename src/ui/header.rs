use super::console::{DualConsole, Tone};

const BANNER_TOP: &str = "╔════════════════════════════════════╗";
const BANNER_BOTTOM: &str = "╚════════════════════════════════════╝";
pub const SEPARATOR: &str = "────────────────────────────────────";

/// Three-row boxed title across the top of the bottom screen.
pub fn draw_banner(console: &mut DualConsole, title: &str) {
    console.print_toned(1, 1, BANNER_TOP, Tone::Banner);
    console.print_toned(2, 1, &format!("║{:^36}║", title), Tone::Banner);
    console.print_toned(3, 1, BANNER_BOTTOM, Tone::Banner);
}

pub fn draw_separator(console: &mut DualConsole, row: usize) {
    console.print_toned(row, 1, SEPARATOR, Tone::Dim);
}

/// Key hint line at the foot of a screen.
pub fn draw_hint(console: &mut DualConsole, row: usize, hint: &str) {
    console.print_toned(row, 1, &format!(" {}", hint), Tone::Dim);
}

/// Cursor marker and tone for one list row.
pub fn list_row(console: &mut DualConsole, row: usize, label: &str, selected: bool) {
    if selected {
        console.print_toned(row, 1, &format!("  > {}", label), Tone::Selected);
    } else {
        console.print_at(row, 1, &format!("    {}", label));
    }
}
