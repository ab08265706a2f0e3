//! The handheld's two text consoles as fixed character grids.
//!
//! Rows and columns are 1-based, the same as the console cursor escape.

use unicode_width::UnicodeWidthChar;

pub const TOP_COLS: usize = 50;
pub const BOTTOM_COLS: usize = 40;
pub const ROWS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Banner,
    Selected,
    Dim,
    Status,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// `None` marks the right half of a double-width glyph.
    pub ch: Option<char>,
    pub tone: Tone,
}

const BLANK: Cell = Cell {
    ch: Some(' '),
    tone: Tone::Normal,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
pub struct TextScreen {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl TextScreen {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BLANK; cols * rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    pub fn print_at(&mut self, row: usize, col: usize, text: &str) {
        self.print_toned(row, col, text, Tone::Normal);
    }

    /// Write `text` starting at (`row`, `col`); anything past the edge is dropped.
    pub fn print_toned(&mut self, row: usize, col: usize, text: &str, tone: Tone) {
        if row == 0 || row > self.rows || col == 0 {
            return;
        }
        let start = (row - 1) * self.cols;
        let mut x = col - 1;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if x + w > self.cols {
                break;
            }
            self.cells[start + x] = Cell { ch: Some(ch), tone };
            if w == 2 {
                self.cells[start + x + 1] = Cell { ch: None, tone };
            }
            x += w;
        }
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = (row - 1) * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Row contents with trailing blanks removed.
    #[cfg(test)]
    pub fn row_text(&self, row: usize) -> String {
        let text: String = self.row(row).iter().filter_map(|c| c.ch).collect();
        text.trim_end().to_string()
    }

    /// Whole screen as text, one line per row.
    #[cfg(test)]
    pub fn text(&self) -> String {
        (1..=self.rows)
            .map(|r| self.row_text(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Both consoles plus the one currently receiving output.
#[derive(Debug, Clone)]
pub struct DualConsole {
    top: TextScreen,
    bottom: TextScreen,
    selected: Screen,
}

impl DualConsole {
    pub fn new() -> Self {
        Self {
            top: TextScreen::new(TOP_COLS, ROWS),
            bottom: TextScreen::new(BOTTOM_COLS, ROWS),
            selected: Screen::Top,
        }
    }

    pub fn select(&mut self, screen: Screen) {
        self.selected = screen;
    }

    fn current(&mut self) -> &mut TextScreen {
        match self.selected {
            Screen::Top => &mut self.top,
            Screen::Bottom => &mut self.bottom,
        }
    }

    pub fn clear(&mut self) {
        self.current().clear();
    }

    pub fn print_at(&mut self, row: usize, col: usize, text: &str) {
        self.current().print_at(row, col, text);
    }

    pub fn print_toned(&mut self, row: usize, col: usize, text: &str, tone: Tone) {
        self.current().print_toned(row, col, text, tone);
    }

    pub fn top(&self) -> &TextScreen {
        &self.top
    }

    pub fn bottom(&self) -> &TextScreen {
        &self.bottom
    }
}
