use super::console::{TextScreen, BOTTOM_COLS, ROWS, TOP_COLS};
use super::theme;
use crate::app::App;
use crate::types::Menu;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const FRAME_ROWS: u16 = ROWS as u16 + 2;

/// Header, the two device screens, and the key hint footer.
pub fn draw_layout(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Block::default().style(Style::default().bg(theme::BG)), area);

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(10),   // screens
            Constraint::Length(1), // footer
        ])
        .split(area);

    draw_header(f, vert[0], app);
    draw_screens(f, vert[1], app);
    draw_footer(f, vert[2]);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(vec![
            Span::styled("  R E P L I T 3 D S", theme::title_style()),
            Span::styled("  homebrew projects on the go", theme::subtitle_style()),
        ]),
        Line::from(Span::styled(
            format!("  SD: {}", app.storage.root().display()),
            theme::subtitle_style(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Stack the screens like the hardware when there is room, otherwise put
/// them side by side.
fn draw_screens(f: &mut Frame, area: Rect, app: &App) {
    let top_w = TOP_COLS as u16 + 2;
    let bottom_w = BOTTOM_COLS as u16 + 2;

    let (top_area, bottom_area) = if area.height >= FRAME_ROWS * 2 {
        let rows = Layout::vertical([Constraint::Length(FRAME_ROWS), Constraint::Length(FRAME_ROWS)])
            .split(area);
        (
            centered(rows[0], top_w),
            centered(rows[1], bottom_w),
        )
    } else {
        let cols = Layout::horizontal([Constraint::Length(top_w), Constraint::Length(bottom_w)])
            .flex(Flex::SpaceAround)
            .split(area);
        (cols[0], cols[1])
    };

    draw_screen(f, top_area, app.console.top(), " TOP SCREEN ", false);
    let title = format!(" BOTTOM SCREEN · {} ", menu_title(app.state.menu));
    draw_screen(f, bottom_area, app.console.bottom(), &title, true);
}

fn centered(area: Rect, width: u16) -> Rect {
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(area)[0]
}

fn menu_title(menu: Menu) -> &'static str {
    match menu {
        Menu::Main => "MAIN",
        Menu::Projects => "PROJECTS",
        Menu::Editor => "VIEWER",
        Menu::Dependencies => "DEPENDENCIES",
        Menu::Build => "BUILD",
        Menu::Install => "INSTALL",
    }
}

fn draw_screen(f: &mut Frame, area: Rect, screen: &TextScreen, title: &str, focused: bool) {
    let block = Block::default()
        .title(Line::from(vec![Span::styled(
            title.to_string(),
            theme::panel_title_style(),
        )]))
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .style(Style::default().bg(theme::SCREEN));

    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(screen_lines(screen)), inner);
}

/// One `Line` per console row, with a span per run of equal tone.
pub fn screen_lines(screen: &TextScreen) -> Vec<Line<'static>> {
    (1..=screen.rows())
        .map(|r| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run = String::new();
            let mut run_tone = None;
            for cell in screen.row(r) {
                let Some(ch) = cell.ch else { continue };
                if run_tone != Some(cell.tone) {
                    if let Some(tone) = run_tone {
                        spans.push(Span::styled(std::mem::take(&mut run), theme::tone_style(tone)));
                    }
                    run_tone = Some(cell.tone);
                }
                run.push(ch);
            }
            if let Some(tone) = run_tone {
                spans.push(Span::styled(run, theme::tone_style(tone)));
            }
            Line::from(spans)
        })
        .collect()
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Line::from(vec![
        Span::styled(" [↑↓/jk]", theme::key_hint_style()),
        Span::styled(" D-Pad  ", theme::footer_style()),
        Span::styled("[Enter/a]", theme::key_hint_style()),
        Span::styled(" A  ", theme::footer_style()),
        Span::styled("[Esc/b]", theme::key_hint_style()),
        Span::styled(" B  ", theme::footer_style()),
        Span::styled("[s]", theme::key_hint_style()),
        Span::styled(" START  ", theme::footer_style()),
        Span::styled("[Ctrl+C]", theme::key_hint_style()),
        Span::styled(" Force quit", theme::footer_style()),
    ]);

    f.render_widget(Paragraph::new(footer), area);
}
