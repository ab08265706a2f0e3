mod app;
mod config;
mod deps;
mod error;
mod input;
mod scaffold;
mod storage;
mod types;
mod ui;

use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::time::{Duration, Instant};
use types::{Config, Keys};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_or_init_config();
    init_logging(&config);
    log::info!("Replit3DS {} starting", env!("CARGO_PKG_VERSION"));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
    }
    log::info!("Replit3DS stopped");

    Ok(())
}

/// Log to a file: the terminal belongs to the UI.
fn init_logging(config: &Config) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let path = config::log_path(config);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

/// Keys pressed before the next frame, and whether Ctrl+C was among them.
struct FrameInput {
    keys: Keys,
    force_quit: bool,
}

/// Wait out the rest of the frame, folding every key press into one snapshot.
fn collect_frame_input(deadline: Instant) -> io::Result<FrameInput> {
    let mut input = FrameInput {
        keys: Keys::empty(),
        force_quit: false,
    };

    loop {
        let timeout = deadline
            .checked_duration_since(Instant::now())
            .unwrap_or(Duration::ZERO);
        if !event::poll(timeout)? {
            break;
        }
        if let Event::Key(key) = event::read()? {
            // Only handle key press events, ignore release/repeat
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                input.force_quit = true;
            }
            input.keys |= input::keys_for(key);
        }
        if timeout.is_zero() {
            break;
        }
    }

    Ok(input)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    let frame = config::frame_interval(config);

    loop {
        let frame_start = Instant::now();

        terminal.draw(|f| ui::draw(f, &app))?;

        let input = collect_frame_input(frame_start + frame)?;
        if input.force_quit {
            log::info!("force quit");
            break;
        }

        app.step(input.keys);
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
