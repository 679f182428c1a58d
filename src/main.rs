mod app;
mod cli;
mod models;
mod theme;
mod ui;
mod watcher;

use std::io::{self, stdout};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::Position;
use ratatui::prelude::*;

use app::{App, DetailState};
use models::RoadmapDocument;

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;

    // Load once before touching the terminal so a failure is visible on
    // stderr. The dashboard starts empty when the load fails.
    let document = match RoadmapDocument::load(&config.data_path) {
        Ok(doc) => Some(doc),
        Err(err) => {
            eprintln!(
                "roadmap-tui: failed to load {}: {}",
                config.data_path.display(),
                err
            );
            None
        }
    };

    let reload_flag = Arc::new(Mutex::new(false));
    // Keep the watcher alive for the whole session; dropping it stops events.
    let _watcher = if config.watch {
        watcher::watch_roadmap(&config.data_path, Arc::clone(&reload_flag))
    } else {
        None
    };

    let mut app = App::new(config, document, reload_flag);

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.reload_if_flagged();

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    handle_key(app, key.code);
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app.handle_click(Position::new(mouse.column, mouse.row));
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    match app.detail {
        DetailState::Open { .. } => match code {
            KeyCode::Esc | KeyCode::Char('q') => app.close_detail(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_detail(-1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_detail(1),
            KeyCode::PageUp => app.scroll_detail(-10),
            KeyCode::PageDown => app.scroll_detail(10),
            _ => {}
        },
        DetailState::Closed => match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Enter => app.open_selected(),
            _ => {}
        },
    }
}
