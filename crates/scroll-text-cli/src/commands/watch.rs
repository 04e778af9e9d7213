use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use scroll_text_core::ScrollOptions;
use scroll_text_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{KeyFaceWidget, StatusBarWidget},
    App, Theme,
};

/// Redraw rate of the preview in milliseconds
const TICK_RATE_MS: u64 = 30;

pub async fn run(options: ScrollOptions) -> Result<()> {
    // Build the app before touching the terminal so bad options fail cleanly
    let mut app = App::new(options, Theme::default())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("scroll-text"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let event_handler = EventHandler::new(TICK_RATE_MS);

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    app.engine.stop();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        app.drain_frames();

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            KeyFaceWidget::render(frame, layout[0], app);
            StatusBarWidget::render(frame, layout[1], app);
        })?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => app.apply(handle_key_event(key)),
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
