//! Terminal setup, teardown, and the animation loop.

mod app;
mod board;

pub use app::RaceApp;

use std::io;
use std::panic;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tracing::debug;

/// Animate one race. The terminal is restored however the loop ends.
pub fn run(mut app: RaceApp, frame_delay: Duration) -> Result<(), String> {
    install_panic_hook();
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(terminal_error(e));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal();
            return Err(terminal_error(e));
        }
    };

    let result = run_loop(&mut terminal, &mut app, frame_delay);

    restore_terminal();
    terminal.show_cursor().ok();

    if result.is_ok() {
        match app.session.winner() {
            Some(winner) => println!("Winner: {}", winner.label()),
            None => println!("Race interrupted."),
        }
    }
    result
}

/// Estimate, roll, draw, then wait for the next frame or a quit key.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut RaceApp,
    frame_delay: Duration,
) -> Result<(), String> {
    while !app.is_done() {
        app.advance()?;
        terminal
            .draw(|frame| board::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if event::poll(frame_delay).map_err(|e| format!("event error: {e}"))?
            && let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))?
            && is_quit(key)
        {
            debug!(steps = app.session.steps_taken(), "race interrupted");
            app.interrupted = true;
        }
    }

    // Final frame with the banner, held until any key.
    terminal
        .draw(|frame| board::draw(frame, app))
        .map_err(|e| format!("draw error: {e}"))?;
    loop {
        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}

fn terminal_error(e: io::Error) -> String {
    format!("terminal error: {e}")
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show).ok();
}

/// Put the terminal back before the previous hook prints the panic message.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

fn is_quit(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
