use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    poll_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Returns true when the user asked to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() || app.log_open() {
        match code {
            KeyCode::Esc => {
                let action =
                    if app.help_open() { InputAction::ToggleHelp } else { InputAction::ToggleLog };
                let _ = app.handle_input(action);
            }
            KeyCode::Char('l') | KeyCode::Char('L') if app.log_open() => {
                let _ = app.handle_input(InputAction::ToggleLog);
            }
            _ => {}
        }
        return false;
    }
    match code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            let _ = app.handle_input(InputAction::NewHand);
        }
        KeyCode::Left | KeyCode::Char('h') => {
            let _ = app.handle_input(InputAction::PrevHand);
        }
        KeyCode::Right => {
            let _ = app.handle_input(InputAction::NextHand);
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            let _ = app.handle_input(InputAction::ToggleLog);
        }
        _ => {}
    }
    false
}
