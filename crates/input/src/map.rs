//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for, before the current phase is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Command(Command),
    /// Pause if running, resume if paused
    TogglePause,
}

/// Map keyboard input to an intent.
pub fn map_key(key: KeyEvent) -> Option<KeyIntent> {
    let command = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Command::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::Move(Direction::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Command::Move(Direction::Down)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Command::Move(Direction::Up),

        // Gravity on demand
        KeyCode::Char(' ') => Command::Tick,

        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => return Some(KeyIntent::TogglePause),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Command::Restart,

        _ => return None,
    };
    Some(KeyIntent::Command(command))
}

/// Resolve a pause toggle against the current phase.
///
/// Outside `Playing`/`Paused` the request has no meaning and maps to nothing.
pub fn pause_command(phase: Phase) -> Option<Command> {
    match phase {
        Phase::Playing => Some(Command::SetPause(true)),
        Phase::Paused => Some(Command::SetPause(false)),
        Phase::Intro | Phase::GameOver => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
