use super::{KeySource, MenuKey};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io;

/// Reads key presses from the console in raw mode.
///
/// Raw mode is only held while waiting for a key, so line prompts keep
/// working between menu redraws.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<MenuKey> {
        terminal::enable_raw_mode()?;
        let key = read_key();
        let restored = terminal::disable_raw_mode();
        let key = key?;
        restored?;
        Ok(key)
    }
}

fn read_key() -> io::Result<MenuKey> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            continue;
        }

        return Ok(match key.code {
            KeyCode::Up => MenuKey::Up,
            KeyCode::Down => MenuKey::Down,
            KeyCode::Enter => MenuKey::Enter,
            KeyCode::Esc | KeyCode::Char('q') => MenuKey::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => MenuKey::Cancel,
            _ => MenuKey::Other,
        });
    }
}
