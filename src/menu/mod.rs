mod terminal;

#[cfg(test)]
mod tests;

pub use terminal::TerminalKeys;

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use std::io::{self, Write};

/// Keys the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Enter,
    /// Escape, `q` or Ctrl+C
    Cancel,
    Other,
}

/// Source of menu key presses
pub trait KeySource {
    /// Block until the next key press
    fn next_key(&mut self) -> io::Result<MenuKey>;
}

/// What a key press did to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Moved,
    /// 1-based index of the confirmed option
    Selected(usize),
    Cancelled,
    Ignored,
}

/// Vertical option list with a wrapping cursor
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    options: Vec<String>,
    selected: usize,
}

impl Menu {
    pub fn new(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
            selected: 0,
        }
    }

    /// Start with the cursor on `index` (0-based), clamped to the options
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = index.min(self.options.len().saturating_sub(1));
        self
    }

    /// 0-based cursor position
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = if self.selected > 0 {
            self.selected - 1
        } else {
            self.options.len() - 1
        };
    }

    pub fn move_down(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = if self.selected + 1 < self.options.len() {
            self.selected + 1
        } else {
            0
        };
    }

    pub fn handle_key(&mut self, key: MenuKey) -> MenuEvent {
        match key {
            MenuKey::Up => {
                self.move_up();
                MenuEvent::Moved
            }
            MenuKey::Down => {
                self.move_down();
                MenuEvent::Moved
            }
            MenuKey::Enter if !self.options.is_empty() => MenuEvent::Selected(self.selected + 1),
            MenuKey::Cancel => MenuEvent::Cancelled,
            _ => MenuEvent::Ignored,
        }
    }

    /// Clear the screen and draw the menu
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(out, "{}", self.title)?;
        writeln!(out, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(out)?;

        for (idx, option) in self.options.iter().enumerate() {
            if idx == self.selected {
                queue!(
                    out,
                    SetForegroundColor(Color::Green),
                    Print(format!("> {}", option)),
                    ResetColor,
                    Print("\n")
                )?;
            } else {
                writeln!(out, "  {}", option)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Use ↑/↓ arrow keys to select, Enter to confirm, Esc to quit")?;
        out.flush()
    }

    /// Redraw until an option is confirmed.
    ///
    /// Returns the 1-based index, or `None` when the menu was cancelled.
    pub fn run<K: KeySource, W: Write>(
        &mut self,
        keys: &mut K,
        out: &mut W,
    ) -> io::Result<Option<usize>> {
        loop {
            self.render(out)?;
            match self.handle_key(keys.next_key()?) {
                MenuEvent::Selected(index) => return Ok(Some(index)),
                MenuEvent::Cancelled => return Ok(None),
                MenuEvent::Moved | MenuEvent::Ignored => {}
            }
        }
    }
}
