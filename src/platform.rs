//! Terminal frontend: session lifecycle, input thread, draw flush.
//!
//! Everything crossterm-specific lives here, outside the simulation core.
//! [`TerminalSession`] owns raw mode and the alternate screen for one game
//! run and restores the terminal best-effort on drop. The input thread
//! translates key presses into [`InputEvent`]s and sends them over the
//! crossbeam channel whose receiving end sits in the ECS world as
//! [`InputBridge`](crate::resources::input::InputBridge).

use std::io::{self, Write};
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use crate::events::input::{Direction, InputEvent};
use crate::resources::drawbuffer::DrawBuffer;

/// Owns terminal state (raw mode + alternate screen) for one game session.
pub struct TerminalSession {
    out: io::Stdout,
}

impl TerminalSession {
    /// Enter raw mode and switch to the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(error) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }
        Ok(Self { out })
    }

    /// Flush this tick's draw commands to the terminal.
    pub fn present(&mut self, draw: &DrawBuffer) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for cmd in draw.commands() {
            if cmd.cell.x < 0 || cmd.cell.y < 0 {
                continue;
            }
            queue!(
                self.out,
                MoveTo(cmd.cell.x as u16, cmd.cell.y as u16),
                Print(glyph_for(&cmd.tex_key))
            )?;
        }
        self.out.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Glyph drawn for a texture key.
fn glyph_for(tex_key: &str) -> char {
    match tex_key {
        "wall" => '#',
        "player" => '@',
        "tail" => 'o',
        "fruit" => '*',
        _ => '?',
    }
}

/// Spawn the blocking input-reader thread.
///
/// The thread exits when the channel is closed or the terminal read fails;
/// it is otherwise torn down with the process.
pub fn spawn_input_thread(tx: Sender<InputEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    let event = match key.code {
                        KeyCode::Up | KeyCode::Char('w') => Some(InputEvent::Turn(Direction::Up)),
                        KeyCode::Down | KeyCode::Char('s') => {
                            Some(InputEvent::Turn(Direction::Down))
                        }
                        KeyCode::Left | KeyCode::Char('a') => {
                            Some(InputEvent::Turn(Direction::Left))
                        }
                        KeyCode::Right | KeyCode::Char('d') => {
                            Some(InputEvent::Turn(Direction::Right))
                        }
                        KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            Some(InputEvent::Quit)
                        }
                        _ => None,
                    };
                    if let Some(event) = event {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::glyph_for;

    #[test]
    fn known_texture_keys_have_glyphs() {
        assert_eq!(glyph_for("wall"), '#');
        assert_eq!(glyph_for("player"), '@');
        assert_eq!(glyph_for("tail"), 'o');
        assert_eq!(glyph_for("fruit"), '*');
        assert_eq!(glyph_for("bogus"), '?');
    }
}
