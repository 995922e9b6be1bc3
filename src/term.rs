use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use crate::surface::Surface;

const WINDOW_TITLE: &str = "term-snake";

/// Owns the real terminal: raw mode, alternate screen, cursor state, frame
/// output and key input all go through here, so the rest of the crate never
/// touches a platform API.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self, width: u16, height: u16) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
        self.set_cursor_blink(false);
        execute!(self.stdout, terminal::SetSize(width, height), terminal::SetTitle(WINDOW_TITLE))
            .expect("Error configuring the window");
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        self.set_cursor_blink(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_blocking(&self) -> KeyEvent {
        loop {
            if let Event::Key(ev) = read().unwrap() {
                return ev;
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    /// Writes every cell of the surface and flushes once at the end.
    pub fn write_frame(&mut self, surface: &Surface) {
        for (y, row) in surface.rows().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16)).expect("Error moving the cursor");

            for cell in row {
                queue!(
                    self.stdout,
                    SetForegroundColor(cell.fg),
                    SetBackgroundColor(cell.bg),
                    Print(cell.ch)
                )
                .expect("Error writing a cell");
            }
        }

        queue!(self.stdout, ResetColor).expect("Error resetting colors");
        self.flush();
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_blink(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        };

        res.expect("Error setting cursor blink.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}
