//! ANSI terminal console
//!
//! Keeps a `TextScreen` as the authoritative cursor model and replays every
//! primitive onto a writer as ANSI escape sequences. The terminal's scroll
//! region is pinned to the screen height so both stay row-aligned.

use std::io::Write;

use log::trace;

use super::{Color, Console, TextScreen};

pub struct AnsiConsole<W: Write + Send> {
    screen: TextScreen,
    out: W,
}

impl<W: Write + Send> AnsiConsole<W> {
    pub fn new(out: W) -> Self {
        Self {
            screen: TextScreen::new(),
            out,
        }
    }

    /// The cell model behind the terminal.
    pub fn screen(&self) -> &TextScreen {
        &self.screen
    }

    fn emit(&mut self, bytes: &[u8]) {
        let result = self.out.write_all(bytes).and_then(|_| self.out.flush());
        if let Err(e) = result {
            trace!("terminal write failed: {}", e);
        }
    }

    fn move_to(&mut self, row: usize, col: usize) {
        let seq = format!("\x1b[{};{}H", row + 1, col + 1);
        self.emit(seq.as_bytes());
    }
}

impl<W: Write + Send> Console for AnsiConsole<W> {
    fn put_char(&mut self, c: u8) {
        let col = self.screen.cursor().1;
        self.screen.put_char(c);
        match c {
            b'\x08' => {
                if col > 0 {
                    self.emit(b"\x08 \x08");
                }
            }
            b'\n' => self.emit(b"\r\n"),
            32..=126 => {
                self.emit(&[c]);
                // The model wrapped; terminals wider than the model do not.
                if self.screen.cursor().1 == 0 {
                    self.emit(b"\r\n");
                }
            }
            _ => {}
        }
    }

    fn set_color(&mut self, fg: Color, bg: Color) {
        self.screen.set_color(fg, bg);
        let seq = format!("\x1b[{};{}m", fg.ansi_fg(), bg.ansi_bg());
        self.emit(seq.as_bytes());
    }

    fn cursor(&self) -> (usize, usize) {
        self.screen.cursor()
    }

    fn set_cursor(&mut self, row: usize, col: usize) {
        self.screen.set_cursor(row, col);
        let (row, col) = self.screen.cursor();
        self.move_to(row, col);
    }

    fn clear_eol(&mut self) {
        self.screen.clear_eol();
        self.emit(b"\x1b[K");
    }

    fn clear(&mut self) {
        self.screen.clear();
        let seq = format!("\x1b[1;{}r\x1b[2J\x1b[H", self.screen.height());
        self.emit(seq.as_bytes());
    }
}

impl<W: Write + Send> Drop for AnsiConsole<W> {
    fn drop(&mut self) {
        // Release the scroll region and colours for whatever runs next.
        self.emit(b"\x1b[r\x1b[0m\r\n");
    }
}
