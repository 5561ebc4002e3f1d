//! Console Module
//!
//! The output service every built-in and the line editor draw through:
//! - Console: character-cell primitives (put, colour, cursor, clear)
//! - TextScreen: in-memory 80x25 cell grid
//! - AnsiConsole: a TextScreen mirrored onto an ANSI terminal

pub mod screen;
pub mod ansi;

pub use screen::TextScreen;
pub use ansi::AnsiConsole;

/// Display width in cells.
pub const SCREEN_WIDTH: usize = 80;
/// Display height in rows.
pub const SCREEN_HEIGHT: usize = 25;

/// The fixed 16-entry palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    Yellow = 14,
    White = 15,
}

impl Color {
    /// Pack a foreground/background pair into one attribute byte.
    pub const fn attr(fg: Color, bg: Color) -> u8 {
        (bg as u8) << 4 | (fg as u8)
    }

    /// SGR parameter selecting this colour as foreground.
    pub fn ansi_fg(self) -> u8 {
        const TABLE: [u8; 16] = [30, 34, 32, 36, 31, 35, 33, 37, 90, 94, 92, 96, 91, 95, 93, 97];
        TABLE[self as usize]
    }

    /// SGR parameter selecting this colour as background.
    pub fn ansi_bg(self) -> u8 {
        self.ansi_fg() + 10
    }
}

/// Character-cell output service.
///
/// `put_char` interprets `\n` (new line), `\b` (step back and blank the cell)
/// and printable ASCII; other bytes are ignored. Writing past the last row
/// scrolls the display up by one row.
pub trait Console: Send {
    fn put_char(&mut self, c: u8);

    fn put_str(&mut self, s: &str) {
        self.put_bytes(s.as_bytes());
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put_char(b);
        }
    }

    fn set_color(&mut self, fg: Color, bg: Color);

    /// Current cursor as `(row, col)`.
    fn cursor(&self) -> (usize, usize);

    fn set_cursor(&mut self, row: usize, col: usize);

    /// Blank from the cursor to the end of its row.
    fn clear_eol(&mut self);

    /// Blank the whole display and home the cursor.
    fn clear(&mut self);

    /// Write `s` in `fg` on black, then return to the default text colour.
    fn put_colored(&mut self, fg: Color, s: &str) {
        self.set_color(fg, Color::Black);
        self.put_str(s);
        self.set_color(Color::LightGrey, Color::Black);
    }
}
