//! In-memory text screen
//!
//! A grid of character cells with an attribute byte each. Used directly as
//! the headless display and as the cursor model behind `AnsiConsole`.

use super::{Color, Console, SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: u8,
    attr: u8,
}

const DEFAULT_ATTR: u8 = Color::attr(Color::LightGrey, Color::Black);

/// Fixed-size character grid with a cursor.
///
/// A screen built with `recording` also keeps a transcript of every byte
/// written to it; other screens keep nothing beyond the grid.
#[derive(Debug, Clone)]
pub struct TextScreen {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    row: usize,
    col: usize,
    attr: u8,
    transcript: Option<Vec<u8>>,
}

impl TextScreen {
    pub fn new() -> Self {
        Self::with_size(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![Cell { ch: b' ', attr: DEFAULT_ATTR }; width * height],
            row: 0,
            col: 0,
            attr: DEFAULT_ATTR,
            transcript: None,
        }
    }

    /// A default-size screen that records a transcript.
    pub fn recording() -> Self {
        Self {
            transcript: Some(Vec::new()),
            ..Self::new()
        }
    }

    pub fn is_recording(&self) -> bool {
        self.transcript.is_some()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Text of one row with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.height {
            return String::new();
        }
        let start = row * self.width;
        let line: String = self.cells[start..start + self.width]
            .iter()
            .map(|c| c.ch as char)
            .collect();
        line.trim_end().to_string()
    }

    /// All rows joined with newlines, trailing blank rows dropped.
    pub fn text(&self) -> String {
        let mut rows: Vec<String> = (0..self.height).map(|r| self.row_text(r)).collect();
        while rows.last().map_or(false, |r| r.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }

    /// Every byte passed to `put_char`, control bytes included. Empty
    /// unless the screen is recording.
    pub fn transcript(&self) -> &[u8] {
        self.transcript.as_deref().unwrap_or(&[])
    }

    /// Transcript as lossy UTF-8.
    pub fn transcript_text(&self) -> String {
        String::from_utf8_lossy(self.transcript()).to_string()
    }

    /// Attribute byte of one cell.
    pub fn attr_at(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col].attr)
        } else {
            None
        }
    }

    fn blank(&self) -> Cell {
        Cell { ch: b' ', attr: self.attr }
    }

    fn scroll(&mut self) {
        self.cells.copy_within(self.width.., 0);
        let blank = self.blank();
        let last = (self.height - 1) * self.width;
        for cell in &mut self.cells[last..] {
            *cell = blank;
        }
        self.row = self.height - 1;
    }
}

impl Default for TextScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TextScreen {
    fn put_char(&mut self, c: u8) {
        if let Some(transcript) = &mut self.transcript {
            transcript.push(c);
        }
        match c {
            b'\x08' => {
                if self.col > 0 {
                    self.col -= 1;
                    let blank = self.blank();
                    self.cells[self.row * self.width + self.col] = blank;
                }
                return;
            }
            b'\n' => {
                self.col = 0;
                self.row += 1;
            }
            32..=126 => {
                self.cells[self.row * self.width + self.col] = Cell { ch: c, attr: self.attr };
                self.col += 1;
                if self.col >= self.width {
                    self.col = 0;
                    self.row += 1;
                }
            }
            _ => {}
        }
        if self.row >= self.height {
            self.scroll();
        }
    }

    fn set_color(&mut self, fg: Color, bg: Color) {
        self.attr = Color::attr(fg, bg);
    }

    fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    fn set_cursor(&mut self, row: usize, col: usize) {
        self.row = row.min(self.height - 1);
        self.col = col.min(self.width - 1);
    }

    fn clear_eol(&mut self) {
        let blank = self.blank();
        let start = self.row * self.width;
        for cell in &mut self.cells[start + self.col..start + self.width] {
            *cell = blank;
        }
    }

    fn clear(&mut self) {
        let blank = self.blank();
        self.cells.iter_mut().for_each(|c| *c = blank);
        self.row = 0;
        self.col = 0;
    }
}
