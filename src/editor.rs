//! Line Editor
//!
//! Modal text capture bound to one file. The editor owns a bounded buffer,
//! echoes what is typed through the console and ends on one of the in-band
//! control codes (Ctrl+S saves, Ctrl+Q discards) or when the buffer fills.
//!
//! The editor never touches the file system itself; the caller decides what
//! to do with the buffer once an `EditOutcome` comes back.

use log::{debug, trace};

use crate::console::Console;
use crate::input::{InputSource, BACKSPACE, CTRL_Q, CTRL_S};

/// How an editing session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Ctrl+S; carries the buffer length.
    Saved(usize),
    /// Ctrl+Q
    Discarded,
    /// The buffer reached capacity before a control code arrived.
    BufferFull,
    /// The input source closed mid-edit.
    Closed,
}

#[derive(Debug, Clone)]
pub struct LineEditor {
    buffer: Vec<u8>,
    capacity: usize,
}

impl LineEditor {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.capacity
    }

    /// Seed the buffer with existing content and echo it.
    ///
    /// Content beyond the remaining capacity is dropped.
    pub fn preload(&mut self, content: &[u8], console: &mut dyn Console) {
        let room = self.capacity.saturating_sub(self.buffer.len());
        let take = &content[..content.len().min(room)];
        self.buffer.extend_from_slice(take);
        console.put_bytes(take);
        debug!("editor preloaded {} bytes", take.len());
    }

    /// Apply one input character. Returns the outcome once editing is over.
    pub fn feed(&mut self, c: u8, console: &mut dyn Console) -> Option<EditOutcome> {
        match c {
            CTRL_S => return Some(EditOutcome::Saved(self.buffer.len())),
            CTRL_Q => return Some(EditOutcome::Discarded),
            b'\n' => {
                self.buffer.push(b'\n');
                console.put_char(b'\n');
            }
            BACKSPACE => self.backspace(console),
            32..=126 => {
                self.buffer.push(c);
                console.put_char(c);
            }
            _ => trace!("editor ignored control code {}", c),
        }
        None
    }

    /// Removing a newline moves the cursor to the end of the previous
    /// display row. The column is the length of the preceding buffer line,
    /// which only matches the display when that line never wrapped.
    fn backspace(&mut self, console: &mut dyn Console) {
        let Some(removed) = self.buffer.pop() else {
            return;
        };
        if removed != b'\n' {
            console.put_char(BACKSPACE);
            return;
        }
        let col = self
            .buffer
            .iter()
            .rev()
            .take_while(|&&b| b != b'\n')
            .count();
        let (row, _) = console.cursor();
        if row > 0 {
            console.set_cursor(row - 1, col);
            console.clear_eol();
        }
    }

    /// Consume input until a control code, a full buffer or end of input.
    pub async fn run(
        &mut self,
        input: &mut dyn InputSource,
        console: &mut dyn Console,
    ) -> EditOutcome {
        while !self.is_full() {
            let Some(c) = input.read_char().await else {
                return EditOutcome::Closed;
            };
            if let Some(outcome) = self.feed(c, console) {
                return outcome;
            }
        }
        debug!("editor buffer full at {} bytes", self.buffer.len());
        EditOutcome::BufferFull
    }
}
