//! Input Module
//!
//! The input source the interpreter and editor block on. A source yields one
//! resolved character per read: printable ASCII, `\n`, backspace (0x08) and
//! Ctrl+letter as control codes 1-26.

pub mod scripted;
pub mod terminal;

pub use scripted::ScriptedInput;
pub use terminal::TerminalInput;

use async_trait::async_trait;

use crate::console::Console;

pub const BACKSPACE: u8 = 0x08;
/// Ctrl+Q
pub const CTRL_Q: u8 = 17;
/// Ctrl+S
pub const CTRL_S: u8 = 19;

/// Map Ctrl+`letter` to its control code.
pub const fn ctrl(letter: u8) -> u8 {
    letter.to_ascii_lowercase() - b'a' + 1
}

/// A blocking source of resolved characters.
#[async_trait]
pub trait InputSource: Send {
    /// Wait for the next character. `None` once the source is closed.
    async fn read_char(&mut self) -> Option<u8>;
}

/// Read one line, echoing printable characters and honouring backspace.
///
/// At most `max_len` characters are kept; extra printable input is dropped
/// silently. Returns `None` when the source closes before any character of
/// the line arrived.
pub async fn read_line(
    input: &mut dyn InputSource,
    console: &mut dyn Console,
    max_len: usize,
) -> Option<String> {
    let mut line = String::new();
    loop {
        let c = match input.read_char().await {
            Some(c) => c,
            None if line.is_empty() => return None,
            None => {
                console.put_char(b'\n');
                return Some(line);
            }
        };
        match c {
            b'\n' => {
                console.put_char(b'\n');
                return Some(line);
            }
            BACKSPACE => {
                if line.pop().is_some() {
                    console.put_char(BACKSPACE);
                }
            }
            32..=126 if line.len() < max_len => {
                line.push(c as char);
                console.put_char(c);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TextScreen;

    #[test]
    fn test_ctrl_codes() {
        assert_eq!(ctrl(b'a'), 1);
        assert_eq!(ctrl(b'Q'), CTRL_Q);
        assert_eq!(ctrl(b's'), CTRL_S);
        assert_eq!(ctrl(b'z'), 26);
    }

    #[tokio::test]
    async fn test_read_line_echo_and_backspace() {
        let mut input = ScriptedInput::from("lx\x08s -l\nrest");
        let mut screen = TextScreen::new();
        let line = read_line(&mut input, &mut screen, 255).await;
        assert_eq!(line.as_deref(), Some("ls -l"));
        assert_eq!(screen.row_text(0), "ls -l");
        assert_eq!(input.remaining(), 4);
    }

    #[tokio::test]
    async fn test_read_line_caps_length() {
        let mut input = ScriptedInput::from("abcdef\n");
        let mut screen = TextScreen::new();
        let line = read_line(&mut input, &mut screen, 3).await;
        assert_eq!(line.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_read_line_ignores_control_codes() {
        let mut input = ScriptedInput::from("a\x13\x11b\n");
        let mut screen = TextScreen::new();
        let line = read_line(&mut input, &mut screen, 255).await;
        assert_eq!(line.as_deref(), Some("ab"));
    }

    #[tokio::test]
    async fn test_read_line_end_of_input() {
        let mut screen = TextScreen::new();

        let mut input = ScriptedInput::from("pwd");
        assert_eq!(read_line(&mut input, &mut screen, 255).await.as_deref(), Some("pwd"));
        assert_eq!(read_line(&mut input, &mut screen, 255).await, None);

        let mut empty = ScriptedInput::from("");
        assert_eq!(read_line(&mut empty, &mut screen, 255).await, None);
    }
}
