//! Terminal input
//!
//! Reads raw keystrokes from stdin and resolves them to the character set
//! the shell understands. Raw mode (no line buffering, no flow control, no
//! signal keys) is held by a `RawModeGuard` for the lifetime of a session.

use async_trait::async_trait;
use log::debug;
use tokio::io::{AsyncReadExt, Stdin};

use super::{InputSource, BACKSPACE};

const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;
/// Ctrl+C and Ctrl+D close the terminal source.
const ETX: u8 = 0x03;
const EOT: u8 = 0x04;

pub struct TerminalInput {
    stdin: Stdin,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            stdin: tokio::io::stdin(),
        }
    }

    async fn next_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.stdin.read(&mut buf).await {
            Ok(1) => Some(buf[0]),
            Ok(_) => None,
            Err(e) => {
                debug!("stdin read failed: {}", e);
                None
            }
        }
    }

    /// Discard the rest of a CSI/SS3 sequence after ESC.
    async fn skip_escape(&mut self) -> Option<()> {
        match self.next_byte().await? {
            b'[' | b'O' => loop {
                if let 0x40..=0x7e = self.next_byte().await? {
                    return Some(());
                }
            },
            _ => Some(()),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InputSource for TerminalInput {
    async fn read_char(&mut self) -> Option<u8> {
        loop {
            let byte = self.next_byte().await?;
            match resolve(byte) {
                Key::Char(c) => return Some(c),
                Key::Close => return None,
                Key::Escape => self.skip_escape().await?,
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Key {
    Char(u8),
    Escape,
    Close,
}

fn resolve(byte: u8) -> Key {
    match byte {
        b'\r' => Key::Char(b'\n'),
        DEL => Key::Char(BACKSPACE),
        ETX | EOT => Key::Close,
        ESC => Key::Escape,
        other => Key::Char(other),
    }
}

/// Puts the controlling terminal into raw mode and restores it on drop.
#[cfg(unix)]
pub struct RawModeGuard {
    fd: libc::c_int,
    original: libc::termios,
}

#[cfg(unix)]
impl RawModeGuard {
    /// Switch stdin to raw mode.
    pub fn enable() -> std::io::Result<Self> {
        let fd = libc::STDIN_FILENO;
        // SAFETY: termios is plain data; both calls only read/write the
        // struct we own and the descriptor of our own stdin.
        unsafe {
            let mut original: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &mut original) != 0 {
                return Err(std::io::Error::last_os_error());
            }
            let mut raw = original;
            libc::cfmakeraw(&mut raw);
            if libc::tcsetattr(fd, libc::TCSANOW, &raw) != 0 {
                return Err(std::io::Error::last_os_error());
            }
            Ok(Self { fd, original })
        }
    }
}

#[cfg(unix)]
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // SAFETY: restores the attributes captured in `enable`.
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSANOW, &self.original);
        }
    }
}
