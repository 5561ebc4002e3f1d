//! minios-shell - a teaching-scale shell over a bounded in-memory file system
//!
//! The crate is split into the inode store (`fs`), the console and input
//! services it is driven through, the built-in commands, the line editor
//! and the session loop that ties them together.

pub mod commands;
pub mod config;
pub mod console;
pub mod editor;
pub mod fs;
pub mod input;
pub mod session;

pub use commands::{Command, CommandContext, CommandRegistry, CommandResult, Flow};
pub use config::{ConfigError, ShellConfig, ShellLimits};
pub use console::{AnsiConsole, Color, Console, TextScreen};
pub use editor::{EditOutcome, LineEditor};
pub use fs::{get_path, FsError, FsLimits, InodeTree, NodeId, NodeKind, TreeSnapshot};
pub use input::{InputSource, ScriptedInput, TerminalInput};
pub use session::Session;
