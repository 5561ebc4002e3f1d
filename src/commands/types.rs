// src/commands/types.rs
use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::config::ShellConfig;
use crate::console::Console;
use crate::fs::{FsError, InodeTree};
use crate::input::InputSource;

use super::registry::CommandRegistry;

/// What the interpreter does after a built-in returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Back to the prompt.
    Continue,
    /// Discard the session and boot again.
    Reboot,
    /// The input source closed; the session is over.
    Closed,
}

/// Outcome of a built-in. Errors are rendered by the dispatcher as one line.
pub type CommandResult = Result<Flow, FsError>;

/// Everything a built-in may touch while it runs.
pub struct CommandContext<'a> {
    /// The remainder of the input line after the command token, verbatim.
    pub args: &'a str,
    pub fs: &'a mut InodeTree,
    pub console: &'a mut dyn Console,
    pub input: &'a mut dyn InputSource,
    pub registry: &'a CommandRegistry,
    pub config: &'a ShellConfig,
    pub booted_at: DateTime<Local>,
}

/// A built-in command.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Usage line shown by `help`, e.g. `cd <path>`.
    fn usage(&self) -> &'static str;

    /// One-line description shown by `help`.
    fn summary(&self) -> &'static str;

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult;
}
