//! Shared fixture for built-in tests.

use chrono::Local;

use crate::config::ShellConfig;
use crate::console::TextScreen;
use crate::fs::InodeTree;
use crate::input::ScriptedInput;

use super::{Command, CommandContext, CommandRegistry, CommandResult};

pub(crate) struct TestEnv {
    pub fs: InodeTree,
    pub screen: TextScreen,
    pub input: ScriptedInput,
    pub registry: CommandRegistry,
    pub config: ShellConfig,
}

impl TestEnv {
    pub fn new() -> Self {
        let config = ShellConfig::default();
        Self {
            fs: InodeTree::new(config.limits.fs),
            screen: TextScreen::recording(),
            input: ScriptedInput::default(),
            registry: CommandRegistry::builtins(),
            config,
        }
    }

    /// Queue keystrokes for commands that read input.
    pub fn keys(&mut self, keys: &str) -> &mut Self {
        self.input.push(keys.as_bytes());
        self
    }

    pub async fn run(&mut self, cmd: &dyn Command, args: &str) -> CommandResult {
        let mut ctx = CommandContext {
            args,
            fs: &mut self.fs,
            console: &mut self.screen,
            input: &mut self.input,
            registry: &self.registry,
            config: &self.config,
            booted_at: Local::now(),
        };
        cmd.execute(&mut ctx).await
    }

    pub fn output(&self) -> String {
        self.screen.transcript_text()
    }

    /// Content of a file in the working directory.
    pub fn file(&self, name: &str) -> Option<Vec<u8>> {
        let id = self.fs.find_child(self.fs.cwd(), name)?;
        self.fs.contents(id).ok().map(|c| c.to_vec())
    }
}
