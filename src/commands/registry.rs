// src/commands/registry.rs
use indexmap::IndexMap;

use super::types::Command;

/// The built-in table. Lookup is by exact name; iteration follows
/// registration order.
pub struct CommandRegistry {
    commands: IndexMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// The stock shell: every built-in, in `help` order.
    pub fn builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|c| c.as_ref())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::echo::EchoCommand;
use super::help_cmd::HelpCommand;
use super::info_cmd::InfoCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::pwd::PwdCommand;
use super::reboot_cmd::RebootCommand;
use super::rm::RmCommand;
use super::touch::TouchCommand;
use super::tree_cmd::TreeCommand;
use super::write_cmd::WriteCommand;

/// Register every built-in.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(WriteCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(InfoCommand));
    registry.register(Box::new(RebootCommand));
}
