// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod echo;
pub mod help_cmd;
pub mod info_cmd;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod reboot_cmd;
pub mod registry;
pub mod rm;
pub mod touch;
pub mod tree_cmd;
pub mod types;
pub mod write_cmd;

#[cfg(test)]
pub(crate) mod test_support;

pub use registry::CommandRegistry;
pub use types::{Command, CommandContext, CommandResult, Flow};
