//! cd - Change directory builtin
//!
//! Supports:
//! - cd .. - move to the parent (stays put at the root)
//! - cd / - move to the root
//! - cd <name> - move into a child directory of cwd

use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::fs::FsError;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn usage(&self) -> &'static str {
        "cd <path>"
    }

    fn summary(&self) -> &'static str {
        "Change directory"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let cwd = ctx.fs.cwd();
        let target = match ctx.args {
            "" => return Err(FsError::missing("directory")),
            ".." => match ctx.fs.parent(cwd) {
                Some(parent) => parent,
                None => return Ok(Flow::Continue),
            },
            "/" => ctx.fs.root(),
            name => ctx
                .fs
                .find_child(cwd, name)
                .ok_or_else(|| FsError::not_found(name))?,
        };
        ctx.fs.set_cwd(target)?;
        Ok(Flow::Continue)
    }
}
