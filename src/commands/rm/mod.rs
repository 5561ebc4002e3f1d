// src/commands/rm/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::fs::FsError;

pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn usage(&self) -> &'static str {
        "rm <name>"
    }

    fn summary(&self) -> &'static str {
        "Remove file/dir"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return Err(FsError::missing("name"));
        }
        ctx.fs.delete(ctx.fs.cwd(), ctx.args)?;
        Ok(Flow::Continue)
    }
}
