// src/commands/mkdir/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::fs::FsError;

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn usage(&self) -> &'static str {
        "mkdir <name>"
    }

    fn summary(&self) -> &'static str {
        "Create directory"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return Err(FsError::missing("name"));
        }
        ctx.fs.create_dir(ctx.fs.cwd(), ctx.args)?;
        Ok(Flow::Continue)
    }
}
