// src/commands/touch/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::fs::FsError;

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn usage(&self) -> &'static str {
        "touch <file>"
    }

    fn summary(&self) -> &'static str {
        "Create file"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return Err(FsError::missing("name"));
        }
        ctx.fs.create_file(ctx.fs.cwd(), ctx.args)?;
        Ok(Flow::Continue)
    }
}
