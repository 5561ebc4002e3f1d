// src/commands/pwd/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::fs::get_path;

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn summary(&self) -> &'static str {
        "Print working directory"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let path = get_path(ctx.fs, ctx.fs.cwd())?;
        ctx.console.put_str(&path);
        ctx.console.put_char(b'\n');
        Ok(Flow::Continue)
    }
}
