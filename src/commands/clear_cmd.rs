use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::session::show_welcome;

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn summary(&self) -> &'static str {
        "Clear screen"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        ctx.console.clear();
        show_welcome(ctx.console);
        Ok(Flow::Continue)
    }
}
