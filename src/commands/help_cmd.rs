use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::console::Color;

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn summary(&self) -> &'static str {
        "Show this help"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        ctx.console.put_colored(Color::LightCyan, "\nMiniOS Shell Commands:\n\n");
        for cmd in ctx.registry.iter() {
            ctx.console
                .put_str(&format!("  {:<13} - {}\n", cmd.usage(), cmd.summary()));
        }
        ctx.console.put_char(b'\n');
        Ok(Flow::Continue)
    }
}
