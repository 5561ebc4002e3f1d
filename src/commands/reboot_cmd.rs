use async_trait::async_trait;
use log::info;

use crate::commands::{Command, CommandContext, CommandResult, Flow};

pub struct RebootCommand;

#[async_trait]
impl Command for RebootCommand {
    fn name(&self) -> &'static str {
        "reboot"
    }

    fn usage(&self) -> &'static str {
        "reboot"
    }

    fn summary(&self) -> &'static str {
        "Reboot system"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        info!("reboot requested");
        ctx.console.put_str("Rebooting...\n");
        Ok(Flow::Reboot)
    }
}
