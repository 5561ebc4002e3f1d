//! info - system summary.

use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::console::{Color, SCREEN_HEIGHT, SCREEN_WIDTH};

pub struct InfoCommand;

#[async_trait]
impl Command for InfoCommand {
    fn name(&self) -> &'static str {
        "info"
    }

    fn usage(&self) -> &'static str {
        "info"
    }

    fn summary(&self) -> &'static str {
        "System information"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let rows = [
            ("OS Name", "MiniOS".to_string()),
            ("Version", env!("CARGO_PKG_VERSION").to_string()),
            ("Architecture", std::env::consts::ARCH.to_string()),
            (
                "Inodes",
                format!("{} / {} used", ctx.fs.live_count(), ctx.fs.capacity()),
            ),
            ("Filesystem", "In-memory".to_string()),
            (
                "Display",
                format!("Text console ({}x{})", SCREEN_WIDTH, SCREEN_HEIGHT),
            ),
            (
                "Booted",
                ctx.booted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ),
        ];

        ctx.console.put_colored(Color::LightCyan, "\nSystem Information:\n");
        for (label, value) in rows {
            ctx.console.put_str(&format!("  {:<13} {}\n", format!("{}:", label), value));
        }
        ctx.console.put_char(b'\n');
        Ok(Flow::Continue)
    }
}
