use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::console::{Color, Console};
use crate::fs::{InodeTree, NodeId};

pub struct TreeCommand;

#[async_trait]
impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn usage(&self) -> &'static str {
        "tree"
    }

    fn summary(&self) -> &'static str {
        "Show directory tree"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        print_node(ctx.fs, ctx.console, ctx.fs.root(), 0);
        Ok(Flow::Continue)
    }
}

/// Pre-order walk, two spaces of indent per level. The root prints as `/`.
fn print_node(fs: &InodeTree, console: &mut dyn Console, node: NodeId, depth: usize) {
    console.put_str(&"  ".repeat(depth));
    if node == fs.root() {
        console.put_colored(Color::LightBlue, "/\n");
    } else {
        let name = fs.name(node).unwrap_or_default();
        if fs.is_dir(node) {
            console.put_colored(Color::LightBlue, &format!("{}/\n", name));
        } else {
            console.put_str(name);
            console.put_char(b'\n');
        }
    }
    for &child in fs.children(node) {
        print_node(fs, console, child, depth + 1);
    }
}
