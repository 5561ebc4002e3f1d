// src/commands/ls/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::console::Color;
use crate::fs::NodeKind;

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn usage(&self) -> &'static str {
        "ls"
    }

    fn summary(&self) -> &'static str {
        "List files"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let dir = ctx.fs.cwd();
        let children = ctx.fs.children(dir);

        if children.is_empty() {
            ctx.console.put_str("(empty)\n");
            return Ok(Flow::Continue);
        }

        for &child in children {
            let name = ctx.fs.name(child).unwrap_or_default();
            match ctx.fs.kind(child) {
                Some(NodeKind::Directory) => {
                    ctx.console.put_colored(Color::LightBlue, &format!("{}/\n", name));
                }
                _ => {
                    let size = ctx.fs.size(child).unwrap_or(0);
                    ctx.console.put_str(name);
                    ctx.console
                        .put_colored(Color::DarkGrey, &format!(" ({} bytes)\n", size));
                }
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;

    #[tokio::test]
    async fn test_ls_empty() {
        let mut env = TestEnv::new();
        env.run(&LsCommand, "").await.unwrap();
        assert_eq!(env.output(), "(empty)\n");
    }

    #[tokio::test]
    async fn test_ls_in_child_order() {
        let mut env = TestEnv::new();
        let root = env.fs.root();
        env.fs.create_dir(root, "docs").unwrap();
        let f = env.fs.create_file(root, "a.txt").unwrap();
        env.fs.write(f, b"hello").unwrap();
        env.fs.create_file(root, "empty").unwrap();

        env.run(&LsCommand, "").await.unwrap();
        assert_eq!(env.output(), "docs/\na.txt (5 bytes)\nempty (0 bytes)\n");
    }

    #[tokio::test]
    async fn test_ls_lists_cwd_only() {
        let mut env = TestEnv::new();
        let root = env.fs.root();
        let docs = env.fs.create_dir(root, "docs").unwrap();
        env.fs.create_file(docs, "inner").unwrap();
        env.fs.set_cwd(docs).unwrap();

        env.run(&LsCommand, "").await.unwrap();
        assert_eq!(env.output(), "inner (0 bytes)\n");
    }
}
