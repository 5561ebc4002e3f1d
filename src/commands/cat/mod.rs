// src/commands/cat/mod.rs
//! cat - show a file and wait for `q` before returning to the prompt.

use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::console::Color;
use crate::fs::FsError;

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn usage(&self) -> &'static str {
        "cat <file>"
    }

    fn summary(&self) -> &'static str {
        "Display file contents"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return Err(FsError::missing("filename"));
        }
        let file = ctx
            .fs
            .find_child(ctx.fs.cwd(), ctx.args)
            .ok_or_else(|| FsError::not_found(ctx.args))?;
        let data = ctx.fs.contents(file)?;

        ctx.console.put_char(b'\n');
        ctx.console.set_color(Color::Yellow, Color::Black);
        ctx.console.put_bytes(data);
        ctx.console.set_color(Color::LightGrey, Color::Black);
        if data.last().is_some_and(|&b| b != b'\n') {
            ctx.console.put_char(b'\n');
        }
        ctx.console.put_colored(Color::DarkGrey, "\n[Press 'q' to exit]\n");

        loop {
            match ctx.input.read_char().await {
                Some(b'q') | Some(b'Q') => return Ok(Flow::Continue),
                Some(_) => {}
                None => return Ok(Flow::Closed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::NodeKind;
    use crate::commands::test_support::TestEnv;

    #[tokio::test]
    async fn test_cat_waits_for_q() {
        let mut env = TestEnv::new();
        let root = env.fs.root();
        let f = env.fs.create_file(root, "note").unwrap();
        env.fs.write(f, b"hello").unwrap();
        env.keys("xyQrest");

        assert_eq!(env.run(&CatCommand, "note").await, Ok(Flow::Continue));
        assert_eq!(env.output(), "\nhello\n\n[Press 'q' to exit]\n");
        assert_eq!(env.input.remaining(), 4);
    }

    #[tokio::test]
    async fn test_cat_keeps_trailing_newline() {
        let mut env = TestEnv::new();
        let root = env.fs.root();
        let f = env.fs.create_file(root, "note").unwrap();
        env.fs.write(f, b"a\nb\n").unwrap();
        env.keys("q");

        env.run(&CatCommand, "note").await.unwrap();
        assert_eq!(env.output(), "\na\nb\n\n[Press 'q' to exit]\n");
    }

    #[tokio::test]
    async fn test_cat_empty_file() {
        let mut env = TestEnv::new();
        let root = env.fs.root();
        env.fs.create_file(root, "empty").unwrap();
        env.keys("q");

        env.run(&CatCommand, "empty").await.unwrap();
        assert_eq!(env.output(), "\n\n[Press 'q' to exit]\n");
    }

    #[tokio::test]
    async fn test_cat_content_colour() {
        let mut env = TestEnv::new();
        let root = env.fs.root();
        let f = env.fs.create_file(root, "note").unwrap();
        env.fs.write(f, b"hi").unwrap();
        env.keys("q");

        env.run(&CatCommand, "note").await.unwrap();
        assert_eq!(
            env.screen.attr_at(1, 0),
            Some(Color::attr(Color::Yellow, Color::Black))
        );
    }

    #[tokio::test]
    async fn test_cat_end_of_input_closes() {
        let mut env = TestEnv::new();
        let root = env.fs.root();
        env.fs.create_file(root, "note").unwrap();
        assert_eq!(env.run(&CatCommand, "note").await, Ok(Flow::Closed));
    }

    #[tokio::test]
    async fn test_cat_errors() {
        let mut env = TestEnv::new();
        let root = env.fs.root();
        env.fs.create_dir(root, "docs").unwrap();

        assert_eq!(env.run(&CatCommand, "").await, Err(FsError::missing("filename")));
        assert_eq!(env.run(&CatCommand, "nope").await, Err(FsError::not_found("nope")));
        assert_eq!(
            env.run(&CatCommand, "docs").await,
            Err(FsError::not_a("docs", NodeKind::File))
        );
        assert_eq!(env.output(), "");
    }
}
