// src/commands/echo/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::fs::{FsError, NodeKind};

pub struct EchoCommand;

/// Split `text > file` at the first `>`.
///
/// Trailing spaces of the text are dropped whether or not a `>` follows, as
/// are spaces right after the `>`; everything else, inner spaces included,
/// is kept. There is no quoting or escaping.
pub fn parse_echo(args: &str) -> (&str, Option<&str>) {
    match args.split_once('>') {
        Some((text, target)) => (text.trim_end_matches(' '), Some(target.trim_start_matches(' '))),
        None => (args.trim_end_matches(' '), None),
    }
}

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn usage(&self) -> &'static str {
        "echo <text> [> <file>]"
    }

    fn summary(&self) -> &'static str {
        "Print text or write to file"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (text, target) = parse_echo(ctx.args);
        let Some(target) = target else {
            ctx.console.put_str(text);
            ctx.console.put_char(b'\n');
            return Ok(Flow::Continue);
        };
        if target.is_empty() {
            return Err(FsError::missing("filename"));
        }

        let cwd = ctx.fs.cwd();
        let file = match ctx.fs.find_child(cwd, target) {
            Some(id) if ctx.fs.is_dir(id) => return Err(FsError::not_a(target, NodeKind::File)),
            Some(id) => id,
            None => ctx.fs.create_file(cwd, target)?,
        };
        ctx.fs.write(file, text.as_bytes())?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use crate::fs::Resource;

    #[test]
    fn test_parse_echo() {
        assert_eq!(parse_echo("hi there"), ("hi there", None));
        assert_eq!(parse_echo("hi > a.txt"), ("hi", Some("a.txt")));
        assert_eq!(parse_echo("a  b   >f"), ("a  b", Some("f")));
        assert_eq!(parse_echo(">  f"), ("", Some("f")));
        assert_eq!(parse_echo("x >"), ("x", Some("")));
        assert_eq!(parse_echo("a > b > c"), ("a", Some("b > c")));
        assert_eq!(parse_echo("hi   "), ("hi", None));
    }

    #[tokio::test]
    async fn test_echo_prints() {
        let mut env = TestEnv::new();
        env.run(&EchoCommand, "hello world").await.unwrap();
        env.run(&EchoCommand, "").await.unwrap();
        assert_eq!(env.output(), "hello world\n\n");
    }

    #[tokio::test]
    async fn test_echo_drops_trailing_spaces() {
        let mut env = TestEnv::new();
        env.run(&EchoCommand, "hi   ").await.unwrap();
        env.run(&EchoCommand, "a  b  ").await.unwrap();
        assert_eq!(env.output(), "hi\na  b\n");
    }

    #[tokio::test]
    async fn test_echo_redirect_creates_and_overwrites() {
        let mut env = TestEnv::new();
        env.run(&EchoCommand, "first > a.txt").await.unwrap();
        assert_eq!(env.file("a.txt").as_deref(), Some(&b"first"[..]));

        env.run(&EchoCommand, "hi > a.txt").await.unwrap();
        assert_eq!(env.file("a.txt").as_deref(), Some(&b"hi"[..]));
        assert_eq!(env.fs.children(env.fs.cwd()).len(), 1);
        assert_eq!(env.output(), "");
    }

    #[tokio::test]
    async fn test_echo_redirect_errors() {
        let mut env = TestEnv::new();
        let root = env.fs.root();
        env.fs.create_dir(root, "docs").unwrap();

        assert_eq!(env.run(&EchoCommand, "x >  ").await, Err(FsError::missing("filename")));
        assert_eq!(
            env.run(&EchoCommand, "x > docs").await,
            Err(FsError::not_a("docs", NodeKind::File))
        );
        let long = format!("x > {}", "n".repeat(32));
        assert_eq!(
            env.run(&EchoCommand, &long).await,
            Err(FsError::capacity(Resource::Name))
        );
    }

    #[tokio::test]
    async fn test_echo_redirect_truncates_to_file_capacity() {
        let mut env = TestEnv::new();
        let text = "z".repeat(5000);
        env.run(&EchoCommand, &format!("{} > big", text)).await.unwrap();
        assert_eq!(env.file("big").map(|d| d.len()), Some(4096));
    }
}
