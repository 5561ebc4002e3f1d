//! write - open a file in the line editor.
//!
//! The named file is looked up in the working directory and created when
//! missing. Existing content is loaded into the editor; nothing is stored
//! unless the session ends with Ctrl+S.

use async_trait::async_trait;
use log::info;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::console::{Color, Console};
use crate::editor::{EditOutcome, LineEditor};
use crate::fs::{FsError, NodeKind};

pub struct WriteCommand;

fn show_banner(console: &mut dyn Console, name: &str) {
    console.put_colored(Color::LightCyan, "\n======== Vim-like Editor ========\nFile: ");
    console.put_colored(Color::Yellow, name);
    console.put_colored(
        Color::LightCyan,
        "\nCommands:\n  Ctrl+S  - Save file\n  Ctrl+Q  - Quit without saving\n=================================\n\n",
    );
}

#[async_trait]
impl Command for WriteCommand {
    fn name(&self) -> &'static str {
        "write"
    }

    fn usage(&self) -> &'static str {
        "write <file>"
    }

    fn summary(&self) -> &'static str {
        "Edit file (Ctrl+S save, Ctrl+Q exit)"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let name = ctx.args;
        if name.is_empty() {
            return Err(FsError::missing("filename"));
        }

        let cwd = ctx.fs.cwd();
        let file = match ctx.fs.find_child(cwd, name) {
            Some(id) if ctx.fs.is_dir(id) => return Err(FsError::not_a(name, NodeKind::File)),
            Some(id) => id,
            None => ctx.fs.create_file(cwd, name)?,
        };

        show_banner(ctx.console, name);
        // The editor reports full one byte short of the file capacity.
        let capacity = ctx.fs.limits().max_file_size.saturating_sub(1);
        let mut editor = LineEditor::new(capacity);
        ctx.console.set_color(Color::Yellow, Color::Black);
        editor.preload(ctx.fs.contents(file)?, ctx.console);
        let outcome = editor.run(ctx.input, ctx.console).await;
        ctx.console.set_color(Color::LightGrey, Color::Black);

        match outcome {
            EditOutcome::Saved(_) => {
                let stored = ctx.fs.write(file, editor.buffer())?;
                info!("saved {} bytes to '{}'", stored, name);
                ctx.console.put_char(b'\n');
                ctx.console.put_colored(
                    Color::LightGreen,
                    &format!("\n[File saved! {} bytes]\n\n", stored),
                );
            }
            EditOutcome::Discarded => {
                ctx.console.put_char(b'\n');
                ctx.console.put_colored(Color::LightRed, "\n[Quit without saving]\n\n");
            }
            EditOutcome::BufferFull => {
                ctx.console.put_char(b'\n');
                ctx.console.put_colored(Color::LightRed, "\n[Buffer full!]\n\n");
            }
            EditOutcome::Closed => {
                ctx.console.put_char(b'\n');
                return Ok(Flow::Closed);
            }
        }
        Ok(Flow::Continue)
    }
}
