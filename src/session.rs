//! Session
//!
//! One running machine: the inode tree, the built-in table and the
//! read-eval loop that binds them to a console and an input source.
//!
//! The loop is Idle -> read line -> tokenize -> dispatch -> Idle. A built-in
//! asking for `Flow::Reboot` throws the whole session state away and boots
//! again; `Flow::Closed` (or the input closing at the prompt) ends `run`.

use std::time::Duration;

use chrono::{DateTime, Local};
use log::{debug, info};

use crate::commands::{CommandContext, CommandRegistry, Flow};
use crate::config::ShellConfig;
use crate::console::{Color, Console};
use crate::fs::{get_path, InodeTree};
use crate::input::{read_line, InputSource};

/// Split an input line into the command token and its argument string.
///
/// Leading whitespace is skipped. The token ends at the next whitespace or
/// after `max_command_len` bytes, whichever comes first; whatever follows
/// the token (minus leading whitespace) is the argument, verbatim. Returns
/// `None` for a blank line.
pub fn parse_line(line: &str, max_command_len: usize) -> Option<(&str, &str)> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }
    let end = line.find(char::is_whitespace).unwrap_or(line.len());
    let mut cut = end.min(max_command_len);
    while !line.is_char_boundary(cut) {
        cut -= 1;
    }
    let (command, rest) = line.split_at(cut);
    Some((command, rest.trim_start()))
}

/// Draw the framed welcome banner.
pub fn show_welcome(console: &mut dyn Console) {
    let title = format!("Welcome to MiniOS v{}", env!("CARGO_PKG_VERSION"));
    let rule = "=".repeat(32);
    console.put_colored(
        Color::LightCyan,
        &format!("{}\n{:^32}\n{}\n\n", rule, title, rule),
    );
    console.put_str("Type 'help' for available commands\n\n");
}

pub struct Session {
    tree: InodeTree,
    registry: CommandRegistry,
    config: ShellConfig,
    booted_at: DateTime<Local>,
}

impl Session {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            tree: InodeTree::new(config.limits.fs),
            registry: CommandRegistry::builtins(),
            config,
            booted_at: Local::now(),
        }
    }

    pub fn tree(&self) -> &InodeTree {
        &self.tree
    }

    /// Discard all session state: a fresh tree with only the root, cwd at root.
    pub fn reset(&mut self) {
        self.tree.init();
        self.booted_at = Local::now();
        info!("session state reset");
    }

    /// Absolute path of cwd, or `.../<name>` when it does not fit the path bound.
    pub fn prompt_path(&self) -> String {
        let cwd = self.tree.cwd();
        get_path(&self.tree, cwd).unwrap_or_else(|_| {
            format!(".../{}", self.tree.name(cwd).unwrap_or_default())
        })
    }

    pub fn show_prompt(&self, console: &mut dyn Console) {
        console.put_colored(Color::LightGreen, &self.config.hostname);
        console.put_colored(Color::White, ":");
        console.put_colored(Color::LightBlue, &self.prompt_path());
        console.put_colored(Color::White, "$ ");
    }

    /// Boot log, optional pause, then a clean screen with the welcome banner.
    pub async fn boot(&self, console: &mut dyn Console) {
        console.clear();
        if self.config.show_boot_log {
            console.put_str("Booting MiniOS...\n");
            for (step, last) in [
                ("Initializing keyboard... ", false),
                ("Initializing filesystem... ", false),
                ("Starting system services... ", true),
            ] {
                console.put_str(step);
                console.put_colored(Color::LightGreen, if last { "OK\n\n" } else { "OK\n" });
            }
        }
        if self.config.boot_delay_ms > 0 {
            if self.config.show_boot_log {
                console.put_colored(
                    Color::Yellow,
                    &format!(
                        "Booting will continue in {} seconds...",
                        self.config.boot_delay_ms as f64 / 1000.0
                    ),
                );
            }
            tokio::time::sleep(Duration::from_millis(self.config.boot_delay_ms)).await;
        }
        console.clear();
        show_welcome(console);
    }

    /// Tokenize and dispatch one input line.
    ///
    /// Built-in failures are reported on the console as
    /// `<command>: <error>`; they never end the loop.
    pub async fn execute_line(
        &mut self,
        line: &str,
        console: &mut dyn Console,
        input: &mut dyn InputSource,
    ) -> Flow {
        let Some((name, args)) = parse_line(line, self.config.limits.max_command_len) else {
            return Flow::Continue;
        };
        let Some(command) = self.registry.get(name) else {
            debug!("unknown command '{}'", name);
            console.put_colored(Color::LightRed, &format!("{}: command not found\n", name));
            return Flow::Continue;
        };

        debug!("dispatch {} {:?}", name, args);
        let mut ctx = CommandContext {
            args,
            fs: &mut self.tree,
            console: &mut *console,
            input: &mut *input,
            registry: &self.registry,
            config: &self.config,
            booted_at: self.booted_at,
        };
        match command.execute(&mut ctx).await {
            Ok(flow) => flow,
            Err(e) => {
                debug!("{} failed: {:?}", name, e);
                console.put_colored(Color::LightRed, &format!("{}: {}\n", name, e));
                Flow::Continue
            }
        }
    }

    async fn read_eval(&mut self, console: &mut dyn Console, input: &mut dyn InputSource) -> Flow {
        loop {
            self.show_prompt(console);
            let Some(line) = read_line(input, console, self.config.limits.max_line_len).await
            else {
                return Flow::Closed;
            };
            match self.execute_line(&line, console, input).await {
                Flow::Continue => {}
                flow => return flow,
            }
        }
    }

    /// Boot and serve commands until the input closes. `reboot` resets the
    /// state and starts over from the boot log.
    pub async fn run(&mut self, console: &mut dyn Console, input: &mut dyn InputSource) {
        info!("session started");
        loop {
            self.boot(console).await;
            match self.read_eval(console, input).await {
                Flow::Reboot => self.reset(),
                Flow::Continue | Flow::Closed => break,
            }
        }
        console.put_char(b'\n');
        info!("session ended");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TextScreen;
    use crate::fs::NodeKind;
    use crate::input::ScriptedInput;

    async fn run_script(session: &mut Session, script: &str) -> String {
        let mut screen = TextScreen::recording();
        let mut input = ScriptedInput::from(script);
        session.run(&mut screen, &mut input).await;
        screen.transcript_text()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("ls", 31), Some(("ls", "")));
        assert_eq!(parse_line("   cd   my dir ", 31), Some(("cd", "my dir ")));
        assert_eq!(parse_line("echo  a  b > f", 31), Some(("echo", "a  b > f")));
        assert_eq!(parse_line("", 31), None);
        assert_eq!(parse_line("    ", 31), None);
    }

    #[test]
    fn test_parse_line_cuts_long_token() {
        let line = format!("{}tail arg", "c".repeat(31));
        let (command, args) = parse_line(&line, 31).unwrap();
        assert_eq!(command.len(), 31);
        assert_eq!(args, "tail arg");
    }

    #[test]
    fn test_welcome_banner() {
        let mut screen = TextScreen::new();
        show_welcome(&mut screen);
        let title = format!("Welcome to MiniOS v{}", env!("CARGO_PKG_VERSION"));
        assert_eq!(screen.row_text(0), "=".repeat(32));
        assert_eq!(screen.row_text(1).trim(), title);
        assert_eq!(screen.row_text(4), "Type 'help' for available commands");
    }

    #[tokio::test]
    async fn test_boot_then_prompt() {
        let mut session = Session::default();
        let out = run_script(&mut session, "").await;
        assert!(out.starts_with("Booting MiniOS...\nInitializing keyboard... OK\n"));
        assert!(out.contains("Starting system services... OK\n\n"));
        assert!(out.ends_with("commands\n\nminios:/$ \n"));
    }

    #[tokio::test]
    async fn test_quiet_boot() {
        let mut config = ShellConfig::default();
        config.show_boot_log = false;
        config.hostname = "box".to_string();
        let mut session = Session::new(config);
        let out = run_script(&mut session, "").await;
        assert!(!out.contains("Booting"));
        assert!(out.contains("box:/$ "));
    }

    #[tokio::test]
    async fn test_build_and_list() {
        let mut session = Session::default();
        let out = run_script(&mut session, "mkdir docs\ncd docs\ntouch a.txt\nls\npwd\n").await;
        assert!(out.contains("minios:/docs$ "));
        assert!(out.contains("ls\na.txt (0 bytes)\n"));
        assert!(out.contains("pwd\n/docs\n"));

        let snap = session.tree().snapshot();
        assert_eq!(snap.children.len(), 1);
        assert_eq!(snap.children[0].name, "docs");
        assert_eq!(snap.children[0].children[0].kind, NodeKind::File);
    }

    #[tokio::test]
    async fn test_echo_then_cat() {
        let mut session = Session::default();
        let out = run_script(&mut session, "echo hi > a.txt\ncat a.txt\nq").await;
        assert!(out.contains("cat a.txt\n\nhi\n\n[Press 'q' to exit]\n"));
        let tree = session.tree();
        let file = tree.find_child(tree.root(), "a.txt").unwrap();
        assert_eq!(tree.contents(file).unwrap(), b"hi");
    }

    #[tokio::test]
    async fn test_write_then_cat() {
        let mut session = Session::default();
        let out = run_script(&mut session, "write a.txt\nhi\x13cat a.txt\nq").await;
        assert!(out.contains("[File saved! 2 bytes]"));
        assert!(out.contains("\nhi\n\n[Press 'q' to exit]\n"));
    }

    #[tokio::test]
    async fn test_unknown_command_has_no_effect() {
        let mut session = Session::default();
        let before = session.tree().snapshot();
        let out = run_script(&mut session, "frobnicate x\n").await;
        assert!(out.contains("frobnicate: command not found\n"));
        assert_eq!(session.tree().snapshot(), before);
    }

    #[tokio::test]
    async fn test_blank_lines_do_nothing() {
        let mut session = Session::default();
        let out = run_script(&mut session, "\n   \n").await;
        assert_eq!(out.matches("minios:/$ ").count(), 3);
        assert!(!out.contains("not found"));
        assert_eq!(session.tree().live_count(), 1);
    }

    #[tokio::test]
    async fn test_errors_are_reported_and_loop_continues() {
        let mut session = Session::default();
        let out = run_script(&mut session, "cd nope\nrm\nmkdir a\nmkdir a\npwd\n").await;
        assert!(out.contains("cd: nope: no such file or directory\n"));
        assert!(out.contains("rm: missing name\n"));
        assert!(out.contains("mkdir: a: already exists\n"));
        assert!(out.contains("pwd\n/\n"));
    }

    #[tokio::test]
    async fn test_reboot_discards_state() {
        let mut session = Session::default();
        let out = run_script(&mut session, "mkdir a\ncd a\nreboot\nls\n").await;
        assert!(out.contains("Rebooting...\n"));
        assert_eq!(out.matches("Booting MiniOS...").count(), 2);
        assert!(out.ends_with("minios:/$ ls\n(empty)\nminios:/$ \n"));
        assert_eq!(session.tree().live_count(), 1);
        assert_eq!(session.tree().cwd(), session.tree().root());
    }

    #[tokio::test]
    async fn test_prompt_falls_back_when_path_too_long() {
        let mut config = ShellConfig::default();
        config.limits.fs.max_path_len = 10;
        let mut session = Session::new(config);
        let out = run_script(&mut session, "mkdir abcdef\ncd abcdef\nmkdir ghijkl\ncd ghijkl\npwd\n").await;
        assert!(out.contains("minios:.../ghijkl$ "));
        assert!(out.contains("pwd: path too long\n"));
    }

    #[tokio::test]
    async fn test_end_of_input_inside_cat() {
        let mut session = Session::default();
        let out = run_script(&mut session, "echo x > f\ncat f\nzz").await;
        assert!(out.contains("[Press 'q' to exit]\n"));
        assert!(!out.ends_with("minios:/$ \n"));
    }

    #[tokio::test]
    async fn test_boot_delay() {
        let mut config = ShellConfig::default();
        config.boot_delay_ms = 5;
        let session = Session::new(config);
        let mut screen = TextScreen::recording();
        let started = std::time::Instant::now();
        session.boot(&mut screen).await;
        assert!(started.elapsed() >= Duration::from_millis(5));
        assert!(screen.transcript_text().contains("Booting will continue in 0.005 seconds..."));
        assert!(screen.text().starts_with("="));
    }
}
